//! Show command implementation

use crate::cli::ShowArgs;
use crate::domain::BundleId;
use crate::error::{Result, bundle_not_found};
use crate::ui::display::display_bundle_detailed;
use crate::workspace::Workspace;

/// Run show command
pub fn run(workspace: Option<std::path::PathBuf>, args: ShowArgs) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;

    let id: BundleId = args.id.parse()?;
    let bundle = workspace
        .composer
        .store
        .get(id)
        .ok_or_else(|| bundle_not_found(&args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
    } else {
        display_bundle_detailed(bundle, &workspace.config.channels);
    }

    Ok(())
}
