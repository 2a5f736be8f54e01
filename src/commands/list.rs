//! List command implementation

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::display::display_bundle_simple;
use crate::workspace::Workspace;

/// Run list command
pub fn run(workspace: Option<std::path::PathBuf>, args: ListArgs) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;
    let bundles = workspace.composer.store.bundles();

    if args.json {
        println!("{}", serde_json::to_string_pretty(bundles)?);
        return Ok(());
    }

    if bundles.is_empty() {
        println!("No bundles created.");
        return Ok(());
    }

    println!("Created bundles ({}):", bundles.len());
    println!();
    for bundle in bundles {
        display_bundle_simple(bundle);
        println!();
    }

    Ok(())
}
