//! Create command implementation

use console::Style;

use crate::cli::CreateArgs;
use crate::error::{Result, bundle_not_found};
use crate::ui::{format_file_size, plural};
use crate::workspace::Workspace;

/// Run create command
pub fn run(workspace: Option<std::path::PathBuf>, args: CreateArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let limits = workspace.config.limits;

    let id = workspace.composer.create_bundle(&args.name, limits)?;
    workspace.save()?;

    let bundle = workspace
        .composer
        .store
        .get(id)
        .ok_or_else(|| bundle_not_found(id))?;
    let count = bundle.videos().len();

    println!(
        "{} bundle #{} {}: {} {} • {}",
        Style::new().green().bold().apply_to("Created"),
        bundle.id,
        Style::new().bold().yellow().apply_to(&bundle.name),
        count,
        plural(count, "video", "videos"),
        format_file_size(bundle.total_size())
    );
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("Run 'dreamz next' to assign tiers and channels")
    );

    Ok(())
}
