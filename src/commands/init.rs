//! Init command implementation

use console::Style;

use crate::catalog::{VideoCatalog, demo_catalog};
use crate::cli::InitArgs;
use crate::error::Result;
use crate::workspace::{WORKSPACE_DIR, Workspace};

/// Run init command
pub fn run(workspace: Option<std::path::PathBuf>, args: InitArgs) -> Result<()> {
    let root = Workspace::start_dir(workspace)?;
    let catalog = if args.empty {
        VideoCatalog::default()
    } else {
        demo_catalog()
    };

    let workspace = Workspace::init(&root, catalog, args.force)?;

    println!(
        "{} {} in {}",
        Style::new().green().bold().apply_to("Initialized"),
        WORKSPACE_DIR,
        workspace.root.display()
    );
    println!(
        "  {} {} videos, {} channels",
        Style::new().bold().apply_to("Catalog:"),
        workspace.composer.catalog.len(),
        workspace.config.channels.len()
    );

    Ok(())
}
