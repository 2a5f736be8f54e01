//! Catalog and import command implementations

use console::Style;

use crate::catalog::import_dir;
use crate::cli::{CatalogArgs, ImportArgs};
use crate::error::Result;
use crate::ui::display::display_catalog;
use crate::ui::{format_file_size, plural};
use crate::workspace::Workspace;

/// Run catalog command
pub fn run(workspace: Option<std::path::PathBuf>, args: CatalogArgs) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&workspace.composer.catalog)?
        );
    } else {
        display_catalog(&workspace.composer.catalog, workspace.config.limits);
    }

    Ok(())
}

/// Run import command
pub fn run_import(workspace: Option<std::path::PathBuf>, args: ImportArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let max_upload = workspace.config.limits.max_upload_bytes;

    let report = import_dir(&mut workspace.composer.catalog, &args.dir, max_upload)?;
    workspace.save()?;

    println!(
        "{} {} {} from {}",
        Style::new().green().bold().apply_to("Imported"),
        report.added.len(),
        plural(report.added.len(), "video", "videos"),
        args.dir.display()
    );
    if report.duplicates > 0 {
        println!(
            "  {} already in catalog",
            Style::new().dim().apply_to(report.duplicates)
        );
    }
    for (path, size) in &report.too_large {
        println!(
            "  {} {} ({}, limit {})",
            Style::new().yellow().apply_to("skipped"),
            path,
            format_file_size(*size),
            format_file_size(max_upload)
        );
    }

    Ok(())
}
