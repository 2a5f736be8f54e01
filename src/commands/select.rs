//! Select, deselect and toggle command implementations

use std::fmt;

use console::Style;
use inquire::MultiSelect;

use crate::catalog::VideoCatalog;
use crate::cli::{DeselectArgs, SelectArgs, ToggleArgs};
use crate::error::Result;
use crate::selection::{Limits, SelectionSummary, is_valid_selection};
use crate::ui::{format_duration, format_file_size};
use crate::workspace::Workspace;

/// Single-line menu entry for a catalog video
struct VideoOption {
    id: String,
    label: String,
}

impl fmt::Display for VideoOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Run select command
pub fn run(workspace: Option<std::path::PathBuf>, args: SelectArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let catalog = &mut workspace.composer.catalog;

    if args.all {
        catalog.select_all();
    } else if args.interactive {
        if !select_interactively(catalog)? {
            println!("Selection unchanged.");
            return Ok(());
        }
    } else {
        catalog.set_selected(&args.ids, true)?;
    }

    workspace.save()?;
    print_selection(&workspace.composer.catalog, workspace.config.limits);
    Ok(())
}

/// Run deselect command
pub fn run_deselect(workspace: Option<std::path::PathBuf>, args: DeselectArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;

    if args.all {
        workspace.composer.catalog.clear_selection();
    } else {
        workspace.composer.catalog.set_selected(&args.ids, false)?;
    }

    workspace.save()?;
    print_selection(&workspace.composer.catalog, workspace.config.limits);
    Ok(())
}

/// Run toggle command
pub fn run_toggle(workspace: Option<std::path::PathBuf>, args: ToggleArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;

    let selected = workspace.composer.catalog.toggle(&args.id)?;
    workspace.save()?;

    println!(
        "{} {}",
        if selected {
            Style::new().green().apply_to("Selected")
        } else {
            Style::new().dim().apply_to("Deselected")
        },
        args.id
    );
    print_selection(&workspace.composer.catalog, workspace.config.limits);
    Ok(())
}

/// Replace the selection with the videos picked from a menu
///
/// Returns false when the menu was cancelled.
fn select_interactively(catalog: &mut VideoCatalog) -> Result<bool> {
    if catalog.is_empty() {
        println!("No videos in catalog.");
        return Ok(false);
    }

    let options: Vec<VideoOption> = catalog
        .items()
        .iter()
        .map(|v| VideoOption {
            id: v.id.clone(),
            label: format!(
                "{} ({}, {})",
                v.name,
                format_file_size(v.size),
                format_duration(v.duration)
            ),
        })
        .collect();
    let defaults: Vec<usize> = catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, v)| v.selected)
        .map(|(i, _)| i)
        .collect();

    println!();

    let Some(chosen) = MultiSelect::new("Select videos to bundle", options)
        .with_default(&defaults)
        .with_page_size(10)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
        .prompt_skippable()?
    else {
        return Ok(false);
    };

    let ids: Vec<String> = chosen.into_iter().map(|o| o.id).collect();
    catalog.clear_selection();
    catalog.set_selected(&ids, true)?;
    Ok(true)
}

fn print_selection(catalog: &VideoCatalog, limits: Limits) {
    let summary = SelectionSummary::measure(catalog.selected(), limits);
    println!(
        "{} / {} videos selected, {} of {}",
        summary.count,
        limits.max_videos,
        format_file_size(summary.total_size),
        format_file_size(limits.max_total_bytes)
    );
    if is_valid_selection(catalog.selected(), limits) {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Run 'dreamz create <NAME>' to bundle the selection")
        );
    } else if summary.count > 0 {
        println!("{}", Style::new().red().apply_to(summary.verdict()));
    }
}
