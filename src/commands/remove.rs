//! Remove command implementation
//!
//! Removing a bundle that does not exist is not an error: the store is left
//! as it was and a notice is printed.

use console::Style;
use inquire::Confirm;

use crate::cli::RemoveArgs;
use crate::domain::BundleId;
use crate::error::Result;
use crate::workspace::Workspace;

/// Run remove command
pub fn run(workspace: Option<std::path::PathBuf>, args: RemoveArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;

    let Some(bundle) = args
        .id
        .parse::<BundleId>()
        .ok()
        .and_then(|id| workspace.composer.store.get(id))
    else {
        println!("Bundle '{}' not found, nothing removed.", args.id);
        return Ok(());
    };

    if !args.yes && !confirm_remove(&bundle.name)? {
        println!("Remove cancelled.");
        return Ok(());
    }

    let id = bundle.id;
    if let Some(removed) = workspace.composer.remove_bundle(id) {
        workspace.save()?;
        println!(
            "{} bundle #{} {}",
            Style::new().green().bold().apply_to("Removed"),
            removed.id,
            removed.name
        );
    }

    Ok(())
}

fn confirm_remove(name: &str) -> Result<bool> {
    let confirmed = Confirm::new(&format!("Remove bundle '{name}'?"))
        .with_default(false)
        .with_help_message("Press 'y' to remove, Enter to cancel")
        .prompt()?;
    Ok(confirmed)
}
