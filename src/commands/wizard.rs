//! Wizard navigation commands (next, back)

use console::Style;

use crate::error::Result;
use crate::workspace::Workspace;

/// Run next command
pub fn run_next(workspace: Option<std::path::PathBuf>) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let step = workspace.composer.next_step()?;
    workspace.save()?;

    println!("{}", Style::new().bold().apply_to(step.title()));
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to("Use 'dreamz tiers <ID> ...' and 'dreamz channels <ID> ...' to assign")
    );
    Ok(())
}

/// Run back command
pub fn run_back(workspace: Option<std::path::PathBuf>) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let step = workspace.composer.previous_step();
    workspace.save()?;

    println!("{}", Style::new().bold().apply_to(step.title()));
    Ok(())
}
