//! Status command implementation

use crate::error::Result;
use crate::ui::display::display_status;
use crate::workspace::Workspace;

/// Run status command
pub fn run(workspace: Option<std::path::PathBuf>) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;
    display_status(&workspace.composer, workspace.config.limits);
    Ok(())
}
