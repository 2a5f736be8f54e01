//! Plan command implementation

use crate::cli::PlanArgs;
use crate::error::Result;
use crate::plan::build_plan;
use crate::ui::display::display_plan;
use crate::workspace::Workspace;

/// Run plan command
pub fn run(workspace: Option<std::path::PathBuf>, args: PlanArgs) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;
    let plan = build_plan(
        workspace.composer.store.bundles(),
        &workspace.config.channels,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    Ok(())
}
