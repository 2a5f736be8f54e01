//! Tier and channel assignment command implementations

use console::Style;

use crate::cli::{ChannelsArgs, TiersArgs};
use crate::domain::{BundleId, Tier};
use crate::error::{Result, bundle_not_found, unknown_channel};
use crate::ui::display::display_channels;
use crate::workspace::Workspace;

/// Parse tier names, rejecting the first invalid one
fn parse_tiers(names: &[String]) -> Result<Vec<Tier>> {
    names.iter().map(|name| name.parse()).collect()
}

/// Run tiers command
pub fn run_tiers(workspace: Option<std::path::PathBuf>, args: TiersArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let id: BundleId = args.id.parse()?;
    let tiers = parse_tiers(&args.tiers)?;

    if !workspace.composer.set_tiers(id, tiers) {
        return Err(bundle_not_found(&args.id));
    }
    workspace.save()?;

    let bundle = workspace
        .composer
        .store
        .get(id)
        .ok_or_else(|| bundle_not_found(&args.id))?;
    let tiers: Vec<&str> = bundle.tiers.iter().map(|t| t.as_str()).collect();
    println!(
        "{} tiers of bundle #{}: {}",
        Style::new().green().bold().apply_to("Updated"),
        id,
        if tiers.is_empty() {
            "none".to_string()
        } else {
            tiers.join(", ")
        }
    );

    Ok(())
}

/// Run channels command
pub fn run_channels(workspace: Option<std::path::PathBuf>, args: ChannelsArgs) -> Result<()> {
    let mut workspace = Workspace::locate(workspace)?;
    let id: BundleId = args.id.parse()?;

    if let Some(unknown) = args
        .channels
        .iter()
        .find(|c| workspace.config.find_channel(c).is_none())
    {
        return Err(unknown_channel(unknown.as_str()));
    }

    if !workspace.composer.set_channels(id, args.channels.iter().cloned()) {
        return Err(bundle_not_found(&args.id));
    }
    workspace.save()?;

    let count = workspace
        .composer
        .store
        .get(id)
        .map_or(0, |b| b.channels.len());
    println!(
        "{} channels of bundle #{}: will be posted to {} {}",
        Style::new().green().bold().apply_to("Updated"),
        id,
        count,
        crate::ui::plural(count, "channel", "channels")
    );

    Ok(())
}

/// Run channel-list command
pub fn run_channel_list(workspace: Option<std::path::PathBuf>) -> Result<()> {
    let workspace = Workspace::locate(workspace)?;
    display_channels(&workspace.config.channels);
    Ok(())
}
