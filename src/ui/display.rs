//! Display functions for the catalog, bundles and distribution plan

use console::Style;

use super::format::{format_duration, format_file_size, gauge, plural};
use crate::catalog::VideoCatalog;
use crate::composer::Composer;
use crate::domain::{Bundle, Channel, Tier};
use crate::plan::{DistributionPlan, bundle_warnings};
use crate::selection::{Limits, SelectionSummary, SelectionVerdict};

/// Width of the size gauge in characters
const GAUGE_WIDTH: usize = 30;

fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::Basic => Style::new().white(),
        Tier::Medium => Style::new().yellow(),
        Tier::Premium => Style::new().magenta(),
    }
}

fn join_tiers(bundle: &Bundle) -> String {
    bundle
        .tiers
        .iter()
        .map(|t| tier_style(*t).apply_to(t.as_str()).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print catalog items with their selection marks
pub fn display_catalog(catalog: &VideoCatalog, limits: Limits) {
    if catalog.is_empty() {
        println!("No videos in catalog.");
        return;
    }

    println!(
        "Uploaded videos ({}) - select up to {} videos, {} total:",
        catalog.len(),
        limits.max_videos,
        format_file_size(limits.max_total_bytes)
    );
    println!();

    for video in catalog.items() {
        let mark = if video.selected {
            Style::new().green().bold().apply_to("[x]")
        } else {
            Style::new().dim().apply_to("[ ]")
        };
        println!(
            "  {} {:>12}  {}  {}  {}",
            mark,
            Style::new().cyan().apply_to(&video.id),
            video.name,
            Style::new().dim().apply_to(format_file_size(video.size)),
            Style::new().dim().apply_to(format_duration(video.duration)),
        );
    }
}

/// Print the wizard step and the current selection against the limits
pub fn display_status(composer: &Composer, limits: Limits) {
    let summary = SelectionSummary::measure(composer.catalog.selected(), limits);
    let over = Style::new().red();

    println!("{}", Style::new().bold().apply_to(composer.step.title()));
    println!();

    let count = format!("{} / {}", summary.count, limits.max_videos);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Selected videos:"),
        if summary.count > limits.max_videos {
            over.apply_to(count).to_string()
        } else {
            count
        }
    );

    let size = format_file_size(summary.total_size);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Total size:"),
        if summary.total_size > limits.max_total_bytes {
            over.apply_to(size).to_string()
        } else {
            size
        }
    );
    println!(
        "  {} {}",
        gauge(summary.size_ratio(), GAUGE_WIDTH),
        Style::new()
            .dim()
            .apply_to(format!("Limit: {}", format_file_size(limits.max_total_bytes)))
    );

    match summary.verdict() {
        SelectionVerdict::Valid => println!(
            "  {}",
            Style::new().green().apply_to("Selection is ready to bundle")
        ),
        SelectionVerdict::Empty => {}
        verdict => println!("  {}", over.apply_to(capitalize(&verdict.to_string()))),
    }

    println!();
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Created bundles:"),
        composer.store.len()
    );
}

/// Print one bundle as a list row
pub fn display_bundle_simple(bundle: &Bundle) {
    println!(
        "  {} {}",
        Style::new().cyan().apply_to(format!("#{}", bundle.id)),
        Style::new().bold().yellow().apply_to(&bundle.name)
    );
    println!(
        "    {} {} • {}",
        bundle.videos().len(),
        plural(bundle.videos().len(), "video", "videos"),
        format_file_size(bundle.total_size())
    );
    if !bundle.tiers.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Tiers:"),
            join_tiers(bundle)
        );
    }
    if !bundle.channels.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Channels:"),
            bundle.channels.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
}

/// Print a bundle with its videos and distribution preview
pub fn display_bundle_detailed(bundle: &Bundle, channels: &[Channel]) {
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(&bundle.name),
        Style::new().dim().apply_to(format!("(bundle #{})", bundle.id))
    );
    println!(
        "  {} {} • {} • {}",
        bundle.videos().len(),
        plural(bundle.videos().len(), "video", "videos"),
        format_file_size(bundle.total_size()),
        format_duration(bundle.total_duration())
    );
    println!();

    println!("  {}", Style::new().bold().apply_to("Videos:"));
    for video in bundle.videos() {
        println!(
            "    {}  {}  {}",
            video.name,
            Style::new().dim().apply_to(format_file_size(video.size)),
            Style::new().dim().apply_to(format_duration(video.duration))
        );
    }
    println!();

    println!("  {}", Style::new().bold().apply_to("Distribution preview:"));
    if bundle.tiers.is_empty() {
        println!("    {}", Style::new().dim().apply_to("No tiers assigned"));
    } else {
        println!("    {}", join_tiers(bundle));
    }
    for channel_id in &bundle.channels {
        match channels.iter().find(|c| &c.id == channel_id) {
            Some(channel) => println!(
                "    # {} {}",
                channel.bare_name(),
                tier_style(channel.tier).apply_to(format!("({})", channel.tier))
            ),
            None => println!("    # {} {}", channel_id, Style::new().red().apply_to("(unknown)")),
        }
    }
    let n = bundle.channels.len();
    println!(
        "    {}",
        Style::new()
            .dim()
            .apply_to(format!("Will be posted to {n} {}", plural(n, "channel", "channels")))
    );

    for warning in bundle_warnings(bundle, channels) {
        println!("  {} {}", Style::new().yellow().apply_to("warning:"), warning);
    }
}

/// Print the channel directory
pub fn display_channels(channels: &[Channel]) {
    if channels.is_empty() {
        println!("No channels configured.");
        return;
    }

    println!("Target channels ({}):", channels.len());
    println!();
    for channel in channels {
        println!(
            "  {:<12} # {:<20} {}",
            Style::new().cyan().apply_to(&channel.id),
            channel.bare_name(),
            tier_style(channel.tier).apply_to(channel.tier)
        );
    }
}

/// Print the distribution plan
pub fn display_plan(plan: &DistributionPlan) {
    if plan.bundle_count == 0 {
        println!("No bundles to distribute.");
        return;
    }

    for channel in plan.active_channels() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to(&channel.name),
            tier_style(channel.tier).apply_to(format!("({})", channel.tier))
        );
        for bundle in &channel.bundles {
            println!(
                "    #{} {} {}",
                bundle.id,
                bundle.name,
                Style::new().dim().apply_to(format!(
                    "{} {} • {}",
                    bundle.videos,
                    plural(bundle.videos, "video", "videos"),
                    format_file_size(bundle.total_size)
                ))
            );
        }
    }

    if !plan.warnings.is_empty() {
        println!();
        for warning in &plan.warnings {
            println!("  {} {}", Style::new().yellow().apply_to("warning:"), warning);
        }
    }

    println!();
    if plan.is_ready() {
        println!(
            "{}",
            Style::new().green().bold().apply_to(format!(
                "Ready to deploy: {} {} configured for tiered distribution",
                plan.bundle_count,
                plural(plan.bundle_count, "bundle", "bundles")
            ))
        );
    } else {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Not ready: every bundle needs tiers and known channels")
        );
    }
}

/// Capitalize first letter of a message
fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
