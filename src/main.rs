//! Dreamz - tiered video bundle composer
//!
//! Groups catalog videos into bundles under a count and size limit, then tags
//! each bundle with subscription tiers and target Discord channels.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod catalog;
mod cli;
mod commands;
mod composer;
mod config;
mod domain;
mod error;
mod plan;
mod selection;
mod store;
mod ui;
mod wizard;
mod workspace;

use cli::{Cli, Commands};

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "DREAMZ_LOG";

/// Filter used when `DREAMZ_LOG` is unset or invalid
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "dreamz=debug" } else { "warn" }
}

/// Logs go to stderr so that `--json` output on stdout stays clean
fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(cli.workspace, args),
        Commands::Catalog(args) => commands::catalog::run(cli.workspace, args),
        Commands::Import(args) => commands::catalog::run_import(cli.workspace, args),
        Commands::Select(args) => commands::select::run(cli.workspace, args),
        Commands::Deselect(args) => commands::select::run_deselect(cli.workspace, args),
        Commands::Toggle(args) => commands::select::run_toggle(cli.workspace, args),
        Commands::Status => commands::status::run(cli.workspace),
        Commands::Create(args) => commands::create::run(cli.workspace, args),
        Commands::Remove(args) => commands::remove::run(cli.workspace, args),
        Commands::List(args) => commands::list::run(cli.workspace, args),
        Commands::Show(args) => commands::show::run(cli.workspace, args),
        Commands::Tiers(args) => commands::assign::run_tiers(cli.workspace, args),
        Commands::Channels(args) => commands::assign::run_channels(cli.workspace, args),
        Commands::ChannelList => commands::assign::run_channel_list(cli.workspace),
        Commands::Next => commands::wizard::run_next(cli.workspace),
        Commands::Back => commands::wizard::run_back(cli.workspace),
        Commands::Plan(args) => commands::plan::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
