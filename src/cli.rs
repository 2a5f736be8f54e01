//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dreamz - tiered video bundle composer
///
/// Group catalog videos into bundles and assign them to subscription tiers and channels.
#[derive(Parser, Debug)]
#[command(
    name = "dreamz",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Tiered video bundle composer for Discord content channels",
    long_about = "Dreamz groups videos from a catalog into bundles (at most 10 videos and \
                  500 MB per bundle by default), then assigns each bundle to subscription \
                  tiers and target channels.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  dreamz init\n    \
                  dreamz select 1 2 3\n    \
                  dreamz create \"Part 1\"\n    \
                  dreamz next\n    \
                  dreamz tiers 1 basic premium\n    \
                  dreamz channels 1 basic-1 premium-2\n    \
                  dreamz plan"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DREAMZ_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a workspace with the default configuration
    Init(InitArgs),

    /// List catalog videos and their selection
    Catalog(CatalogArgs),

    /// Import video files from a directory into the catalog
    Import(ImportArgs),

    /// Select videos for the next bundle
    Select(SelectArgs),

    /// Deselect videos
    Deselect(DeselectArgs),

    /// Flip the selection of one video
    Toggle(ToggleArgs),

    /// Show the wizard step and selection against the limits
    Status,

    /// Create a bundle from the selected videos
    Create(CreateArgs),

    /// Remove a bundle
    Remove(RemoveArgs),

    /// List created bundles
    List(ListArgs),

    /// Show bundle details and distribution preview
    Show(ShowArgs),

    /// Set the subscription tiers of a bundle
    Tiers(TiersArgs),

    /// Set the target channels of a bundle
    Channels(ChannelsArgs),

    /// List configured target channels
    ChannelList,

    /// Move on to tier and channel assignment
    Next,

    /// Go back to video selection
    Back,

    /// Show where every bundle would be posted
    Plan(PlanArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a workspace with the demo catalog:\n    dreamz init\n\n\
                  Create a workspace with an empty catalog:\n    dreamz init --empty\n\n\
                  Reset an existing workspace:\n    dreamz init --force")]
pub struct InitArgs {
    /// Start with an empty catalog instead of the demo videos
    #[arg(long)]
    pub empty: bool,

    /// Replace an existing workspace
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import every .mp4, .mov and .webm file under a directory:\n    dreamz import ./uploads")]
pub struct ImportArgs {
    /// Directory to scan for video files
    pub dir: PathBuf,
}

/// Arguments for the select command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Select videos by id:\n    dreamz select 1 2 3\n\n\
                  Select every video:\n    dreamz select --all\n\n\
                  Pick videos from a menu:\n    dreamz select --interactive")]
pub struct SelectArgs {
    /// Video ids to select
    #[arg(
        conflicts_with_all = ["all", "interactive"],
        required_unless_present_any = ["all", "interactive"]
    )]
    pub ids: Vec<String>,

    /// Select every video in the catalog
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Choose videos from an interactive menu
    #[arg(long, short = 'i', conflicts_with = "all")]
    pub interactive: bool,
}

/// Arguments for the deselect command
#[derive(Parser, Debug)]
pub struct DeselectArgs {
    /// Video ids to deselect
    #[arg(conflicts_with = "all", required_unless_present = "all")]
    pub ids: Vec<String>,

    /// Clear the whole selection
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Arguments for the toggle command
#[derive(Parser, Debug)]
pub struct ToggleArgs {
    /// Video id
    pub id: String,
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle the selected videos:\n    dreamz create \"Part 1\"")]
pub struct CreateArgs {
    /// Bundle name
    pub name: String,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Bundle id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Bundle id
    pub id: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the tiers command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Distribute bundle 1 to basic and premium subscribers:\n    dreamz tiers 1 basic premium\n\n\
                  Clear the tiers of bundle 1:\n    dreamz tiers 1")]
pub struct TiersArgs {
    /// Bundle id
    pub id: String,

    /// Tiers (basic, medium, premium); none clears the tiers
    pub tiers: Vec<String>,
}

/// Arguments for the channels command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Post bundle 1 to two channels:\n    dreamz channels 1 basic-1 premium-2\n\n\
                  Clear the channels of bundle 1:\n    dreamz channels 1")]
pub struct ChannelsArgs {
    /// Bundle id
    pub id: String,

    /// Channel ids; none clears the channels
    pub channels: Vec<String>,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dreamz completions --shell bash > ~/.bash_completion.d/dreamz\n\n\
                  Generate zsh completions:\n    dreamz completions --shell zsh > ~/.zfunc/_dreamz")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_select_ids() {
        let cli = Cli::try_parse_from(["dreamz", "select", "1", "2", "3"]).unwrap();
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.ids, vec!["1", "2", "3"]);
                assert!(!args.all);
                assert!(!args.interactive);
            }
            _ => panic!("Expected Select command"),
        }
    }

    #[test]
    fn test_cli_select_all_conflicts_with_ids() {
        assert!(Cli::try_parse_from(["dreamz", "select", "1", "--all"]).is_err());
    }

    #[test]
    fn test_cli_select_requires_ids_or_flag() {
        assert!(Cli::try_parse_from(["dreamz", "select"]).is_err());
        assert!(Cli::try_parse_from(["dreamz", "select", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["dreamz", "select", "--interactive"]).is_ok());
    }

    #[test]
    fn test_cli_deselect_requires_ids_or_all() {
        assert!(Cli::try_parse_from(["dreamz", "deselect"]).is_err());
        assert!(Cli::try_parse_from(["dreamz", "deselect", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["dreamz", "deselect", "2"]).is_ok());
    }

    #[test]
    fn test_cli_parsing_create() {
        let cli = Cli::try_parse_from(["dreamz", "create", "Part 1"]).unwrap();
        match cli.command {
            Commands::Create(args) => assert_eq!(args.name, "Part 1"),
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_cli_parsing_tiers() {
        let cli = Cli::try_parse_from(["dreamz", "tiers", "3", "basic", "premium"]).unwrap();
        match cli.command {
            Commands::Tiers(args) => {
                assert_eq!(args.id, "3");
                assert_eq!(args.tiers, vec!["basic", "premium"]);
            }
            _ => panic!("Expected Tiers command"),
        }
    }

    #[test]
    fn test_cli_parsing_channels_empty_clears() {
        let cli = Cli::try_parse_from(["dreamz", "channels", "3"]).unwrap();
        match cli.command {
            Commands::Channels(args) => assert!(args.channels.is_empty()),
            _ => panic!("Expected Channels command"),
        }
    }

    #[test]
    fn test_cli_parsing_remove() {
        let cli = Cli::try_parse_from(["dreamz", "remove", "2", "-y"]).unwrap();
        match cli.command {
            Commands::Remove(args) => {
                assert_eq!(args.id, "2");
                assert!(args.yes);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_wizard_steps() {
        let cli = Cli::try_parse_from(["dreamz", "next"]).unwrap();
        assert!(matches!(cli.command, Commands::Next));
        let cli = Cli::try_parse_from(["dreamz", "back"]).unwrap();
        assert!(matches!(cli.command, Commands::Back));
    }

    #[test]
    fn test_cli_parsing_channel_list() {
        let cli = Cli::try_parse_from(["dreamz", "channel-list"]).unwrap();
        assert!(matches!(cli.command, Commands::ChannelList));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["dreamz", "-v", "-w", "/tmp/workspace", "status"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }

    #[test]
    fn test_cli_parsing_init_flags() {
        let cli = Cli::try_parse_from(["dreamz", "init", "--empty", "--force"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert!(args.empty);
                assert!(args.force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["dreamz", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }
}
