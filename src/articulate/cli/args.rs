use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "articulate", bin_name = "articulate", version = get_version())]
#[command(about = "Create Articulate word cards and print them as cut-out PDF sheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new card (prompts for anything not given)
    #[command(alias = "n")]
    Add(AddArgs),

    /// List cards
    #[command(alias = "ls")]
    List,

    /// Remove one or more cards
    #[command(alias = "rm")]
    Remove {
        /// Card indexes as shown by `list` (e.g. 1 3), or ids (e.g. #1718000000000)
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },

    /// Remove every card
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write all cards to a dated PDF sheet
    Export {
        /// Output directory (defaults to the configured export-dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Person word
    #[arg(long)]
    pub person: Option<String>,

    /// Object word
    #[arg(long)]
    pub object: Option<String>,

    /// World word
    #[arg(long)]
    pub world: Option<String>,

    /// Action word
    #[arg(long)]
    pub action: Option<String>,

    /// Nature word
    #[arg(long)]
    pub nature: Option<String>,

    /// Random word
    #[arg(long)]
    pub random: Option<String>,

    /// Spade category: person, object, world, action, nature or random
    #[arg(short, long)]
    pub category: Option<String>,
}
