use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use prism_config::Target;

/// Prism: one palette, every terminal and editor.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Prism root directory (defaults to $PRISM_HOME, then the OS config dir).
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Log filter directive, e.g. `prism=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List bundled and custom themes.
    List {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the applied theme.
    Current,
    /// Make a theme current.
    Apply { name: String },
    /// Create a custom theme from a JSON, YAML or TOML definition.
    Create {
        name: String,
        #[arg(long)]
        from: PathBuf,
    },
    /// Regenerate a custom theme from a new definition.
    Update {
        name: String,
        #[arg(long)]
        from: PathBuf,
    },
    /// Delete a custom theme.
    Delete { name: String },
    /// Compile a definition into a directory without touching the store.
    Compile {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Toggle a theme's favorite flag.
    Favorite { name: String },
    /// Enable or disable reloading one application.
    EnableApp {
        #[arg(value_parser = parse_target)]
        target: Target,
        state: Switch,
    },
    /// Record the wallpaper that goes with the current theme.
    Wallpaper {
        #[arg(required_unless_present = "clear")]
        path: Option<PathBuf>,
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(self) -> bool {
        self == Switch::On
    }
}

fn parse_target(s: &str) -> Result<Target, String> {
    Target::from_id(s).ok_or_else(|| {
        let ids: Vec<&str> = Target::ALL.iter().map(|t| t.id()).collect();
        format!("unknown app '{s}', expected one of: {}", ids.join(", "))
    })
}

pub fn parse() -> Args {
    Args::parse()
}
