use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render status labels for agent tool invocations.
#[derive(Parser)]
#[command(version, about, long_about = None, author)]
pub struct Cli {
    /// Append logs to this file instead of stderr (filter via RUST_LOG)
    #[arg(long, env = "UIGEN_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Print a status line per tool invocation
    Label {
        /// JSON lines or a JSON array of invocations (defaults to stdin)
        input: Option<PathBuf>,
        /// Spinner frame to show for pending invocations
        #[arg(long, default_value = "0")]
        frame: usize,
        /// Prefix each label with the raw tool name (overrides preferences)
        #[arg(long)]
        show_tool_name: bool,
        /// Print without colors even when stdout is a terminal
        #[arg(long)]
        plain: bool,
    },
    /// Print the HTML status badge per tool invocation
    Html {
        /// JSON lines or a JSON array of invocations (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Print the system prompt for the generation agent
    Prompt,
    /// List available themes
    Themes,
    /// Manage user preferences
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommands,
    },
}

#[derive(Subcommand, Clone)]
pub enum PreferencesCommands {
    /// Show current preferences
    Show,
    /// Edit preferences file in default editor
    Edit,
    /// Reset preferences to defaults
    Reset,
}
