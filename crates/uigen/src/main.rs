use clap::Parser;
use eyre::Result;
use tracing::debug;

use uigen::cli::{Cli, Commands, PreferencesCommands};
use uigen::commands::{
    Command,
    html::HtmlCommand,
    label::LabelCommand,
    preferences::{PreferencesAction, PreferencesCommand},
    prompt::PromptCommand,
    themes::ThemesCommand,
};
use uigen_core::Preferences;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Level configured via RUST_LOG
    uigen_core::utils::tracing::init_tracing(cli.log_file.as_deref())?;

    let preferences = Preferences::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load preferences: {}. Using defaults.", e);
        Preferences::default()
    });
    debug!(?preferences, "Loaded preferences");

    let command: Box<dyn Command> = match cli.command {
        Commands::Label {
            input,
            frame,
            show_tool_name,
            plain,
        } => Box::new(LabelCommand {
            input,
            frame,
            show_tool_name,
            plain,
            preferences,
        }),
        Commands::Html { input } => Box::new(HtmlCommand { input }),
        Commands::Prompt => Box::new(PromptCommand),
        Commands::Themes => Box::new(ThemesCommand {
            current: preferences.ui.theme,
        }),
        Commands::Preferences { action } => {
            let action = match action {
                PreferencesCommands::Show => PreferencesAction::Show,
                PreferencesCommands::Edit => PreferencesAction::Edit,
                PreferencesCommands::Reset => PreferencesAction::Reset,
            };
            Box::new(PreferencesCommand { action })
        }
    };

    command.execute().await
}
