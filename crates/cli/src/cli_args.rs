//! Command-line argument parsing.
//!
//! Flags given here override whatever the settings file says.

use clap::{Parser, ValueEnum};
use switchback_core::config::Settings;
use switchback_core::error::Result;
use switchback_core::mode::Mode;

/// Mode to start the session in.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    Text,
    Number,
}

impl From<StartMode> for Mode {
    fn from(value: StartMode) -> Self {
        match value {
            StartMode::Text => Mode::Text,
            StartMode::Number => Mode::Number,
        }
    }
}

/// Command-line arguments for the switchback CLI.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use switchback_cli::cli_args::Args;
///
/// let args = Args::parse_from(["sb", "--mode", "text"]);
/// assert!(args.mode.is_some());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.switchback/settings.yml`.
    #[arg(long, short = 's')]
    pub settings_path: Option<String>,

    /// Mode to start in, overriding `default_mode` from the settings file.
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<StartMode>,

    /// Print plain text without colours.
    #[arg(long, action)]
    pub no_color: bool,

    /// Prompt text shown after the mode indicator.
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
}

impl Args {
    /// Applies command-line overrides to `settings` and re-validates them.
    ///
    /// # Errors
    ///
    /// Returns an error if an override makes the settings invalid, such as a
    /// whitespace-only prompt.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(mode) = self.mode {
            settings.default_mode = mode.into();
        }

        if self.no_color {
            settings.colors_enabled = false;
        }

        if let Some(prompt) = &self.prompt {
            settings.prompt.clone_from(prompt);
        }

        settings.validate()
    }
}
