//! Session settings and settings-file path resolution.
//!
//! Settings are read once at startup and never written back. Every field has
//! a default, so a settings file only needs the keys it wants to change.

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::error::Error::{InvalidPrompt, MessageTooLong};
use crate::error::Result;
use crate::interpolation::render_prompt;
use crate::mode::Mode;

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.switchback/settings.yml";

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_WELCOME_MESSAGE: &str = "CLI Manager v1.0\nType 'help' for commands";
pub const DEFAULT_EXIT_MESSAGE: &str = "Goodbye!";
pub const DEFAULT_TEXT_PROMPT_TEMPLATE: &str = "[{mode}] {prompt}";
pub const DEFAULT_NUMBER_PROMPT_TEMPLATE: &str = "[{mode}] Enter option number ({range}){prompt}";

const MAX_PROMPT_LENGTH: usize = 50;
const MAX_MESSAGE_LENGTH: usize = 1000;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Default,
    Dark,
    Matrix,
    Retro,
    HighContrast,
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorScheme::Default => "Default",
            ColorScheme::Dark => "Dark",
            ColorScheme::Matrix => "Matrix",
            ColorScheme::Retro => "Retro",
            ColorScheme::HighContrast => "High Contrast",
        };
        f.write_str(name)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub prompt: String,
    pub welcome_message: String,
    pub exit_message: String,
    pub default_mode: Mode,
    pub colors_enabled: bool,
    pub color_scheme: ColorScheme,
    pub text_prompt_template: String,
    pub number_prompt_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            exit_message: DEFAULT_EXIT_MESSAGE.to_string(),
            default_mode: Mode::Number,
            colors_enabled: true,
            color_scheme: ColorScheme::Default,
            text_prompt_template: DEFAULT_TEXT_PROMPT_TEMPLATE.to_string(),
            number_prompt_template: DEFAULT_NUMBER_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Checks prompt and message limits and that both prompt templates render.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The prompt is empty, whitespace only or longer than 50 characters
    /// - The welcome or exit message exceeds 1000 characters
    /// - A prompt template does not parse or uses an unknown variable
    pub fn validate(&self) -> Result<()> {
        if !is_valid_prompt(&self.prompt) {
            return Err(InvalidPrompt(self.prompt.clone()));
        }

        for (name, message) in [
            ("welcome message", &self.welcome_message),
            ("exit message", &self.exit_message),
        ] {
            let length = message.chars().count();
            if length > MAX_MESSAGE_LENGTH {
                return Err(MessageTooLong(name.to_string(), length));
            }
        }

        for mode in [Mode::Text, Mode::Number] {
            render_prompt(self.prompt_template(mode), mode, &self.prompt, 1)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn prompt_template(&self, mode: Mode) -> &str {
        match mode {
            Mode::Text => &self.text_prompt_template,
            Mode::Number => &self.number_prompt_template,
        }
    }
}

fn is_valid_prompt(prompt: &str) -> bool {
    !prompt.trim().is_empty() && prompt.chars().count() <= MAX_PROMPT_LENGTH
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use switchback_core::config::get_settings_path;
///
/// let custom_path = get_settings_path(&Some("/path/to/settings.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/settings.yml");
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}
