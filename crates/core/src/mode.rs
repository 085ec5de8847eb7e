//! The interaction mode state machine and Number-mode input validation.

use std::fmt::{Display, Formatter};

use log::info;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::registry::CommandRegistry;

/// Longest Number-mode entry accepted, in characters.
pub const MAX_MENU_INPUT_LENGTH: usize = 10;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Named commands with aliases
    Text,
    /// Numbered menu selections
    #[default]
    Number,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Text => Mode::Number,
            Mode::Number => Mode::Text,
        }
    }

    /// Short tag used in prompts.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Mode::Text => "TEXT",
            Mode::Number => "MENU",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Mode::Text => "Enter commands directly (case-insensitive, supports aliases)",
            Mode::Number => "Select options from numbered menu",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Text => f.write_str("Text Mode"),
            Mode::Number => f.write_str("Number Mode"),
        }
    }
}

/// Owns the active [`Mode`] and the size of the numbered menu.
#[derive(Debug, Clone)]
pub struct ModeController {
    current: Mode,
    menu_len: usize,
}

impl ModeController {
    #[must_use]
    pub fn new(initial: Mode, registry: &CommandRegistry) -> Self {
        Self {
            current: initial,
            menu_len: registry.menu_len(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Mode {
        self.current
    }

    #[must_use]
    pub fn menu_len(&self) -> usize {
        self.menu_len
    }

    /// Flips the mode and returns the new one.
    pub fn switch(&mut self) -> Mode {
        let previous = self.current;
        self.current = previous.toggled();
        info!("Switched from {} to {}", previous, self.current);
        self.current
    }

    /// Validates a sanitized Number-mode entry against the live menu size.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] that applies, checked in this
    /// order: empty, too long, negative, invalid characters, out of range.
    pub fn validate_menu_input(&self, input: &str) -> Result<usize, ValidationError> {
        validate_menu_input(input, self.menu_len)
    }
}

/// See [`ModeController::validate_menu_input`].
///
/// # Errors
///
/// Returns a [`ValidationError`] describing why `input` is not a menu option.
pub fn validate_menu_input(input: &str, menu_len: usize) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let length = trimmed.chars().count();
    if length > MAX_MENU_INPUT_LENGTH {
        return Err(ValidationError::TooLong {
            input: trimmed.to_string(),
            length,
        });
    }

    if trimmed.starts_with('-') {
        return Err(ValidationError::NegativeNotAllowed(trimmed.to_string()));
    }

    let mut invalid = String::new();
    for c in trimmed.chars().filter(|c| !c.is_ascii_digit()) {
        if !invalid.contains(c) {
            invalid.push(c);
        }
    }
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters {
            input: trimmed.to_string(),
            characters: invalid,
        });
    }

    // At most ten ASCII digits always fit in a u64
    let value: u64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidCharacters {
            input: trimmed.to_string(),
            characters: String::new(),
        })?;

    match usize::try_from(value) {
        Ok(slot) if slot < menu_len => Ok(slot),
        _ => Err(ValidationError::OutOfRange { value, menu_len }),
    }
}
