//! User-facing explanations for rejected input.
//!
//! Every per-line failure is turned into a [`Diagnostic`]: a headline that
//! names the problem and tips that say what would have worked instead.

use crate::command_definitions::CommandId;
use crate::error::{DispatchError, Error, TokenizeError, ValidationError};
use crate::mode::Mode;
use crate::registry::{menu_range_label, CommandRegistry};
use crate::suggestion::{mistake_hints, SuggestionEngine};
use crate::tokenizer::sanitize;

pub const HELP_TIP: &str = "Type 'help' to see all available commands";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub headline: String,
    pub tips: Vec<String>,
}

impl Diagnostic {
    fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            tips: Vec::new(),
        }
    }

    fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    fn tips<I: IntoIterator<Item = String>>(mut self, tips: I) -> Self {
        self.tips.extend(tips);
        self
    }

    /// Explains `error`, raised while handling `raw` in `mode`.
    #[must_use]
    pub fn explain(error: &Error, mode: Mode, registry: &CommandRegistry, raw: &str) -> Self {
        let input = sanitize(raw);

        match (error, mode) {
            (Error::Dispatch(DispatchError::UnknownCommand(name)), _) => {
                unknown_command(name, registry)
            }
            (Error::Dispatch(DispatchError::EmptyCommand), _) => {
                Diagnostic::new(error.to_string()).tip(HELP_TIP)
            }
            (Error::Dispatch(DispatchError::Tokenize(e)), _) => {
                Diagnostic::new(error.to_string())
                    .tip(tokenize_tip(e))
                    .tip(HELP_TIP)
            }
            (Error::Dispatch(DispatchError::Validation(e)), Mode::Number) => {
                Diagnostic::new(e.to_string())
                    .tips(menu_tips(e, &input, registry))
                    .tips(valid_options(registry))
            }
            (Error::Dispatch(DispatchError::UnassignedMenuSlot(_)), _) => {
                Diagnostic::new(error.to_string()).tips(valid_options(registry))
            }
            (Error::Dispatch(DispatchError::InputTooLong { .. }), Mode::Number)
            | (Error::Dispatch(DispatchError::NullCharacter), Mode::Number) => {
                Diagnostic::new(error.to_string()).tips(valid_options(registry))
            }
            (Error::Dispatch(DispatchError::InputTooLong { .. }), Mode::Text)
            | (Error::Dispatch(DispatchError::NullCharacter), Mode::Text) => {
                Diagnostic::new(error.to_string()).tip(HELP_TIP)
            }
            (Error::Action(_), _) => Diagnostic::new(error.to_string()),
            (Error::Stdio(e), _) => Diagnostic::new(format!("Could not read input: {e}"))
                .tip("Input must be valid UTF-8 text"),
            _ => Diagnostic::new(format!("Unexpected error: {error}")).tip(HELP_TIP),
        }
    }
}

fn unknown_command(name: &str, registry: &CommandRegistry) -> Diagnostic {
    let engine = SuggestionEngine::new(registry);
    let headline = format!("Unknown command: '{name}'");

    // Single digits are one edit from every one-letter alias
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_digit() {
            let switch = switch_name(registry);
            return Diagnostic::new(headline)
                .tip(format!(
                    "Numbers are used in menu mode. Type '{switch}' to change modes."
                ))
                .tip(HELP_TIP);
        }
    }

    let suggestions = engine.suggest(name);
    if !suggestions.is_empty() {
        return Diagnostic::new(headline)
            .tip(format!("Did you mean: {}?", suggestions.join(", ")))
            .tip(HELP_TIP);
    }

    let mut diagnostic = Diagnostic::new(headline);

    let partial = engine.partial_matches(name);
    if !partial.is_empty() {
        diagnostic = diagnostic.tip(format!("Partial matches: {}", partial.join(", ")));
    }

    diagnostic.tips(mistake_hints(name)).tip(HELP_TIP)
}

fn tokenize_tip(error: &TokenizeError) -> String {
    match error {
        TokenizeError::UnclosedQuote => "Close every quoted argument with a matching quote".into(),
        TokenizeError::TrailingEscape => {
            "A backslash must be followed by the character it escapes".into()
        }
        TokenizeError::TooManyTokens(limit) => format!("Use at most {limit} arguments"),
        TokenizeError::TokenTooLong { limit, .. } => {
            format!("Keep each argument under {limit} characters")
        }
    }
}

fn menu_tips(error: &ValidationError, input: &str, registry: &CommandRegistry) -> Vec<String> {
    let mut tips = Vec::new();

    if let ValidationError::InvalidCharacters { .. } = error {
        if registry.lookup_by_name(input).is_some() {
            tips.push(format!(
                "'{input}' is a text mode command. Switch to text mode to use it."
            ));
            if let Some(slot) = registry
                .lookup_by_id(CommandId::SwitchMode)
                .and_then(|d| d.menu_slot)
            {
                tips.push(format!("Tip: Enter {slot} to switch to text mode"));
            }
        } else {
            let mut chars = input.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_alphabetic() {
                    tips.push("Letters are not menu options. Please enter a number.".into());
                }
            }
            if input.contains('.') {
                tips.push("Decimal numbers are not allowed. Please enter a whole number.".into());
            }
            if input.contains(' ') {
                tips.push("Please remove spaces from your input.".into());
            }
        }
    }

    tips
}

fn valid_options(registry: &CommandRegistry) -> Vec<String> {
    let entries = registry.menu_entries();
    if entries.is_empty() {
        return vec!["No menu options are available.".to_string()];
    }

    let mut lines = vec![format!(
        "Valid options ({}):",
        menu_range_label(registry.menu_len())
    )];
    lines.extend(
        entries
            .iter()
            .map(|entry| format!("  {} - {}", entry.slot, entry.descriptor.description)),
    );
    lines
}

fn switch_name(registry: &CommandRegistry) -> &str {
    registry
        .lookup_by_id(CommandId::SwitchMode)
        .map_or("switch", |d| d.primary_name.as_str())
}
