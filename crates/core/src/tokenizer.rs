//! Input sanitizing and shell-like tokenizing.
//!
//! Every line goes through [`check_raw`] and [`sanitize`]. Text-mode lines
//! are then split by [`tokenize`], which understands double quotes and
//! backslash escapes.

use crate::error::{DispatchError, TokenizeError};

/// Sanitized input is silently cut to this many characters.
pub const MAX_SANITIZED_LENGTH: usize = 1000;
/// Raw lines longer than this are rejected before sanitizing.
pub const MAX_RAW_LENGTH: usize = 10_000;
pub const MAX_TOKENS: usize = 1000;
pub const MAX_TOKEN_LENGTH: usize = 1000;

const TRIMMED: [char; 4] = [' ', '\t', '\r', '\n'];

/// Rejects lines no stage should ever look at.
///
/// # Errors
///
/// Returns [`DispatchError::InputTooLong`] for lines over [`MAX_RAW_LENGTH`]
/// characters and [`DispatchError::NullCharacter`] for lines containing NUL.
pub fn check_raw(raw: &str) -> Result<(), DispatchError> {
    let length = raw.chars().count();
    if length > MAX_RAW_LENGTH {
        return Err(DispatchError::InputTooLong {
            length,
            limit: MAX_RAW_LENGTH,
        });
    }

    if raw.contains('\0') {
        return Err(DispatchError::NullCharacter);
    }

    Ok(())
}

/// Trims ASCII whitespace from both ends and caps the length.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.trim_matches(&TRIMMED[..])
        .chars()
        .take(MAX_SANITIZED_LENGTH)
        .collect()
}

/// Splits a sanitized line into tokens.
///
/// # Errors
///
/// Returns a [`TokenizeError`] for an unclosed quote, a trailing escape, too
/// many tokens or an oversized token. No partial result is returned.
///
/// # Examples
///
/// ```
/// use switchback_core::tokenizer::tokenize;
///
/// let tokens = tokenize("a \"b c\" d").unwrap();
/// assert_eq!(tokens, vec!["a", "b c", "d"]);
/// ```
pub fn tokenize(sanitized: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_next = false;

    for c in sanitized.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '\\' {
            escape_next = true;
        } else if c == '"' {
            in_quotes = !in_quotes;
        } else if (c == ' ' || c == '\t') && !in_quotes {
            finish_token(&mut tokens, &mut current)?;
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err(TokenizeError::UnclosedQuote);
    }
    if escape_next {
        return Err(TokenizeError::TrailingEscape);
    }

    finish_token(&mut tokens, &mut current)?;

    Ok(tokens)
}

fn finish_token(tokens: &mut Vec<String>, current: &mut String) -> Result<(), TokenizeError> {
    if current.is_empty() {
        return Ok(());
    }

    let length = current.chars().count();
    if length > MAX_TOKEN_LENGTH {
        return Err(TokenizeError::TokenTooLong {
            length,
            limit: MAX_TOKEN_LENGTH,
        });
    }

    if tokens.len() == MAX_TOKENS {
        return Err(TokenizeError::TooManyTokens(MAX_TOKENS));
    }

    tokens.push(std::mem::take(current));
    Ok(())
}
