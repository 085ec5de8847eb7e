//! "Did you mean" suggestions for unknown text commands.
//!
//! The main signal is edit distance between the input and every name and
//! alias in the registry. When that finds nothing, [`SuggestionEngine`] falls
//! back to fuzzy partial matches and to hints for common mistakes.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexSet;

use crate::registry::CommandRegistry;

/// Edit distance between two strings, counted in characters.
///
/// Insertion, deletion and substitution each cost one. Swapping two adjacent
/// characters also costs one, so `quti` is a single edit away from `quit`.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Full table: the transposition case looks two rows back
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let mut best = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(table[i - 2][j - 2] + 1);
            }

            table[i][j] = best;
        }
    }

    table[a.len()][b.len()]
}

/// Largest distance still worth suggesting for an input of `input_length` characters.
#[must_use]
pub fn suggestion_threshold(input_length: usize) -> usize {
    (input_length / 3).max(1)
}

pub struct SuggestionEngine<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> SuggestionEngine<'a> {
    #[must_use]
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Names and aliases close to `input`, deduplicated, in registry order.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let lowered = input.to_lowercase();
        let threshold = suggestion_threshold(lowered.chars().count());

        let suggestions: IndexSet<String> = self
            .registry
            .descriptors()
            .iter()
            .flat_map(|descriptor| descriptor.names())
            .filter(|name| {
                let distance = edit_distance(&lowered, &name.to_lowercase());
                distance > 0 && distance <= threshold
            })
            .map(ToString::to_string)
            .collect();

        suggestions.into_iter().collect()
    }

    /// Names that fuzzily contain `input`, or that `input` starts with.
    ///
    /// Inputs shorter than two characters match too much to be useful and
    /// return nothing.
    #[must_use]
    pub fn partial_matches(&self, input: &str) -> Vec<String> {
        let lowered = input.to_lowercase();
        if lowered.chars().count() < 2 {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();

        let matches: IndexSet<String> = self
            .registry
            .descriptors()
            .iter()
            .flat_map(|descriptor| descriptor.names())
            .filter(|name| {
                let name = name.to_lowercase();
                matcher.fuzzy_match(&name, &lowered).is_some()
                    || (name.chars().count() > 1 && lowered.starts_with(&name))
            })
            .map(ToString::to_string)
            .collect();

        matches.into_iter().collect()
    }
}

/// Hints for inputs that look like a known mistake.
///
/// At most one keyword hint is produced. Notes about capitalisation and
/// punctuation are appended independently.
#[must_use]
pub fn mistake_hints(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    let mut hints = Vec::new();

    let keyword_hint = if lowered.contains("exit") || lowered.contains("quit") {
        Some("Tip: Use 'quit', 'exit', or 'q' to exit the CLI")
    } else if lowered.contains("help") {
        Some("Tip: Use 'help' or 'h' to display help information")
    } else if lowered.contains("clear") || lowered.contains("cls") {
        Some("Tip: Use 'clear' or 'cls' to clear the screen")
    } else if lowered.contains("switch") || lowered.contains("mode") {
        Some("Tip: Use 'switch', 'mode', or 'm' to change between text and menu modes")
    } else if lowered.contains("status") || lowered.contains("info") {
        Some("Tip: Use 'status' or 'info' to display current CLI status")
    } else {
        match lowered.as_str() {
            "ls" | "dir" | "cd" | "pwd" => Some(
                "This is a CLI manager, not a file system. Try 'help' for available commands.",
            ),
            "man" => Some("Use 'help' instead of 'man' to see available commands."),
            "version" | "--version" | "-v" => {
                Some("Use 'status' to see CLI information and current mode.")
            }
            _ if lowered.contains("manual") => {
                Some("Use 'help' instead of 'man' to see available commands.")
            }
            _ => None,
        }
    };

    if let Some(hint) = keyword_hint {
        hints.push(hint.to_string());
    }

    if input != lowered {
        hints.push(
            "Note: Commands are case-insensitive, so capitalization doesn't matter.".to_string(),
        );
    }

    if input.chars().any(|c| !c.is_ascii_alphanumeric()) {
        hints.push("Note: Commands should contain only letters and numbers.".to_string());
    }

    hints
}
