use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a Number-mode entry is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty input. Please enter a number from the menu.")]
    EmptyInput,

    #[error("Input `{}` is too long ({} characters, limit is 10).", .input, .length)]
    TooLong { input: String, length: usize },

    #[error("Negative numbers are not allowed: `{}`.", .0)]
    NegativeNotAllowed(String),

    #[error("Invalid characters detected in `{}`: '{}'. Please enter only digits.", .input, .characters)]
    InvalidCharacters { input: String, characters: String },

    #[error("Option {} is out of range ({} menu options available).", .value, .menu_len)]
    OutOfRange { value: u64, menu_len: usize },
}

/// Reasons a Text-mode line cannot be split into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Unclosed quote in input.")]
    UnclosedQuote,

    #[error("Trailing escape character in input.")]
    TrailingEscape,

    #[error("Too many tokens (limit: {}).", .0)]
    TooManyTokens(usize),

    #[error("Token too long ({} characters, limit: {}).", .length, .limit)]
    TokenTooLong { length: usize, limit: usize },
}

/// Failures turning a line into a [`crate::dispatch::ParsedInput`], or routing one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Empty command entered.")]
    EmptyCommand,

    #[error("Unknown command: `{}`", .0)]
    UnknownCommand(String),

    #[error("Input too long ({} characters, limit: {}).", .length, .limit)]
    InputTooLong { length: usize, limit: usize },

    #[error("Input contains null characters and cannot be processed.")]
    NullCharacter,

    #[error("No command is assigned to menu option {}.", .0)]
    UnassignedMenuSlot(usize),

    #[error("The unknown command cannot be invoked.")]
    NotInvocable,

    #[error("Error parsing arguments: {}", .0)]
    Tokenize(#[from] TokenizeError),

    #[error("Invalid menu selection: {}", .0)]
    Validation(#[from] ValidationError),
}

/// Opaque failure reported by an action implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for ActionError {
    fn from(value: std::io::Error) -> Self {
        Self::new(value.to_string())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Error executing command: {}", .0)]
    Action(#[from] ActionError),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error parsing prompt template: {}", .0)]
    Parse(#[from] leon::ParseError),

    #[error("Error rendering prompt template: {}", .0)]
    Render(#[from] leon::RenderError),

    #[error("Invalid prompt `{}`: prompt cannot be empty, whitespace only or longer than 50 characters", .0)]
    InvalidPrompt(String),

    #[error("Invalid {}: message cannot exceed 1000 characters (got {})", .0, .1)]
    MessageTooLong(String, usize),

    #[error("Found a non-unique command name or alias: `{}`", .0)]
    DuplicateCommandName(String),

    #[error("Invalid command name `{}`: names may not be empty or contain whitespace", .0)]
    InvalidCommandName(String),

    #[error("Menu slot {} is assigned to more than one command", .0)]
    DuplicateMenuSlot(usize),

    #[error("Menu slots must be dense: expected slot {}, found {}", .expected, .found)]
    MenuSlotGap { expected: usize, found: usize },
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
