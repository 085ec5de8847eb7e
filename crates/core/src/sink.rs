//! The output side of a session.
//!
//! The core never writes to a terminal itself. Everything user-visible goes
//! through a [`Sink`], which decides how levels are coloured and formatted.

use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Receives everything a session prints.
///
/// Implementations are assumed to be append-only. A failing call is logged
/// by the caller and otherwise ignored.
pub trait Sink {
    /// A leveled message.
    fn message(&mut self, level: Level, text: &str) -> io::Result<()>;

    /// A line that bypasses leveling, such as a menu row.
    fn raw(&mut self, text: &str) -> io::Result<()>;

    fn banner(&mut self, text: &str) -> io::Result<()>;

    fn separator(&mut self) -> io::Result<()>;

    /// Prompt text, written without a trailing newline.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Clears the screen. The default scrolls old output away.
    fn clear_screen(&mut self) -> io::Result<()> {
        for _ in 0..50 {
            self.raw("")?;
        }
        Ok(())
    }

    fn info(&mut self, text: &str) -> io::Result<()> {
        self.message(Level::Info, text)
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        self.message(Level::Success, text)
    }

    fn warning(&mut self, text: &str) -> io::Result<()> {
        self.message(Level::Warning, text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        self.message(Level::Error, text)
    }
}
