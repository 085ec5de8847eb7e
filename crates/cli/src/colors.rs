use std::env;

use crossterm::style::Color;
use switchback_core::config::ColorScheme;
use switchback_core::sink::Level;

/// Terminal colours for each kind of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    /// Banners, separators and menu rows
    pub accent: Color,
}

impl Palette {
    #[must_use]
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Default => Palette {
                info: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                accent: Color::Blue,
            },
            ColorScheme::Dark => Palette {
                info: Color::Grey,
                success: Color::DarkGreen,
                warning: Color::DarkYellow,
                error: Color::DarkRed,
                accent: Color::DarkCyan,
            },
            ColorScheme::Matrix => Palette {
                info: Color::Green,
                success: Color::Green,
                warning: Color::DarkGreen,
                error: Color::Red,
                accent: Color::DarkGreen,
            },
            ColorScheme::Retro => Palette {
                info: Color::DarkYellow,
                success: Color::Yellow,
                warning: Color::Magenta,
                error: Color::Red,
                accent: Color::DarkMagenta,
            },
            ColorScheme::HighContrast => Palette {
                info: Color::White,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                accent: Color::White,
            },
        }
    }

    #[must_use]
    pub fn color_for(&self, level: Level) -> Color {
        match level {
            Level::Info => self.info,
            Level::Success => self.success,
            Level::Warning => self.warning,
            Level::Error => self.error,
        }
    }
}

/// Whether a terminal described by `TERM` and `COLORTERM` understands ANSI sequences.
///
/// A missing `TERM` means no. Any `COLORTERM` value means yes.
#[must_use]
pub fn supports_color(term: Option<&str>, colorterm: Option<&str>) -> bool {
    let Some(term) = term else {
        return false;
    };

    if term == "dumb" {
        return false;
    }

    colorterm.is_some()
        || ["xterm", "color", "ansi", "screen", "tmux"]
            .iter()
            .any(|known| term.contains(known))
}

/// Reads the current environment. Never fails.
#[must_use]
pub fn detect_color_support() -> bool {
    let term = env::var("TERM").ok();
    let colorterm = env::var("COLORTERM").ok();
    supports_color(term.as_deref(), colorterm.as_deref())
}
