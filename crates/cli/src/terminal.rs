//! A [`Sink`] that writes to a terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use switchback_core::config::Settings;
use switchback_core::sink::{Level, Sink};

use crate::colors::Palette;

const SEPARATOR: &str = "────────────────────────────────────────";
const MIN_BANNER_WIDTH: usize = 20;
const FALLBACK_CLEAR_LINES: usize = 50;

/// Box-drawn banner lines with `text` centred.
///
/// The box is eight columns wider than the text and at least twenty wide.
#[must_use]
pub fn banner_lines(text: &str) -> [String; 3] {
    let text_width = text.chars().count();
    let inner = (text_width + 8).max(MIN_BANNER_WIDTH) - 2;

    let left = (inner - text_width) / 2;
    let right = inner - text_width - left;

    [
        format!("╔{}╗", "═".repeat(inner)),
        format!("║{}{text}{}║", " ".repeat(left), " ".repeat(right)),
        format!("╚{}╝", "═".repeat(inner)),
    ]
}

pub struct TerminalSink<W: Write> {
    out: W,
    palette: Option<Palette>,
    ansi: bool,
}

impl<W: Write> TerminalSink<W> {
    /// Colours are used only when the settings enable them and the terminal supports them.
    pub fn new(out: W, settings: &Settings, ansi: bool) -> Self {
        let palette = (settings.colors_enabled && ansi)
            .then(|| Palette::for_scheme(settings.color_scheme));

        Self { out, palette, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, color: Option<Color>, text: &str) -> io::Result<()> {
        match color {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )?,
            None => queue!(self.out, Print(text), Print("\n"))?,
        }
        self.out.flush()
    }

    fn accent(&self) -> Option<Color> {
        self.palette.map(|palette| palette.accent)
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn message(&mut self, level: Level, text: &str) -> io::Result<()> {
        let color = self.palette.map(|palette| palette.color_for(level));
        self.write_line(color, text)
    }

    fn raw(&mut self, text: &str) -> io::Result<()> {
        self.write_line(None, text)
    }

    fn banner(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let color = self.accent();
        for line in banner_lines(text) {
            self.write_line(color, &line)?;
        }
        Ok(())
    }

    fn separator(&mut self) -> io::Result<()> {
        let color = self.accent();
        self.write_line(color, SEPARATOR)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.ansi {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            return self.out.flush();
        }

        for _ in 0..FALLBACK_CLEAR_LINES {
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()?;

        self.warning("Screen clearing failed, used newlines as fallback")
    }
}
