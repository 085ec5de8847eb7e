//! The interactive session loop.
//!
//! A [`RunLoop`] owns the mode and the error counter for one session and
//! borrows the registry and settings it was built from. Each line read from
//! the input is resolved, invoked and folded into the counter; five failures
//! in a row end the session with an emergency shutdown.

use std::io::{self, BufRead};

use log::{debug, error, info, warn};

use crate::command_definitions::CommandId;
use crate::config::Settings;
use crate::diagnostics::Diagnostic;
use crate::dispatch::{Actions, Dispatcher, ParsedInput, Session};
use crate::error::{Error, Result};
use crate::interpolation::render_prompt;
use crate::mode::{Mode, ModeController};
use crate::registry::CommandRegistry;
use crate::sink::Sink;

pub const MAX_CONSECUTIVE_ERRORS: usize = 5;
pub const ADVISORY_THRESHOLD: usize = 3;

pub const ERROR_ADVISORY: &str =
    "Multiple errors detected. Consider switching modes or typing 'help'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
    /// Failures since the last success, never above [`MAX_CONSECUTIVE_ERRORS`].
    pub consecutive_errors: usize,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            running: true,
            consecutive_errors: 0,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    EndOfInput,
    Quit,
    EmergencyShutdown,
}

pub struct RunLoop<'a> {
    registry: &'a CommandRegistry,
    settings: &'a Settings,
    dispatcher: Dispatcher<'a>,
    modes: ModeController,
    state: RunState,
}

impl<'a> RunLoop<'a> {
    #[must_use]
    pub fn new(registry: &'a CommandRegistry, settings: &'a Settings) -> Self {
        Self {
            registry,
            settings,
            dispatcher: Dispatcher::new(registry),
            modes: ModeController::new(settings.default_mode, registry),
            state: RunState::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Snapshot handed to actions.
    #[must_use]
    pub fn session(&self) -> Session<'a> {
        Session {
            mode: self.modes.current(),
            running: self.state.running,
            registry: self.registry,
            settings: self.settings,
        }
    }

    /// Runs the session until quit, end of input or emergency shutdown.
    pub fn run<R, A>(&mut self, mut input: R, sink: &mut dyn Sink, actions: &mut A) -> Outcome
    where
        R: BufRead,
        A: Actions + ?Sized,
    {
        info!("Starting session in {}", self.modes.current());
        emit(sink.info(&self.settings.welcome_message));

        while self.state.running {
            self.show_prompt(sink);

            match read_line(&mut input) {
                Ok(None) => {
                    info!("Input closed");
                    self.state.running = false;
                    emit(sink.raw(""));
                    emit(sink.info("End of input detected. Exiting gracefully..."));
                    return Outcome::EndOfInput;
                }
                Ok(Some(line)) => {
                    if let Some(outcome) = self.step(&line, sink, actions) {
                        return outcome;
                    }
                }
                Err(e) => {
                    warn!("Failed to read input: {e}");
                    emit(sink.warning("Input stream error detected. Attempting recovery..."));
                    if let Some(outcome) = self.fail(&Error::Stdio(e), "", sink) {
                        return outcome;
                    }
                }
            }
        }

        Outcome::Quit
    }

    /// Handles one input line. Returns the outcome if the session ended.
    pub fn step<A>(&mut self, line: &str, sink: &mut dyn Sink, actions: &mut A) -> Option<Outcome>
    where
        A: Actions + ?Sized,
    {
        let mode = self.modes.current();

        let result = match self.dispatcher.resolve(mode, line) {
            Ok(parsed) => {
                if mode == Mode::Number {
                    self.acknowledge_selection(&parsed, sink);
                }
                self.execute(&parsed, sink, actions)
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => self.succeed(),
            Err(e) => {
                if let Some(outcome) = self.fail(&e, line, sink) {
                    return Some(outcome);
                }
            }
        }

        if self.state.running {
            None
        } else {
            Some(Outcome::Quit)
        }
    }

    fn execute<A>(&mut self, parsed: &ParsedInput, sink: &mut dyn Sink, actions: &mut A) -> Result<()>
    where
        A: Actions + ?Sized,
    {
        if parsed.command_id == CommandId::SwitchMode {
            self.modes.switch();
        }

        let session = self.session();
        let result = self.dispatcher.invoke(actions, parsed, &session, sink);

        if parsed.command_id == CommandId::Quit {
            info!("Quit requested");
            self.state.running = false;
        }

        result
    }

    fn acknowledge_selection(&self, parsed: &ParsedInput, sink: &mut dyn Sink) {
        if let Some(descriptor) = self.registry.lookup_by_id(parsed.command_id) {
            emit(sink.info(&format!("Selected: {}", descriptor.description)));
        }
    }

    fn succeed(&mut self) {
        if self.state.consecutive_errors > 0 {
            debug!("Resetting error counter after {} failures", self.state.consecutive_errors);
        }
        self.state.consecutive_errors = 0;
    }

    fn fail(&mut self, error: &Error, line: &str, sink: &mut dyn Sink) -> Option<Outcome> {
        self.state.consecutive_errors = (self.state.consecutive_errors + 1).min(MAX_CONSECUTIVE_ERRORS);
        debug!(
            "Input failed ({} consecutive): {error}",
            self.state.consecutive_errors
        );

        let diagnostic = Diagnostic::explain(error, self.modes.current(), self.registry, line);
        emit(sink.error(&diagnostic.headline));
        for tip in &diagnostic.tips {
            emit(sink.info(tip));
        }

        if self.state.consecutive_errors >= ADVISORY_THRESHOLD {
            emit(sink.warning(ERROR_ADVISORY));
        }

        if self.state.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
            self.emergency_shutdown(sink);
            return Some(Outcome::EmergencyShutdown);
        }

        None
    }

    fn emergency_shutdown(&mut self, sink: &mut dyn Sink) {
        self.state.running = false;
        error!("Too many consecutive errors, shutting down");

        emit(sink.error("Too many consecutive errors. Initiating emergency shutdown..."));
        if self.settings.exit_message.is_empty() {
            emit(sink.info("Emergency shutdown complete."));
        } else {
            emit(sink.info(&self.settings.exit_message));
        }
    }

    fn show_prompt(&self, sink: &mut dyn Sink) {
        let mode = self.modes.current();
        let menu_len = self.modes.menu_len();

        if mode == Mode::Number {
            emit(sink.banner("Menu Options"));
            for entry in self.registry.menu_entries() {
                emit(sink.raw(&entry.to_string()));
            }
            emit(sink.separator());
        }

        let prompt = render_prompt(
            self.settings.prompt_template(mode),
            mode,
            &self.settings.prompt,
            menu_len,
        )
        .unwrap_or_else(|e| {
            warn!("Could not render prompt template: {e}");
            self.settings.prompt.clone()
        });

        emit(sink.prompt(&prompt));
    }
}

/// Reads one line, or `None` at end of input.
///
/// Invalid UTF-8 is reported after the whole line has been consumed, so the
/// next read starts on a fresh line.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn emit(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("Could not write to output: {e}");
    }
}
