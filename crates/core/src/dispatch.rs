//! Turning input lines into actions.
//!
//! [`Dispatcher::resolve`] maps a line to a [`ParsedInput`] according to the
//! active mode. [`Dispatcher::invoke`] routes a [`ParsedInput`] to the matching
//! method of an [`Actions`] implementation.

use log::{debug, warn};

use crate::command_definitions::CommandId;
use crate::config::Settings;
use crate::error::{ActionError, DispatchError, Result};
use crate::mode::{validate_menu_input, Mode};
use crate::registry::CommandRegistry;
use crate::sink::Sink;
use crate::tokenizer::{check_raw, sanitize, tokenize};

/// A resolved command and its arguments, alive for one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command_id: CommandId,
    pub arguments: Vec<String>,
}

/// Read-only view of the session handed to every action.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    pub mode: Mode,
    pub running: bool,
    pub registry: &'a CommandRegistry,
    pub settings: &'a Settings,
}

pub type ActionResult = std::result::Result<(), ActionError>;

/// The concrete behaviour behind each command.
///
/// The run loop applies the state changes itself: it flips the mode before
/// `switch_mode` runs and stops the session after `quit` returns, even if it
/// failed. Implementations only present the outcome.
pub trait Actions {
    fn help(&mut self, session: &Session<'_>, sink: &mut dyn Sink, arguments: &[String])
        -> ActionResult;

    fn quit(&mut self, session: &Session<'_>, sink: &mut dyn Sink, arguments: &[String])
        -> ActionResult;

    fn switch_mode(
        &mut self,
        session: &Session<'_>,
        sink: &mut dyn Sink,
        arguments: &[String],
    ) -> ActionResult;

    fn clear(&mut self, session: &Session<'_>, sink: &mut dyn Sink, arguments: &[String])
        -> ActionResult;

    fn status(
        &mut self,
        session: &Session<'_>,
        sink: &mut dyn Sink,
        arguments: &[String],
    ) -> ActionResult;

    /// How many arguments `command` makes use of. Extra ones are ignored.
    fn accepted_arguments(&self, command: CommandId) -> usize {
        let _ = command;
        0
    }
}

pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Resolves one raw input line.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] if the line is rejected by raw checks,
    /// tokenizing or menu validation, or names no known command.
    pub fn resolve(&self, mode: Mode, raw: &str) -> std::result::Result<ParsedInput, DispatchError> {
        check_raw(raw)?;
        let sanitized = sanitize(raw);

        match mode {
            Mode::Number => {
                let slot = validate_menu_input(&sanitized, self.registry.menu_len())?;
                let descriptor = self
                    .registry
                    .lookup_by_menu_slot(slot)
                    .ok_or(DispatchError::UnassignedMenuSlot(slot))?;

                Ok(ParsedInput {
                    command_id: descriptor.id,
                    arguments: Vec::new(),
                })
            }
            Mode::Text => {
                let mut tokens = tokenize(&sanitized)?.into_iter();
                let name = tokens.next().ok_or(DispatchError::EmptyCommand)?;

                let descriptor = self
                    .registry
                    .lookup_by_name(&name)
                    .ok_or_else(|| DispatchError::UnknownCommand(name.clone()))?;

                Ok(ParsedInput {
                    command_id: descriptor.id,
                    arguments: tokens.collect(),
                })
            }
        }
    }

    /// Routes a resolved command to its action.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotInvocable`] for [`CommandId::Unknown`] and
    /// wraps any [`ActionError`] the action reports.
    pub fn invoke<A: Actions + ?Sized>(
        &self,
        actions: &mut A,
        parsed: &ParsedInput,
        session: &Session<'_>,
        sink: &mut dyn Sink,
    ) -> Result<()> {
        let arguments = parsed.arguments.as_slice();

        if parsed.command_id != CommandId::Unknown
            && arguments.len() > actions.accepted_arguments(parsed.command_id)
        {
            if let Err(e) = sink.warning("Note: Extra arguments ignored for this command") {
                warn!("Could not write extra-argument advisory: {e}");
            }
        }

        debug!("Invoking `{}` with {:?}", parsed.command_id, arguments);

        match parsed.command_id {
            CommandId::Help => actions.help(session, sink, arguments)?,
            CommandId::Quit => actions.quit(session, sink, arguments)?,
            CommandId::SwitchMode => actions.switch_mode(session, sink, arguments)?,
            CommandId::Clear => actions.clear(session, sink, arguments)?,
            CommandId::Status => actions.status(session, sink, arguments)?,
            CommandId::Unknown => return Err(DispatchError::NotInvocable.into()),
        }

        Ok(())
    }
}
