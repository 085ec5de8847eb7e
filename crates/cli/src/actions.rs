//! What each built-in command does in a terminal session.

use itertools::Itertools;
use log::info;
use switchback_core::dispatch::{ActionResult, Actions, Session};
use switchback_core::mode::Mode;
use switchback_core::sink::Sink;

use crate::colors::detect_color_support;

pub struct TerminalActions {
    color_support: fn() -> bool,
}

impl Default for TerminalActions {
    fn default() -> Self {
        Self {
            color_support: detect_color_support,
        }
    }
}

impl TerminalActions {
    /// Uses `color_support` instead of the environment when reporting status.
    #[must_use]
    pub fn with_color_support(color_support: fn() -> bool) -> Self {
        Self { color_support }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl Actions for TerminalActions {
    fn help(&mut self, session: &Session<'_>, sink: &mut dyn Sink, _: &[String]) -> ActionResult {
        match session.mode {
            Mode::Text => {
                sink.banner("Text Mode Commands")?;
                sink.info("Commands are case-insensitive and support aliases:")?;
                sink.separator()?;

                for descriptor in session.registry.descriptors() {
                    sink.raw(&format!("{descriptor} - {}", descriptor.help_text))?;
                }

                sink.separator()?;
                sink.info("Tip: You can use partial commands and get suggestions for typos!")?;
            }
            Mode::Number => {
                sink.banner("Number Mode Help")?;
                sink.info("In number mode, select options by entering the corresponding number:")?;
                sink.separator()?;

                for entry in session.registry.menu_entries() {
                    sink.raw(&format!("{} - {}", entry.slot, entry.descriptor.help_text))?;
                }

                sink.separator()?;
                sink.info(
                    "Tip: Text mode allows direct command entry with aliases and suggestions!",
                )?;
            }
        }

        Ok(())
    }

    fn quit(&mut self, session: &Session<'_>, sink: &mut dyn Sink, _: &[String]) -> ActionResult {
        info!("Initiating graceful shutdown");

        if !session.settings.exit_message.is_empty() {
            sink.info(&session.settings.exit_message)?;
        }

        Ok(())
    }

    fn switch_mode(
        &mut self,
        session: &Session<'_>,
        sink: &mut dyn Sink,
        _: &[String],
    ) -> ActionResult {
        // The session already reports the mode being switched to
        match session.mode {
            Mode::Text => {
                sink.success("Switched to text mode.")?;
                sink.info("You can now enter commands directly (e.g., 'help', 'quit').")?;
                sink.info("Commands are case-insensitive and support aliases.")?;
            }
            Mode::Number => {
                sink.success("Switched to number mode.")?;
                sink.info("A numbered menu will be displayed before each prompt.")?;
                sink.info("Enter the number corresponding to your choice.")?;
            }
        }

        Ok(())
    }

    fn clear(&mut self, _: &Session<'_>, sink: &mut dyn Sink, _: &[String]) -> ActionResult {
        sink.clear_screen()?;
        sink.info("Screen cleared.")?;
        Ok(())
    }

    fn status(&mut self, session: &Session<'_>, sink: &mut dyn Sink, _: &[String]) -> ActionResult {
        let settings = session.settings;

        sink.info(&format!("Current mode: {}", session.mode))?;
        sink.info(&format!("Description: {}", session.mode.description()))?;
        sink.info(&format!("Colors enabled: {}", yes_no(settings.colors_enabled)))?;
        sink.info(&format!("Running: {}", yes_no(session.running)))?;
        sink.info(&format!(
            "Terminal color support: {}",
            yes_no((self.color_support)())
        ))?;
        sink.info(&format!("Color scheme: {}", settings.color_scheme))?;
        sink.info(&format!(
            "Available commands: {}",
            session
                .registry
                .descriptors()
                .iter()
                .map(|descriptor| &descriptor.primary_name)
                .join(", ")
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchback_core::config::Settings;
    use switchback_core::registry::CommandRegistry;
    use switchback_core::sink::Level;
    use std::io;

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl Sink for Lines {
        fn message(&mut self, level: Level, text: &str) -> io::Result<()> {
            self.0.push(format!("{level}: {text}"));
            Ok(())
        }
        fn raw(&mut self, text: &str) -> io::Result<()> {
            self.0.push(text.to_string());
            Ok(())
        }
        fn banner(&mut self, text: &str) -> io::Result<()> {
            self.0.push(format!("== {text} =="));
            Ok(())
        }
        fn separator(&mut self) -> io::Result<()> {
            self.0.push("--".to_string());
            Ok(())
        }
        fn prompt(&mut self, text: &str) -> io::Result<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    fn session<'a>(mode: Mode, registry: &'a CommandRegistry, settings: &'a Settings) -> Session<'a> {
        Session {
            mode,
            running: true,
            registry,
            settings,
        }
    }

    #[test]
    fn test_help_in_text_mode_lists_aliases() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::default()
            .help(&session(Mode::Text, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(sink.0[0], "== Text Mode Commands ==");
        assert!(sink
            .0
            .contains(&"quit (exit, q) - Gracefully shutdown the application".to_string()));
        assert!(sink.0.last().unwrap().starts_with("INFO: Tip:"));
    }

    #[test]
    fn test_help_in_number_mode_lists_slots_in_order() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::default()
            .help(&session(Mode::Number, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(sink.0[0], "== Number Mode Help ==");
        assert_eq!(sink.0[3], "0 - Toggle between text and number mode");
        assert_eq!(sink.0[7], "4 - Gracefully shutdown the application");
    }

    #[test]
    fn test_quit_prints_exit_message() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::default()
            .quit(&session(Mode::Text, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(sink.0, vec!["INFO: Goodbye!"]);
    }

    #[test]
    fn test_switch_reports_new_mode() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::default()
            .switch_mode(&session(Mode::Number, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(sink.0[0], "SUCCESS: Switched to number mode.");
    }

    #[test]
    fn test_status_rechecks_color_support() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::with_color_support(|| false)
            .status(&session(Mode::Text, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(
            sink.0,
            vec![
                "INFO: Current mode: Text Mode",
                "INFO: Description: Enter commands directly (case-insensitive, supports aliases)",
                "INFO: Colors enabled: Yes",
                "INFO: Running: Yes",
                "INFO: Terminal color support: No",
                "INFO: Color scheme: Default",
                "INFO: Available commands: help, quit, switch, clear, status",
            ]
        );
    }

    #[test]
    fn test_clear_uses_sink() {
        let registry = CommandRegistry::builtin().unwrap();
        let settings = Settings::default();
        let mut sink = Lines::default();

        TerminalActions::default()
            .clear(&session(Mode::Text, &registry, &settings), &mut sink, &[])
            .unwrap();

        assert_eq!(sink.0.len(), 51);
        assert_eq!(sink.0.last().unwrap(), "INFO: Screen cleared.");
    }
}
