#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use switchback_cli::actions::TerminalActions;
    use switchback_cli::terminal::TerminalSink;
    use switchback_core::config::Settings;
    use switchback_core::mode::Mode;
    use switchback_core::registry::CommandRegistry;
    use switchback_core::run_loop::{Outcome, RunLoop};

    fn run_session(settings: &Settings, input: &str) -> (Outcome, String) {
        let registry = CommandRegistry::builtin().unwrap();
        let mut sink = TerminalSink::new(Vec::new(), settings, false);
        let mut actions = TerminalActions::with_color_support(|| false);

        let mut run_loop = RunLoop::new(&registry, settings);
        let outcome = run_loop.run(Cursor::new(input.to_string()), &mut sink, &mut actions);

        (outcome, String::from_utf8(sink.into_inner()).unwrap())
    }

    fn plain(mode: Mode) -> Settings {
        Settings {
            default_mode: mode,
            colors_enabled: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_number_mode_session_output() {
        let (outcome, output) = run_session(&plain(Mode::Number), "2\n4\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(output.starts_with("CLI Manager v1.0\nType 'help' for commands\n"));
        assert!(output.contains("║   Menu Options   ║"));
        assert!(output.contains("0. Switch input mode\n"));
        assert!(output.contains("[MENU] Enter option number (0-4)> "));
        assert!(output.contains("Selected: Show system status\n"));
        assert!(output.contains("Current mode: Number Mode\n"));
        assert!(output.contains("Terminal color support: No\n"));
        assert!(output.ends_with("Selected: Exit the CLI\nGoodbye!\n"));
    }

    #[test]
    fn test_text_mode_help_and_suggestions() {
        let (outcome, output) = run_session(&plain(Mode::Text), "help\nstaus\n");

        assert_eq!(outcome, Outcome::EndOfInput);
        assert!(output.contains("[TEXT] > "));
        assert!(output.contains("switch (mode, menu, m) - Toggle between text and number mode\n"));
        assert!(output.contains("Unknown command: 'staus'\n"));
        assert!(output.contains("Did you mean: status?\n"));
        assert!(output.contains("End of input detected. Exiting gracefully...\n"));
    }

    #[test]
    fn test_switching_changes_prompt() {
        let (_, output) = run_session(&plain(Mode::Text), "m\nswitch\n");

        let text_prompts = output.matches("[TEXT] > ").count();
        let menu_prompts = output.matches("[MENU] Enter option number (0-4)> ").count();

        // "switch" is only a name in text mode
        assert!(output.contains("Switched to number mode.\n"));
        assert!(output.contains("'switch' is a text mode command. Switch to text mode to use it.\n"));
        assert_eq!(text_prompts, 1);
        assert_eq!(menu_prompts, 2);
    }

    #[test]
    fn test_text_mode_switch_then_menu_selection() {
        let (outcome, output) = run_session(&plain(Mode::Text), "m\n0\nq\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(output.contains("Switched to number mode.\n"));
        assert!(output.contains("Selected: Switch input mode\n"));
        assert!(output.contains("Switched to text mode.\n"));
        assert_eq!(output.matches("[TEXT] > ").count(), 2);
    }

    #[test]
    fn test_repeated_errors_trigger_shutdown() {
        let settings = Settings {
            exit_message: "Shutting down".to_string(),
            ..plain(Mode::Number)
        };
        let (outcome, output) = run_session(&settings, "9\nx\n1.5\n-3\n\n1\n");

        assert_eq!(outcome, Outcome::EmergencyShutdown);
        assert_eq!(
            output
                .matches("Multiple errors detected. Consider switching modes or typing 'help'")
                .count(),
            3
        );
        assert!(output.contains("Letters are not menu options. Please enter a number.\n"));
        assert!(output.contains("Decimal numbers are not allowed. Please enter a whole number.\n"));
        assert!(output.contains("Too many consecutive errors. Initiating emergency shutdown...\n"));
        assert!(output.ends_with("Shutting down\n"));
        assert!(!output.contains("Number Mode Help"));
    }
}
