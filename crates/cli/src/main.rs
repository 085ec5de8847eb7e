use clap::Parser;
use log::{debug, info};
use std::io::{stdin, stdout};
use std::process::ExitCode;
use switchback_cli::actions::TerminalActions;
use switchback_cli::cli_args::Args;
use switchback_cli::colors::detect_color_support;
use switchback_cli::terminal::TerminalSink;
use switchback_core::error::Result;
use switchback_core::registry::CommandRegistry;
use switchback_core::run_loop::{Outcome, RunLoop};
use switchback_core::{config, file_handling};

fn execute() -> Result<Outcome> {
    let args = Args::parse();

    let registry = CommandRegistry::builtin()?;

    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{}`", settings_path);

    let mut settings = file_handling::get_settings(&settings_path)?;
    args.apply_to(&mut settings)?;

    let color_support = detect_color_support();
    debug!("Terminal color support: {color_support}");

    let mut sink = TerminalSink::new(stdout().lock(), &settings, color_support);
    let mut actions = TerminalActions::default();

    let mut run_loop = RunLoop::new(&registry, &settings);
    let outcome = run_loop.run(stdin().lock(), &mut sink, &mut actions);
    info!("Session ended: {outcome:?}");

    Ok(outcome)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(Outcome::EmergencyShutdown) => ExitCode::FAILURE,
        Ok(Outcome::Quit | Outcome::EndOfInput) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
