//! Switchback Core Library
//!
//! This crate provides the core of switchback, an interactive command line
//! front end that accepts either named commands (text mode) or numbered menu
//! selections (number mode) and routes them to a fixed set of actions.
//!
//! # Key Features
//!
//! - **Command Registry**: Built-in commands with aliases and menu slots
//! - **Tokenizing**: Whitespace splitting with quotes and backslash escapes
//! - **Suggestions**: Edit-distance "did you mean" hints for unknown commands
//! - **Modes**: Text/number switching and strict numeric menu validation
//! - **Run Loop**: Error counting with an emergency shutdown after repeated failures
//! - **Settings**: Optional YAML settings with prompt templates
//!
//! The crate never touches a terminal. Output goes through [`sink::Sink`] and
//! command behaviour through [`dispatch::Actions`], both supplied by the caller.
//!
//! # Examples
//!
//! Running a scripted session against your own sink and actions:
//!
//! ```no_run
//! use switchback_core::config::Settings;
//! use switchback_core::registry::CommandRegistry;
//! use switchback_core::run_loop::RunLoop;
//! # use switchback_core::dispatch::{Actions, ActionResult, Session};
//! # use switchback_core::sink::{Level, Sink};
//! # struct Quiet;
//! # impl Sink for Quiet {
//! #     fn message(&mut self, _: Level, _: &str) -> std::io::Result<()> { Ok(()) }
//! #     fn raw(&mut self, _: &str) -> std::io::Result<()> { Ok(()) }
//! #     fn banner(&mut self, _: &str) -> std::io::Result<()> { Ok(()) }
//! #     fn separator(&mut self) -> std::io::Result<()> { Ok(()) }
//! #     fn prompt(&mut self, _: &str) -> std::io::Result<()> { Ok(()) }
//! # }
//! # struct Nothing;
//! # impl Actions for Nothing {
//! #     fn help(&mut self, _: &Session<'_>, _: &mut dyn Sink, _: &[String]) -> ActionResult { Ok(()) }
//! #     fn quit(&mut self, _: &Session<'_>, _: &mut dyn Sink, _: &[String]) -> ActionResult { Ok(()) }
//! #     fn switch_mode(&mut self, _: &Session<'_>, _: &mut dyn Sink, _: &[String]) -> ActionResult { Ok(()) }
//! #     fn clear(&mut self, _: &Session<'_>, _: &mut dyn Sink, _: &[String]) -> ActionResult { Ok(()) }
//! #     fn status(&mut self, _: &Session<'_>, _: &mut dyn Sink, _: &[String]) -> ActionResult { Ok(()) }
//! # }
//!
//! let registry = CommandRegistry::builtin()?;
//! let settings = Settings::default();
//!
//! let mut run_loop = RunLoop::new(&registry, &settings);
//! let outcome = run_loop.run(std::io::Cursor::new("2\n4\n"), &mut Quiet, &mut Nothing);
//! println!("Session ended: {outcome:?}");
//! # Ok::<(), switchback_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod mode;
pub mod registry;
pub mod run_loop;
pub mod sink;
pub mod suggestion;
pub mod tokenizer;
