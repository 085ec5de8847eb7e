//! Switchback CLI Library
//!
//! This crate provides the terminal front end for switchback. It parses
//! command-line flags, renders session output with colours and box-drawn
//! banners, and implements the built-in commands.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and settings overrides
//! - [`colors`]: Colour schemes and terminal capability detection
//! - [`terminal`]: A [`switchback_core::sink::Sink`] backed by any writer
//! - [`actions`]: Help, quit, switch, clear and status for a terminal
//!
//! # Examples
//!
//! The CLI binary (`sb`) can be used in several ways:
//!
//! ```bash
//! # Start in the numbered menu (the default)
//! sb
//!
//! # Start in text mode with a custom prompt
//! sb --mode text --prompt '$ '
//!
//! # Use another settings file and no colours
//! sb --settings-path ./settings.yml --no-color
//! ```

pub mod actions;
pub mod cli_args;
pub mod colors;
pub mod terminal;
