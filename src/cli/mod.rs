//! Command Line Interface (CLI) layer for logokey.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `transparent`, `crop`
//! and `run` subcommands. It wires user-provided options to the library
//! functionality exposed via `logokey::api`.
//!
//! If you are embedding logokey into another application, prefer using
//! the high-level `logokey::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
