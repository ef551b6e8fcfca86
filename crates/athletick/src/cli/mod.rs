//! # CLI Behavior
//!
//! This is **one possible UI client** for Athletick, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`athletick`)
//!
//! Running `athletick` with no arguments lists every athlete.
//!
//! ### Data Location
//!
//! Team data lives in the file named by the preferences (`data/athletick.json`
//! by default, relative to the working directory). `--data <FILE>` overrides it
//! for one invocation. The first run without a data file starts from a sample team.
//!
//! ### Interactive Shell (`athletick shell`)
//!
//! Reads one command per line from stdin, with the same syntax as the
//! subcommands. Undo and redo history lives as long as the session.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
