//! # Athletick CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/athletickapp/`: UI-agnostic library: model, commands, storage
//! - `crates/athletick/`: this CLI, a client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/athletick/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command translation + context wiring (commands.rs)       │
//! │  - Terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/athletickapp/src/api.rs)                 │
//! │  - Executes commands against the Model                      │
//! │  - Persists team data after every change                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command + Model Layers (crates/athletickapp/src/)          │
//! │  - Validation, cascades, undo/redo history                  │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Model and commands**: unit tests next to the code plus scenario tests
//!   in `crates/athletickapp/tests/`.
//! - **CLI layer**: parsing and translation are unit tested in `src/cli/`;
//!   `tests/cli_e2e.rs` drives the real binary against a temporary data file.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
