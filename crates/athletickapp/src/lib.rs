//! # Athletick Architecture
//!
//! Athletick keeps a sports team's records: the athletes, who turned up to
//! which training, and performance records per event. It is a library first;
//! the `athletick` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (athletick crate)                                      │
//! │  - Parses arguments into Command values, renders CmdResult  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Runs commands, persists after successful changes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One closed Command enum, one execute()                   │
//! │  - Cross-store work, snapshot-then-commit history           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/)                                             │
//! │  - Athletick, Performance, Attendance stores                │
//! │  - Filtered person view, undo/redo history                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TeamStorage trait                                        │
//! │  - JsonFileStorage (production), InMemoryStorage (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; [`logging`] decides where they end up.
//!
//! ## Undo Model
//!
//! Every undoable command is bracketed by a deep snapshot of all three stores,
//! so undo is "put the old state back" rather than "run the inverse". See
//! [`model`] for the history rules and [`commands`] for the execution contract.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade pairing the model with storage
//! - [`commands`]: Command enum, execution, per-command logic
//! - [`model`]: Domain types, stores, filtered view, history
//! - [`store`]: Persistence trait and implementations
//! - [`config`]: Layered configuration
//! - [`logging`]: Logger bootstrap
//! - [`sample`]: First-launch data
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod sample;
pub mod store;
