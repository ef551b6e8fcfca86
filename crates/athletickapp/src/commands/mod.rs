//! # Command Layer
//!
//! Every user-visible operation is a [`Command`] value. Commands are where the
//! cross-store work happens: deleting an athlete also drops their records and
//! attendance, clearing resets every store at once. The model only offers the
//! single-store building blocks.
//!
//! ## Execution Contract
//!
//! [`execute`] is the single entry point:
//!
//! 1. If the command is undoable, take a [`Snapshot`](crate::model::Snapshot)
//!    of the model.
//! 2. Run the command module's `run` function.
//! 3. On success, commit the snapshot to history (which clears redo).
//! 4. On failure, record nothing. Each `run` validates everything it needs
//!    before the first mutation, so a failed command leaves no trace.
//!
//! Whether a command is undoable is a fixed property of its variant, see
//! [`Command::is_undoable`].
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not printed text:
//! - `feedback`: the one-line outcome shown to the user
//! - `show_help` / `exit` / `refresh`: flags for the frontend
//! - `save_needed`: the team data changed and should be persisted
//! - `affected_persons`: athletes the command created, changed or removed
//! - `listed_persons`: the filtered list after `find`/`list`
//! - `day`: attendance and performance on one date, for `view`
//! - `messages`: extra info/warning lines
//!
//! ## Testing Strategy
//!
//! Each command module tests its own logic against a
//! [`ModelFixture`](crate::model::fixtures::ModelFixture); the history
//! guarantees of [`execute`] are tested here and in `tests/history.rs`.

use crate::error::ModelError;
use crate::model::{AthletickDate, Model, Person, Record};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod event;
pub mod find;
pub mod helpers;
pub mod history;
pub mod select;
pub mod sort;
pub mod training;
pub mod view;

pub use edit::EditPersonDescriptor;
pub use helpers::Index;
pub use view::DayView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CmdResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    /// The frontend should redraw everything, not just the person list.
    pub refresh: bool,
    pub save_needed: bool,
    pub affected_persons: Vec<Person>,
    pub listed_persons: Vec<Person>,
    pub day: Option<DayView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Default::default()
        }
    }

    /// A result for a command that changed the team data.
    pub fn changed(feedback: impl Into<String>) -> Self {
        Self {
            save_needed: true,
            ..Self::new(feedback)
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_persons(mut self, persons: Vec<Person>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<Person>) -> Self {
        self.listed_persons = persons;
        self
    }

    pub fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }
}

/// A command failure, carrying the model error behind it when there is one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
    pub cause: Option<ModelError>,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        Self {
            message: err.to_string(),
            cause: Some(err),
        }
    }
}

pub type CommandResult = std::result::Result<CmdResult, CommandError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { person: Person },
    Delete { index: Index },
    DeleteTraining { date: AthletickDate },
    DeleteEvent { name: String },
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Clear,
    Sort,
    /// A session for the whole directory, marking the listed indexes present.
    Training {
        date: AthletickDate,
        present: Vec<Index>,
    },
    AddEvent { name: String },
    AddRecord {
        event: String,
        index: Index,
        record: Record,
    },
    Find { keywords: Vec<String> },
    List,
    Select { index: Index },
    View { date: AthletickDate },
    Undo,
    Redo,
    Help,
    Exit,
}

impl Command {
    /// Whether a successful run is recorded in history.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Delete { .. }
                | Command::DeleteTraining { .. }
                | Command::DeleteEvent { .. }
                | Command::Edit { .. }
                | Command::Clear
                | Command::Sort
                | Command::Training { .. }
                | Command::AddEvent { .. }
                | Command::AddRecord { .. }
        )
    }

    /// The user-facing command word.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Delete { .. } | Command::DeleteTraining { .. } | Command::DeleteEvent { .. } => {
                "delete"
            }
            Command::Edit { .. } => "edit",
            Command::Clear => "clear",
            Command::Sort => "sort",
            Command::Training { .. } => "training",
            Command::AddEvent { .. } => "event",
            Command::AddRecord { .. } => "record",
            Command::Find { .. } => "find",
            Command::List => "list",
            Command::Select { .. } => "select",
            Command::View { .. } => "view",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// The description stored in history, e.g. `add Alice Pauline`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add { person } => write!(f, "add {}", person.name),
            Command::Delete { index } => write!(f, "delete athlete {index}"),
            Command::DeleteTraining { date } => write!(f, "delete training on {date}"),
            Command::DeleteEvent { name } => write!(f, "delete event {}", name.trim()),
            Command::Edit { index, .. } => write!(f, "edit athlete {index}"),
            Command::Training { date, .. } => write!(f, "training on {date}"),
            Command::AddEvent { name } => write!(f, "add event {}", name.trim()),
            Command::AddRecord { event, index, .. } => {
                write!(f, "add {} record for athlete {index}", event.trim())
            }
            Command::Find { keywords } => write!(f, "find {}", keywords.join(" ")),
            Command::Select { index } => write!(f, "select {index}"),
            Command::View { date } => write!(f, "view {date}"),
            other => f.write_str(other.word()),
        }
    }
}

/// Runs `command` against `model`, recording undoable successes in history.
pub fn execute(model: &mut Model, command: Command) -> CommandResult {
    let before = command.is_undoable().then(|| model.snapshot());
    let description = command.to_string();
    log::debug!("executing `{description}`");

    let outcome = match command {
        Command::Add { person } => add::run(model, person),
        Command::Delete { index } => delete::run(model, index),
        Command::DeleteTraining { date } => delete::run_training(model, date),
        Command::DeleteEvent { name } => delete::run_event(model, &name),
        Command::Edit { index, descriptor } => edit::run(model, index, descriptor),
        Command::Clear => clear::run(model),
        Command::Sort => sort::run(model),
        Command::Training { date, present } => training::run(model, date, &present),
        Command::AddEvent { name } => event::run_add_event(model, &name),
        Command::AddRecord {
            event,
            index,
            record,
        } => event::run_add_record(model, &event, index, record),
        Command::Find { keywords } => find::run_find(model, keywords),
        Command::List => find::run_list(model),
        Command::Select { index } => select::run(model, index),
        Command::View { date } => view::run(model, date),
        Command::Undo => history::run_undo(model),
        Command::Redo => history::run_redo(model),
        Command::Help => Ok(CmdResult {
            show_help: true,
            ..CmdResult::new("Opened help window.")
        }),
        Command::Exit => Ok(CmdResult {
            exit: true,
            ..CmdResult::new("Exiting Athletick as requested ...")
        }),
    };

    match (&outcome, before) {
        (Ok(_), Some(before)) => model.commit(description, before),
        (Err(err), _) => log::debug!("`{description}` failed: {err}"),
        _ => {}
    }
    outcome
}
