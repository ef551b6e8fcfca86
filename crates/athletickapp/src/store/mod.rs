//! # Storage Layer
//!
//! The [`TeamStorage`] trait is the boundary between the in-memory model and
//! wherever team data lives. Storage is only ever touched *after* a command
//! has finished mutating the model, so a failing backend can never leave the
//! model half-updated.
//!
//! ## What Is Persisted
//!
//! Two independent documents:
//!
//! - **Team data** ([`TeamData`]): athletes, performance records and training
//!   attendance. Undo history is not persisted; it lives for one session.
//! - **User preferences** ([`UserPrefs`]): window geometry and the team data
//!   file path.
//!
//! ## Implementations
//!
//! - [`json::JsonFileStorage`]: pretty-printed JSON files, parent directories
//!   created on first save.
//! - [`memory::InMemoryStorage`]: for tests, with save-failure injection.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! ├── athletick.json      # TeamData
//! preferences.json        # UserPrefs
//! ```

use crate::error::Result;
use crate::model::{Athletick, Attendance, Model, Performance, UserPrefs};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod memory;

/// The persisted form of the three team stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    #[serde(default)]
    pub athletick: Athletick,
    #[serde(default)]
    pub performance: Performance,
    #[serde(default)]
    pub attendance: Attendance,
}

impl TeamData {
    pub fn from_model(model: &Model) -> Self {
        Self {
            athletick: model.athletick().clone(),
            performance: model.performance().clone(),
            attendance: model.attendance().clone(),
        }
    }
}

/// Abstract interface for team and preference persistence.
///
/// `read_*` return `Ok(None)` when nothing has been stored yet and an error
/// when something is stored but cannot be read.
pub trait TeamStorage {
    fn read_team(&self) -> Result<Option<TeamData>>;

    fn save_team(&mut self, data: &TeamData) -> Result<()>;

    fn read_prefs(&self) -> Result<Option<UserPrefs>>;

    fn save_prefs(&mut self, prefs: &UserPrefs) -> Result<()>;
}
