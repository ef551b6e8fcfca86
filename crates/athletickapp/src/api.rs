//! # API Facade
//!
//! [`AthletickApi`] is the single entry point frontends use. It pairs a
//! [`Model`] with a [`TeamStorage`] backend and adds exactly one thing on top
//! of [`commands::execute`]: persistence.
//!
//! ## Persistence Policy
//!
//! After a command succeeds with `save_needed`, the API writes the team data.
//! A failed write does **not** undo the command: the in-memory model stays
//! authoritative, the failure is logged, and a warning is appended to the
//! command's messages. The next successful save catches the file up.
//!
//! ## Loading
//!
//! | Stored team data | Result |
//! |------------------|--------|
//! | present, valid   | loaded as is |
//! | absent           | sample team (first launch) |
//! | unreadable       | empty team, warning logged |
//!
//! Unreadable preferences fall back to defaults the same way.
//!
//! ## Generic Over TeamStorage
//!
//! - Production: `AthletickApi<JsonFileStorage>`
//! - Testing: `AthletickApi<InMemoryStorage>`

use crate::commands::{self, CmdMessage, Command, CommandResult};
use crate::error::Result;
use crate::model::{HistoryManager, Model, UserPrefs};
use crate::sample::sample_team;
use crate::store::{TeamData, TeamStorage};

pub struct AthletickApi<S: TeamStorage> {
    model: Model,
    storage: S,
}

impl<S: TeamStorage> AthletickApi<S> {
    /// Wraps an already-built model.
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Reads prefs and team data from `storage`, falling back as described above.
    pub fn load(storage: S, history_limit: usize) -> Result<Self> {
        let prefs = match storage.read_prefs() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => UserPrefs::default(),
            Err(err) => {
                log::warn!("preferences unreadable, using defaults: {err}");
                UserPrefs::default()
            }
        };
        let team = match storage.read_team() {
            Ok(Some(team)) => team,
            Ok(None) => {
                log::info!("no team data found, starting with the sample team");
                sample_team()?
            }
            Err(err) => {
                log::warn!("team data unreadable, starting with an empty team: {err}");
                TeamData::default()
            }
        };
        let model = Model::new(
            team.athletick,
            team.performance,
            team.attendance,
            prefs,
            HistoryManager::with_capacity(history_limit),
        );
        Ok(Self::new(model, storage))
    }

    /// Runs `command` and persists the team data if it changed.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let mut result = commands::execute(&mut self.model, command)?;
        if result.save_needed {
            if let Err(err) = self.storage.save_team(&TeamData::from_model(&self.model)) {
                log::warn!("saving team data failed: {err}");
                result.add_message(CmdMessage::warning(format!(
                    "Could not save data to file: {err}"
                )));
            }
        }
        Ok(result)
    }

    pub fn save_prefs(&mut self) -> Result<()> {
        self.storage.save_prefs(self.model.user_prefs())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Direct model access, e.g. to subscribe to the person list.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
