use super::{TeamData, TeamStorage};
use crate::error::{AthletickError, Result};
use crate::model::UserPrefs;

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    team: Option<TeamData>,
    prefs: Option<UserPrefs>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: TeamData) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_prefs(mut self, prefs: UserPrefs) -> Self {
        self.prefs = Some(prefs);
        self
    }

    /// Makes every subsequent save fail, as a full disk would.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn team(&self) -> Option<&TeamData> {
        self.team.as_ref()
    }

    /// Number of successful team saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl TeamStorage for InMemoryStorage {
    fn read_team(&self) -> Result<Option<TeamData>> {
        Ok(self.team.clone())
    }

    fn save_team(&mut self, data: &TeamData) -> Result<()> {
        if self.fail_saves {
            return Err(AthletickError::Store("storage is unavailable".to_string()));
        }
        self.team = Some(data.clone());
        self.save_count += 1;
        Ok(())
    }

    fn read_prefs(&self) -> Result<Option<UserPrefs>> {
        Ok(self.prefs.clone())
    }

    fn save_prefs(&mut self, prefs: &UserPrefs) -> Result<()> {
        if self.fail_saves {
            return Err(AthletickError::Store("storage is unavailable".to_string()));
        }
        self.prefs = Some(prefs.clone());
        Ok(())
    }
}
