use super::{TeamData, TeamStorage};
use crate::error::{AthletickError, Result};
use crate::model::UserPrefs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStorage {
    team_path: PathBuf,
    prefs_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(team_path: PathBuf, prefs_path: PathBuf) -> Self {
        Self {
            team_path,
            prefs_path,
        }
    }

    pub fn team_path(&self) -> &Path {
        &self.team_path
    }

    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    /// Points team data at a new file, e.g. after the prefs name a different one.
    pub fn set_team_path(&mut self, path: PathBuf) {
        self.team_path = path;
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        log::debug!("{} does not exist yet", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(AthletickError::Io)?;
    let value = serde_json::from_str(&content).map_err(AthletickError::Serialization)?;
    Ok(Some(value))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AthletickError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(value).map_err(AthletickError::Serialization)?;
    fs::write(path, content).map_err(AthletickError::Io)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

impl TeamStorage for JsonFileStorage {
    fn read_team(&self) -> Result<Option<TeamData>> {
        read_json(&self.team_path)
    }

    fn save_team(&mut self, data: &TeamData) -> Result<()> {
        write_json(&self.team_path, data)
    }

    fn read_prefs(&self) -> Result<Option<UserPrefs>> {
        read_json(&self.prefs_path)
    }

    fn save_prefs(&mut self, prefs: &UserPrefs) -> Result<()> {
        write_json(&self.prefs_path, prefs)
    }
}
