use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

fn default_athletick_file_path() -> PathBuf {
    PathBuf::from("data").join("athletick.json")
}

/// Window geometry a frontend can restore on the next start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// Top-left corner, `None` to let the frontend center the window.
    #[serde(default)]
    pub window_coordinates: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_coordinates: None,
        }
    }
}

/// Per-user preferences, persisted apart from the team data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub gui_settings: GuiSettings,
    #[serde(default = "default_athletick_file_path")]
    pub athletick_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            athletick_file_path: default_athletick_file_path(),
        }
    }
}
