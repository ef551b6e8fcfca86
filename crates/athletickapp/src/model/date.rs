use crate::error::ModelError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input format accepted from users: `ddMMyyyy`, e.g. `01012020`.
pub const INPUT_FORMAT: &str = "%d%m%Y";
const DISPLAY_FORMAT: &str = "%d %B %Y";

/// A calendar day used to key training sessions and date performance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AthletickDate(NaiveDate);

impl AthletickDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ModelError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ModelError::invalid("date", format!("{day:02}/{month:02}/{year}")))
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Formats the date the way users type it (`ddMMyyyy`).
    pub fn to_input_string(&self) -> String {
        self.0.format(INPUT_FORMAT).to_string()
    }
}

impl fmt::Display for AthletickDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for AthletickDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 8 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ModelError::invalid(
                "date",
                format!("`{trimmed}` should be in ddMMyyyy format"),
            ));
        }
        NaiveDate::parse_from_str(trimmed, INPUT_FORMAT)
            .map(Self)
            .map_err(|_| ModelError::invalid("date", format!("`{trimmed}` is not a calendar day")))
    }
}
