//! # Performance Records
//!
//! Records are grouped under [`Event`]s (e.g. `100m`, `freestyle 50m`). The
//! [`Performance`] store keeps events in the order they were added and, per
//! event, each athlete's records in the order they were logged.
//!
//! ```text
//! Performance
//! ├── Event "100m"
//! │   ├── Alice  → [12.40s on 01 Jan, 12.10s on 08 Jan]
//! │   └── Benson → [11.90s on 01 Jan]
//! └── Event "long jump"
//!     └── Alice  → [5.20 on 08 Jan]
//! ```
//!
//! A record can only be added under an event that already exists; removing an
//! event removes its records with it.

use super::date::AthletickDate;
use super::person::Person;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A named performance category, unique by case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Event {
    name: String,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into().trim().to_lowercase();
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_alphanumeric() || c == ' ' || c == '-')
        {
            return Err(ModelError::invalid(
                "event",
                format!("`{name}` should be non-empty and alphanumeric"),
            ));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches_name(&self, name: &str) -> bool {
        self.name == name.trim().to_lowercase()
    }
}

impl TryFrom<String> for Event {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Event> for String {
    fn from(event: Event) -> Self {
        event.name
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A measurement in hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timing(u32);

impl Timing {
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }
}

impl FromStr for Timing {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('s');
        let seconds: f64 = trimmed
            .parse()
            .map_err(|_| ModelError::invalid("timing", format!("`{trimmed}` is not a number")))?;
        if !seconds.is_finite() || seconds <= 0.0 || seconds > f64::from(u32::MAX) / 100.0 {
            return Err(ModelError::invalid(
                "timing",
                format!("`{trimmed}` should be a positive number of seconds"),
            ));
        }
        let hundredths = (seconds * 100.0).round() as u32;
        if hundredths == 0 {
            return Err(ModelError::invalid(
                "timing",
                format!("`{trimmed}` is below one hundredth of a second"),
            ));
        }
        Ok(Self(hundredths))
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}s", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub timing: Timing,
    pub date: AthletickDate,
}

impl Record {
    pub fn new(timing: Timing, date: AthletickDate) -> Self {
        Self { timing, date }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.timing, self.date)
    }
}

/// A record flattened for date-based views, carrying its athlete along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCompatibleRecord {
    pub person: Person,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecords {
    pub person: Person,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecords {
    pub event: Event,
    #[serde(default)]
    pub athletes: Vec<PersonRecords>,
}

impl EventRecords {
    fn new(event: Event) -> Self {
        Self {
            event,
            athletes: Vec::new(),
        }
    }

    fn records_of_mut(&mut self, person: &Person) -> &mut Vec<Record> {
        let position = match self
            .athletes
            .iter()
            .position(|entry| entry.person.is_same_person(person))
        {
            Some(position) => position,
            None => {
                self.athletes.push(PersonRecords {
                    person: person.clone(),
                    records: Vec::new(),
                });
                self.athletes.len() - 1
            }
        };
        &mut self.athletes[position].records
    }
}

/// The event/record directory. Event names are unique ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EventRecords>", into = "Vec<EventRecords>")]
pub struct Performance {
    events: Vec<EventRecords>,
}

impl Performance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().map(|entry| &entry.event)
    }

    pub fn event_records(&self) -> &[EventRecords] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.event_named(event.name()).is_some()
    }

    pub fn event_named(&self, name: &str) -> Option<&EventRecords> {
        self.events.iter().find(|entry| entry.event.matches_name(name))
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        if self.has_event(&event) {
            return Err(ModelError::DuplicateEvent(event.name().to_string()));
        }
        self.events.push(EventRecords::new(event));
        Ok(())
    }

    /// Removes an event together with every record filed under it.
    pub fn remove_event(&mut self, name: &str) -> Result<EventRecords, ModelError> {
        let position = self
            .events
            .iter()
            .position(|entry| entry.event.matches_name(name))
            .ok_or_else(|| ModelError::EventNotFound(name.trim().to_string()))?;
        Ok(self.events.remove(position))
    }

    pub fn add_record(
        &mut self,
        event_name: &str,
        person: &Person,
        record: Record,
    ) -> Result<(), ModelError> {
        let entry = self
            .events
            .iter_mut()
            .find(|entry| entry.event.matches_name(event_name))
            .ok_or_else(|| ModelError::EventNotFound(event_name.trim().to_string()))?;
        entry.records_of_mut(person).push(record);
        Ok(())
    }

    /// All records an athlete holds under one event, oldest first.
    pub fn records_of(&self, event_name: &str, person: &Person) -> &[Record] {
        self.event_named(event_name)
            .and_then(|entry| {
                entry
                    .athletes
                    .iter()
                    .find(|a| a.person.is_same_person(person))
            })
            .map(|a| a.records.as_slice())
            .unwrap_or(&[])
    }

    /// Drops every record belonging to `person`. Returns how many were removed.
    pub fn remove_person(&mut self, person: &Person) -> usize {
        let mut removed = 0;
        for entry in &mut self.events {
            entry.athletes.retain(|a| {
                let keep = !a.person.is_same_person(person);
                if !keep {
                    removed += a.records.len();
                }
                keep
            });
        }
        removed
    }

    /// Re-files `target`'s records under `edited`.
    pub fn replace_person(&mut self, target: &Person, edited: &Person) {
        for entry in &mut self.events {
            for athlete in &mut entry.athletes {
                if athlete.person.is_same_person(target) {
                    athlete.person = edited.clone();
                }
            }
        }
    }

    /// Records logged on `date`, grouped by event. Empty when nothing matches.
    pub fn calendar_compatible_records(
        &self,
        date: &AthletickDate,
    ) -> BTreeMap<Event, Vec<CalendarCompatibleRecord>> {
        let mut projection = BTreeMap::new();
        for entry in &self.events {
            let on_date: Vec<CalendarCompatibleRecord> = entry
                .athletes
                .iter()
                .flat_map(|a| {
                    a.records
                        .iter()
                        .filter(|r| r.date == *date)
                        .map(|r| CalendarCompatibleRecord {
                            person: a.person.clone(),
                            record: r.clone(),
                        })
                })
                .collect();
            if !on_date.is_empty() {
                projection.insert(entry.event.clone(), on_date);
            }
        }
        projection
    }

    pub fn has_performance_on(&self, date: &AthletickDate) -> bool {
        self.events
            .iter()
            .flat_map(|entry| &entry.athletes)
            .flat_map(|a| &a.records)
            .any(|r| r.date == *date)
    }

    pub fn reset_data(&mut self, other: Performance) {
        self.events = other.events;
    }
}

impl TryFrom<Vec<EventRecords>> for Performance {
    type Error = ModelError;

    fn try_from(events: Vec<EventRecords>) -> Result<Self, Self::Error> {
        let mut performance = Performance::new();
        for entry in events {
            if performance.has_event(&entry.event) {
                return Err(ModelError::DuplicateEvent(entry.event.name().to_string()));
            }
            performance.events.push(entry);
        }
        Ok(performance)
    }
}

impl From<Performance> for Vec<EventRecords> {
    fn from(performance: Performance) -> Self {
        performance.events
    }
}
