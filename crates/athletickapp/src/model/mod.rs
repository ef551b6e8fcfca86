//! # Domain Model
//!
//! The model layer owns the team's state and is the only code that mutates it.
//!
//! ```text
//! Model
//! ├── Athletick    ordered, identity-unique athletes
//! ├── Performance  events → per-athlete records
//! ├── Attendance   training sessions keyed by date
//! ├── UserPrefs    window geometry, data file path
//! ├── FilteredPersonList  the view frontends render, with listeners
//! └── HistoryManager      snapshot-based undo/redo
//! ```
//!
//! Each store validates before it applies, so an operation that returns an
//! error has changed nothing. Operations that span stores (deleting an athlete
//! together with their records, clearing everything) are composed by the
//! command layer; the model keeps each store's operations independent.

mod athletick;
mod date;
mod filter;
mod history;
mod manager;
mod performance;
mod person;
mod prefs;
mod training;

pub use athletick::Athletick;
pub use date::{AthletickDate, INPUT_FORMAT};
pub use filter::{
    ChangeKind, FilteredPersonList, ListenerId, PersonFilter, PersonListChange, PersonListListener,
};
pub use history::{HistoryEntry, HistoryManager, Snapshot, DEFAULT_MAX_HISTORY};
pub use manager::Model;
pub use performance::{
    CalendarCompatibleRecord, Event, EventRecords, Performance, PersonRecords, Record, Timing,
};
pub use person::{Address, Email, Gender, Name, Person, Phone, Tag, YearJoined};
pub use prefs::{GuiSettings, UserPrefs};
pub use training::{Attendance, AttendanceEntry, AttendanceRate, Training};

/// Ready-made athletes and builders for tests.
#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::BTreeSet;

    /// Builds a valid [`Person`], deriving contact details from the name so
    /// that two builders started from the same name share an identity.
    pub struct PersonBuilder {
        name: String,
        phone: String,
        email: String,
        address: String,
        gender: Gender,
        year_joined: u16,
        tags: Vec<String>,
    }

    impl PersonBuilder {
        pub fn new(name: &str) -> Self {
            let slug: String = name
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            let digits: u32 = name.bytes().map(u32::from).sum();
            Self {
                name: name.to_string(),
                phone: format!("9{:07}", digits),
                email: format!("{slug}@example.com"),
                address: "123 Jurong West Ave 6".to_string(),
                gender: Gender::Female,
                year_joined: 2019,
                tags: Vec::new(),
            }
        }

        pub fn name(mut self, name: &str) -> Self {
            self.name = name.to_string();
            self
        }

        pub fn phone(mut self, phone: &str) -> Self {
            self.phone = phone.to_string();
            self
        }

        pub fn email(mut self, email: &str) -> Self {
            self.email = email.to_string();
            self
        }

        pub fn address(mut self, address: &str) -> Self {
            self.address = address.to_string();
            self
        }

        pub fn gender(mut self, gender: Gender) -> Self {
            self.gender = gender;
            self
        }

        pub fn year_joined(mut self, year: u16) -> Self {
            self.year_joined = year;
            self
        }

        pub fn tag(mut self, tag: &str) -> Self {
            self.tags.push(tag.to_string());
            self
        }

        pub fn build(self) -> Person {
            let tags: BTreeSet<Tag> = self
                .tags
                .into_iter()
                .map(|t| Tag::new(t).expect("fixture tag"))
                .collect();
            Person::new(
                Name::new(self.name).expect("fixture name"),
                Phone::new(self.phone).expect("fixture phone"),
                Email::new(self.email).expect("fixture email"),
                Address::new(self.address).expect("fixture address"),
                self.gender,
                YearJoined::new(self.year_joined).expect("fixture year"),
                tags,
            )
        }
    }

    pub fn alice() -> Person {
        PersonBuilder::new("Alice Pauline")
            .tag("captain")
            .build()
    }

    pub fn benson() -> Person {
        PersonBuilder::new("Benson Meier")
            .address("311 Clementi Ave 2")
            .gender(Gender::Male)
            .year_joined(2018)
            .build()
    }

    pub fn carl() -> Person {
        PersonBuilder::new("Carl Kurz")
            .address("wall street")
            .gender(Gender::Male)
            .year_joined(2020)
            .build()
    }

    /// Parses a `ddMMyyyy` date.
    pub fn date(input: &str) -> AthletickDate {
        input.parse().expect("fixture date")
    }

    pub fn record(timing: &str, on: &str) -> Record {
        Record::new(timing.parse().expect("fixture timing"), date(on))
    }

    /// Builds a [`Model`] with preset athletes and events and empty history.
    #[derive(Default)]
    pub struct ModelFixture {
        persons: Vec<Person>,
        events: Vec<String>,
        history_limit: Option<usize>,
    }

    impl ModelFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_persons(mut self, persons: &[Person]) -> Self {
            self.persons.extend_from_slice(persons);
            self
        }

        pub fn with_event(mut self, name: &str) -> Self {
            self.events.push(name.to_string());
            self
        }

        pub fn with_history_limit(mut self, limit: usize) -> Self {
            self.history_limit = Some(limit);
            self
        }

        pub fn build(self) -> Model {
            let athletick = Athletick::from_persons(self.persons).expect("fixture athletes");
            let mut performance = Performance::new();
            for name in self.events {
                performance
                    .add_event(Event::new(name).expect("fixture event"))
                    .expect("unique fixture event");
            }
            let history = self
                .history_limit
                .map(HistoryManager::with_capacity)
                .unwrap_or_default();
            Model::new(
                athletick,
                performance,
                Attendance::new(),
                UserPrefs::default(),
                history,
            )
        }
    }
}
