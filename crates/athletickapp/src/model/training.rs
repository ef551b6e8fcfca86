use super::date::AthletickDate;
use super::person::Person;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub person: Person,
    pub present: bool,
}

/// One training session: the roster expected on a date and who turned up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    date: AthletickDate,
    roster: Vec<AttendanceEntry>,
}

impl Training {
    /// A session for `roster` with everyone marked absent.
    pub fn new(date: AthletickDate, roster: &[Person]) -> Self {
        Self {
            date,
            roster: roster
                .iter()
                .map(|person| AttendanceEntry {
                    person: person.clone(),
                    present: false,
                })
                .collect(),
        }
    }

    pub fn date(&self) -> AthletickDate {
        self.date
    }

    pub fn roster(&self) -> &[AttendanceEntry] {
        &self.roster
    }

    pub fn mark_present(&mut self, person: &Person) -> Result<(), ModelError> {
        let entry = self
            .roster
            .iter_mut()
            .find(|e| e.person.is_same_person(person))
            .ok_or_else(|| ModelError::PersonNotFound(person.name.to_string()))?;
        entry.present = true;
        Ok(())
    }

    /// `None` when the athlete was not on this session's roster.
    pub fn attended(&self, person: &Person) -> Option<bool> {
        self.roster
            .iter()
            .find(|e| e.person.is_same_person(person))
            .map(|e| e.present)
    }

    pub fn present_count(&self) -> usize {
        self.roster.iter().filter(|e| e.present).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceRate {
    pub attended: usize,
    pub total: usize,
}

impl AttendanceRate {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.attended as f64 * 100.0 / self.total as f64
        }
    }
}

/// All training sessions, kept sorted by date with at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Training>", into = "Vec<Training>")]
pub struct Attendance {
    trainings: Vec<Training>,
}

impl Attendance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trainings(&self) -> &[Training] {
        &self.trainings
    }

    pub fn is_empty(&self) -> bool {
        self.trainings.is_empty()
    }

    pub fn has_training(&self, date: &AthletickDate) -> bool {
        self.search(date).is_ok()
    }

    pub fn add_training(&mut self, training: Training) -> Result<(), ModelError> {
        match self.search(&training.date) {
            Ok(_) => Err(ModelError::DuplicateTraining(training.date)),
            Err(slot) => {
                self.trainings.insert(slot, training);
                Ok(())
            }
        }
    }

    pub fn remove_training(&mut self, date: &AthletickDate) -> Result<Training, ModelError> {
        let position = self
            .search(date)
            .map_err(|_| ModelError::TrainingNotFound(*date))?;
        Ok(self.trainings.remove(position))
    }

    pub fn training_on_date(&self, date: &AthletickDate) -> Option<&Training> {
        self.search(date).ok().map(|i| &self.trainings[i])
    }

    /// Attendance flags for a date; empty when there was no session.
    pub fn attendance_on_date(&self, date: &AthletickDate) -> &[AttendanceEntry] {
        self.training_on_date(date)
            .map(Training::roster)
            .unwrap_or(&[])
    }

    /// Sessions the athlete was rostered for, and how many they attended.
    pub fn attendance_rate(&self, person: &Person) -> AttendanceRate {
        self.trainings
            .iter()
            .filter_map(|t| t.attended(person))
            .fold(AttendanceRate::default(), |mut rate, present| {
                rate.total += 1;
                if present {
                    rate.attended += 1;
                }
                rate
            })
    }

    pub fn remove_person(&mut self, person: &Person) {
        for training in &mut self.trainings {
            training.roster.retain(|e| !e.person.is_same_person(person));
        }
    }

    pub fn replace_person(&mut self, target: &Person, edited: &Person) {
        for training in &mut self.trainings {
            for entry in &mut training.roster {
                if entry.person.is_same_person(target) {
                    entry.person = edited.clone();
                }
            }
        }
    }

    pub fn reset_data(&mut self, other: Attendance) {
        self.trainings = other.trainings;
    }

    fn search(&self, date: &AthletickDate) -> Result<usize, usize> {
        self.trainings.binary_search_by(|t| t.date.cmp(date))
    }
}

impl TryFrom<Vec<Training>> for Attendance {
    type Error = ModelError;

    fn try_from(trainings: Vec<Training>) -> Result<Self, Self::Error> {
        let mut attendance = Self::new();
        for training in trainings {
            attendance.add_training(training)?;
        }
        Ok(attendance)
    }
}

impl From<Attendance> for Vec<Training> {
    fn from(attendance: Attendance) -> Self {
        attendance.trainings
    }
}
