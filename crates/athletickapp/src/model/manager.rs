use super::athletick::Athletick;
use super::date::AthletickDate;
use super::filter::{FilteredPersonList, ListenerId, PersonFilter, PersonListListener};
use super::history::{HistoryManager, Snapshot};
use super::performance::{CalendarCompatibleRecord, Event, Performance, Record};
use super::person::Person;
use super::prefs::{GuiSettings, UserPrefs};
use super::training::{Attendance, AttendanceEntry, AttendanceRate, Training};
use crate::error::ModelError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The in-memory team state and its undo/redo history.
///
/// `Model` is the only place domain state changes. Commands borrow it
/// mutably for the duration of one execution; frontends read it through the
/// accessor methods and the filtered person list.
#[derive(Debug)]
pub struct Model {
    athletick: Athletick,
    performance: Performance,
    attendance: Attendance,
    user_prefs: UserPrefs,
    filtered_persons: FilteredPersonList,
    selected_person: Option<Person>,
    history: HistoryManager,
}

impl Model {
    pub fn new(
        athletick: Athletick,
        performance: Performance,
        attendance: Attendance,
        user_prefs: UserPrefs,
        history: HistoryManager,
    ) -> Self {
        let filtered_persons = FilteredPersonList::new(athletick.persons());
        log::debug!(
            "model initialised with {} athletes, {} events, {} trainings",
            athletick.len(),
            performance.events().count(),
            attendance.trainings().len()
        );
        Self {
            athletick,
            performance,
            attendance,
            user_prefs,
            filtered_persons,
            selected_person: None,
            history,
        }
    }

    // --- User prefs ---

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.gui_settings = gui_settings;
    }

    pub fn athletick_file_path(&self) -> &Path {
        &self.user_prefs.athletick_file_path
    }

    pub fn set_athletick_file_path(&mut self, path: PathBuf) {
        self.user_prefs.athletick_file_path = path;
    }

    // --- Athletick ---

    /// Replaces the athlete directory wholesale. Records and trainings are not
    /// checked against the new directory.
    pub fn set_athletick(&mut self, athletick: Athletick) {
        self.athletick.reset_data(athletick);
        self.after_athletick_change();
    }

    pub fn athletick(&self) -> &Athletick {
        &self.athletick
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.athletick.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        log::debug!("adding athlete {}", person.name);
        self.athletick.add_person(person)?;
        self.after_athletick_change();
        Ok(())
    }

    /// Removes `target` from the directory only; see `delete_person_records`
    /// and `Attendance::remove_person` for the dependent data.
    pub fn delete_person(&mut self, target: &Person) -> Result<Person, ModelError> {
        log::debug!("deleting athlete {}", target.name);
        let removed = self.athletick.remove_person(target)?;
        self.after_athletick_change();
        Ok(removed)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        log::debug!("editing athlete {} -> {}", target.name, edited.name);
        self.athletick.set_person(target, edited)?;
        self.after_athletick_change();
        Ok(())
    }

    pub fn sort_athletick_by_name(&mut self) {
        self.athletick.sort_by_name();
        self.after_athletick_change();
    }

    /// The athlete last stored for the detail view, if still in the directory.
    pub fn select_person(&self) -> Option<&Person> {
        self.selected_person.as_ref()
    }

    pub fn store_person(&mut self, person: Person) {
        self.selected_person = Some(person);
    }

    // --- Filtered view ---

    pub fn filtered_person_list(&self) -> &[Person] {
        self.filtered_persons.items()
    }

    pub fn person_filter(&self) -> &PersonFilter {
        self.filtered_persons.filter()
    }

    pub fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.filtered_persons
            .set_filter(filter, self.athletick.persons());
    }

    pub fn subscribe(&mut self, listener: PersonListListener) -> ListenerId {
        self.filtered_persons.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.filtered_persons.unsubscribe(id)
    }

    // --- Training ---

    pub fn set_attendance(&mut self, attendance: Attendance) {
        self.attendance.reset_data(attendance);
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    pub fn add_training(&mut self, training: Training) -> Result<(), ModelError> {
        log::debug!("adding training on {}", training.date());
        self.attendance.add_training(training)
    }

    pub fn delete_training(&mut self, date: &AthletickDate) -> Result<Training, ModelError> {
        log::debug!("deleting training on {date}");
        self.attendance.remove_training(date)
    }

    pub fn has_training(&self, date: &AthletickDate) -> bool {
        self.attendance.has_training(date)
    }

    pub fn training_on_date(&self, date: &AthletickDate) -> Option<&Training> {
        self.attendance.training_on_date(date)
    }

    pub fn training_attendance_on_date(&self, date: &AthletickDate) -> &[AttendanceEntry] {
        self.attendance.attendance_on_date(date)
    }

    pub fn attendance_rate(&self, person: &Person) -> AttendanceRate {
        self.attendance.attendance_rate(person)
    }

    pub fn delete_person_attendance(&mut self, person: &Person) {
        self.attendance.remove_person(person);
    }

    pub fn replace_person_attendance(&mut self, target: &Person, edited: &Person) {
        self.attendance.replace_person(target, edited);
    }

    // --- Performance ---

    /// Replaces the event/record directory wholesale.
    pub fn set_performance(&mut self, performance: Performance) {
        self.performance.reset_data(performance);
    }

    pub fn performance(&self) -> &Performance {
        &self.performance
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        log::debug!("adding event {event}");
        self.performance.add_event(event)
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.performance.has_event(event)
    }

    pub fn delete_event(&mut self, name: &str) -> Result<(), ModelError> {
        log::debug!("deleting event {}", name.trim());
        self.performance.remove_event(name).map(|_| ())
    }

    /// Files `record` under `event_name` for `person`.
    ///
    /// Fails with `EventNotFound` for an unknown event and `PersonNotFound`
    /// when the athlete is not in the directory; nothing changes on failure.
    pub fn add_record(
        &mut self,
        event_name: &str,
        person: &Person,
        record: Record,
    ) -> Result<(), ModelError> {
        if self.performance.event_named(event_name).is_none() {
            return Err(ModelError::EventNotFound(event_name.trim().to_string()));
        }
        if !self.athletick.has_person(person) {
            return Err(ModelError::PersonNotFound(person.name.to_string()));
        }
        log::debug!("adding {record} for {} under {}", person.name, event_name.trim());
        self.performance.add_record(event_name, person, record)
    }

    pub fn delete_person_records(&mut self, person: &Person) -> usize {
        self.performance.remove_person(person)
    }

    pub fn replace_person_records(&mut self, target: &Person, edited: &Person) {
        self.performance.replace_person(target, edited);
    }

    pub fn calendar_compatible_performance(
        &self,
        date: &AthletickDate,
    ) -> BTreeMap<Event, Vec<CalendarCompatibleRecord>> {
        self.performance.calendar_compatible_records(date)
    }

    pub fn has_performance_on(&self, date: &AthletickDate) -> bool {
        self.performance.has_performance_on(date)
    }

    // --- History ---

    /// Deep copy of every store.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.athletick.clone(),
            self.performance.clone(),
            self.attendance.clone(),
        )
    }

    /// Replaces every store with the snapshot's contents.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let (athletick, performance, attendance) = snapshot.into_parts();
        self.athletick.reset_data(athletick);
        self.performance.reset_data(performance);
        self.attendance.reset_data(attendance);
        self.after_athletick_change();
    }

    /// Records `before` as the state preceding a successful undoable command.
    pub fn commit(&mut self, description: impl Into<String>, before: Snapshot) {
        let description = description.into();
        log::info!("committed: {description}");
        self.history.record(description, before);
    }

    /// Steps back one command. Returns its description, or `None` (leaving
    /// everything untouched) when there is nothing to undo.
    pub fn undo(&mut self) -> Option<String> {
        if !self.history.can_undo() {
            log::debug!("undo requested with empty history");
            return None;
        }
        let current = self.snapshot();
        let entry = self.history.undo(current)?;
        log::info!("undo: {}", entry.description);
        self.restore(entry.snapshot);
        Some(entry.description)
    }

    /// Re-applies the last undone command; `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<String> {
        if !self.history.can_redo() {
            log::debug!("redo requested with empty history");
            return None;
        }
        let current = self.snapshot();
        let entry = self.history.redo(current)?;
        log::info!("redo: {}", entry.description);
        self.restore(entry.snapshot);
        Some(entry.description)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    /// Re-binds the selection to the live directory entry, or drops it.
    fn after_athletick_change(&mut self) {
        if let Some(selected) = self.selected_person.take() {
            self.selected_person = self
                .athletick
                .persons()
                .iter()
                .find(|p| p.is_same_person(&selected))
                .cloned();
        }
        self.filtered_persons.refresh(self.athletick.persons());
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(
            Athletick::new(),
            Performance::new(),
            Attendance::new(),
            UserPrefs::default(),
            HistoryManager::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::ChangeKind;
    use crate::model::fixtures::{alice, benson, carl, date, record, ModelFixture, PersonBuilder};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn add_person_twice_fails_and_keeps_size() {
        let mut model = Model::default();
        model.add_person(alice()).unwrap();
        let err = model.add_person(alice()).unwrap_err();
        assert_eq!(err, ModelError::DuplicatePerson("Alice Pauline".into()));
        assert_eq!(model.athletick().len(), 1);
        assert!(model.has_person(&alice()));
    }

    #[test]
    fn delete_missing_person_fails() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        assert!(matches!(
            model.delete_person(&benson()),
            Err(ModelError::PersonNotFound(_))
        ));
    }

    #[test]
    fn delete_person_leaves_records_in_place() {
        let mut model = ModelFixture::new()
            .with_persons(&[alice()])
            .with_event("100m")
            .build();
        model
            .add_record("100m", &alice(), record("12.00", "01012020"))
            .unwrap();
        model.delete_person(&alice()).unwrap();
        assert_eq!(model.performance().records_of("100m", &alice()).len(), 1);
    }

    #[test]
    fn set_person_errors() {
        let mut model = ModelFixture::new().with_persons(&[alice(), benson()]).build();
        assert!(matches!(
            model.set_person(&carl(), carl()),
            Err(ModelError::PersonNotFound(_))
        ));
        assert!(matches!(
            model.set_person(&alice(), benson()),
            Err(ModelError::DuplicatePerson(_))
        ));
    }

    #[test]
    fn add_record_validates_event_and_person() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let before = model.performance().clone();
        assert_eq!(
            model
                .add_record("100m", &alice(), record("12.00", "01012020"))
                .unwrap_err(),
            ModelError::EventNotFound("100m".into())
        );
        assert_eq!(model.performance(), &before);

        assert_eq!(
            model
                .add_record("100m", &benson(), record("12.00", "01012020"))
                .unwrap_err(),
            ModelError::EventNotFound("100m".into())
        );

        model.add_event(Event::new("100m").unwrap()).unwrap();
        assert!(matches!(
            model.add_record("100m", &benson(), record("12.00", "01012020")),
            Err(ModelError::PersonNotFound(_))
        ));
    }

    #[test]
    fn duplicate_training_is_an_error() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let training = Training::new(date("01012020"), model.athletick().persons());
        model.add_training(training.clone()).unwrap();
        assert_eq!(
            model.add_training(training).unwrap_err(),
            ModelError::DuplicateTraining(date("01012020"))
        );
        assert!(model.has_training(&date("01012020")));
        assert!(model.training_on_date(&date("02012020")).is_none());
        assert!(model.training_attendance_on_date(&date("02012020")).is_empty());
    }

    #[test]
    fn calendar_performance_on_empty_date_is_empty() {
        let model = ModelFixture::new()
            .with_persons(&[alice()])
            .with_event("100m")
            .build();
        assert!(model
            .calendar_compatible_performance(&date("01012020"))
            .is_empty());
    }

    #[test]
    fn undo_restores_previous_state_and_redo_reapplies() {
        let mut model = Model::default();
        let before = model.snapshot();
        model.add_person(alice()).unwrap();
        model.commit("add Alice Pauline", before);

        let after_add = model.snapshot();
        assert_eq!(model.undo().as_deref(), Some("add Alice Pauline"));
        assert!(model.athletick().is_empty());
        assert_eq!(model.redo().as_deref(), Some("add Alice Pauline"));
        assert_eq!(model.snapshot(), after_add);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let before = model.snapshot();
        assert!(model.undo().is_none());
        assert!(model.redo().is_none());
        assert_eq!(model.snapshot(), before);
    }

    #[test]
    fn snapshot_does_not_alias_live_state() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let snapshot = model.snapshot();
        model.add_person(benson()).unwrap();
        assert_eq!(snapshot.athletick().len(), 1);
    }

    #[test]
    fn listeners_observe_every_change_in_order() {
        let mut model = Model::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        model.subscribe(Box::new(move |change| sink.borrow_mut().push(change.clone())));

        model.add_person(benson()).unwrap();
        model.add_person(alice()).unwrap();
        model.sort_athletick_by_name();
        model.delete_person(&benson()).unwrap();

        let kinds: Vec<ChangeKind> = seen.borrow().iter().map(|c| c.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Added {
                    index: 0,
                    person: benson()
                },
                ChangeKind::Added {
                    index: 1,
                    person: alice()
                },
                ChangeKind::Reset { len: 2 },
                ChangeKind::Removed {
                    index: 1,
                    person: benson()
                },
            ]
        );
    }

    #[test]
    fn filtered_list_follows_filter_and_mutations() {
        let mut model = ModelFixture::new()
            .with_persons(&[alice(), benson()])
            .build();
        model.update_filtered_person_list(PersonFilter::name_keywords(["carl"]));
        assert!(model.filtered_person_list().is_empty());
        model.add_person(carl()).unwrap();
        assert_eq!(model.filtered_person_list(), &[carl()]);
        model.update_filtered_person_list(PersonFilter::All);
        assert_eq!(model.filtered_person_list().len(), 3);
    }

    #[test]
    fn selection_is_cleared_when_athlete_leaves() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        model.store_person(alice());
        assert_eq!(model.select_person(), Some(&alice()));
        model.delete_person(&alice()).unwrap();
        assert!(model.select_person().is_none());
    }

    #[test]
    fn sort_reorders_without_mutating_entities() {
        let mut model = ModelFixture::new()
            .with_persons(&[carl(), alice(), benson()])
            .build();
        model.sort_athletick_by_name();
        assert_eq!(model.athletick().persons(), &[alice(), benson(), carl()]);
    }

    #[test]
    fn prefs_accessors() {
        let mut model = Model::default();
        model.set_athletick_file_path(PathBuf::from("team.json"));
        assert_eq!(model.athletick_file_path(), Path::new("team.json"));
        let settings = GuiSettings {
            window_width: 1024.0,
            ..GuiSettings::default()
        };
        model.set_gui_settings(settings);
        assert_eq!(model.gui_settings().window_width, 1024.0);
        assert_eq!(model.user_prefs().athletick_file_path, PathBuf::from("team.json"));
    }

    #[test]
    fn edited_person_keeps_identity_for_attendance_rate() {
        let mut model = ModelFixture::new().with_persons(&[alice()]).build();
        let mut training = Training::new(date("01012020"), model.athletick().persons());
        training.mark_present(&alice()).unwrap();
        model.add_training(training).unwrap();

        let edited = PersonBuilder::new("Alice Pauline").address("New home").build();
        model.set_person(&alice(), edited.clone()).unwrap();
        model.replace_person_attendance(&alice(), &edited);
        assert_eq!(model.attendance_rate(&edited).attended, 1);
    }
}
