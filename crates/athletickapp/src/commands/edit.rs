use super::helpers::{person_at, Index};
use super::{CmdResult, CommandError, CommandResult};
use crate::model::{Address, Email, Gender, Model, Name, Person, Phone, Tag, YearJoined};
use std::collections::BTreeSet;

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Fields to overwrite on an athlete; `None` keeps the current value.
///
/// `tags: Some(empty)` clears every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub gender: Option<Gender>,
    pub year_joined: Option<YearJoined>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.gender.is_some()
            || self.year_joined.is_some()
            || self.tags.is_some()
    }

    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name.clone()),
            self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            self.email.clone().unwrap_or_else(|| person.email.clone()),
            self.address.clone().unwrap_or_else(|| person.address.clone()),
            self.gender.unwrap_or(person.gender),
            self.year_joined.unwrap_or(person.year_joined),
            self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        )
    }
}

/// Replaces the athlete at `index` and re-files their records and attendance
/// under the edited athlete.
pub fn run(model: &mut Model, index: Index, descriptor: EditPersonDescriptor) -> CommandResult {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::new(MESSAGE_NOT_EDITED));
    }
    let target = person_at(model, index)?;
    let edited = descriptor.apply(&target);
    let was_selected = model
        .select_person()
        .is_some_and(|selected| selected.is_same_person(&target));
    model.set_person(&target, edited.clone())?;
    model.replace_person_records(&target, &edited);
    model.replace_person_attendance(&target, &edited);
    if was_selected {
        model.store_person(edited.clone());
    }
    Ok(CmdResult::changed(format!("Edited Athlete: {edited}")).with_affected_persons(vec![edited]))
}
