use super::person::Person;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// The athlete directory.
///
/// An ordered list in which no two athletes share an identity (see
/// [`Person::is_same_person`]). Iteration order is insertion order until
/// [`Athletick::sort_by_name`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Person>", into = "Vec<Person>")]
pub struct Athletick {
    persons: Vec<Person>,
}

impl Athletick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a list, rejecting identity duplicates.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, ModelError> {
        let mut athletick = Self::new();
        for person in persons {
            athletick.add_person(person)?;
        }
        Ok(athletick)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson(person.name.to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, ModelError> {
        let position = self.position_of(target)?;
        Ok(self.persons.remove(position))
    }

    /// Replaces `target` with `edited` in place, keeping its position.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let position = self.position_of(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if collides {
            return Err(ModelError::DuplicatePerson(edited.name.to_string()));
        }
        self.persons[position] = edited;
        Ok(())
    }

    /// Case-insensitive order by name; exact name breaks ties so the order is total.
    pub fn sort_by_name(&mut self) {
        self.persons.sort_by(|a, b| {
            let left = a.name.as_str();
            let right = b.name.as_str();
            left.to_lowercase()
                .cmp(&right.to_lowercase())
                .then_with(|| left.cmp(right))
        });
    }

    /// Replaces the whole contents with `other`.
    pub fn reset_data(&mut self, other: Athletick) {
        self.persons = other.persons;
    }

    fn position_of(&self, target: &Person) -> Result<usize, ModelError> {
        self.persons
            .iter()
            .position(|p| p.is_same_person(target))
            .ok_or_else(|| ModelError::PersonNotFound(target.name.to_string()))
    }
}

impl TryFrom<Vec<Person>> for Athletick {
    type Error = ModelError;

    fn try_from(persons: Vec<Person>) -> Result<Self, Self::Error> {
        Self::from_persons(persons)
    }
}

impl From<Athletick> for Vec<Person> {
    fn from(athletick: Athletick) -> Self {
        athletick.persons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{alice, benson, carl, PersonBuilder};

    #[test]
    fn add_rejects_identity_duplicate() {
        let mut athletick = Athletick::new();
        athletick.add_person(alice()).unwrap();

        let same_identity = PersonBuilder::new("Alice Pauline")
            .address("Elsewhere")
            .build();
        let err = athletick.add_person(same_identity).unwrap_err();
        assert_eq!(err, ModelError::DuplicatePerson("Alice Pauline".into()));
        assert_eq!(athletick.len(), 1);
    }

    #[test]
    fn remove_missing_person_fails() {
        let mut athletick = Athletick::new();
        athletick.add_person(alice()).unwrap();
        let err = athletick.remove_person(&benson()).unwrap_err();
        assert!(matches!(err, ModelError::PersonNotFound(_)));
        assert_eq!(athletick.len(), 1);
    }

    #[test]
    fn set_person_keeps_position() {
        let mut athletick = Athletick::from_persons(vec![alice(), benson(), carl()]).unwrap();
        let edited = PersonBuilder::new("Benson Meier").address("New Street 1").build();
        athletick.set_person(&benson(), edited.clone()).unwrap();
        assert_eq!(athletick.persons()[1], edited);
    }

    #[test]
    fn set_person_allows_same_identity() {
        let mut athletick = Athletick::from_persons(vec![alice()]).unwrap();
        let edited = PersonBuilder::new("Alice Pauline").tag("captain").build();
        assert!(athletick.set_person(&alice(), edited).is_ok());
    }

    #[test]
    fn set_person_rejects_collision_with_other() {
        let mut athletick = Athletick::from_persons(vec![alice(), benson()]).unwrap();
        let err = athletick.set_person(&alice(), benson()).unwrap_err();
        assert!(matches!(err, ModelError::DuplicatePerson(_)));
        assert_eq!(athletick.persons()[0], alice());
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut athletick = Athletick::from_persons(vec![
            PersonBuilder::new("carl Kurz").build(),
            PersonBuilder::new("Benson Meier").build(),
            PersonBuilder::new("alice Pauline").build(),
        ])
        .unwrap();
        athletick.sort_by_name();
        let names: Vec<&str> = athletick.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice Pauline", "Benson Meier", "carl Kurz"]);
    }

    #[test]
    fn deserializing_duplicates_fails() {
        let json = serde_json::to_string(&vec![alice(), alice()]).unwrap();
        assert!(serde_json::from_str::<Athletick>(&json).is_err());
    }
}
