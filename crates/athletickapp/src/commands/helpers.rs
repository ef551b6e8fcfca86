use super::CommandError;
use crate::error::ModelError;
use crate::model::{Model, Person};
use std::fmt;
use std::str::FromStr;

pub const MESSAGE_INVALID_PERSON_INDEX: &str = "The athlete index provided is invalid";

/// A one-based position in the filtered person list, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(value: usize) -> Result<Self, ModelError> {
        if value == 0 {
            return Err(ModelError::invalid("index", "should be a positive number"));
        }
        Ok(Self(value))
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(value + 1)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl FromStr for Index {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ModelError::invalid("index", format!("`{}` is not a number", s.trim())))?;
        Self::from_one_based(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The athlete at `index` in the list the user is currently looking at.
pub fn person_at(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .cloned()
        .ok_or_else(|| CommandError::new(MESSAGE_INVALID_PERSON_INDEX))
}

/// Resolves every index up front so nothing is touched if one is invalid.
pub fn persons_at(model: &Model, indexes: &[Index]) -> Result<Vec<Person>, CommandError> {
    indexes.iter().map(|i| person_at(model, *i)).collect()
}
