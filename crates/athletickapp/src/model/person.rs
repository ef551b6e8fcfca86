//! # Athletes
//!
//! A [`Person`] is one tracked team member. Every field is a small validated
//! newtype, so a `Person` value in the model is always well-formed, including
//! ones read back from disk (deserialization runs the same checks).
//!
//! ## Identity vs. Equality
//!
//! Two notions of sameness exist and they are deliberately different:
//!
//! - **Identity** ([`Person::is_same_person`]): same name, and the same phone
//!   or the same email. The directory never holds two identity-equal athletes.
//! - **Equality** (`==`): every field matches. Used for snapshot comparison.
//!
//! Editing an athlete's address keeps its identity; changing both phone and
//! email while keeping the name does not.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

macro_rules! text_field {
    ($(#[$meta:meta])* $ty:ident, $field:literal, $check:expr, $hint:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
                let value = value.into().trim().to_string();
                let check: fn(&str) -> bool = $check;
                if check(&value) {
                    Ok(Self(value))
                } else {
                    Err(ModelError::invalid($field, format!("`{}` {}", value, $hint)))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    /// Full name; letters, digits and spaces only.
    Name,
    "name",
    |s| !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == ' '),
    "should only contain alphanumeric characters and spaces"
);

text_field!(
    /// Phone number of at least three digits.
    Phone,
    "phone",
    |s| s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit()),
    "should only contain digits and be at least 3 digits long"
);

text_field!(
    /// Email address of the form `local@domain`.
    Email,
    "email",
    |s| match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.len() >= 2
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    },
    "should be of the format local-part@domain"
);

text_field!(
    /// Postal address; any non-blank text.
    Address,
    "address",
    |s| !s.is_empty(),
    "can take any value but should not be blank"
);

text_field!(
    /// A free-form label, e.g. `captain` or `sprinter`.
    Tag,
    "tag",
    |s| !s.is_empty() && s.chars().all(char::is_alphanumeric),
    "should be alphanumeric"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(ModelError::invalid(
                "gender",
                format!("`{other}` should be either male or female"),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// Year the athlete joined the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct YearJoined(u16);

impl YearJoined {
    pub const EARLIEST: u16 = 1900;

    pub fn new(year: u16) -> Result<Self, ModelError> {
        if (Self::EARLIEST..=9999).contains(&year) {
            Ok(Self(year))
        } else {
            Err(ModelError::invalid(
                "year joined",
                format!("`{year}` should be a four digit year from {}", Self::EARLIEST),
            ))
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for YearJoined {
    type Error = ModelError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YearJoined> for u16 {
    fn from(value: YearJoined) -> Self {
        value.0
    }
}

impl FromStr for YearJoined {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s.trim().parse::<u16>().map_err(|_| {
            ModelError::invalid("year joined", format!("`{}` is not a year", s.trim()))
        })?;
        Self::new(year)
    }
}

impl fmt::Display for YearJoined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub gender: Gender,
    pub year_joined: YearJoined,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        gender: Gender,
        year_joined: YearJoined,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            gender,
            year_joined,
            tags,
        }
    }

    /// Identity equality: same name plus a shared phone or email.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Gender: {} Year joined: {}",
            self.name, self.phone, self.email, self.address, self.gender, self.year_joined
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, " Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::PersonBuilder;

    #[test]
    fn name_rejects_symbols() {
        assert!(Name::new("Alice Pauline").is_ok());
        assert!(Name::new("R@chel").is_err());
        assert!(Name::new("   ").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9011p041").is_err());
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("alice@").is_err());
        assert!(Email::new("alice example.com").is_err());
    }

    #[test]
    fn gender_parses_short_forms() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn year_joined_bounds() {
        assert!(YearJoined::new(2019).is_ok());
        assert!(YearJoined::new(1899).is_err());
        assert!("20x9".parse::<YearJoined>().is_err());
    }

    #[test]
    fn identity_matches_on_name_and_phone_or_email() {
        let alice = PersonBuilder::new("Alice Pauline").build();
        let other_address = PersonBuilder::new("Alice Pauline")
            .address("Somewhere else")
            .build();
        assert!(alice.is_same_person(&other_address));
        assert_ne!(alice, other_address);

        let new_contact = PersonBuilder::new("Alice Pauline")
            .phone("99999999")
            .email("other@example.com")
            .build();
        assert!(!alice.is_same_person(&new_contact));

        let other_name = PersonBuilder::new("Benson Meier").build();
        assert!(!alice.is_same_person(&other_name));
    }

    #[test]
    fn deserialization_validates_fields() {
        let alice = PersonBuilder::new("Alice Pauline").build();
        let mut json = serde_json::to_value(&alice).unwrap();
        assert_eq!(
            serde_json::from_value::<Person>(json.clone()).unwrap(),
            alice
        );

        json["phone"] = serde_json::Value::String("12".into());
        assert!(serde_json::from_value::<Person>(json).is_err());
    }
}
