//! Single-choice form values and their persisted labels.

use std::fmt;

/// A closed set of labelled options, as offered by a radio group or a select.
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// The label shown to the user and written to storage.
    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    NewYork,
    LosAngeles,
    Chicago,
}

impl Choice for City {
    const ALL: &'static [Self] = &[City::NewYork, City::LosAngeles, City::Chicago];

    fn label(&self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serde adapter for `Option<impl Choice>`: an unset choice is stored as `""`.
///
/// Both `""` and `null` read back as `None`; an unknown label is a hard error.
pub mod blank_as_none {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Choice;

    pub fn serialize<T: Choice, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_ref().map(|c| c.label()).unwrap_or(""))
    }

    pub fn deserialize<'de, T: Choice, D: Deserializer<'de>>(deserializer: D) -> Result<Option<T>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(label) if label.is_empty() => Ok(None),
            Some(label) => T::from_label(&label)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unknown option: {label}"))),
        }
    }
}
