use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The inputs of the feedback form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    Gender,
    Address,
    City,
    Rating,
    Feedback,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::Gender,
        FormField::Address,
        FormField::City,
        FormField::Rating,
        FormField::Feedback,
    ];

    /// Input name, also used as the key in persisted records and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Gender => "gender",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::Rating => "rating",
            FormField::Feedback => "feedback",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Serialize for FormField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
