use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::choice::{blank_as_none, Choice, City, Gender};
use super::field::FormField;
use super::rating::{Rating, RatingOutOfRange};

/// One feedback entry, either a draft in the form or a committed row.
///
/// The default value is the empty draft the form starts from and returns to
/// after every successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(with = "blank_as_none")]
    pub gender: Option<Gender>,
    pub address: String,
    #[serde(with = "blank_as_none")]
    pub city: Option<City>,
    pub rating: Rating,
    #[serde(default)]
    pub feedback: String,
}

/// A field-change event carried a value the field cannot hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldValueError {
    #[error("Invalid option for {field}: {value:?}")]
    InvalidChoice { field: FormField, value: String },
    #[error("Rating is not a number: {0:?}")]
    RatingNotANumber(String),
    #[error(transparent)]
    Rating(#[from] RatingOutOfRange),
}

impl Record {
    /// Applies one field-change event to this record.
    ///
    /// On error the record is left untouched.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FieldValueError> {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Password => self.password = value.to_string(),
            FormField::Address => self.address = value.to_string(),
            FormField::Feedback => self.feedback = value.to_string(),
            FormField::Gender => self.gender = parse_choice(field, value)?,
            FormField::City => self.city = parse_choice(field, value)?,
            FormField::Rating => {
                let score: u8 = value
                    .trim()
                    .parse()
                    .map_err(|_| FieldValueError::RatingNotANumber(value.to_string()))?;
                self.rating = Rating::chosen(score)?;
            }
        }
        Ok(())
    }
}

fn parse_choice<T: Choice>(field: FormField, value: &str) -> Result<Option<T>, FieldValueError> {
    if value.is_empty() {
        return Ok(None);
    }
    T::from_label(value)
        .map(Some)
        .ok_or_else(|| FieldValueError::InvalidChoice {
            field,
            value: value.to_string(),
        })
}
