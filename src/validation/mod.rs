//! Draft validation. Pure logic, no storage access.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::{FormField, Record};

/// Non-whitespace around a single `@`, with a dot somewhere after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Field-keyed messages for every rule a draft failed. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks a draft against every rule and collects all failures.
///
/// Only the email rule has two outcomes; it reports "required" before
/// checking the format.
pub fn validate(draft: &Record) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }
    if draft.email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert(FormField::Email, "Please enter a valid email address");
    }
    if draft.password.is_empty() {
        errors.insert(FormField::Password, "Password is required");
    }
    if draft.gender.is_none() {
        errors.insert(FormField::Gender, "Gender is required");
    }
    if draft.address.is_empty() {
        errors.insert(FormField::Address, "Address is required");
    }
    if draft.city.is_none() {
        errors.insert(FormField::City, "City is required");
    }
    if !draft.rating.is_set() {
        errors.insert(FormField::Rating, "Please select a rating");
    }

    errors
}
