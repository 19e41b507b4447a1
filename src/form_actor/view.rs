use serde::Serialize;

use crate::domain::{Choice, Record};
use crate::validation::ValidationErrors;

use super::controller::EditMode;

/// One line of the submitted-data table. The password is never shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub name: String,
    pub email: String,
    pub gender: &'static str,
    pub address: String,
    pub city: &'static str,
    pub rating: &'static str,
    pub feedback: String,
}

impl TableRow {
    pub fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            name: record.name.clone(),
            email: record.email.clone(),
            gender: record.gender.map(|g| g.label()).unwrap_or(""),
            address: record.address.clone(),
            city: record.city.map(|c| c.label()).unwrap_or(""),
            rating: record.rating.mood().unwrap_or(""),
            feedback: record.feedback.clone(),
        }
    }
}

/// Snapshot of everything a renderer needs: the form, its errors and the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub draft: Record,
    pub errors: ValidationErrors,
    pub mode: EditMode,
    pub submit_label: &'static str,
    pub rows: Vec<TableRow>,
}
