use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{FormField, Rating, Record};
use crate::store::{RecordStore, Storage};
use crate::validation::{validate, ValidationErrors};

use super::error::FormError;
use super::view::{FormView, TableRow};

/// Whether a submit appends a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum EditMode {
    #[default]
    Idle,
    /// Editing the record at this position in the store.
    Editing(usize),
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation. Nothing was stored and the draft is kept.
    Rejected(ValidationErrors),
    Appended { index: usize },
    Updated { index: usize },
    /// The edited position no longer exists; the draft was discarded.
    Stale { index: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// Owns the draft, the edit mode and the record store, and applies user
/// actions to them one at a time.
pub struct FormController<S> {
    store: RecordStore<S>,
    draft: Record,
    errors: ValidationErrors,
    mode: EditMode,
}

impl<S: Storage> FormController<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            draft: Record::default(),
            errors: ValidationErrors::default(),
            mode: EditMode::Idle,
        }
    }

    #[allow(dead_code)]
    pub fn draft(&self) -> &Record {
        &self.draft
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Applies a field-change event to the draft. Never changes the mode.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        self.draft.set_field(field, value)?;
        Ok(())
    }

    pub fn choose_rating(&mut self, score: u8) -> Result<(), FormError> {
        self.draft.rating = Rating::chosen(score)?;
        Ok(())
    }

    /// Loads the record at `index` into the draft and switches to editing it.
    ///
    /// Returns `false` and changes nothing if `index` is out of bounds.
    pub fn start_edit(&mut self, index: usize) -> bool {
        let Some(record) = self.store.get(index) else {
            debug!(index, "Edit target out of bounds, ignoring");
            return false;
        };
        self.draft = record.clone();
        self.errors = ValidationErrors::default();
        self.mode = EditMode::Editing(index);
        info!(index, "Editing record");
        true
    }

    /// Abandons the current edit, if any, and clears the form.
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Validates the draft and commits it.
    ///
    /// A valid draft is appended when idle or written over the edited
    /// position when editing; either way the form resets to an empty draft.
    /// The edited position is used as-is: if earlier records were deleted in
    /// the meantime it now names a different record.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Submit rejected");
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let draft = std::mem::take(&mut self.draft);
        let mode = self.mode;
        self.reset_form();

        let outcome = match mode {
            EditMode::Idle => SubmitOutcome::Appended {
                index: self.store.append(draft)?,
            },
            EditMode::Editing(index) => {
                if self.store.update_at(index, draft)? {
                    SubmitOutcome::Updated { index }
                } else {
                    SubmitOutcome::Stale { index }
                }
            }
        };

        info!(?outcome, records = self.store.len(), "Submit accepted");
        Ok(outcome)
    }

    /// Removes the record at `index`. The edit mode is left as it is.
    pub fn delete(&mut self, index: usize) -> Result<Option<Record>, FormError> {
        let removed = self.store.remove_at(index)?;
        if removed.is_some() {
            info!(index, records = self.store.len(), "Record deleted");
        }
        Ok(removed)
    }

    pub fn view(&self) -> FormView {
        FormView {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            mode: self.mode,
            submit_label: match self.mode {
                EditMode::Idle => "Submit",
                EditMode::Editing(_) => "Update",
            },
            rows: self
                .store
                .records()
                .iter()
                .enumerate()
                .map(|(index, record)| TableRow::new(index, record))
                .collect(),
        }
    }

    fn reset_form(&mut self) {
        self.draft = Record::default();
        self.errors = ValidationErrors::default();
        self.mode = EditMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Choice, City, Gender};
    use crate::store::{MemoryStorage, Storage, DEFAULT_STORAGE_KEY};
    use crate::validation::tests::complete_record;

    fn controller() -> (FormController<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = RecordStore::load_initial(storage.clone(), DEFAULT_STORAGE_KEY);
        (FormController::new(store), storage)
    }

    fn fill(form: &mut FormController<MemoryStorage>, name: &str) {
        form.set_field(FormField::Name, name).unwrap();
        form.set_field(FormField::Email, "someone@example.com").unwrap();
        form.set_field(FormField::Password, "hunter2").unwrap();
        form.set_field(FormField::Gender, "Male").unwrap();
        form.set_field(FormField::Address, "42 Elm St").unwrap();
        form.set_field(FormField::City, "Chicago").unwrap();
        form.choose_rating(3).unwrap();
    }

    #[test]
    fn valid_submit_when_idle_appends_and_resets() {
        let (mut form, storage) = controller();
        fill(&mut form, "Ada");

        let outcome = form.submit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Appended { index: 0 });
        assert_eq!(form.records().len(), 1);
        assert_eq!(form.records()[0].name, "Ada");
        assert_eq!(form.records()[0].city, Some(City::Chicago));
        assert_eq!(form.draft(), &Record::default());
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn invalid_submit_keeps_draft_and_writes_nothing() {
        let (mut form, storage) = controller();
        form.set_field(FormField::Name, "Ada").unwrap();
        form.set_field(FormField::Email, "not-an-email").unwrap();
        let before = form.draft().clone();

        let errors = match form.submit().unwrap() {
            SubmitOutcome::Rejected(errors) => errors,
            other => panic!("expected rejection, got {other:?}"),
        };
        assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.get(FormField::Name), None);
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.draft(), &before);
        assert!(form.records().is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn invalid_submit_while_editing_stays_in_edit_mode() {
        let (mut form, storage) = controller();
        fill(&mut form, "a");
        form.submit().unwrap();
        let stored = form.records().to_vec();
        let writes = storage.write_count();

        assert!(form.start_edit(0));
        form.set_field(FormField::Email, "bad").unwrap();
        let before = form.draft().clone();

        let outcome = form.submit().unwrap();

        assert!(!outcome.is_accepted());
        assert_eq!(form.mode(), EditMode::Editing(0));
        assert_eq!(form.draft(), &before);
        assert_eq!(
            form.errors().get(FormField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.records(), stored.as_slice());
        assert_eq!(storage.write_count(), writes);
        assert_eq!(form.view().submit_label, "Update");
    }

    #[test]
    fn successful_submit_clears_previous_errors() {
        let (mut form, _) = controller();
        form.submit().unwrap();
        assert!(!form.errors().is_empty());

        fill(&mut form, "Ada");
        form.submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_replaces_only_the_target() {
        let (mut form, storage) = controller();
        for name in ["a", "b", "c"] {
            fill(&mut form, name);
            form.submit().unwrap();
        }

        assert!(form.start_edit(1));
        assert_eq!(form.mode(), EditMode::Editing(1));
        assert_eq!(form.draft().name, "b");
        form.set_field(FormField::Feedback, "changed my mind").unwrap();

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Updated { index: 1 });

        let names: Vec<_> = form.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(form.records()[1].feedback, "changed my mind");
        assert_eq!(form.records()[0].feedback, "");
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(storage.write_count(), 4);
    }

    #[test]
    fn start_edit_out_of_bounds_changes_nothing() {
        let (mut form, _) = controller();
        form.set_field(FormField::Name, "draft").unwrap();
        assert!(!form.start_edit(0));
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.draft().name, "draft");
    }

    #[test]
    fn delete_during_edit_retargets_pending_update() {
        let (mut form, _) = controller();
        for name in ["a", "b", "c"] {
            fill(&mut form, name);
            form.submit().unwrap();
        }

        form.start_edit(1);
        form.set_field(FormField::Name, "b-edited").unwrap();
        form.delete(1).unwrap();
        assert_eq!(form.mode(), EditMode::Editing(1));

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Updated { index: 1 });
        let names: Vec<_> = form.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b-edited"]);
    }

    #[test]
    fn stale_edit_past_the_end_is_dropped() {
        let (mut form, storage) = controller();
        fill(&mut form, "a");
        form.submit().unwrap();

        form.start_edit(0);
        form.delete(0).unwrap();
        let writes = storage.write_count();

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Stale { index: 0 });
        assert!(form.records().is_empty());
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.draft(), &Record::default());
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn cancel_edit_returns_to_idle() {
        let (mut form, _) = controller();
        fill(&mut form, "a");
        form.submit().unwrap();
        form.start_edit(0);

        form.cancel_edit();

        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.draft(), &Record::default());
    }

    #[test]
    fn rating_must_be_chosen_from_scale() {
        let (mut form, _) = controller();
        assert!(matches!(form.choose_rating(0), Err(FormError::InvalidRating(_))));
        assert!(matches!(form.choose_rating(6), Err(FormError::InvalidRating(_))));
        form.choose_rating(4).unwrap();
        assert_eq!(form.draft().rating.value(), 4);
    }

    #[test]
    fn view_hides_passwords_and_labels_submit() {
        let (mut form, _) = controller();
        fill(&mut form, "a");
        form.submit().unwrap();

        let view = form.view();
        assert_eq!(view.submit_label, "Submit");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].gender, Gender::Male.label());
        assert_eq!(view.rows[0].rating, "😐");
        let json = serde_json::to_value(&view.rows).unwrap();
        assert!(json[0].get("password").is_none());

        form.start_edit(0);
        assert_eq!(form.view().submit_label, "Update");
    }

    #[test]
    fn hydrated_records_are_editable() {
        let storage = MemoryStorage::new();
        let seeded = vec![complete_record()];
        storage
            .set_item(DEFAULT_STORAGE_KEY, &serde_json::to_string(&seeded).unwrap())
            .unwrap();

        let mut form = FormController::new(RecordStore::load_initial(storage, DEFAULT_STORAGE_KEY));
        assert!(form.start_edit(0));
        assert_eq!(form.draft(), &seeded[0]);
    }
}
