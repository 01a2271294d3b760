//! Staging editor for the sub-records of a parent form.
//!
//! The editor never owns the collection: the parent form does (for example
//! `ProductForm::subproducts`). The editor keeps one staged sub-record and an
//! editing slot, and only `commit` and `remove` write to the collection that
//! the caller passes in.
//!
//! A product page holds two editors (sub-products and recipes) side by side.
//! They do not coordinate; both can have an entry open at the same time.

use super::errors::FormErrors;
use super::field_store::{Form, Reset};
use super::validator::{Validate, ValidationContext};
use crate::error::EditorError;

/// A sub-record staged by a `NestedCollectionEditor`.
pub trait SubRecord: Form + Validate + Clone {
    /// The list-valued fields (steps, ingredients, ...) of the sub-record.
    type ListField: Copy;

    fn list_mut(&mut self, field: Self::ListField) -> &mut Vec<String>;

    /// Error key of a list-valued field.
    fn list_key(field: Self::ListField) -> &'static str;
}

/// Marker for sub-records without list-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoListField {}

/// What a successful commit did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Appended(usize),
    Replaced(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NestedCollectionEditor<T> {
    staging: T,
    slot: Option<usize>,
    errors: FormErrors,
}

impl<T: SubRecord> Default for NestedCollectionEditor<T> {
    fn default() -> Self {
        Self {
            staging: T::default(),
            slot: None,
            errors: FormErrors::new(),
        }
    }
}

impl<T: SubRecord> NestedCollectionEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staging(&self) -> &T {
        &self.staging
    }

    /// Index of the entry being edited; `None` while a new entry is staged.
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn start_new(&mut self) {
        self.staging = T::default();
        self.slot = None;
        self.errors = FormErrors::new();
    }

    pub fn start_edit(&mut self, collection: &[T], index: usize) -> Result<(), EditorError> {
        let entry = collection.get(index).ok_or(EditorError::IndexOutOfRange {
            index,
            len: collection.len(),
        })?;
        self.staging = entry.clone();
        self.slot = Some(index);
        self.errors = FormErrors::new();
        Ok(())
    }

    pub fn update_field(&mut self, field: T::Field) {
        if !self.staging.accepts(&field) {
            return;
        }
        let key = self.staging.apply(field);
        self.errors.clear(key);
    }

    pub fn append_item(&mut self, field: T::ListField) {
        self.staging.list_mut(field).push(String::new());
        self.errors.clear(T::list_key(field));
    }

    pub fn update_item(
        &mut self,
        field: T::ListField,
        index: usize,
        value: String,
    ) -> Result<(), EditorError> {
        let items = self.staging.list_mut(field);
        let len = items.len();
        let item = items
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        *item = value;
        self.errors.clear(T::list_key(field));
        Ok(())
    }

    pub fn remove_item(&mut self, field: T::ListField, index: usize) -> Result<(), EditorError> {
        let items = self.staging.list_mut(field);
        if index >= items.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        self.errors.clear(T::list_key(field));
        Ok(())
    }

    /// Validates the staged entry and writes it into `collection`.
    ///
    /// On validation errors nothing is written; the errors are kept for the
    /// view and returned. On success the staging area is back to defaults.
    pub fn commit(
        &mut self,
        collection: &mut Vec<T>,
        ctx: &ValidationContext,
    ) -> Result<CommitOutcome, FormErrors> {
        let errors = self.staging.validate(ctx);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let staged = std::mem::take(&mut self.staging);
        let outcome = match self.slot.take() {
            Some(index) if index < collection.len() => {
                collection[index] = staged;
                CommitOutcome::Replaced(index)
            }
            _ => {
                collection.push(staged);
                CommitOutcome::Appended(collection.len() - 1)
            }
        };
        self.errors = FormErrors::new();
        Ok(outcome)
    }

    /// Removes `collection[index]`.
    ///
    /// Removing the entry under edit resets the editor to a new entry; removing
    /// an entry before it shifts the slot so it keeps pointing at the same one.
    pub fn remove(&mut self, collection: &mut Vec<T>, index: usize) -> Result<T, EditorError> {
        if index >= collection.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: collection.len(),
            });
        }
        let removed = collection.remove(index);
        match self.slot {
            Some(slot) if slot == index => self.start_new(),
            Some(slot) if slot > index => self.slot = Some(slot - 1),
            _ => {}
        }
        Ok(removed)
    }
}

impl<T: SubRecord> Reset for NestedCollectionEditor<T> {
    fn reset(&mut self) {
        self.start_new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validator::{require_every_item, require_text};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Step {
        title: String,
        notes: Vec<String>,
    }

    enum StepField {
        Title(String),
    }

    #[derive(Clone, Copy)]
    enum StepList {
        Notes,
    }

    impl Form for Step {
        type Field = StepField;

        fn apply(&mut self, field: StepField) -> &'static str {
            match field {
                StepField::Title(title) => {
                    self.title = title;
                    "title"
                }
            }
        }
    }

    impl Validate for Step {
        fn validate(&self, _ctx: &ValidationContext) -> FormErrors {
            let mut errors = FormErrors::new();
            require_text(&mut errors, "title", &self.title, "Title is required");
            require_every_item(&mut errors, "notes", &self.notes, "Notes must be filled");
            errors
        }
    }

    impl SubRecord for Step {
        type ListField = StepList;

        fn list_mut(&mut self, field: StepList) -> &mut Vec<String> {
            match field {
                StepList::Notes => &mut self.notes,
            }
        }

        fn list_key(field: StepList) -> &'static str {
            match field {
                StepList::Notes => "notes",
            }
        }
    }

    fn step(title: &str) -> Step {
        Step {
            title: title.to_string(),
            notes: vec!["note".to_string()],
        }
    }

    fn stage(editor: &mut NestedCollectionEditor<Step>, title: &str) {
        editor.update_field(StepField::Title(title.to_string()));
        editor.append_item(StepList::Notes);
        editor
            .update_item(StepList::Notes, 0, "note".to_string())
            .unwrap();
    }

    #[test]
    fn commit_of_new_entry_appends() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("first")];

        stage(&mut editor, "second");
        let outcome = editor.commit(&mut collection, &ValidationContext::default());

        assert_eq!(outcome, Ok(CommitOutcome::Appended(1)));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1].title, "second");
        assert_eq!(editor.staging(), &Step::default());
        assert_eq!(editor.slot(), None);
    }

    #[test]
    fn failed_commit_leaves_collection_alone() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("first")];

        editor.update_field(StepField::Title("  ".to_string()));
        let errors = editor
            .commit(&mut collection, &ValidationContext::default())
            .unwrap_err();

        assert!(errors.contains("title"));
        assert!(errors.contains("notes"));
        assert_eq!(collection, vec![step("first")]);
        assert_eq!(editor.errors(), &errors);
        assert_eq!(editor.staging().title, "  ");
    }

    #[test]
    fn edit_then_commit_without_changes_is_a_no_op() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("a"), step("b"), step("c")];
        let before = collection.clone();

        editor.start_edit(&collection, 1).unwrap();
        assert_eq!(editor.slot(), Some(1));
        let outcome = editor.commit(&mut collection, &ValidationContext::default());

        assert_eq!(outcome, Ok(CommitOutcome::Replaced(1)));
        assert_eq!(collection, before);
        assert_eq!(editor.slot(), None);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("a"), step("b")];

        editor.start_edit(&collection, 0).unwrap();
        editor.update_field(StepField::Title("a2".to_string()));
        editor
            .commit(&mut collection, &ValidationContext::default())
            .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[0].title, "a2");
        assert_eq!(collection[1].title, "b");
    }

    #[test]
    fn start_edit_out_of_range() {
        let mut editor = NestedCollectionEditor::<Step>::new();
        assert_eq!(
            editor.start_edit(&[step("a")], 3),
            Err(EditorError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(editor.slot(), None);
    }

    #[test]
    fn removing_the_edited_entry_resets_the_editor() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("a"), step("b")];

        editor.start_edit(&collection, 1).unwrap();
        let removed = editor.remove(&mut collection, 1).unwrap();

        assert_eq!(removed.title, "b");
        assert_eq!(editor.slot(), None);
        assert_eq!(editor.staging(), &Step::default());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn removing_an_earlier_entry_shifts_the_slot() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("a"), step("b"), step("c")];

        editor.start_edit(&collection, 2).unwrap();
        editor.remove(&mut collection, 0).unwrap();
        assert_eq!(editor.slot(), Some(1));

        editor.update_field(StepField::Title("c2".to_string()));
        editor
            .commit(&mut collection, &ValidationContext::default())
            .unwrap();
        assert_eq!(
            collection.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            vec!["b", "c2"]
        );
    }

    #[test]
    fn removing_a_later_entry_keeps_the_slot() {
        let mut editor = NestedCollectionEditor::new();
        let mut collection = vec![step("a"), step("b")];

        editor.start_edit(&collection, 0).unwrap();
        editor.remove(&mut collection, 1).unwrap();

        assert_eq!(editor.slot(), Some(0));
        assert_eq!(editor.staging().title, "a");
    }

    #[test]
    fn list_items_can_be_edited() {
        let mut editor = NestedCollectionEditor::<Step>::new();
        editor.append_item(StepList::Notes);
        editor.append_item(StepList::Notes);
        editor
            .update_item(StepList::Notes, 1, "second".to_string())
            .unwrap();
        editor.remove_item(StepList::Notes, 0).unwrap();

        assert_eq!(editor.staging().notes, vec!["second".to_string()]);
        assert_eq!(
            editor.remove_item(StepList::Notes, 5),
            Err(EditorError::IndexOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn editing_a_field_clears_its_commit_error() {
        let mut editor = NestedCollectionEditor::<Step>::new();
        let mut collection = Vec::new();
        let _ = editor.commit(&mut collection, &ValidationContext::default());
        assert!(editor.errors().contains("title"));

        editor.update_field(StepField::Title("x".to_string()));
        assert!(!editor.errors().contains("title"));
        assert!(editor.errors().contains("notes"));

        editor.append_item(StepList::Notes);
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn removing_a_list_item_clears_the_list_error() {
        let mut editor = NestedCollectionEditor::<Step>::new();
        editor.update_field(StepField::Title("x".to_string()));
        editor.append_item(StepList::Notes);
        editor.append_item(StepList::Notes);
        editor
            .update_item(StepList::Notes, 0, "kept".to_string())
            .unwrap();
        let _ = editor.commit(&mut Vec::new(), &ValidationContext::default());
        assert!(editor.errors().contains("notes"));

        editor.remove_item(StepList::Notes, 1).unwrap();

        assert!(!editor.errors().contains("notes"));
    }
}
