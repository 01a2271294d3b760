//! Flat form state.
//!
//! A `FieldStore` wraps one form value (`ProductForm`, `BlogForm`, ...) plus the
//! validation errors currently shown next to its inputs. Every change goes
//! through `set_field`, which overwrites the field and drops its error unless
//! the form refuses the value outright.

use super::errors::FormErrors;
use super::list::EditFrom;
use super::submission::Submittable;
use super::validator::{Validate, ValidationContext};
use crate::requests::{EntityRoute, RequestBody};

/// A form value that can be edited field by field.
pub trait Form: Default {
    /// One field change, carrying the new value.
    type Field;

    /// Applies `field` and returns the error key it invalidates.
    fn apply(&mut self, field: Self::Field) -> &'static str;

    /// Whether `field` may be applied at all. A refused change leaves the
    /// value and its error untouched.
    fn accepts(&self, _field: &Self::Field) -> bool {
        true
    }
}

/// State that can go back to its pristine, empty shape.
pub trait Reset {
    fn reset(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore<T> {
    value: T,
    errors: FormErrors,
}

impl<T: Form> Default for FieldStore<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            errors: FormErrors::new(),
        }
    }
}

impl<T: Form> FieldStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the form refused the change.
    pub fn set_field(&mut self, field: T::Field) -> bool {
        if !self.value.accepts(&field) {
            return false;
        }
        let key = self.value.apply(field);
        self.errors.clear(key);
        true
    }

    /// Replaces the whole value, e.g. when a persisted record is opened for editing.
    pub fn load(&mut self, value: T) {
        self.value = value;
        self.errors = FormErrors::new();
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access for the nested collection editors, which own no
    /// collection themselves.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn clear_error(&mut self, key: &str) {
        self.errors.clear(key);
    }
}

impl<T: Form + Validate> FieldStore<T> {
    /// Validates the current value and keeps the errors for the view.
    /// Returns `true` when nothing is missing.
    pub fn check_with(&mut self, ctx: &ValidationContext) -> bool {
        self.errors = self.value.validate(ctx);
        self.errors.is_empty()
    }
}

impl<T: Form + Validate + Submittable> FieldStore<T> {
    /// `check_with` for a record that knows whether it is already persisted.
    pub fn check(&mut self) -> bool {
        let ctx = ValidationContext::for_record(self.value.identifier());
        self.check_with(&ctx)
    }
}

impl<T: Form> Reset for FieldStore<T> {
    fn reset(&mut self) {
        self.value = T::default();
        self.errors = FormErrors::new();
    }
}

impl<T: Form + Submittable> Submittable for FieldStore<T> {
    type File = T::File;

    fn route(&self) -> EntityRoute {
        self.value.route()
    }

    fn identifier(&self) -> Option<&str> {
        self.value.identifier()
    }

    fn to_body(&self) -> Result<RequestBody<T::File>, serde_json::Error> {
        self.value.to_body()
    }
}

impl<R, T> EditFrom<R> for FieldStore<T>
where
    T: Form + for<'a> From<&'a R>,
{
    fn edit_from(&mut self, record: &R) {
        self.load(T::from(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Contact {
        name: String,
        city: String,
    }

    enum ContactField {
        Name(String),
        City(String),
    }

    impl Form for Contact {
        type Field = ContactField;

        fn apply(&mut self, field: ContactField) -> &'static str {
            match field {
                ContactField::Name(name) => {
                    self.name = name;
                    "name"
                }
                ContactField::City(city) => {
                    self.city = city;
                    "city"
                }
            }
        }
    }

    #[test]
    fn set_field_clears_only_its_own_error() {
        let mut store = FieldStore::<Contact>::new();
        let mut errors = FormErrors::new();
        errors.insert("name", "Name is required");
        errors.insert("city", "City is required");
        store.set_errors(errors);

        store.set_field(ContactField::Name("Asha".into()));

        assert_eq!(store.value().name, "Asha");
        assert!(!store.errors().contains("name"));
        assert_eq!(store.errors().get("city"), Some("City is required"));
    }

    #[test]
    fn set_field_overwrites_unconditionally() {
        let mut store = FieldStore::<Contact>::new();
        store.set_field(ContactField::City("Rajkot".into()));
        store.set_field(ContactField::City(String::new()));
        assert_eq!(store.value().city, "");
    }

    impl Validate for Contact {
        fn validate(&self, _ctx: &ValidationContext) -> FormErrors {
            let mut errors = FormErrors::new();
            crate::forms::validator::require_text(&mut errors, "name", &self.name, "Name is required");
            errors
        }
    }

    #[test]
    fn check_with_keeps_the_errors() {
        let mut store = FieldStore::<Contact>::new();
        assert!(!store.check_with(&ValidationContext::default()));
        assert_eq!(store.errors().get("name"), Some("Name is required"));

        store.set_field(ContactField::Name("Asha".into()));
        assert!(store.check_with(&ValidationContext::default()));
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut store = FieldStore::<Contact>::new();
        store.set_field(ContactField::Name("Asha".into()));
        let mut errors = FormErrors::new();
        errors.insert("city", "City is required");
        store.set_errors(errors);

        store.reset();

        assert_eq!(store.value(), &Contact::default());
        assert!(store.errors().is_empty());
    }
}
