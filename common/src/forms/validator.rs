//! Presence and format rules shared by every form.
//!
//! Validators are pure: they read a form value and return the errors to show.
//! Nothing here blocks a transition by itself; the caller decides whether a
//! non-empty `FormErrors` stops a commit or a submission.

use super::errors::FormErrors;
use crate::model::FileRef;

/// Facts about the surrounding record that change which rules apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// The record already has a backend identifier, so a missing file means
    /// "keep the stored one".
    pub persisted: bool,
}

impl ValidationContext {
    pub fn for_record(id: Option<&str>) -> Self {
        Self {
            persisted: id.is_some_and(|id| !id.trim().is_empty()),
        }
    }
}

/// A form value with validation rules.
pub trait Validate {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors;
}

pub fn require_text(errors: &mut FormErrors, key: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(key, message);
    }
}

/// The value must be present and parse as a number.
pub fn require_number(errors: &mut FormErrors, key: &'static str, value: &str, message: &str) {
    if parse_number(value).is_none() {
        errors.insert(key, message);
    }
}

/// The value must parse as a number strictly greater than zero.
pub fn require_positive(errors: &mut FormErrors, key: &'static str, value: &str, message: &str) {
    match parse_number(value) {
        Some(number) if number > 0.0 => {}
        _ => errors.insert(key, message),
    }
}

/// The file slot must be filled, unless the record is already persisted.
pub fn require_file<F>(
    errors: &mut FormErrors,
    key: &'static str,
    file: &FileRef<F>,
    ctx: &ValidationContext,
    message: &str,
) {
    if !file.is_set() && !ctx.persisted {
        errors.insert(key, message);
    }
}

/// At least one item must be non-blank.
pub fn require_any_item(
    errors: &mut FormErrors,
    key: &'static str,
    items: &[String],
    message: &str,
) {
    if !items.iter().any(|item| !item.trim().is_empty()) {
        errors.insert(key, message);
    }
}

/// There must be at least one item and none of them may be blank.
pub fn require_every_item(
    errors: &mut FormErrors,
    key: &'static str,
    items: &[String],
    message: &str,
) {
    if items.is_empty() || items.iter().any(|item| item.trim().is_empty()) {
        errors.insert(key, message);
    }
}

pub fn require_non_empty<T>(errors: &mut FormErrors, key: &'static str, items: &[T], message: &str) {
    if items.is_empty() {
        errors.insert(key, message);
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_missing() {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "title", "   ", "Title is required");
        require_text(&mut errors, "category", "Pickles", "Category is required");
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn numeric_rules() {
        let mut errors = FormErrors::new();
        require_number(&mut errors, "weight", "250", "Weight is required");
        require_number(&mut errors, "blank", "", "required");
        require_number(&mut errors, "words", "heavy", "required");
        require_positive(&mut errors, "serving", "0", "Serving must be > 0");
        require_positive(&mut errors, "prep_time", "-5", "Prep time required");
        require_positive(&mut errors, "cook_time", "12.5", "Cook time required");

        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["blank", "prep_time", "serving", "words"]
        );
    }

    #[test]
    fn missing_file_is_tolerated_on_persisted_records() {
        let empty: FileRef<()> = FileRef::Empty;

        let mut errors = FormErrors::new();
        require_file(&mut errors, "blogImage", &empty, &ValidationContext::default(), "required");
        assert!(errors.contains("blogImage"));

        let mut errors = FormErrors::new();
        let ctx = ValidationContext::for_record(Some("66f1c0"));
        require_file(&mut errors, "blogImage", &empty, &ctx, "required");
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_identifier_is_not_persisted() {
        assert!(!ValidationContext::for_record(Some(" ")).persisted);
        assert!(!ValidationContext::for_record(None).persisted);
    }

    #[test]
    fn any_item_versus_every_item() {
        let items = vec!["Boil water".to_string(), "".to_string()];

        let mut errors = FormErrors::new();
        require_any_item(&mut errors, "ingredients", &items, "At least one ingredient required");
        assert!(errors.is_empty());

        require_every_item(&mut errors, "steps", &items, "All steps must be filled");
        assert!(errors.contains("steps"));

        let mut errors = FormErrors::new();
        require_every_item(&mut errors, "steps", &[], "All steps must be filled");
        require_any_item(&mut errors, "ingredients", &["  ".to_string()], "required");
        assert_eq!(errors.len(), 2);
    }
}
