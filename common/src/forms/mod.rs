//! Form-state workflow: field stores, nested collection editors, validation,
//! payload building, submission and the record lists under each form.

pub mod errors;
pub mod field_store;
pub mod list;
pub mod nested;
pub mod payload;
pub mod submission;
pub mod validator;

pub use errors::FormErrors;
pub use field_store::{FieldStore, Form, Reset};
pub use list::{EditFrom, ListRecord, ListView};
pub use nested::{CommitOutcome, NestedCollectionEditor, NoListField, SubRecord};
pub use payload::{MultipartPayload, Part, PartBody};
pub use submission::{
    Phase, SaveKind, SubmissionCoordinator, SubmitOutcome, SubmitTicket, Submittable,
};
pub use validator::{Validate, ValidationContext};
