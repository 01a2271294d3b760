//! Sub-product headings: a title shown above the sub-products of a product.
//!
//! The only form sent as JSON. The backend keeps titles unique per product and
//! answers a duplicate with a conflict.

use std::marker::PhantomData;

use serde::Deserialize;
use serde_json::json;

use super::ProductRef;
use crate::forms::validator::require_text;
use crate::forms::{Form, FormErrors, ListRecord, Submittable, Validate, ValidationContext};
use crate::requests::{EntityRoute, RequestBody};

/// Shown when the backend rejects a title that already exists for the product.
pub const DUPLICATE_MESSAGE: &str = "This subproduct title already exists for the selected product.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: ProductRef,
    pub subproduct_title: String,
}

impl ListRecord for HeadingRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Headings carry no files. `F` only ties the form to the file type of the
/// client that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingForm<F> {
    pub id: Option<String>,
    pub product_id: String,
    pub title: String,
    _file: PhantomData<F>,
}

impl<F> Default for HeadingForm<F> {
    fn default() -> Self {
        Self {
            id: None,
            product_id: String::new(),
            title: String::new(),
            _file: PhantomData,
        }
    }
}

pub enum HeadingField {
    Product(String),
    Title(String),
}

impl<F> Form for HeadingForm<F> {
    type Field = HeadingField;

    fn apply(&mut self, field: HeadingField) -> &'static str {
        match field {
            HeadingField::Product(id) => {
                self.product_id = id;
                "productId"
            }
            HeadingField::Title(title) => {
                self.title = title;
                "subproductTitle"
            }
        }
    }
}

impl<F> Validate for HeadingForm<F> {
    fn validate(&self, _ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "productId", &self.product_id, "Please select a product.");
        require_text(&mut errors, "subproductTitle", &self.title, "Subproduct Title is required.");
        errors
    }
}

impl<F> Submittable for HeadingForm<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        EntityRoute::Headings
    }

    fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        Ok(RequestBody::Json(json!({
            "productId": self.product_id,
            "subproductTitle": self.title.trim(),
        })))
    }
}

impl<F> From<&HeadingRecord> for HeadingForm<F> {
    fn from(record: &HeadingRecord) -> Self {
        Self {
            id: Some(record.id.clone()).filter(|id| !id.is_empty()),
            product_id: record.product_id.id().to_string(),
            title: record.subproduct_title.clone(),
            _file: PhantomData,
        }
    }
}
