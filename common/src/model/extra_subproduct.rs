//! Extra sub-products: a single sub-product attached to an existing product
//! outside of the product form.

use serde::Deserialize;
use serde_json::{Value, json};

use super::product::SubProductRecord;
use super::serde_helpers::numeric_value;
use super::{FileRef, ProductRef};
use crate::forms::validator::{require_number, require_file, require_text};
use crate::forms::{
    Form, FormErrors, ListRecord, MultipartPayload, Submittable, Validate, ValidationContext,
};
use crate::requests::{EntityRoute, RequestBody};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraSubProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: ProductRef,
    #[serde(rename = "extrasubproducts")]
    pub entries: Vec<SubProductRecord>,
}

impl ExtraSubProductRecord {
    /// The console only ever stores one entry per record.
    pub fn entry(&self) -> Option<&SubProductRecord> {
        self.entries.first()
    }
}

impl ListRecord for ExtraSubProductRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtraSubProductForm<F> {
    pub id: Option<String>,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub weight: String,
    pub image: FileRef<F>,
}

impl<F> Default for ExtraSubProductForm<F> {
    fn default() -> Self {
        Self {
            id: None,
            product_id: String::new(),
            name: String::new(),
            description: String::new(),
            weight: String::new(),
            image: FileRef::Empty,
        }
    }
}

pub enum ExtraSubProductField<F> {
    Product(String),
    Name(String),
    Description(String),
    Weight(String),
    Image(FileRef<F>),
}

impl<F> Form for ExtraSubProductForm<F> {
    type Field = ExtraSubProductField<F>;

    fn apply(&mut self, field: ExtraSubProductField<F>) -> &'static str {
        match field {
            ExtraSubProductField::Product(id) => {
                self.product_id = id;
                "productId"
            }
            ExtraSubProductField::Name(name) => {
                self.name = name;
                "subproductName"
            }
            ExtraSubProductField::Description(description) => {
                self.description = description;
                "description"
            }
            ExtraSubProductField::Weight(weight) => {
                self.weight = weight;
                "weight"
            }
            ExtraSubProductField::Image(image) => {
                self.image = image;
                "subproductImg"
            }
        }
    }
}

impl<F> Validate for ExtraSubProductForm<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "productId", &self.product_id, "Product is required");
        require_text(&mut errors, "subproductName", &self.name, "Subproduct Name is required");
        require_text(&mut errors, "description", &self.description, "Description is required");
        require_number(&mut errors, "weight", &self.weight, "Weight is required");
        require_file(&mut errors, "subproductImg", &self.image, ctx, "Image is required");
        errors
    }
}

impl<F: Clone> Submittable for ExtraSubProductForm<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        EntityRoute::ExtraSubProducts
    }

    fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        let entries: [Value; 1] = [json!({
            "subproductName": self.name.trim(),
            "description": self.description.trim(),
            "weight": numeric_value(&self.weight),
        })];

        let mut payload = MultipartPayload::new();
        payload.text("productId", self.product_id.as_str());
        payload.json("extrasubproducts", &entries)?;
        payload.indexed_file("subproductImg", 0, &self.image);
        Ok(RequestBody::Multipart(payload))
    }
}

impl<F> From<&ExtraSubProductRecord> for ExtraSubProductForm<F> {
    fn from(record: &ExtraSubProductRecord) -> Self {
        let entry = record.entry().cloned().unwrap_or_default();
        Self {
            id: Some(record.id.clone()).filter(|id| !id.is_empty()),
            product_id: record.product_id.id().to_string(),
            name: entry.subproduct_name,
            description: entry.description,
            weight: entry.weight,
            image: FileRef::from_url(entry.subproduct_img.as_deref()),
        }
    }
}
