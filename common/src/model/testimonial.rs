//! Customer testimonials.

use serde::Deserialize;

use super::FileRef;
use super::serde_helpers::string_or_first;
use crate::forms::validator::{require_file, require_text};
use crate::forms::{
    Form, FormErrors, ListRecord, MultipartPayload, Submittable, Validate, ValidationContext,
};
use crate::requests::{EntityRoute, RequestBody};

/// Longest review the site layout can show.
pub const MAX_REVIEW_WORDS: usize = 25;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestimonialRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(alias = "CustomerImage", deserialize_with = "string_or_first")]
    pub image: Option<String>,
}

impl ListRecord for TestimonialRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialForm<F> {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub image: FileRef<F>,
}

impl<F> Default for TestimonialForm<F> {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            image: FileRef::Empty,
        }
    }
}

pub enum TestimonialField<F> {
    Name(String),
    /// Input longer than `MAX_REVIEW_WORDS` is dropped and the previous
    /// review kept.
    Description(String),
    Image(FileRef<F>),
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

impl<F> Form for TestimonialForm<F> {
    type Field = TestimonialField<F>;

    fn accepts(&self, field: &TestimonialField<F>) -> bool {
        match field {
            TestimonialField::Description(text) => word_count(text) <= MAX_REVIEW_WORDS,
            _ => true,
        }
    }

    fn apply(&mut self, field: TestimonialField<F>) -> &'static str {
        match field {
            TestimonialField::Name(name) => {
                self.name = name;
                "name"
            }
            TestimonialField::Description(description) => {
                self.description = description;
                "description"
            }
            TestimonialField::Image(image) => {
                self.image = image;
                "CustomerImage"
            }
        }
    }
}

impl<F> Validate for TestimonialForm<F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        require_text(&mut errors, "description", &self.description, "Review is required");
        require_file(&mut errors, "CustomerImage", &self.image, ctx, "Customer image is required");
        errors
    }
}

impl<F: Clone> Submittable for TestimonialForm<F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        EntityRoute::Testimonials
    }

    fn identifier(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", self.name.trim())
            .text("description", self.description.trim())
            .file("CustomerImage", &self.image);
        Ok(RequestBody::Multipart(payload))
    }
}

impl<F> From<&TestimonialRecord> for TestimonialForm<F> {
    fn from(record: &TestimonialRecord) -> Self {
        Self {
            id: Some(record.id.clone()).filter(|id| !id.is_empty()),
            name: record.name.clone(),
            description: record.description.clone(),
            image: FileRef::from_url(record.image.as_deref()),
        }
    }
}
