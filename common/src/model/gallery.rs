//! Image galleries: certificates on the home page and the About-us pictures.
//!
//! Both are lists of single images that can be uploaded and deleted but not
//! edited. The two only differ in route, upload field name and ordering, which
//! the `Gallery` marker types carry.

use std::marker::PhantomData;

use serde::Deserialize;

use super::FileRef;
use super::serde_helpers::string_or_first;
use crate::forms::validator::require_file;
use crate::forms::{
    Form, FormErrors, ListRecord, MultipartPayload, Submittable, Validate, ValidationContext,
};
use crate::requests::{EntityRoute, RequestBody};

pub trait Gallery: Copy + Default + PartialEq + std::fmt::Debug + 'static {
    const ROUTE: EntityRoute;
    /// Name of the upload part, also used as the error key.
    const FIELD: &'static str;
    const TITLE: &'static str;
    /// List in upload order instead of API order.
    const OLDEST_FIRST: bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Certificates;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AboutImages;

impl Gallery for Certificates {
    const ROUTE: EntityRoute = EntityRoute::Certificates;
    const FIELD: &'static str = "certificateImage";
    const TITLE: &'static str = "Certificate Image";
    const OLDEST_FIRST: bool = false;
}

impl Gallery for AboutImages {
    const ROUTE: EntityRoute = EntityRoute::AboutImages;
    const FIELD: &'static str = "vimalaboutimage";
    const TITLE: &'static str = "About Us Image";
    const OLDEST_FIRST: bool = true;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryRecord<G> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        default,
        alias = "certificateImage",
        alias = "vimalaboutimage",
        deserialize_with = "string_or_first"
    )]
    pub image: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(skip)]
    _gallery: PhantomData<G>,
}

impl<G: Gallery> ListRecord for GalleryRecord<G> {
    fn id(&self) -> &str {
        &self.id
    }

    /// `createdAt` is an ISO-8601 timestamp, so text order is time order.
    fn order(records: &mut [Self]) {
        if G::OLDEST_FIRST {
            records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryForm<G, F> {
    pub image: FileRef<F>,
    _gallery: PhantomData<G>,
}

impl<G, F> Default for GalleryForm<G, F> {
    fn default() -> Self {
        Self {
            image: FileRef::Empty,
            _gallery: PhantomData,
        }
    }
}

impl<G: Gallery, F> Form for GalleryForm<G, F> {
    type Field = FileRef<F>;

    fn apply(&mut self, image: FileRef<F>) -> &'static str {
        self.image = image;
        G::FIELD
    }
}

impl<G: Gallery, F> Validate for GalleryForm<G, F> {
    fn validate(&self, ctx: &ValidationContext) -> FormErrors {
        let mut errors = FormErrors::new();
        require_file(&mut errors, G::FIELD, &self.image, ctx, "Please select an image before submitting!");
        errors
    }
}

/// Gallery images are never updated, only uploaded and deleted.
impl<G: Gallery, F: Clone> Submittable for GalleryForm<G, F> {
    type File = F;

    fn route(&self) -> EntityRoute {
        G::ROUTE
    }

    fn identifier(&self) -> Option<&str> {
        None
    }

    fn to_body(&self) -> Result<RequestBody<F>, serde_json::Error> {
        let mut payload = MultipartPayload::new();
        payload.file(G::FIELD, &self.image);
        Ok(RequestBody::Multipart(payload))
    }
}
