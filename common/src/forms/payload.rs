//! Outgoing multipart bodies.
//!
//! A `MultipartPayload` is a browser-agnostic list of named parts. The
//! frontend turns it into a `FormData`; tests inspect it directly.

use serde::Serialize;

use crate::model::FileRef;

#[derive(Debug, Clone, PartialEq)]
pub enum PartBody<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part<F> {
    pub name: String,
    pub body: PartBody<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F: Clone> MultipartPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(Part {
            name: name.into(),
            body: PartBody::Text(value.into()),
        });
        self
    }

    /// Adds `value` encoded as one JSON text part.
    pub fn json<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, serde_json::Error> {
        let encoded = serde_json::to_string(value)?;
        Ok(self.text(name, encoded))
    }

    /// Adds a binary part when the slot holds a local file.
    ///
    /// Empty slots and persisted URLs add nothing: the backend keeps the file
    /// it already stores.
    pub fn file(&mut self, name: impl Into<String>, file: &FileRef<F>) -> &mut Self {
        if let Some(local) = file.local() {
            self.parts.push(Part {
                name: name.into(),
                body: PartBody::File(local.clone()),
            });
        }
        self
    }

    /// Adds the file of the sub-record at `index` as `<field>_<index>`, which
    /// is how the backend correlates files with the JSON array.
    pub fn indexed_file(&mut self, field: &str, index: usize, file: &FileRef<F>) -> &mut Self {
        self.file(format!("{field}_{index}"), file)
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    /// First text part named `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.body {
            PartBody::Text(text) if part.name == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every file part named `name`, in insertion order.
    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a F> + 'a {
        self.parts.iter().filter_map(move |part| match &part.body {
            PartBody::File(file) if part.name == name => Some(file),
            _ => None,
        })
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files_named(name).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_files_become_parts() {
        let mut payload = MultipartPayload::new();
        payload
            .text("productName", "Mango Pickle")
            .file("productBanner", &FileRef::PersistedUrl("https://cdn/b.png".into()))
            .file("banner2", &FileRef::Empty)
            .file("howToMakeBanner", &FileRef::LocalFile("how.png"));

        assert_eq!(payload.parts().len(), 2);
        assert_eq!(payload.text_value("productName"), Some("Mango Pickle"));
        assert!(!payload.has_file("productBanner"));
        assert!(payload.has_file("howToMakeBanner"));
    }

    #[test]
    fn indexed_files_follow_the_array_position() {
        let mut payload = MultipartPayload::new();
        payload
            .indexed_file("recipeMainImg", 0, &FileRef::LocalFile("r0.png"))
            .indexed_file("recipeMainImg", 1, &FileRef::PersistedUrl("u".into()))
            .indexed_file("recipeMainImg", 2, &FileRef::LocalFile("r2.png"));

        assert_eq!(payload.files_named("recipeMainImg_0").collect::<Vec<_>>(), vec![&"r0.png"]);
        assert!(!payload.has_file("recipeMainImg_1"));
        assert!(payload.has_file("recipeMainImg_2"));
    }

    #[test]
    fn json_parts_are_encoded_text() {
        let mut payload = MultipartPayload::<()>::new();
        payload.json("productSizes", &["250g", "1kg"]).unwrap();
        assert_eq!(payload.text_value("productSizes"), Some(r#"["250g","1kg"]"#));
    }
}
