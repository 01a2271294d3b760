//! Entities managed by the console: the records the API lists and the
//! editable form values built from them.

mod file_ref;
pub mod serde_helpers;

pub mod blog;
pub mod extra_subproduct;
pub mod gallery;
pub mod heading;
pub mod product;
pub mod testimonial;

pub use file_ref::FileRef;

use serde::Deserialize;

/// The product a child record belongs to. List endpoints either return the
/// bare id or populate it with the product document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default, rename = "productName")]
        name: String,
    },
    Id(String),
}

impl Default for ProductRef {
    fn default() -> Self {
        ProductRef::Id(String::new())
    }
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated { id, .. } | ProductRef::Id(id) => id,
        }
    }

    /// Product name when the API populated it.
    pub fn name(&self) -> Option<&str> {
        match self {
            ProductRef::Populated { name, .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ref_accepts_both_shapes() {
        let bare: ProductRef = serde_json::from_str(r#""p1""#).unwrap();
        assert_eq!(bare.id(), "p1");
        assert_eq!(bare.name(), None);

        let populated: ProductRef =
            serde_json::from_str(r#"{"_id":"p2","productName":"Mango Pickle","sizes":[]}"#).unwrap();
        assert_eq!(populated.id(), "p2");
        assert_eq!(populated.name(), Some("Mango Pickle"));
    }
}
