use yew::prelude::*;

use crate::api::GlooClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductsProps {
    pub client: GlooClient,

    /// List-only mode used by the product data page.
    #[prop_or_default]
    pub read_only: bool,
}
