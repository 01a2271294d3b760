use yew::Properties;

use crate::api::GlooClient;

pub mod blogs;
pub mod controls;
pub mod dashboard;
pub mod extra_subproducts;
pub mod gallery;
pub mod headings;
pub mod helpers;
pub mod login;
pub mod products;
pub mod sidebar;
pub mod testimonials;

/// Properties of every page that only needs the API client.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub client: GlooClient,
}
