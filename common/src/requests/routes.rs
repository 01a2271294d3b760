use super::{ApiRequest, Method, RequestBody};

/// The collections the console manages on the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRoute {
    Products,
    Blogs,
    ExtraSubProducts,
    Headings,
    Testimonials,
    Certificates,
    AboutImages,
}

impl EntityRoute {
    /// `GET` path of the whole collection.
    pub fn collection_path(self) -> &'static str {
        match self {
            EntityRoute::Products => "/api/products",
            EntityRoute::Blogs => "/api/blogs",
            EntityRoute::ExtraSubProducts => "/api/extrasubproducts",
            EntityRoute::Headings => "/api/heading",
            EntityRoute::Testimonials => "/api/testimonials",
            EntityRoute::Certificates => "/api/certificates",
            EntityRoute::AboutImages => "/vimalabout",
        }
    }

    /// `POST` path for a new record. Most collections use `<collection>/add`;
    /// headings and about-us images take the post on the collection itself.
    pub fn create_path(self) -> String {
        match self {
            EntityRoute::Headings | EntityRoute::AboutImages => self.collection_path().to_string(),
            _ => format!("{}/add", self.collection_path()),
        }
    }

    pub fn item_path(self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), id.trim())
    }

    pub fn list_request<F>(self) -> ApiRequest<F> {
        ApiRequest {
            method: Method::Get,
            path: self.collection_path().to_string(),
            body: None,
        }
    }

    pub fn create_request<F>(self, body: RequestBody<F>) -> ApiRequest<F> {
        ApiRequest {
            method: Method::Post,
            path: self.create_path(),
            body: Some(body),
        }
    }

    pub fn update_request<F>(self, id: &str, body: RequestBody<F>) -> ApiRequest<F> {
        ApiRequest {
            method: Method::Put,
            path: self.item_path(id),
            body: Some(body),
        }
    }

    pub fn delete_request<F>(self, id: &str) -> ApiRequest<F> {
        ApiRequest {
            method: Method::Delete,
            path: self.item_path(id),
            body: None,
        }
    }
}
