//! Requests sent to the remote API and the client seam that carries them.
//!
//! The console never talks HTTP directly from the form logic: it builds an
//! `ApiRequest` and hands it to an `ApiClient`. The browser implementation
//! lives in the `frontend` crate (`gloo-net`); tests use an in-memory fake.

mod routes;

#[cfg(test)]
pub(crate) mod fake;

pub use routes::EntityRoute;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::forms::payload::MultipartPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Multipart(MultipartPayload<F>),
    Json(Value),
}

impl<F> RequestBody<F> {
    pub fn as_multipart(&self) -> Option<&MultipartPayload<F>> {
        match self {
            RequestBody::Multipart(payload) => Some(payload),
            RequestBody::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            RequestBody::Multipart(_) => None,
        }
    }
}

/// One call against the API. `path` is relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<F> {
    pub method: Method,
    pub path: String,
    pub body: Option<RequestBody<F>>,
}

/// Transport used by the console.
///
/// `send` resolves to the response body for 2xx statuses and to
/// `ApiError::Status` for everything else.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// Handle type of locally selected files.
    type File;

    async fn send(&self, request: ApiRequest<Self::File>) -> Result<String, ApiError>;
}

/// Fetches every record of a collection.
pub async fn fetch_records<T, C>(client: &C, route: EntityRoute) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
    C: ApiClient,
{
    let body = client.send(route.list_request()).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
