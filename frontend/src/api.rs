//! Browser transport: every `ApiRequest` built in `common` goes out through
//! `gloo-net` against the configured API origin.
//!
//! Multipart payloads become a `FormData`; JSON bodies are sent with
//! `Content-Type: application/json`. Any non-2xx answer is turned into an
//! `ApiError` with the backend's message so the pages can tell duplicates
//! from other failures.

use std::rc::Rc;

use common::config::ConsoleConfig;
use common::error::ApiError;
use common::forms::{MultipartPayload, PartBody};
use common::requests::{ApiClient, ApiRequest, Method, RequestBody};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

#[derive(Clone, PartialEq)]
pub struct GlooClient {
    config: Rc<ConsoleConfig>,
}

impl GlooClient {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl ApiClient for GlooClient {
    type File = File;

    async fn send(&self, request: ApiRequest<File>) -> Result<String, ApiError> {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let outgoing = match request.body {
            None => builder.build(),
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(payload)) => builder.body(form_data(payload)?),
        }
        .map_err(|err| ApiError::Transport(err.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if response.ok() {
            Ok(body)
        } else {
            Err(ApiError::from_response(status, &body))
        }
    }
}

/// Files keep their own name as the multipart filename.
fn form_data(payload: MultipartPayload<File>) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for part in payload.into_parts() {
        match part.body {
            PartBody::Text(text) => data.append_with_str(&part.name, &text),
            PartBody::File(file) => {
                data.append_with_blob_and_filename(&part.name, &file, &file.name())
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}
