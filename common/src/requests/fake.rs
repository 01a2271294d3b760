//! In-memory `ApiClient` for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ApiClient, ApiRequest};
use crate::error::ApiError;

/// Stand-in for a browser file handle.
pub(crate) type TestFile = &'static str;

/// Records every request and answers from a queue of canned responses.
/// An empty queue answers `Ok("[]")`.
#[derive(Default)]
pub(crate) struct FakeClient {
    requests: RefCell<Vec<ApiRequest<TestFile>>>,
    responses: RefCell<VecDeque<Result<String, ApiError>>>,
}

impl FakeClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond_ok(&self, body: &str) {
        self.responses.borrow_mut().push_back(Ok(body.to_string()));
    }

    pub(crate) fn respond_status(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::from_response(status, body)));
    }

    pub(crate) fn respond_transport_error(&self) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest<TestFile>> {
        self.requests.borrow().clone()
    }
}

impl ApiClient for FakeClient {
    type File = TestFile;

    async fn send(&self, request: ApiRequest<TestFile>) -> Result<String, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("[]".to_string()))
    }
}
