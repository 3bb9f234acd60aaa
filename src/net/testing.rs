//! In-memory transport for tests: replays canned responses and records requests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiClient, ApiRequest, Transport};
use super::error::ApiError;

#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<String, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a 2xx response with `body`.
    pub(crate) fn ok(self, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.into()));
        self
    }

    /// Queue a 2xx response with `value` serialized as JSON.
    pub(crate) fn ok_json(self, value: &serde_json::Value) -> Self {
        self.ok(value.to_string())
    }

    /// Queue a non-2xx response.
    pub(crate) fn status(self, status: u16) -> Self {
        self.responses.borrow_mut().push_back(Err(ApiError::Http {
            status,
            reason: String::new(),
        }));
        self
    }

    /// Queue a transport failure.
    pub(crate) fn network_error(self) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network("connection refused".to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn client(&self) -> ApiClient<&Self> {
        ApiClient::new(self)
    }
}

impl Transport for &FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no canned response".to_owned())))
    }
}
