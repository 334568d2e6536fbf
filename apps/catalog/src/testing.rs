use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::FetchError;
use crate::pipeline::{CatalogResponse, CatalogSource};

#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    status_text: String,
    body: String,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self::status(200, "OK", body)
    }

    pub fn status(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }
}

impl CatalogResponse for StubResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn status_text(&self) -> String {
        self.status_text.clone()
    }

    async fn json(self) -> Result<Value, FetchError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Canned responses keyed by URL. Unknown URLs fail at the transport level.
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: HashMap<String, StubResponse>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, response: StubResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl CatalogSource for MemorySource {
    type Response = StubResponse;

    async fn get(&self, url: &str) -> Result<StubResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NetworkFailure(format!("connection refused: {url}")))
    }
}
