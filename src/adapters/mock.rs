//! In-memory `UrlReader` for tests and dry runs.
//!
//! Unknown URLs read as not found. Every requested URL is recorded.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ReadError, ReadResponse, UrlReader};

#[derive(Debug, Clone)]
enum MockResponse {
    Content(String),
    Status(u16),
}

/// Scripted URL reader.
#[derive(Debug, Default)]
pub struct MockUrlReader {
    responses: Mutex<HashMap<String, MockResponse>>,
    calls: Mutex<Vec<String>>,
}

impl MockUrlReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` for `url`.
    pub fn respond(&self, url: &str, content: &str) {
        self.lock_responses()
            .insert(url.to_string(), MockResponse::Content(content.to_string()));
    }

    /// Fail reads of `url` with an HTTP `status`.
    pub fn fail(&self, url: &str, status: u16) {
        self.lock_responses()
            .insert(url.to_string(), MockResponse::Status(status));
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockResponse>> {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UrlReader for MockUrlReader {
    async fn read_url(&self, url: &str) -> Result<ReadResponse, ReadError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        match self.lock_responses().get(url).cloned() {
            Some(MockResponse::Content(content)) => Ok(ReadResponse::new(content.into_bytes())),
            Some(MockResponse::Status(404)) | None => Err(ReadError::NotFound(url.to_string())),
            Some(MockResponse::Status(status)) => Err(ReadError::Http {
                url: url.to_string(),
                status,
            }),
        }
    }
}
