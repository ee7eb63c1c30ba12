use reqwest::header::{CONTENT_TYPE, HeaderMap as Headers, HeaderValue};
use serde::Serialize;

use crate::Result;
use crate::http::types::Method;

/// A single outgoing request. The body is kept as text so it can be echoed
/// in diagnostics.
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_string(data)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(json);
        Ok(self)
    }
}
