use std::time::{Duration, Instant};

use tracing::debug;

use crate::Result;
use crate::http::request::Request;
use crate::http::response::Response;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport for one test invocation.
///
/// Each execution builds its own `Client` and drops it on return, so no
/// connection state is shared between calls.
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }

    pub async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method, url = %request.url, "Sending request");

        let mut req = self
            .inner
            .request(request.method.into(), &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let start = Instant::now();
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        Ok(Response::new(status, body))
    }
}
