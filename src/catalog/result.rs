/// Normalized outcome of one execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Whether the call reached the server and got a 2xx status
    pub success: bool,

    /// Raw response body, absent when no response was received
    pub response_content: Option<String>,

    /// Status summary, validation failure or transport error
    pub error_message: Option<String>,

    /// Fully resolved address the request was sent to
    pub request_address: String,
}

impl TestResult {
    pub fn success(request_address: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            success: true,
            response_content: Some(body.into()),
            error_message: None,
            request_address: request_address.into(),
        }
    }

    /// The server answered, but not with a success status
    pub fn failure(
        request_address: impl Into<String>,
        body: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            response_content: Some(body.into()),
            error_message: Some(error.into()),
            request_address: request_address.into(),
        }
    }

    /// No response was received
    pub fn error(request_address: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            response_content: None,
            error_message: Some(error.into()),
            request_address: request_address.into(),
        }
    }

    pub fn response_text(&self) -> &str {
        self.response_content.as_deref().unwrap_or_default()
    }
}
