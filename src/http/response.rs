use crate::http::types::Status;

pub struct Response {
    pub status: Status,
    pub body: String,
}

impl Response {
    pub fn new(status: impl Into<Status>, body: String) -> Self {
        Self {
            status: status.into(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
