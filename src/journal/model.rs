use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::catalog::{ParameterValues, TestResult};

pub const DELIMITER: &str = "--------------------------------------------------";

/// One execution as it is written to the daily journal
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub module: String,
    pub method: String,
    pub request_address: String,
    pub parameters: ParameterValues,
    pub response: Option<String>,
    pub error: Option<String>,
}

impl JournalEntry {
    pub fn from_result(
        module: &str,
        method: &str,
        parameters: &ParameterValues,
        result: &TestResult,
    ) -> Self {
        Self {
            module: module.to_string(),
            method: method.to_string(),
            request_address: result.request_address.clone(),
            parameters: parameters.clone(),
            response: result.response_content.clone(),
            error: result.error_message.clone(),
        }
    }

    /// Render the entry, delimiters included
    pub fn format(&self, timestamp: NaiveDateTime) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{DELIMITER}");
        let _ = writeln!(out, "Timestamp: {}", timestamp.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out, "Module: {}", self.module);
        let _ = writeln!(out, "Method: {}", self.method);
        let _ = writeln!(out, "Request Address: {}", self.request_address);
        let _ = writeln!(out, "Parameters:");
        for (key, value) in self.parameters.iter() {
            let _ = writeln!(out, "  {key}: {value}");
        }
        let _ = writeln!(out, "Response:");
        let _ = writeln!(out, "{}", self.response.as_deref().unwrap_or_default());
        if let Some(error) = self.error.as_deref().filter(|e| !e.trim().is_empty()) {
            let _ = writeln!(out, "Error:");
            let _ = writeln!(out, "{error}");
        }
        let _ = writeln!(out, "{DELIMITER}");
        out
    }
}
