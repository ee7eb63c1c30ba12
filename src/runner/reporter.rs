use crate::catalog::{ParameterValues, TestResult};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Table};

pub struct ResultReporter {
    show_parameters: bool,
}

impl ResultReporter {
    pub fn new(show_parameters: bool) -> Self {
        Self { show_parameters }
    }

    pub fn print_banner(&self) {
        println!("\n{}", "━".repeat(50).cyan());
        println!("{}", "  VerifyX".cyan().bold());
        println!("{}\n", "━".repeat(50).cyan());
    }

    pub fn print_running(&self, method: &str) {
        println!("{} {}...", "Running".green(), method.bold());
    }

    pub fn print_result(&self, result: &TestResult, parameters: &ParameterValues) {
        println!("{}", self.render(result, parameters));
    }

    /// Build the text shown after one execution
    pub fn render(&self, result: &TestResult, parameters: &ParameterValues) -> String {
        let mut output = Vec::new();

        if result.success {
            output.push("✓ Test passed".green().bold().to_string());
        } else {
            output.push("✗ Test failed".red().bold().to_string());
        }
        output.push(format!("{}: {}", "Address".cyan(), result.request_address));

        if let Some(error) = result.error_message.as_deref().filter(|e| !e.trim().is_empty()) {
            output.push(format!("{}: {}", "Error".red().bold(), error));
        }

        let body = result.response_text();
        if !body.trim().is_empty() {
            let label = if result.success {
                "Response".green().bold()
            } else {
                "Server response".yellow().bold()
            };
            output.push(format!("{}:", label));
            output.push(try_format_json(body).unwrap_or_else(|| body.to_string()));
        } else if result.success {
            output.push("(empty response)".dimmed().to_string());
        }

        if self.show_parameters && !parameters.is_empty() {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec![
                Cell::new("Parameter").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]);
            for (key, value) in parameters.iter() {
                table.add_row(vec![Cell::new(key), Cell::new(value)]);
            }
            output.push(table.to_string());
        }

        output.join("\n")
    }
}

impl Default for ResultReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Pretty-print `body` when it is valid JSON
fn try_format_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
