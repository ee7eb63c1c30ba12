use crate::catalog::{ParameterValues, TestResult};
use crate::journal::model::JournalEntry;
use crate::journal::storage::Journal;
use colored::Colorize;
use tracing::{debug, warn};

/// Record one execution in the journal.
///
/// Best-effort: a failed write is reported on the console and never aborts
/// the run. Returns whether the entry was written.
pub fn record_execution(
    journal: &Journal,
    module: &str,
    method: &str,
    parameters: &ParameterValues,
    result: &TestResult,
) -> bool {
    let entry = JournalEntry::from_result(module, method, parameters, result);

    match journal.record(&entry) {
        Ok(path) => {
            debug!(path = %path.display(), "Execution journaled");
            true
        }
        Err(e) => {
            warn!("Failed to write execution journal: {}", e);
            println!("{} {}", "Logging failed:".red(), e);
            false
        }
    }
}
