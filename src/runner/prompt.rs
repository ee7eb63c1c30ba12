use inquire::error::InquireError;
use inquire::{Select, Text};

use crate::{Result, VerifyxError};

/// Console seam of the runner.
///
/// `Ok(None)` means the user cancelled the prompt (Esc / Ctrl-C); the runner
/// treats that as "back".
pub trait Prompter {
    /// Let the user pick one of `options`, returning its index
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>>;

    /// Ask for one line of free text
    fn text(&mut self, message: &str) -> Result<Option<String>>;

    /// Block until the user confirms they have read the output
    fn acknowledge(&mut self, message: &str) -> Result<()>;
}

/// Terminal prompts backed by `inquire`
pub struct InquirePrompter {
    page_size: usize,
}

impl InquirePrompter {
    pub fn new() -> Self {
        Self { page_size: 15 }
    }
}

impl Default for InquirePrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn cancelled<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(VerifyxError::Prompt(e.to_string())),
    }
}

impl Prompter for InquirePrompter {
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>> {
        let answer = Select::new(title, options.to_vec())
            .with_page_size(self.page_size)
            .raw_prompt();
        Ok(cancelled(answer)?.map(|option| option.index))
    }

    fn text(&mut self, message: &str) -> Result<Option<String>> {
        let answer = Text::new(message)
            .with_validator(inquire::required!())
            .prompt();
        cancelled(answer)
    }

    fn acknowledge(&mut self, message: &str) -> Result<()> {
        let answer = Text::new(message)
            .with_help_message("Enter to continue")
            .prompt();
        cancelled(answer).map(|_| ())
    }
}
