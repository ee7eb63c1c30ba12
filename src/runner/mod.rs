pub mod prompt;
pub mod reporter;
pub mod session;

pub use prompt::{InquirePrompter, Prompter};
pub use reporter::ResultReporter;
pub use session::{MenuState, TestRunner};
