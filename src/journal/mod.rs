pub mod model;
pub mod recorder;
pub mod storage;

pub use model::JournalEntry;
pub use recorder::record_execution;
pub use storage::Journal;
