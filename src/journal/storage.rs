use super::model::JournalEntry;
use crate::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Daily append-only execution log, one `<YYYY-MM-DD>.log` file per day
#[derive(Debug, Clone)]
pub struct Journal {
    dir: PathBuf,
}

impl Journal {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.log", date.format("%Y-%m-%d")))
    }

    /// Append an entry stamped with the current local time
    pub fn record(&self, entry: &JournalEntry) -> Result<PathBuf> {
        self.record_at(entry, Local::now().naive_local())
    }

    /// Append an entry to the file of `timestamp`'s day.
    ///
    /// The file is locked exclusively while the entry is written so that two
    /// harness processes never interleave entries.
    pub fn record_at(&self, entry: &JournalEntry, timestamp: NaiveDateTime) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_for(timestamp.date());

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        file.lock_exclusive()?;
        file.write_all(entry.format(timestamp).as_bytes())?;
        file.flush()?;
        // Unlock on drop

        Ok(path)
    }
}
