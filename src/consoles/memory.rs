//! In-memory console capturing records instead of printing them

use crate::core::{Channel, Console, ConsoleRecord, Result};
use parking_lot::Mutex;

/// Console that keeps every record it receives.
///
/// Useful in tests and anywhere output has to be inspected rather than shown.
///
/// # Example
///
/// ```
/// use console_print::prelude::*;
/// use std::sync::Arc;
///
/// let console = Arc::new(MemoryConsole::new());
/// let print = Print::builder()
///     .console(console.clone())
///     .without_ambient_environment()
///     .build();
///
/// print.warn(args!["careful"]);
/// assert_eq!(console.records_on(Channel::Warn).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConsole {
    records: Mutex<Vec<ConsoleRecord>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record so far, oldest first
    pub fn records(&self) -> Vec<ConsoleRecord> {
        self.records.lock().clone()
    }

    pub fn records_on(&self, channel: Channel) -> Vec<ConsoleRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.channel == channel)
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<ConsoleRecord> {
        self.records.lock().last().cloned()
    }

    /// Remove and return every record
    pub fn take(&self) -> Vec<ConsoleRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn write(&self, record: &ConsoleRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
