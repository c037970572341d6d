//! Print metrics for observability
//!
//! Counts how many calls reached a console channel, how many were
//! suppressed and why, and how many console writes failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use console_print::PrintMetrics;
///
/// let metrics = PrintMetrics::new();
/// metrics.record_printed();
/// metrics.record_suppressed_by_condition();
///
/// assert_eq!(metrics.printed(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct PrintMetrics {
    /// Calls that reached a console channel
    printed: AtomicU64,

    /// Calls dropped because the ambient environment did not match
    suppressed_by_environment: AtomicU64,

    /// Calls dropped by a condition predicate
    suppressed_by_condition: AtomicU64,

    /// Console writes that returned an error
    write_failures: AtomicU64,
}

impl PrintMetrics {
    pub const fn new() -> Self {
        Self {
            printed: AtomicU64::new(0),
            suppressed_by_environment: AtomicU64::new(0),
            suppressed_by_condition: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_by_environment(&self) -> u64 {
        self.suppressed_by_environment.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_by_condition(&self) -> u64 {
        self.suppressed_by_condition.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Total suppressed calls, whatever the reason
    pub fn suppressed(&self) -> u64 {
        self.suppressed_by_environment() + self.suppressed_by_condition()
    }

    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.printed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed_by_environment(&self) -> u64 {
        self.suppressed_by_environment.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed_by_condition(&self) -> u64 {
        self.suppressed_by_condition.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.printed.store(0, Ordering::Relaxed);
        self.suppressed_by_environment.store(0, Ordering::Relaxed);
        self.suppressed_by_condition.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for PrintMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PrintMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            printed: AtomicU64::new(self.printed()),
            suppressed_by_environment: AtomicU64::new(self.suppressed_by_environment()),
            suppressed_by_condition: AtomicU64::new(self.suppressed_by_condition()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
