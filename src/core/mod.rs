pub mod errors;

pub use errors::{Error, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Aggregate counts for one scanned file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSummary {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

/// Statistics report for one file.
///
/// Sections are optional: the selection flags decide which ones get
/// populated, and absent sections are skipped when serializing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CountSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_lines: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_words: Option<BTreeSet<String>>,
}

/// Both prime listings for one `[start, stop)` window.
///
/// `in_range` holds the primes inside the window; `sequence` holds the
/// first `stop - start` primes at or above `start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeReport {
    pub start: u64,
    pub stop: u64,
    pub in_range: Vec<u64>,
    pub sequence: Vec<u64>,
}
