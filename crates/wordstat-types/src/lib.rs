//! # wordstat-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `wordstat`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * The immutable [`AnalysisResult`] and its derived statistics
//! * The JSON [`AnalysisReceipt`] envelope
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Tokenization or counting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
pub use wordstat_math::FixedDecimal;
use wordstat_math::{div_round_half_up, max_with_ties};

/// The current schema version for the JSON receipt.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of fractional digits used for the average word length.
pub const DEFAULT_PRECISION: u32 = 3;

/// Word statistics for one analysis run.
///
/// Built once from a completed length histogram and never mutated. Every
/// value is derived from `words_of_length`, so `count` always equals the sum
/// of the histogram and `total_length` the sum of `length * occurrences`.
/// There is no empty result: a histogram with no words yields `None` from
/// [`AnalysisResult::from_histogram`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalysisResult")]
pub struct AnalysisResult {
    count: usize,
    total_length: usize,
    average_length: FixedDecimal,
    words_of_length: BTreeMap<usize, usize>,
    most_frequent_length: usize,
    most_frequent_lengths: Vec<usize>,
}

impl AnalysisResult {
    /// Build a result from a length histogram.
    ///
    /// Buckets with zero occurrences are dropped. The average is rounded
    /// half-up to `precision` fractional digits. Returns `None` when the
    /// histogram holds no words or its totals overflow `usize`.
    pub fn from_histogram(histogram: BTreeMap<usize, usize>, precision: u32) -> Option<Self> {
        let words_of_length: BTreeMap<usize, usize> =
            histogram.into_iter().filter(|(_, n)| *n > 0).collect();

        let count = words_of_length
            .values()
            .try_fold(0usize, |acc, n| acc.checked_add(*n))?;
        let total_length = words_of_length
            .iter()
            .try_fold(0usize, |acc, (len, n)| acc.checked_add(len.checked_mul(*n)?))?;
        let average_length = div_round_half_up(total_length as u64, count as u64, precision)?;

        let (most_frequent_length, most_frequent_lengths) =
            max_with_ties(words_of_length.iter().map(|(len, n)| (*len, *n)));

        Some(Self {
            count,
            total_length,
            average_length,
            words_of_length,
            most_frequent_length,
            most_frequent_lengths,
        })
    }

    /// Number of accepted words.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of all accepted word lengths.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// `total_length / count`, rounded half-up.
    pub fn average_length(&self) -> FixedDecimal {
        self.average_length
    }

    /// Word length to number of words of that length, ascending by length.
    pub fn words_of_length(&self) -> &BTreeMap<usize, usize> {
        &self.words_of_length
    }

    /// The highest occurrence count in the histogram.
    ///
    /// Note this is a number of words, not a length; the lengths reaching it
    /// are [`most_frequent_lengths`](Self::most_frequent_lengths).
    pub fn most_frequent_length(&self) -> usize {
        self.most_frequent_length
    }

    /// Every length whose occurrence count equals the maximum, ascending.
    pub fn most_frequent_lengths(&self) -> &[usize] {
        &self.most_frequent_lengths
    }
}

#[derive(Deserialize)]
struct RawAnalysisResult {
    count: usize,
    total_length: usize,
    average_length: FixedDecimal,
    words_of_length: BTreeMap<usize, usize>,
}

impl TryFrom<RawAnalysisResult> for AnalysisResult {
    type Error = String;

    fn try_from(raw: RawAnalysisResult) -> Result<Self, Self::Error> {
        let precision = raw.average_length.scale();
        let rebuilt = Self::from_histogram(raw.words_of_length, precision)
            .ok_or_else(|| "analysis result has no words or its totals overflow".to_string())?;
        if rebuilt.count != raw.count {
            return Err(format!(
                "count {} does not match histogram total {}",
                raw.count, rebuilt.count
            ));
        }
        if rebuilt.total_length != raw.total_length {
            return Err(format!(
                "total_length {} does not match histogram total {}",
                raw.total_length, rebuilt.total_length
            ));
        }
        if rebuilt.average_length != raw.average_length {
            return Err(format!(
                "average_length {} does not match computed {}",
                raw.average_length, rebuilt.average_length
            ));
        }
        Ok(rebuilt)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "wordstat".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Settings that shaped a run, echoed into the receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisArgsMeta {
    pub punctuation: String,
    pub precision: u32,
    pub stream: bool,
}

/// JSON envelope for `--format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub source: String,
    pub args: AnalysisArgsMeta,
    pub report: AnalysisResult,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Plain text report, one fact per line.
    #[default]
    Text,
    /// A single JSON receipt object.
    Json,
}
