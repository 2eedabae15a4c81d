//! # wordstat-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the analysis and format layers.
//! These types mirror CLI arguments without Clap dependencies,
//! making them suitable for library consumers.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values and clamping
//!
//! ## What does NOT belong here
//! * Clap parsing (use wordstat-config)
//! * I/O operations
//! * Business logic

use serde::{Deserialize, Serialize};
pub use wordstat_tokenize::DEFAULT_PUNCTUATION;
pub use wordstat_types::{DEFAULT_PRECISION, OutputFormat};

/// Largest accepted number of fractional digits for the average.
pub const MAX_PRECISION: u32 = 9;

/// Settings for one analysis run (`wordstat <SOURCE>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSettings {
    /// Path, `file:` URI, or `-` for stdin. `None` is rejected at run time.
    #[serde(default)]
    pub source: Option<String>,

    /// Characters stripped from every token.
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Fractional digits of the average word length.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Read line by line instead of loading the whole source.
    #[serde(default)]
    pub stream: bool,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            source: None,
            punctuation: default_punctuation(),
            precision: DEFAULT_PRECISION,
            stream: false,
            format: OutputFormat::Text,
        }
    }
}

impl AnalyzeSettings {
    /// Settings for analysing `source` with defaults.
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }

    /// Precision clamped to [`MAX_PRECISION`].
    pub fn effective_precision(&self) -> u32 {
        self.precision.min(MAX_PRECISION)
    }
}
