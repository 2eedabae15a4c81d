//! # wordstat-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures.
//!
//! ## What belongs here
//! * Clap `Parser` structs
//! * Configuration file struct definitions (Serde)
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations

use std::collections::BTreeMap;

use clap::Parser;
use serde::{Deserialize, Serialize};
pub use wordstat_settings::{AnalyzeSettings, MAX_PRECISION};
pub use wordstat_types::OutputFormat;

/// `wordstat` reads the contents of a plain text file and displays the total
/// number of words, the average word length, the most frequently occurring
/// word length, and the number of words of each length.
#[derive(Parser, Debug)]
#[command(name = "wordstat", version, long_about = None)]
pub struct Cli {
    /// The file containing the words to count (path, `file:` URI, or `-` for stdin).
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read the source line by line instead of loading it whole.
    #[arg(long)]
    pub stream: bool,

    /// Characters removed from every token before classification
    /// [default: -+.^:?,=()].
    #[arg(long, value_name = "CHARS", allow_hyphen_values = true)]
    pub punctuation: Option<String>,

    /// Fractional digits of the average word length [default: 3].
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64))]
    pub precision: Option<u32>,

    /// Configuration profile to use (from the user config file).
    #[arg(long)]
    pub profile: Option<String>,

    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Root of `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserConfig {
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub format: Option<String>, // "text", "json"
    pub punctuation: Option<String>,
    pub precision: Option<u32>,
    pub stream: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "wordstat",
            "--format",
            "json",
            "--stream",
            "--punctuation",
            ".,",
            "--precision",
            "5",
            "--profile",
            "ci",
            "-vv",
            "words.txt",
        ])
        .unwrap();
        assert_eq!(cli.source.as_deref(), Some("words.txt"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.stream);
        assert_eq!(cli.punctuation.as_deref(), Some(".,"));
        assert_eq!(cli.precision, Some(5));
        assert_eq!(cli.profile.as_deref(), Some("ci"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn punctuation_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["wordstat", "--punctuation", "-+./", "a.txt"]).unwrap();
        assert_eq!(cli.punctuation.as_deref(), Some("-+./"));
        assert_eq!(cli.source.as_deref(), Some("a.txt"));
    }

    #[test]
    fn source_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["wordstat"]).unwrap();
        assert!(cli.source.is_none());
    }

    #[test]
    fn precision_above_max_is_rejected() {
        assert!(Cli::try_parse_from(["wordstat", "--precision", "10", "a.txt"]).is_err());
    }

    #[test]
    fn profile_parses_partial_json() {
        let cfg: UserConfig =
            serde_json::from_str(r#"{"profiles":{"ci":{"format":"json","stream":true}}}"#)
                .unwrap();
        let ci = &cfg.profiles["ci"];
        assert_eq!(ci.format.as_deref(), Some("json"));
        assert_eq!(ci.stream, Some(true));
        assert_eq!(ci.precision, None);
    }
}
