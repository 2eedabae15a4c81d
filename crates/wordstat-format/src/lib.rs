//! # wordstat-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `wordstat` results.
//!
//! ## What belongs here
//! * The canonical text report
//! * JSON receipt construction and serialization
//!
//! ## What does NOT belong here
//! * Business logic (counting, rounding)
//! * CLI arg parsing

use std::fmt::Write as _;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use wordstat_types::{
    AnalysisArgsMeta, AnalysisReceipt, AnalysisResult, OutputFormat, SCHEMA_VERSION, ToolInfo,
};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Render the text report, one newline-terminated line per fact.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut s = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(s, "Word count = {}", result.count());
    let _ = writeln!(s, "Average word length = {}", result.average_length());
    for (len, n) in result.words_of_length() {
        let _ = writeln!(s, "Number of words of length {len} is {n}");
    }
    let _ = writeln!(
        s,
        "The most frequently occurring word length is {}, for word lengths of {}",
        result.most_frequent_length(),
        join_lengths(result.most_frequent_lengths())
    );

    s
}

/// Join lengths as `A`, `A & B`, or `A, B, ... & Z`.
pub fn join_lengths(lengths: &[usize]) -> String {
    match lengths {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|l| l.to_string()).collect();
            format!("{} & {last}", head.join(", "))
        }
    }
}

pub fn create_receipt(
    source: &str,
    args: AnalysisArgsMeta,
    report: AnalysisResult,
) -> AnalysisReceipt {
    AnalysisReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        source: source.to_string(),
        args,
        report,
    }
}

/// Write `receipt` to `out` in the requested format.
pub fn write_analysis_to<W: Write>(
    out: &mut W,
    receipt: &AnalysisReceipt,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            out.write_all(render_report(&receipt.report).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, receipt)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_single() {
        assert_eq!(join_lengths(&[5]), "5");
    }

    #[test]
    fn join_pair_uses_ampersand() {
        assert_eq!(join_lengths(&[4, 5]), "4 & 5");
    }

    #[test]
    fn join_many_has_no_comma_before_ampersand() {
        assert_eq!(join_lengths(&[4, 5, 7]), "4, 5 & 7");
        assert_eq!(join_lengths(&[1, 2, 3, 4]), "1, 2, 3 & 4");
    }

    #[test]
    fn join_empty_is_empty() {
        assert_eq!(join_lengths(&[]), "");
    }
}
