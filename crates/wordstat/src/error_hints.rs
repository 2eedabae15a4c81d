use anyhow::Error;
use wordstat_core::{AnalysisError, ErrorKind};

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if let Some(kind) = err.downcast_ref::<AnalysisError>().map(AnalysisError::kind) {
        match kind {
            ErrorKind::InvalidInput => {
                push_hint(&mut out, "Pass the file to analyse: `wordstat <SOURCE>`.");
                push_hint(&mut out, "Use `-` to read from standard input.");
            }
            ErrorKind::SourceNotFound => {
                push_hint(&mut out, "Verify the input path exists and is readable.");
                push_hint(
                    &mut out,
                    "Use an absolute path to avoid working-directory confusion.",
                );
            }
            ErrorKind::EmptyAnalysis => {
                push_hint(
                    &mut out,
                    "The input has no words: numbers and bare punctuation are not counted.",
                );
            }
            ErrorKind::Unknown => {
                push_hint(
                    &mut out,
                    "Only local paths, `file:` URIs and `-` (stdin) are supported.",
                );
            }
            ErrorKind::SourceUnreadable => {}
        }
    }

    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();

    if haystack.contains("permission denied") {
        push_hint(&mut out, "Check the file permissions of the input.");
    }

    if haystack.contains("is a directory") {
        push_hint(&mut out, "Pass a file, not a directory.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
