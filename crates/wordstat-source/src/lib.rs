//! # wordstat-source
//!
//! **Tier 2 (Input)**
//!
//! Turns a user-supplied source identifier into readable text.
//!
//! ## What belongs here
//! * Source identifier resolution (paths, `file:` URIs, stdin)
//! * Bulk and buffered loading with lossy UTF-8 decoding
//! * Mapping I/O failures to [`AnalysisError`]
//!
//! ## What does NOT belong here
//! * Tokenization or counting
//! * Report rendering

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use wordstat_analysis::AnalysisError;

/// Identifier that selects standard input.
pub const STDIN_ID: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Path(PathBuf),
    Stdin,
}

/// A source identifier resolved to something that can be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    id: String,
    kind: SourceKind,
}

impl Source {
    /// The identifier exactly as the caller supplied it.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &SourceKind {
        &self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SourceKind::Path(p) => Some(p),
            SourceKind::Stdin => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Resolve a user-supplied identifier.
///
/// `None` or a blank identifier is [`AnalysisError::InvalidInput`] and no
/// I/O is attempted. An identifier that looks like a non-`file` URI is
/// [`AnalysisError::Unknown`] unless a file of that exact name exists.
pub fn resolve(source_id: Option<&str>) -> Result<Source, AnalysisError> {
    let id = match source_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(AnalysisError::InvalidInput),
    };

    let kind = if id == STDIN_ID {
        SourceKind::Stdin
    } else if let Some(rest) = id.strip_prefix("file:") {
        SourceKind::Path(file_uri_path(id, rest)?)
    } else if let Some(scheme) = uri_scheme(id).filter(|_| !Path::new(id).exists()) {
        return Err(AnalysisError::unknown(
            id,
            format!("unsupported URI scheme '{scheme}'"),
        ));
    } else {
        SourceKind::Path(PathBuf::from(id))
    };

    debug!(source = id, ?kind, "resolved source");
    Ok(Source {
        id: id.to_string(),
        kind,
    })
}

/// Read the whole source and decode it as UTF-8, replacing invalid sequences.
pub fn load_text(source: &Source) -> Result<String, AnalysisError> {
    let bytes = match &source.kind {
        SourceKind::Path(path) => {
            std::fs::read(path).map_err(|e| AnalysisError::from_io(&source.id, e))?
        }
        SourceKind::Stdin => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| AnalysisError::from_io(&source.id, e))?;
            buf
        }
    };
    debug!(source = %source, bytes = bytes.len(), "loaded source");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Open the source for buffered, line-by-line reading.
pub fn open_reader(source: &Source) -> Result<Box<dyn BufRead>, AnalysisError> {
    match &source.kind {
        SourceKind::Path(path) => {
            let file = File::open(path).map_err(|e| AnalysisError::from_io(&source.id, e))?;
            if file
                .metadata()
                .map_err(|e| AnalysisError::from_io(&source.id, e))?
                .is_dir()
            {
                return Err(AnalysisError::unreadable(
                    &source.id,
                    io::Error::other("is a directory"),
                ));
            }
            Ok(Box::new(BufReader::new(file)))
        }
        SourceKind::Stdin => Ok(Box::new(io::stdin().lock())),
    }
}

/// `scheme` of `scheme:rest`, ignoring single-letter drive prefixes (`C:`).
fn uri_scheme(id: &str) -> Option<&str> {
    let (scheme, _) = id.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (valid && scheme.len() > 1).then_some(scheme)
}

fn file_uri_path(id: &str, rest: &str) -> Result<PathBuf, AnalysisError> {
    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let (host, path) = match authority_and_path.find('/') {
                Some(idx) => authority_and_path.split_at(idx),
                None => (authority_and_path, ""),
            };
            if !host.is_empty() && !host.eq_ignore_ascii_case("localhost") {
                return Err(AnalysisError::unknown(
                    id,
                    format!("file URI host '{host}' is not local"),
                ));
            }
            path
        }
        None => rest,
    };
    if path.is_empty() {
        return Err(AnalysisError::unknown(id, "file URI has no path"));
    }
    let decoded = percent_decode(path).ok_or_else(|| {
        AnalysisError::unknown(id, "file URI contains invalid percent-encoding")
    })?;
    Ok(PathBuf::from(decoded))
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
