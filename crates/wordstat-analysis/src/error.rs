use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors from resolving, loading or analysing a source.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No input source provided")]
    InvalidInput,

    #[error("File not found: {source_id}")]
    SourceNotFound {
        source_id: String,
        #[source]
        cause: io::Error,
    },

    #[error("Failed to load \"{name}\"")]
    SourceUnreadable {
        source_id: String,
        name: String,
        #[source]
        cause: io::Error,
    },

    #[error("No words found: average word length is undefined")]
    EmptyAnalysis,

    #[error("Unknown error occurred trying to load \"{source_id}\"")]
    Unknown {
        source_id: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Discriminant of [`AnalysisError`], for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    SourceNotFound,
    SourceUnreadable,
    EmptyAnalysis,
    Unknown,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Self::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            Self::EmptyAnalysis => ErrorKind::EmptyAnalysis,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// Map an I/O failure on `source_id` to `SourceNotFound` or
    /// `SourceUnreadable`.
    pub fn from_io(source_id: &str, cause: io::Error) -> Self {
        if cause.kind() == io::ErrorKind::NotFound {
            Self::SourceNotFound {
                source_id: source_id.to_string(),
                cause,
            }
        } else {
            Self::unreadable(source_id, cause)
        }
    }

    pub fn unreadable(source_id: &str, cause: io::Error) -> Self {
        let name = Path::new(source_id)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_id.to_string());
        Self::SourceUnreadable {
            source_id: source_id.to_string(),
            name,
            cause,
        }
    }

    pub fn unknown(
        source_id: &str,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Unknown {
            source_id: source_id.to_string(),
            cause: cause.into(),
        }
    }

    /// The source identifier this error refers to, if any.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::SourceNotFound { source_id, .. }
            | Self::SourceUnreadable { source_id, .. }
            | Self::Unknown { source_id, .. } => Some(source_id),
            Self::InvalidInput | Self::EmptyAnalysis => None,
        }
    }
}
