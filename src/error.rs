//! Error types for annotext.
//!
//! The cleaning and matching core is infallible; errors only arise at the
//! edges: loading glossary files, building custom rule sets, and CLI I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for annotext operations.
pub type AnnotextResult<T> = Result<T, AnnotextError>;

/// Error type for the fallible edges of the library.
#[derive(Debug)]
pub enum AnnotextError {
    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },

    /// A glossary file or string could not be interpreted
    GlossaryFormat {
        path: Option<PathBuf>,
        reason: String,
    },

    /// A formatting rule pattern failed to compile
    PatternError { pattern: String, reason: String },

    /// Invalid configuration or parameters
    InvalidInput { parameter: String, reason: String },
}

impl fmt::Display for AnnotextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
            Self::GlossaryFormat { path, reason } => {
                if let Some(p) = path {
                    write!(f, "Invalid glossary in '{}': {}", p.display(), reason)
                } else {
                    write!(f, "Invalid glossary: {}", reason)
                }
            }
            Self::PatternError { pattern, reason } => {
                write!(f, "Pattern error for '{}': {}", pattern, reason)
            }
            Self::InvalidInput { parameter, reason } => {
                write!(f, "Invalid input for '{}': {}", parameter, reason)
            }
        }
    }
}

impl std::error::Error for AnnotextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for AnnotextError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<regex::Error> for AnnotextError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnnotextError {
    fn from(err: serde_json::Error) -> Self {
        Self::GlossaryFormat {
            path: None,
            reason: err.to_string(),
        }
    }
}
