//! Error type shared by the remapping pipeline.

use std::path::{Path, PathBuf};

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening, reading, creating or writing `path` failed.
    #[error("i/o on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line `line` (1-based) of `path` is not a pair of integers.
    /// The path is empty when the lines did not come from a file.
    #[error("{path:?} line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: ParseReason,
    },

    /// More distinct vertices than fit in a dense `u32` id.
    #[error("more than {} distinct vertices", u32::MAX as u64 + 1)]
    TooManyVertices,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseReason {
    #[error("expected at least two tokens, found {0}")]
    TooFewTokens(usize),
    #[error("invalid utf-8")]
    Utf8,
    #[error("not a non-negative integer: {0:?}")]
    NotAnInteger(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_owned(),
            source,
        }
    }

    /// Fills in the path of a parse error that was raised without one.
    pub(crate) fn at(self, file: &Path) -> Self {
        match self {
            Error::Parse { path, line, reason } if path.as_os_str().is_empty() => Error::Parse {
                path: file.to_owned(),
                line,
                reason,
            },
            other => other,
        }
    }
}
