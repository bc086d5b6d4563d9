use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Filesystem step that failed while persisting the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    CreateDir,
    Read,
    Write,
    Rename,
    Remove,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileOp::CreateDir => "create directory",
            FileOp::Read => "read",
            FileOp::Write => "write",
            FileOp::Rename => "replace",
            FileOp::Remove => "remove",
        })
    }
}

/// Errors raised while persisting the session token.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to {op} {path}: {source} {location}")]
    Io {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session file {path} is not a token document: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to encode session: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Refusing to store an empty session token {location}")]
    EmptyToken { location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn io(op: FileOp, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(path: &Path, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path: path.to_path_buf(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_token() -> Self {
        Self::EmptyToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
