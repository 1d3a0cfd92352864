use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from loading the input documents or writing the results.
///
/// Unmatched sales are not errors; they end up in [`crate::Report::warnings`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error reading file {}: expected a JSON array of records", path.display())]
    NotAnArray { path: PathBuf },

    #[error("Malformed record {index} in {}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    #[error("writing results: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    /// Reports whether this error came from reading or parsing an input
    /// document, as opposed to a bad record inside an otherwise valid one.
    #[must_use]
    pub fn is_input_access(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Parse { .. } | Self::NotAnArray { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
