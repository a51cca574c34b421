//! Error types for loading a network.

use std::path::PathBuf;
use thiserror::Error;

/// Why a network source could not be turned into a graph.
///
/// Every variant means the same thing to a session: the load failed and
/// no graph is available. The variants exist for diagnostics.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line is missing or is not a non-negative integer.
    #[error("invalid member count header {header:?}")]
    HeaderInvalid { header: String },

    /// A data line has no names or more than two names.
    #[error("line {line}: expected 1 or 2 member names, found {tokens}")]
    RecordInvalid { line: usize, tokens: usize },

    /// The number of distinct members differs from the header.
    #[error("header declares {declared} members but the network has {actual}")]
    CountMismatch { declared: usize, actual: usize },
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
