//! Error types shared by every stage of the ranking pipeline.

use thiserror::Error;

/// Errors that can occur while importing a graph or ranking it.
#[derive(Error, Debug)]
pub enum Error {
    /// The edge-list file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge record did not match `source|destination|weight`.
    #[error("malformed edge record on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Matrix element access outside the matrix shape.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Two matrices with incompatible shapes were combined.
    #[error("{op}: incompatible shapes {lhs:?} and {rhs:?}")]
    Dimension {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A vertex has no outgoing weight and sinks are rejected.
    #[error("vertex `{vertex}` has zero total outgoing weight")]
    RankSink { vertex: String },

    /// Configuration or result JSON could not be decoded or encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for rapid-pagerank.
pub type Result<T> = std::result::Result<T, Error>;
