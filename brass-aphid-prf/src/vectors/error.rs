use thiserror::Error;

use crate::error::KdfError;

/// Everything that can end a known-answer run.
///
/// Known-answer testing has no degraded mode, so every variant is fatal. All
/// but `Io` and `NoTests` carry the 1-based line number they came from.
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// An `m-` line whose field name isn't known.
    #[error("line {line}: unknown line: {content}")]
    UnknownField { line: usize, content: String },

    #[error("line {line}: record never set {field}")]
    MissingField { line: usize, field: &'static str },

    /// The derivation itself refused the record.
    #[error("line {line}: {source}")]
    Derivation { line: usize, source: KdfError },

    /// The derived master secret differs from the expected one.
    #[error("mismatch line: {line}, expected {expected}, derived {actual}")]
    Mismatch {
        line: usize,
        expected: String,
        actual: String,
    },

    /// The rollback-check pair differs from premajor/preminor.
    #[error("version mismatch line: {line}, expected {expected:?}, derived {actual:?}")]
    VersionMismatch {
        line: usize,
        expected: (i32, i32),
        actual: (i32, i32),
    },

    #[error("no tests")]
    NoTests,
}

impl VectorError {
    pub fn line(&self) -> Option<usize> {
        match self {
            VectorError::Io(_) | VectorError::NoTests => None,
            VectorError::Parse { line, .. }
            | VectorError::UnknownField { line, .. }
            | VectorError::MissingField { line, .. }
            | VectorError::Derivation { line, .. }
            | VectorError::Mismatch { line, .. }
            | VectorError::VersionMismatch { line, .. } => Some(*line),
        }
    }
}
