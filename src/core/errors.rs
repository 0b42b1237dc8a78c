//! Shared error types for the estimation engine

use crate::core::types::{ComplexityLevel, FunctionPointType};
use thiserror::Error;

/// Main error type for fpmeter operations.
///
/// Validation errors describe expected bad input (an empty function point
/// set, a malformed GSC score sheet) and are turned into `Failed`
/// calculation results by the pipeline. Everything else indicates an
/// internal defect or an infrastructure problem and propagates to the
/// caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A project with no function points cannot be sized
    #[error("function point set is empty")]
    EmptyFunctionPointSet,

    /// GSC score sheet has the wrong number of entries
    #[error("expected exactly 14 GSC scores, found {found}")]
    GscScoreCount { found: usize },

    /// GSC score outside the standard 0-5 influence range
    #[error("GSC factor {factor} has score {score}, outside the range 0..=5")]
    GscScoreOutOfRange { factor: String, score: i64 },

    /// The same GSC factor appears more than once in a score sheet
    #[error("GSC factor {factor} appears more than once")]
    DuplicateGscFactor { factor: String },

    /// Unknown GSC factor identifier at the parse boundary
    #[error("unknown GSC factor: {0}")]
    UnknownGscFactor(String),

    /// Unknown function point type at the parse boundary
    #[error("unsupported function point type: {0}")]
    UnsupportedFunctionPointType(String),

    /// Unknown reuse level at the parse boundary
    #[error("unsupported reuse level: {0}")]
    UnsupportedReuseLevel(String),

    /// A weight table with no entry for a classified function point.
    /// Unreachable with the standard table; only a user-supplied
    /// override table can produce it.
    #[error("no weight configured for {fp_type} at {level} complexity")]
    MissingWeight {
        fp_type: FunctionPointType,
        level: ComplexityLevel,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for expected operating conditions that should become a
    /// `Failed` result rather than abort the caller.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyFunctionPointSet
                | Error::GscScoreCount { .. }
                | Error::GscScoreOutOfRange { .. }
                | Error::DuplicateGscFactor { .. }
                | Error::UnknownGscFactor(_)
                | Error::UnsupportedFunctionPointType(_)
                | Error::UnsupportedReuseLevel(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
