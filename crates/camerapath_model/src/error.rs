// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for keyframe and spline operations.

use thiserror::Error;

/// Errors reported by the keyframe table and the spline channels.
///
/// All of these are local, recoverable conditions: the failed operation
/// leaves the model unchanged and the caller decides what to do next.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A keyframe already owns the requested time value.
    #[error("a keyframe already exists at t = {time} (index {index})")]
    DuplicateTime {
        /// The colliding time value.
        time: f64,
        /// Index of the keyframe that already owns it.
        index: usize,
    },

    /// Keyframe index outside `[0, count)`.
    #[error("keyframe index {index} out of range (table holds {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of keyframes currently in the table.
        count: usize,
    },

    /// Spline parameter outside the parametric domain.
    #[error("parameter t = {t} outside of range [{min}, {max}]")]
    OutOfDomain {
        /// The requested parameter.
        t: f64,
        /// Lower domain bound.
        min: f64,
        /// Upper domain bound.
        max: f64,
    },

    /// Required argument missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Evaluation requested before the path was created.
    #[error("path has not been created yet")]
    NotReady,
}

/// Specialized result type for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
