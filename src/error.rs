//! Error types for cg-raster operations.
//!
//! Only caller mistakes are errors. Degenerate geometry (zero-length lines,
//! flat ellipse boxes, too few curve control points) and rejected clips are
//! ordinary results.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cg-raster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An algorithm tag that no algorithm family recognizes.
    #[error("Unknown {family} algorithm: {tag:?}")]
    UnknownAlgorithm {
        /// Algorithm family the tag was parsed for (line, curve, clip).
        family: &'static str,
        /// The offending tag.
        tag: String,
    },

    /// A primitive kind name that is not one of line, polygon, ellipse, curve.
    #[error("Unknown primitive kind: {0:?}")]
    UnknownPrimitive(String),

    /// A parameter list with the wrong number of points for its primitive.
    #[error("{kind} expects {expected} points, got {actual}")]
    PointCount {
        /// Primitive kind name.
        kind: &'static str,
        /// Human readable expectation ("2", "at least 1").
        expected: &'static str,
        /// Number of points supplied.
        actual: usize,
    },

    /// Clip window with min greater than max on some axis.
    #[error("Invalid clip window: ({x_min}, {y_min}) to ({x_max}, {y_max})")]
    InvalidClipWindow {
        /// Left edge.
        x_min: i32,
        /// Bottom edge.
        y_min: i32,
        /// Right edge.
        x_max: i32,
        /// Top edge.
        y_max: i32,
    },

    /// A transform that is not defined for the primitive's parameter list.
    #[error("{transform} is not supported for {kind}")]
    UnsupportedTransform {
        /// Primitive kind name.
        kind: &'static str,
        /// Transform name.
        transform: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the failure (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
