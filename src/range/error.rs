//! Error types for generalized ranges.
//!
//! This module provides the errors raised by [`GRange`](super::GRange)
//! construction and length computation. All errors are raised synchronously
//! at the call that violates the contract; nothing is retried or recovered
//! internally.

use std::fmt;

/// Represents an invalid [`GRange`](super::GRange) configuration.
///
/// Returned by [`GRangeBuilder::build`](super::GRangeBuilder::build) when a
/// required field is missing, and by any constructor when the step does not
/// move the sequence.
///
/// # Examples
///
/// ```rust
/// use toolshed::range::{ConfigurationError, GRange};
///
/// let result = GRange::<i32>::builder().start(1).build();
/// assert_eq!(result.unwrap_err(), ConfigurationError::MissingStep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No starting point was provided.
    MissingStart,
    /// No step was provided.
    MissingStep,
    /// `start + step` neither precedes nor follows `start`, so the range
    /// would never advance (a zero step, or an incomparable result).
    DegenerateStep,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(formatter, "must provide a starting point for GRange"),
            Self::MissingStep => write!(formatter, "must provide a step for GRange"),
            Self::DegenerateStep => write!(formatter, "step does not advance the range"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Represents a length query against an unbounded range.
///
/// An infinite sequence has no integral length, so
/// [`GRange::len`](super::GRange::len) fails with this error whenever the
/// range has no stopping point.
///
/// # Examples
///
/// ```rust
/// use toolshed::range::{GRange, UnboundedError};
///
/// let range = GRange::unbounded(1, 1).unwrap();
/// assert_eq!(range.len(), Err(UnboundedError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnboundedError;

impl fmt::Display for UnboundedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "infinite range has no length")
    }
}

impl std::error::Error for UnboundedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        assert_eq!(
            format!("{}", ConfigurationError::MissingStart),
            "must provide a starting point for GRange"
        );
        assert_eq!(
            format!("{}", ConfigurationError::MissingStep),
            "must provide a step for GRange"
        );
        assert_eq!(
            format!("{}", ConfigurationError::DegenerateStep),
            "step does not advance the range"
        );
    }

    #[test]
    fn test_unbounded_error_display() {
        assert_eq!(format!("{UnboundedError}"), "infinite range has no length");
    }
}
