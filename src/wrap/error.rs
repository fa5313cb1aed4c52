//! Error types for unwrap-chain traversal.

use std::fmt;

/// Represents a loop in a wrapper chain.
///
/// Returned by [`unwrap`](super::unwrap) and
/// [`unwrap_until`](super::unwrap_until) when following back references
/// revisits a wrapper already seen during the traversal.
///
/// # Examples
///
/// ```rust
/// use toolshed::wrap::CycleError;
///
/// let error = CycleError {
///     wrapper_name: Some("add".to_string()),
/// };
/// assert_eq!(format!("{error}"), "wrapper loop when unwrapping add");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// The name of the wrapper the traversal started from, if it has one.
    pub wrapper_name: Option<String>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.wrapper_name {
            Some(name) => write!(formatter, "wrapper loop when unwrapping {name}"),
            None => write!(formatter, "wrapper loop when unwrapping an anonymous wrapper"),
        }
    }
}

impl std::error::Error for CycleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_display_named() {
        let error = CycleError {
            wrapper_name: Some("decorated".to_string()),
        };
        assert_eq!(format!("{error}"), "wrapper loop when unwrapping decorated");
    }

    #[test]
    fn test_cycle_error_display_anonymous() {
        let error = CycleError { wrapper_name: None };
        assert_eq!(
            format!("{error}"),
            "wrapper loop when unwrapping an anonymous wrapper"
        );
    }
}
