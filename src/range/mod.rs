//! Generalized ranges over arbitrary orderable, addable types.
//!
//! This module provides [`GRange`], a lazily-evaluated, possibly-infinite
//! range analogous to the built-in integer range but generic over any type
//! supporting ordering and addition (dates, floats, ...).
//!
//! # Examples
//!
//! ## Integer ranges
//!
//! ```rust
//! use toolshed::range::GRange;
//!
//! let range = GRange::new(0, 4, 1).unwrap();
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! assert_eq!(range.len(), Ok(4));
//! ```
//!
//! ## Descending ranges
//!
//! ```rust
//! use toolshed::range::GRange;
//!
//! let range = GRange::new(4, 1, -1).unwrap();
//! assert!(range.is_descending());
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![4, 3, 2]);
//! ```
//!
//! ## Unbounded ranges
//!
//! ```rust
//! use toolshed::range::GRange;
//!
//! let range = GRange::unbounded(1, 2).unwrap();
//! let first_five: Vec<_> = range.iter().take(5).collect();
//! assert_eq!(first_five, vec![1, 3, 5, 7, 9]);
//! ```

mod error;
mod grange;
mod item;

pub use error::{ConfigurationError, UnboundedError};
pub use grange::{GRange, GRangeBuilder, GRangeIter};
pub use item::RangeItem;
