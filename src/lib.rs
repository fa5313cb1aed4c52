//! # toolshed
//!
//! Functional programming utility extensions for Rust: generalized ranges,
//! map transforms, and wrapper introspection.
//!
//! ## Overview
//!
//! This library collects small, self-contained functional utilities:
//!
//! - **Generalized Ranges**: [`range::GRange`], a lazily-evaluated, possibly
//!   infinite range over any orderable, addable type (dates, floats, ...)
//! - **Map Transforms**: inversion, splitting, and sorting helpers for maps
//! - **Wrapper Introspection**: metadata-preserving function wrapping and
//!   unwrap-chain traversal
//!
//! ## Feature Flags
//!
//! - `range`: Generalized range type (`GRange`)
//! - `maps`: Map transform helpers
//! - `wrap`: Wrapper metadata and unwrap traversal
//! - `serde`: Serialization support for `GRange`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use toolshed::range::GRange;
//!
//! let range = GRange::new(0, 10, 2).unwrap();
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(range.len(), Ok(5));
//! assert!(range.contains(&4));
//! assert!(!range.contains(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use toolshed::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "range")]
    pub use crate::range::*;

    #[cfg(feature = "maps")]
    pub use crate::maps::*;

    #[cfg(feature = "wrap")]
    pub use crate::wrap::*;
}

#[cfg(feature = "range")]
pub mod range;

#[cfg(feature = "maps")]
pub mod maps;

#[cfg(feature = "wrap")]
pub mod wrap;
