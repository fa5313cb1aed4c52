//! Wrapper metadata and unwrap-chain traversal.
//!
//! Rust functions carry no runtime name or docstring, so decorating a
//! function normally loses its descriptive identity. This module provides
//! [`Wrapper`], a callable paired with [`Metadata`] and an optional back
//! reference to the wrapper it wraps, plus the helpers that keep the
//! metadata flowing:
//!
//! - [`update_wrapper`]: copies descriptive attributes from wrapped to
//!   wrapper and records the back reference
//! - [`wraps`]: the constructor form of `update_wrapper`
//! - [`unwrap`] / [`unwrap_until`]: follow back references to the
//!   originally wrapped callable, failing with [`CycleError`] on a loop
//!
//! # Examples
//!
//! ```rust
//! use toolshed::wrap::{Metadata, Wrapper, unwrap, wraps};
//!
//! let add = Wrapper::with_metadata(
//!     |(x, y): (i32, i32)| x + y,
//!     Metadata::named("add").with_doc("Adds two numbers."),
//! );
//!
//! // Wrap it with a doubling decorator; the metadata carries over.
//! let doubled = wraps(&add, |(x, y): (i32, i32)| 2 * (x + y));
//! assert_eq!(doubled.metadata().name.as_deref(), Some("add"));
//! assert_eq!(doubled.call((2, 3)), 10);
//!
//! // And the original is reachable again through the back reference.
//! let original = unwrap(&doubled).unwrap();
//! assert_eq!(original.call((2, 3)), 5);
//! ```

mod error;
mod unwrap;
mod wrapper;

pub use error::CycleError;
pub use unwrap::{unwrap, unwrap_until};
pub use wrapper::{Field, Metadata, WRAPPER_ASSIGNMENTS, Wrapper, update_wrapper, wraps};
