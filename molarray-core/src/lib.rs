//! Shared primitives for the molarray workspace.
//!
//! `molarray-core` provides the foundation the sequence crates build on:
//!
//! - **Error types**: [`MolError`], [`ErrorKind`], and [`Result`]
//! - **Traits**: [`Summarizable`]
//! - **Nodes**: [`Node`], a value with `prev`/`next` links
//! - **Linked array**: [`LinkedArray`], a growable indexable buffer of
//!   nodes that is also walkable as a doubly-linked chain
//! - **Pattern search**: generic Knuth-Morris-Pratt in [`pattern`]
//!
//! # Example
//!
//! ```
//! use molarray_core::{LinkedArray, MolError};
//!
//! let hay: LinkedArray<i32> = vec![1, 2, 3, 4, 5].into();
//! let pat: LinkedArray<i32> = vec![2, 3].into();
//! assert_eq!(hay.subsequence_index(&pat).unwrap(), 1);
//!
//! let missing: LinkedArray<i32> = vec![6, 7].into();
//! assert!(matches!(hay.subsequence_index(&missing), Err(MolError::NotFound(_))));
//! ```

pub mod array;
pub mod error;
pub mod iter;
pub mod node;
pub mod pattern;
pub mod traits;

pub use array::{LinkedArray, DEFAULT_CAPACITY};
pub use error::{ErrorKind, MolError, Result};
pub use iter::{IntoIter, Iter};
pub use node::Node;
pub use traits::*;
