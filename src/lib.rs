//! # redblack
//!
//! An in-memory ordered map built on a mutable Red-Black Tree.
//!
//! ## Overview
//!
//! [`RedBlackTreeMap`](tree::RedBlackTreeMap) guarantees O(log N) insert,
//! find and remove. Its balance invariants can be checked at any time with
//! [`validate`](tree::RedBlackTreeMap::validate), which is how the test
//! suite verifies every single mutation.
//!
//! - **Strict inserts**: inserting an existing key fails with
//!   [`KeyExists`](tree::KeyExists) and leaves the map untouched
//! - **Pluggable ordering**: any [`Comparator`](tree::Comparator),
//!   including plain closures
//! - **Walks**: lazy pre-, in- and post-order traversals
//! - **Arena storage**: nodes refer to each other by index, no `unsafe`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the map
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut map = RedBlackTreeMap::new();
//! map.insert("b", 2).unwrap();
//! map.insert("a", 1).unwrap();
//!
//! assert!(map.insert("a", 100).is_err());
//! assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&"a", &1), (&"b", &2)]);
//! assert!(map.validate());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;
