//! Self-balancing ordered map.
//!
//! This module provides [`RedBlackTreeMap`], an ordered map that keeps
//! O(log N) insert, find and remove by maintaining the red-black balance
//! invariants through recoloring and rotations.
//!
//! - [`RedBlackTreeMap`]: the map itself
//! - [`Comparator`]: the three-way key ordering it consumes
//! - [`NodeRef`]: a borrowed handle to a node, returned by `insert` and `find`
//! - [`WalkOrder`] / [`Walk`]: pre-, in- and post-order traversals
//! - [`KeyExists`] / [`InvariantViolation`]: error types
//!
//! # Arena Layout
//!
//! Nodes are stored in an index arena owned by the map. Child and parent
//! links are arena indices; an absent link stands for the black "nil" leaf.
//! The parent link is only used to walk upward during fixups, never for
//! ownership.
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::{RedBlackTreeMap, WalkOrder};
//!
//! let mut map = RedBlackTreeMap::new();
//! for key in [4, 2, 6, 1, 3, 5, 15, 7, 16, 14] {
//!     map.insert(key, key * 100).unwrap();
//!     assert!(map.validate());
//! }
//!
//! assert_eq!(map.find(&15).map(|node| *node.value()), Some(1500));
//!
//! let ascending: Vec<i32> = map.nodes(WalkOrder::InOrder).map(|node| *node.key()).collect();
//! assert_eq!(ascending, vec![1, 2, 3, 4, 5, 6, 7, 14, 15, 16]);
//! ```

mod comparator;
mod error;
mod map;
mod node;
mod validate;
mod walk;

pub use comparator::Comparator;
pub use comparator::NaturalOrder;
pub use comparator::Reversed;
pub use error::InvariantViolation;
pub use error::KeyExists;
pub use map::IntoIter;
pub use map::Iter;
pub use map::RedBlackTreeMap;
pub use node::Color;
pub use node::NodeId;
pub use node::NodeRef;
pub use walk::Branches;
pub use walk::Walk;
pub use walk::WalkOrder;
