//! Error types for the red-black tree map.

use std::fmt;

use super::node::NodeId;

/// Returned by [`RedBlackTreeMap::insert`](super::RedBlackTreeMap::insert)
/// when the key is already present.
///
/// Insertion never overwrites. The rejected key and value are handed back
/// untouched and the map is left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use redblack::tree::RedBlackTreeMap;
///
/// let mut map = RedBlackTreeMap::new();
/// map.insert(1, "one").unwrap();
///
/// let error = map.insert(1, "uno").unwrap_err();
/// assert_eq!(error.to_string(), "key already exists in the map");
/// assert_eq!(error.into_inner(), (1, "uno"));
/// assert_eq!(map.get(&1), Some(&"one"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyExists<K, V> {
    /// The key that was rejected.
    pub key: K,
    /// The value that was not inserted.
    pub value: V,
}

impl<K, V> KeyExists<K, V> {
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the rejected key and value.
    #[must_use]
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> fmt::Display for KeyExists<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("key already exists in the map")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> std::error::Error for KeyExists<K, V> {}

/// A broken red-black tree invariant, reported by
/// [`RedBlackTreeMap::check`](super::RedBlackTreeMap::check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// The root node has a parent link.
    RootHasParent,
    /// A red node has a red child.
    RedRedEdge {
        /// The red parent.
        node: NodeId,
    },
    /// Two paths below a node pass through different numbers of black nodes.
    BlackHeightMismatch {
        /// The node whose subtrees disagree.
        node: NodeId,
        /// Black nodes on every path through the left subtree.
        left: usize,
        /// Black nodes on every path through the right subtree.
        right: usize,
    },
    /// A child does not point back at the node holding it.
    BrokenParentLink {
        /// The child with the wrong parent link.
        node: NodeId,
    },
    /// An in-order neighbour does not compare strictly greater.
    OutOfOrder {
        /// The node that compares less than or equal to its predecessor.
        node: NodeId,
    },
    /// The recorded length disagrees with the nodes actually stored.
    LengthMismatch {
        /// The length the map reports.
        expected: usize,
        /// Nodes reachable from the root.
        reachable: usize,
        /// Nodes occupying arena slots.
        allocated: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => formatter.write_str("root is red"),
            Self::RootHasParent => formatter.write_str("root has a parent"),
            Self::RedRedEdge { node } => write!(formatter, "red node {node} has a red child"),
            Self::BlackHeightMismatch { node, left, right } => write!(
                formatter,
                "black height below {node} differs: {left} on the left, {right} on the right"
            ),
            Self::BrokenParentLink { node } => {
                write!(formatter, "node {node} has an inconsistent parent link")
            }
            Self::OutOfOrder { node } => {
                write!(formatter, "node {node} is not greater than its predecessor")
            }
            Self::LengthMismatch {
                expected,
                reachable,
                allocated,
            } => write!(
                formatter,
                "length is {expected} but {reachable} nodes are reachable and {allocated} allocated"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
