//! Order-parameterized tree walks.
//!
//! Walks are iterative: an explicit stack replaces recursion, so stack
//! usage does not depend on tree height.

use smallvec::SmallVec;

use super::node::{Arena, Node, NodeId, NodeRef};

/// Frames kept inline before the walk stack spills to the heap. Post-order
/// holds at most two frames per level, and a red-black tree of `n < 2^32`
/// nodes has height at most 64.
const INLINE_FRAMES: usize = 128;

/// The order in which a walk visits nodes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum WalkOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree (ascending key order).
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

/// Child links of a binary tree node.
pub trait Branches {
    /// The left child, if any.
    fn left(&self) -> Option<NodeId>;
    /// The right child, if any.
    fn right(&self) -> Option<NodeId>;
}

impl<K, V> Branches for Node<K, V> {
    #[inline]
    fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    fn right(&self) -> Option<NodeId> {
        self.right
    }
}

// =============================================================================
// Traversal Engine
// =============================================================================

/// Stack-driven traversal state shared by every walk order.
///
/// Each frame carries a flag: for post-order it marks a node whose
/// children have already been scheduled.
#[derive(Clone)]
pub(crate) struct Traversal {
    order: WalkOrder,
    stack: SmallVec<[(NodeId, bool); INLINE_FRAMES]>,
    cursor: Option<NodeId>,
}

impl Traversal {
    pub(crate) fn new(root: Option<NodeId>, order: WalkOrder) -> Self {
        let mut stack = SmallVec::new();
        let mut cursor = None;
        match order {
            WalkOrder::InOrder => cursor = root,
            WalkOrder::PreOrder | WalkOrder::PostOrder => stack.extend(root.map(|id| (id, false))),
        }
        Self {
            order,
            stack,
            cursor,
        }
    }

    /// Yields the next node identifier, resolving child links through
    /// `resolve`.
    pub(crate) fn advance<'n, N, F>(&mut self, resolve: F) -> Option<NodeId>
    where
        N: Branches + 'n,
        F: Fn(NodeId) -> &'n N,
    {
        match self.order {
            WalkOrder::PreOrder => {
                let (id, _) = self.stack.pop()?;
                let node = resolve(id);
                self.stack.extend(node.right().map(|right| (right, false)));
                self.stack.extend(node.left().map(|left| (left, false)));
                Some(id)
            }
            WalkOrder::InOrder => {
                while let Some(id) = self.cursor {
                    self.stack.push((id, false));
                    self.cursor = resolve(id).left();
                }
                let (id, _) = self.stack.pop()?;
                self.cursor = resolve(id).right();
                Some(id)
            }
            WalkOrder::PostOrder => loop {
                let (id, expanded) = self.stack.pop()?;
                if expanded {
                    return Some(id);
                }
                let node = resolve(id);
                self.stack.push((id, true));
                self.stack.extend(node.right().map(|right| (right, false)));
                self.stack.extend(node.left().map(|left| (left, false)));
            },
        }
    }
}

/// Height of the subtree rooted at `root`, counting nodes on the longest
/// root-to-leaf path. An empty tree has height 0.
pub(crate) fn height<'n, N, F>(root: Option<NodeId>, resolve: F) -> usize
where
    N: Branches + 'n,
    F: Fn(NodeId) -> &'n N,
{
    let mut tallest = 0;
    let mut stack: SmallVec<[(NodeId, usize); INLINE_FRAMES]> =
        root.map(|id| (id, 1)).into_iter().collect();
    while let Some((id, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        let node = resolve(id);
        stack.extend(node.left().map(|left| (left, depth + 1)));
        stack.extend(node.right().map(|right| (right, depth + 1)));
    }
    tallest
}

// =============================================================================
// Walk Iterator
// =============================================================================

/// A lazy, one-shot walk over the nodes of a
/// [`RedBlackTreeMap`](super::RedBlackTreeMap).
///
/// Created by [`RedBlackTreeMap::nodes`](super::RedBlackTreeMap::nodes).
/// A new call restarts from the root.
pub struct Walk<'a, K, V> {
    arena: &'a Arena<K, V>,
    traversal: Traversal,
}

impl<'a, K, V> Walk<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, root: Option<NodeId>, order: WalkOrder) -> Self {
        Self {
            arena,
            traversal: Traversal::new(root, order),
        }
    }
}

impl<'a, K, V> Iterator for Walk<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        self.traversal
            .advance(|id| &arena[id])
            .map(|id| NodeRef::new(arena, id))
    }
}

impl<K, V> std::iter::FusedIterator for Walk<'_, K, V> {}

// =============================================================================
// Tests
// =============================================================================
