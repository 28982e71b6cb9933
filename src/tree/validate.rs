//! Structural invariant checking for [`RedBlackTreeMap`].
//!
//! Validation is a diagnostic: it costs O(N) and is meant for tests and
//! debugging, not for hot paths. Black heights are computed bottom-up in a
//! single post-order pass and discarded when the check returns.

use std::cmp::Ordering;

use super::comparator::Comparator;
use super::error::InvariantViolation;
use super::map::RedBlackTreeMap;
use super::node::NodeId;
use super::walk::{Traversal, WalkOrder};

impl<K, V, C: Comparator<K>> RedBlackTreeMap<K, V, C> {
    /// Checks every red-black invariant.
    ///
    /// On success returns the black height of the tree: the number of black
    /// nodes on every path from the root down to an absent child.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<_, _> = (1..=7).map(|key| (key, ())).collect();
    /// assert_eq!(map.check(), Ok(2));
    /// ```
    pub fn check(&self) -> Result<usize, InvariantViolation> {
        let result = self.check_structure().and_then(|black_height| {
            self.check_order()?;
            Ok(black_height)
        });
        if let Err(violation) = &result {
            tracing::debug!(%violation, "red-black invariant violated");
        }
        result
    }

    /// Returns `true` if every red-black invariant holds.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Colors, parent links, black heights and node counts.
    fn check_structure(&self) -> Result<usize, InvariantViolation> {
        if let Some(root) = self.root {
            let node = &self.arena[root];
            if node.color.is_red() {
                return Err(InvariantViolation::RedRoot);
            }
            if node.parent.is_some() {
                return Err(InvariantViolation::RootHasParent);
            }
        }

        let mut black_heights = vec![0_usize; self.arena.capacity()];
        let black_height_of =
            |heights: &[usize], link: Option<NodeId>| link.map_or(0, |id| heights[id.index()]);

        let mut reachable = 0;
        let mut traversal = Traversal::new(self.root, WalkOrder::PostOrder);
        while let Some(id) = traversal.advance(|id| &self.arena[id]) {
            reachable += 1;
            let node = &self.arena[id];

            for child in [node.left, node.right].into_iter().flatten() {
                let child_node = &self.arena[child];
                if child_node.parent != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink { node: child });
                }
                if node.color.is_red() && child_node.color.is_red() {
                    return Err(InvariantViolation::RedRedEdge { node: id });
                }
            }

            let left = black_height_of(&black_heights, node.left);
            let right = black_height_of(&black_heights, node.right);
            if left != right {
                return Err(InvariantViolation::BlackHeightMismatch {
                    node: id,
                    left,
                    right,
                });
            }
            black_heights[id.index()] = left + usize::from(node.color.is_black());
        }

        let allocated = self.arena.live();
        if reachable != self.length || allocated != self.length {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.length,
                reachable,
                allocated,
            });
        }

        Ok(black_height_of(&black_heights, self.root))
    }

    /// Strictly ascending keys along an in-order walk.
    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut traversal = Traversal::new(self.root, WalkOrder::InOrder);
        let mut previous: Option<NodeId> = None;
        while let Some(id) = traversal.advance(|id| &self.arena[id]) {
            if let Some(previous) = previous {
                let ordering = self
                    .comparator()
                    .compare(&self.arena[previous].key, &self.arena[id].key);
                if ordering != Ordering::Less {
                    return Err(InvariantViolation::OutOfOrder { node: id });
                }
            }
            previous = Some(id);
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
