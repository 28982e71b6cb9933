//! Mutable ordered map based on a Red-Black Tree.
//!
//! This module provides [`RedBlackTreeMap`], an in-place ordered map whose
//! nodes live in an index arena.
//!
//! # Overview
//!
//! - O(log N) find
//! - O(log N) insert (duplicate keys are rejected, never overwritten)
//! - O(log N) remove
//! - O(log N) first/last
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//! map.insert(3, "three").unwrap();
//! map.insert(1, "one").unwrap();
//! map.insert(2, "two").unwrap();
//!
//! // Entries are always in sorted order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! assert!(map.remove(&2));
//! assert!(!map.remove(&2));
//! assert!(map.validate());
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every operation:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Absent children (the "nil" leaves) are black
//! 4. Red nodes have only black children
//! 5. Every path from a node down to an absent child has the same number of
//!    black nodes
//!
//! Rotations only relink nodes; colors are assigned by the fixup cases.
//! Left and right cases are written once and mirrored through `Side`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::comparator::{Comparator, NaturalOrder};
use super::error::KeyExists;
use super::node::{Arena, Color, Node, NodeId, NodeRef};
use super::walk::{self, Traversal, Walk, WalkOrder};

// =============================================================================
// Side Definition
// =============================================================================

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    Left,
    Right,
}

impl Side {
    const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// RedBlackTreeMap Definition
// =============================================================================

/// An ordered map backed by a mutable Red-Black Tree.
///
/// Keys are ordered by a [`Comparator`], [`NaturalOrder`] by default. Each
/// key appears at most once: [`insert`](Self::insert) rejects a key that
/// is already present with [`KeyExists`].
///
/// The map is single-threaded and unsynchronized. Wrap it in a lock to
/// share it between threads.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `find` / `get` | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `len`          | O(1)              |
/// | `validate`     | O(N)              |
///
/// # Examples
///
/// ```rust
/// use redblack::tree::{RedBlackTreeMap, Reversed, NaturalOrder};
///
/// let mut map = RedBlackTreeMap::with_comparator(Reversed(NaturalOrder));
/// for key in [1, 5, 3] {
///     map.insert(key, key * 10).unwrap();
/// }
///
/// let keys: Vec<i32> = map.keys().copied().collect();
/// assert_eq!(keys, vec![5, 3, 1]);
/// ```
#[derive(Clone)]
pub struct RedBlackTreeMap<K, V, C = NaturalOrder> {
    pub(super) arena: Arena<K, V>,
    pub(super) root: Option<NodeId>,
    /// Number of entries
    pub(super) length: usize,
    comparator: C,
}

impl<K, V> RedBlackTreeMap<K, V> {
    /// Creates a new empty map ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<i32, String> = RedBlackTreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> RedBlackTreeMap<K, V, C> {
    /// Creates a new empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::with_comparator(|left: &i32, right: &i32| {
    ///     left.abs().cmp(&right.abs())
    /// });
    /// map.insert(-3, "minus three").unwrap();
    /// assert!(map.insert(3, "three").is_err());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Returns the comparator ordering this map.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        tracing::trace!(length = self.length, "clearing red-black tree map");
        self.arena.clear();
        self.root = None;
        self.length = 0;
    }

    /// Returns a handle to the root node, or `None` if the map is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<_, _> = [(3, "three"), (1, "one"), (2, "two")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(map.first(), Some((&1, &"one")));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.extreme(root, Side::Left))
            .map(|id| NodeRef::new(&self.arena, id).entry())
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.extreme(root, Side::Right))
            .map(|id| NodeRef::new(&self.arena, id).entry())
    }

    /// Returns an iterator over entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            walk: self.nodes(WalkOrder::InOrder),
            remaining: self.length,
        }
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns a lazy walk over the nodes in the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::{RedBlackTreeMap, WalkOrder};
    ///
    /// let map: RedBlackTreeMap<_, _> = (1..=3).map(|key| (key, ())).collect();
    /// let pre_order: Vec<i32> = map.nodes(WalkOrder::PreOrder).map(|node| *node.key()).collect();
    /// assert_eq!(pre_order, vec![2, 1, 3]);
    /// ```
    #[must_use]
    pub fn nodes(&self, order: WalkOrder) -> Walk<'_, K, V> {
        Walk::new(&self.arena, self.root, order)
    }

    /// Calls `visitor` on every node in the given order.
    pub fn walk<F>(&self, order: WalkOrder, visitor: F)
    where
        F: FnMut(NodeRef<'_, K, V>),
    {
        self.nodes(order).for_each(visitor);
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// A valid red-black tree of `n` entries has height at most
    /// `2 * log2(n + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        walk::height(self.root, |id| &self.arena[id])
    }

    /// Descends from `from` along `side` until the last node.
    fn extreme(&self, from: NodeId, side: Side) -> NodeId {
        let mut current = from;
        while let Some(next) = self.child(current, side) {
            current = next;
        }
        current
    }

    /// Identifiers of every node in ascending key order.
    fn in_order_ids(&self) -> Vec<NodeId> {
        let mut traversal = Traversal::new(self.root, WalkOrder::InOrder);
        let mut ids = Vec::with_capacity(self.length);
        while let Some(id) = traversal.advance(|id| &self.arena[id]) {
            ids.push(id);
        }
        ids
    }

    // -------------------------------------------------------------------------
    // Structural primitives
    // -------------------------------------------------------------------------

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = &self.arena[id];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let node = &mut self.arena[id];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    /// The side of `parent` that holds `child`.
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.arena[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn set_color(&mut self, link: Option<NodeId>, color: Color) {
        if let Some(id) = link {
            self.arena[id].color = color;
        }
    }

    /// Rotates the subtree rooted at `pivot` toward `direction`.
    ///
    /// The child of `pivot` on the opposite side rises into its place:
    ///
    /// ```text
    ///      pivot                 riser          (direction = Left)
    ///     /     \               /     \
    ///    a     riser   ==>   pivot     c
    ///         /     \       /     \
    ///        b       c     a       b
    /// ```
    ///
    /// In-order key sequence is preserved. Colors are untouched.
    fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let Some(riser) = self.child(pivot, direction.opposite()) else {
            return;
        };

        let inner = self.child(riser, direction);
        self.set_child(pivot, direction.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(pivot);
        }

        let parent = self.arena[pivot].parent;
        self.arena[riser].parent = parent;
        match parent {
            None => self.root = Some(riser),
            Some(parent) => {
                let side = self.side_of(pivot, parent);
                self.set_child(parent, side, Some(riser));
            }
        }

        self.set_child(riser, direction, Some(pivot));
        self.arena[pivot].parent = Some(riser);
    }

    /// Replaces the subtree rooted at `target` with the one rooted at
    /// `replacement` in `target`'s parent.
    fn transplant(&mut self, target: NodeId, replacement: Option<NodeId>) {
        let parent = self.arena[target].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_of(target, parent);
                self.set_child(parent, side, replacement);
            }
        }
        if let Some(replacement) = replacement {
            self.arena[replacement].parent = parent;
        }
    }

    // -------------------------------------------------------------------------
    // Fixups
    // -------------------------------------------------------------------------

    /// Restores the red-black invariants after `node` was attached red.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.arena[node].parent
            && self.arena[parent].color.is_red()
        {
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.arena[parent].parent else {
                break;
            };
            let side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, side.opposite());

            if self.arena.is_red(uncle) {
                tracing::trace!(node = %node, "insert fixup: red uncle, recoloring");
                self.arena[parent].color = Color::Black;
                self.set_color(uncle, Color::Black);
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(node) {
                tracing::trace!(node = %node, "insert fixup: inner child, rotating parent");
                self.rotate(parent, side);
                mem::swap(&mut node, &mut parent);
            }

            tracing::trace!(node = %node, "insert fixup: outer child, rotating grandparent");
            self.arena[parent].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }
        self.set_color(self.root, Color::Black);
    }

    /// Restores black-height uniformity after a black node was spliced out
    /// above `node`. `parent` is tracked explicitly because `node` may be an
    /// absent child.
    fn remove_fixup(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && !self.arena.is_red(node) {
            let Some(above) = parent else {
                break;
            };
            // `node` carries a deficit, so its sibling is a real node and
            // an absent `node` is identified by the empty slot.
            let side = if self.arena[above].left == node {
                Side::Left
            } else {
                Side::Right
            };

            let mut sibling = self.child(above, side.opposite());
            if let Some(red_sibling) = sibling.filter(|&id| self.arena[id].color.is_red()) {
                tracing::trace!(parent = %above, "remove fixup: red sibling, rotating parent");
                self.arena[red_sibling].color = Color::Black;
                self.arena[above].color = Color::Red;
                self.rotate(above, side);
                sibling = self.child(above, side.opposite());
            }

            let Some(mut sibling) = sibling else {
                node = Some(above);
                parent = self.arena[above].parent;
                continue;
            };

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if !self.arena.is_red(near) && !self.arena.is_red(far) {
                tracing::trace!(parent = %above, "remove fixup: black nephews, moving deficit up");
                self.arena[sibling].color = Color::Red;
                node = Some(above);
                parent = self.arena[above].parent;
                continue;
            }

            if !self.arena.is_red(far) {
                tracing::trace!(parent = %above, "remove fixup: red near nephew, rotating sibling");
                self.set_color(near, Color::Black);
                self.arena[sibling].color = Color::Red;
                self.rotate(sibling, side.opposite());
                let Some(rotated) = self.child(above, side.opposite()) else {
                    break;
                };
                sibling = rotated;
            }

            tracing::trace!(parent = %above, "remove fixup: red far nephew, rotating parent");
            self.arena[sibling].color = self.arena[above].color;
            self.arena[above].color = Color::Black;
            let far = self.child(sibling, side.opposite());
            self.set_color(far, Color::Black);
            self.rotate(above, side);
            node = self.root;
            parent = None;
        }
        self.set_color(node, Color::Black);
    }

    /// Detaches `target` from the tree and returns its entry.
    fn unlink(&mut self, target: NodeId) -> (K, V) {
        let (left, right) = (self.arena[target].left, self.arena[target].right);

        let (entry, spliced_color, replacement, replacement_parent) = match (left, right) {
            (Some(_), Some(right)) => {
                // The successor has no left child; its payload moves into
                // `target` and its slot is the one freed.
                let successor = self.extreme(right, Side::Left);
                let successor_right = self.arena[successor].right;
                let successor_parent = self.arena[successor].parent;
                self.transplant(successor, successor_right);

                let Node {
                    key, value, color, ..
                } = self.arena.release(successor);
                let node = &mut self.arena[target];
                let entry = (
                    mem::replace(&mut node.key, key),
                    mem::replace(&mut node.value, value),
                );
                (entry, color, successor_right, successor_parent)
            }
            (child, None) | (None, child) => {
                let parent = self.arena[target].parent;
                self.transplant(target, child);
                let Node {
                    key, value, color, ..
                } = self.arena.release(target);
                ((key, value), color, child, parent)
            }
        };

        if spliced_color.is_black() {
            self.remove_fixup(replacement, replacement_parent);
        }
        entry
    }
}

impl<K, V, C> RedBlackTreeMap<K, V, C> {
    /// Locates the node holding `key`.
    fn locate<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match self.comparator.compare(key, node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns a handle to the node holding `key`.
    ///
    /// The key may be any borrowed form of the map's key type, provided the
    /// comparator orders the borrowed form consistently.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert("hello".to_string(), 42).unwrap();
    ///
    /// let node = map.find("hello").unwrap();
    /// assert_eq!(node.value(), &42);
    /// assert!(map.find("world").is_none());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.locate(key).map(|id| NodeRef::new(&self.arena, id))
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).map(|node| node.value())
    }

    /// Returns the stored key and value corresponding to the key.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).map(|node| node.entry())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, 10).unwrap();
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.get(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let id = self.locate(key)?;
        Some(&mut self.arena[id].value)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.locate(key).is_some()
    }

    /// Removes the key and returns its entry, or `None` if it was absent.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one").unwrap();
    /// assert_eq!(map.take(&1), Some((1, "one")));
    /// assert_eq!(map.take(&1), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let target = self.locate(key)?;
        let entry = self.unlink(target);
        self.length -= 1;
        tracing::trace!(node = %target, length = self.length, "removed entry");
        Some(entry)
    }

    /// Removes the key. Returns `true` if it was present.
    ///
    /// Removing an absent key leaves the map untouched.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.take(key).is_some()
    }
}

impl<K, V, C: Comparator<K>> RedBlackTreeMap<K, V, C> {
    /// Inserts a key-value pair and returns a handle to the new node.
    ///
    /// # Errors
    ///
    /// Returns [`KeyExists`] carrying the rejected key and value if the key
    /// is already present. The map is not modified in that case.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// let node = map.insert(1, "one").unwrap();
    /// assert_eq!(node.entry(), (&1, &"one"));
    ///
    /// assert!(map.insert(1, "ONE").is_err());
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeRef<'_, K, V>, KeyExists<K, V>> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            (side, current) = match self.comparator.compare(&key, &node.key) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
                Ordering::Equal => {
                    tracing::debug!(node = %id, "rejected insert of an existing key");
                    return Err(KeyExists::new(key, value));
                }
            };
            parent = Some(id);
        }

        let mut node = Node::new_red(key, value);
        node.parent = parent;
        let id = self.arena.allocate(node);
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.set_child(parent, side, Some(id)),
        }
        self.length += 1;

        self.insert_fixup(id);
        tracing::trace!(node = %id, length = self.length, "inserted entry");
        Ok(NodeRef::new(&self.arena, id))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over entries of a [`RedBlackTreeMap`] in ascending key order.
pub struct Iter<'a, K, V> {
    walk: Walk<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walk.next()?;
        self.remaining -= 1;
        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over entries of a [`RedBlackTreeMap`] in ascending
/// key order.
pub struct IntoIter<K, V> {
    arena: Arena<K, V>,
    order: std::vec::IntoIter<NodeId>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        let Node { key, value, .. } = self.arena.release(id);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for RedBlackTreeMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RedBlackTreeMap<K, V, C> {
    /// Inserts every pair. For a repeated key the first occurrence wins.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for RedBlackTreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for RedBlackTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let order = self.in_order_ids().into_iter();
        IntoIter {
            arena: self.arena,
            order,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RedBlackTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RedBlackTreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RedBlackTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for RedBlackTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTreeMap<i32, String>: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for RedBlackTreeMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeMapVisitor<K, V, C> {
    marker: std::marker::PhantomData<fn() -> RedBlackTreeMap<K, V, C>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::de::Visitor<'de> for RedBlackTreeMapVisitor<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = RedBlackTreeMap<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = RedBlackTreeMap::default();
        while let Some((key, value)) = access.next_entry()? {
            if let Err(error) = map.insert(key, value) {
                return Err(serde::de::Error::custom(error));
            }
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for RedBlackTreeMap<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RedBlackTreeMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
