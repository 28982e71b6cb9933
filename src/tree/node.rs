//! Arena storage for red-black tree nodes.
//!
//! Nodes live in a growable vector and refer to each other by [`NodeId`].
//! An absent link (`None`) plays the role of the black "nil" leaf, so no
//! shared sentinel node is ever allocated or mutated.

use std::fmt;
use std::ops::{Index, IndexMut};

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// A red node. Red nodes never have red children.
    Red,
    /// A black node. Absent children count as black.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => formatter.write_str("red"),
            Self::Black => formatter.write_str("black"),
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Position of a node inside its map's arena.
///
/// Identifiers are only handed out inside borrow-scoped [`NodeRef`]s, so an
/// identifier can never outlive the mutation that would recycle its slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Internal node structure. Links are non-owning arena indices.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a new detached red node.
    pub(crate) const fn new_red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }
}

// =============================================================================
// Arena Definition
// =============================================================================

/// Slot storage with a free list. Released slots are reused by later
/// allocations.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its identifier.
    pub(crate) fn allocate(&mut self, node: Node<K, V>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K, V> {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => panic!("arena slot {id} released twice"),
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total number of slots, occupied or free.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Effective color of a link: absent children are black.
    pub(crate) fn color_of(&self, link: Option<NodeId>) -> Color {
        link.map_or(Color::Black, |id| self[id].color)
    }

    pub(crate) fn is_red(&self, link: Option<NodeId>) -> bool {
        self.color_of(link).is_red()
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match &self.slots[id.0] {
            Some(node) => node,
            None => panic!("arena slot {id} is not live"),
        }
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => panic!("arena slot {id} is not live"),
        }
    }
}

// =============================================================================
// NodeRef Definition
// =============================================================================

/// A shared handle to a node of a [`RedBlackTreeMap`](super::RedBlackTreeMap).
///
/// Handles borrow the map, so they cannot be held across a mutation.
pub struct NodeRef<'a, K, V> {
    arena: &'a Arena<K, V>,
    id: NodeId,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) const fn new(arena: &'a Arena<K, V>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<K, V> {
        let arena: &'a Arena<K, V> = self.arena;
        &arena[self.id]
    }

    fn relative(&self, link: Option<NodeId>) -> Option<Self> {
        link.map(|id| Self::new(self.arena, id))
    }

    /// The arena identifier of this node.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// The key and value stored in this node.
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (&node.key, &node.value)
    }

    /// The node's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Returns `true` if the node is red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.relative(self.node().left)
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.relative(self.node().right)
    }

    /// The parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.relative(self.node().parent)
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K, V> PartialEq for NodeRef<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &node.key)
            .field("value", &node.value)
            .field("color", &node.color)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
