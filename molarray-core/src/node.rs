//! Value-holding node records with adjacency links.
//!
//! A [`Node`] owns exactly one value and two optional links to its logical
//! neighbours. Links are positions inside the owning
//! [`LinkedArray`](crate::LinkedArray) buffer rather than addresses, so a node
//! can be relocated by a reallocation without its links going stale.
//!
//! Equality, ordering, and hashing look at the value only. Link state never
//! participates in comparison.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

/// A single value plus `prev`/`next` positions of its neighbours.
pub struct Node<V> {
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<V> Node<V> {
    /// Create an unlinked node.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }

    /// Create a node with both links set.
    #[inline]
    pub const fn with_links(value: V, prev: Option<usize>, next: Option<usize>) -> Self {
        Self { value, prev, next }
    }

    /// Shared access to the stored value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the stored value. Links are untouched.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consume the node and return its value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Store a new value, returning the old one. Links are kept.
    #[inline]
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Position of the previous node, or `None` at the head.
    #[inline]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Position of the next node, or `None` at the tail.
    #[inline]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub fn set_prev(&mut self, prev: Option<usize>) {
        self.prev = prev;
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    /// Whether either link is set.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }

    /// Hand this node's place in the chain to the caller.
    ///
    /// Returns `(prev, next)` and leaves the node unlinked.
    #[inline]
    pub fn take_links(&mut self) -> (Option<usize>, Option<usize>) {
        (self.prev.take(), self.next.take())
    }

    /// Clear both links.
    #[inline]
    pub fn unlink(&mut self) {
        self.prev = None;
        self.next = None;
    }

    /// Exchange values with another node, leaving both nodes' links in place.
    #[inline]
    pub fn swap_values(&mut self, other: &mut Node<V>) {
        std::mem::swap(&mut self.value, &mut other.value);
    }
}

/// Clones the value only; the clone starts unlinked.
impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        Node::new(self.value.clone())
    }
}

impl<V> From<V> for Node<V> {
    fn from(value: V) -> Self {
        Node::new(value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: PartialEq> PartialEq<V> for Node<V> {
    fn eq(&self, other: &V) -> bool {
        self.value == *other
    }
}

impl<V: PartialOrd> PartialOrd for Node<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: Ord> Ord for Node<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Hash> Hash for Node<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: AddAssign> AddAssign<V> for Node<V> {
    fn add_assign(&mut self, rhs: V) {
        self.value += rhs;
    }
}

impl<V: AddAssign + Clone> AddAssign<&Node<V>> for Node<V> {
    fn add_assign(&mut self, rhs: &Node<V>) {
        self.value += rhs.value.clone();
    }
}
