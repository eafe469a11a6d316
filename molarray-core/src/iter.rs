//! Iterators over a [`LinkedArray`](crate::LinkedArray).
//!
//! [`Iter`] follows the node links (`next` from the head, `prev` from the
//! tail) instead of walking the buffer by position, so it doubles as a check
//! that the chain view agrees with the index view.

use std::iter::FusedIterator;

use crate::node::Node;

/// Borrowing iterator that walks the link chain.
#[derive(Debug)]
pub struct Iter<'a, V> {
    nodes: &'a [Node<V>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(nodes: &'a [Node<V>], head: Option<usize>, tail: Option<usize>) -> Self {
        Self {
            nodes,
            front: head,
            back: tail,
            remaining: nodes.len(),
        }
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev();
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Owning iterator returned by `LinkedArray::into_iter`.
#[derive(Debug)]
pub struct IntoIter<V> {
    inner: std::vec::IntoIter<Node<V>>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(nodes: Vec<Node<V>>) -> Self {
        Self {
            inner: nodes.into_iter(),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.next().map(Node::into_value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    #[inline]
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(Node::into_value)
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
