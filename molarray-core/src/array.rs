//! Growable, indexable array whose nodes are also threaded into a
//! doubly-linked chain.
//!
//! [`LinkedArray<V>`] stores its elements as [`Node`] records in one owned
//! buffer. Position `i` of the buffer is logical position `i`, and each node
//! additionally carries `prev`/`next` links to its neighbours, so the same
//! storage can be addressed by index or walked as a chain from
//! [`head`](LinkedArray::head) to [`tail`](LinkedArray::tail).
//!
//! Links are stored as positions, not addresses. Growing or shrinking the
//! buffer moves the nodes without touching their links; structural edits
//! (insert, pop, reverse) relink only the suffix they disturbed.
//!
//! # Indexing
//!
//! Every index argument is an `isize`. Negative values count from the end
//! (`-1` is the last element). Anything outside `[0, len)` after that
//! normalization is a [`MolError::Index`]; nothing is silently clamped.
//!
//! # Example
//!
//! ```
//! use molarray_core::LinkedArray;
//!
//! let mut arr: LinkedArray<i32> = [4, 2, 5, 1, 3].into_iter().collect();
//! arr.sort(false);
//! assert_eq!(arr, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(arr.pop_at(1).unwrap(), 2);
//! assert_eq!(*arr.get(-1).unwrap(), 5);
//!
//! let reversed = arr.slice(0, -1, -1).unwrap();
//! assert_eq!(reversed, [5, 4, 3, 1]);
//! ```

use std::fmt::{self, Write as _};
use std::ops::{Add, AddAssign, Index, IndexMut};

use log::{debug, trace};

use crate::iter::{IntoIter, Iter};
use crate::node::Node;
use crate::pattern;
use crate::{MolError, Result};

/// Capacity of a fresh array and of an array after `clear(true)`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Array of linked nodes with amortized O(1) append.
pub struct LinkedArray<V> {
    buffer: Vec<Node<V>>,
    /// Slots reserved for nodes. `buffer.len() <= allocated` always holds.
    allocated: usize,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<V> LinkedArray<V> {
    /// Create an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            allocated: capacity,
            head: None,
            tail: None,
        }
    }

    /// Create an array holding a single value.
    pub fn from_value(value: V) -> Self {
        let mut arr = Self::new();
        arr.append(value);
        arr
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of node slots currently reserved.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Position of the first node, or `None` when empty.
    #[inline]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Position of the last node, or `None` when empty.
    #[inline]
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// The node records in logical order.
    #[inline]
    pub fn nodes(&self) -> &[Node<V>] {
        &self.buffer
    }

    /// First value, read through the head link.
    pub fn front(&self) -> Option<&V> {
        self.head.map(|h| self.buffer[h].value())
    }

    /// Last value, read through the tail link.
    pub fn back(&self) -> Option<&V> {
        self.tail.map(|t| self.buffer[t].value())
    }

    /// Value at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<&V> {
        let i = self.normalize(index)?;
        Ok(self.buffer[i].value())
    }

    /// Mutable value at `index`; negative indices count from the end.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut V> {
        let i = self.normalize(index)?;
        Ok(self.buffer[i].value_mut())
    }

    /// Node record at `index`, links included.
    pub fn node(&self, index: isize) -> Result<&Node<V>> {
        let i = self.normalize(index)?;
        Ok(&self.buffer[i])
    }

    /// Overwrite the value at `index`, returning the previous one.
    pub fn set(&mut self, index: isize, value: V) -> Result<V> {
        let i = self.normalize(index)?;
        Ok(self.buffer[i].replace(value))
    }

    /// Reserve room for `additional` more nodes.
    ///
    /// When the buffer is full it grows to `(capacity + 1) * 2` slots, or to
    /// twice the required length if that is still not enough.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self.len().saturating_add(additional);
        if needed <= self.allocated {
            return Ok(());
        }
        let mut target = self.allocated.saturating_add(1).saturating_mul(2);
        if target < needed {
            target = needed.saturating_mul(2);
        }
        self.grow_to(target)
    }

    /// Append `value` at the end, reporting allocation failure.
    pub fn try_append(&mut self, value: V) -> Result<()> {
        self.try_reserve(1)?;
        self.push_linked(value);
        Ok(())
    }

    /// Append `value` at the end. Amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow. Use [`try_append`](Self::try_append)
    /// to handle that case.
    pub fn append(&mut self, value: V) {
        self.reserve(1);
        self.push_linked(value);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<V> {
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// Fails with [`MolError::Empty`] on an empty array before the index is
    /// looked at.
    pub fn pop_at(&mut self, index: isize) -> Result<V> {
        if self.is_empty() {
            return Err(MolError::Empty("pop from an empty array".into()));
        }
        let i = self.normalize(index)?;
        let node = self.buffer.remove(i);
        self.relink_from(i.saturating_sub(1));
        trace!("popped position {} (len now {})", i, self.len());
        Ok(node.into_value())
    }

    /// Insert `value` at `index`, shifting the element there and everything
    /// after it one position right.
    ///
    /// `index` must address an existing element, so inserting into an empty
    /// array or at `len` is an error. Use [`append`](Self::append) to add at
    /// the end.
    pub fn insert(&mut self, value: V, index: isize) -> Result<()> {
        let i = self.normalize(index)?;
        self.try_reserve(1)?;
        self.buffer.insert(i, Node::new(value));
        self.relink_from(i.saturating_sub(1));
        trace!("inserted at position {} (len now {})", i, self.len());
        Ok(())
    }

    /// Reverse the logical order in place.
    pub fn reverse(&mut self) {
        self.buffer.reverse();
        self.relink_from(0);
    }

    /// Drop every element.
    ///
    /// With `shrink` the buffer is released and a fresh one of
    /// [`DEFAULT_CAPACITY`] slots is allocated; otherwise the current
    /// capacity is kept for reuse.
    pub fn clear(&mut self, shrink: bool) {
        self.buffer.clear();
        self.head = None;
        self.tail = None;
        if shrink && self.allocated != DEFAULT_CAPACITY {
            debug!(
                "shrinking linked array from {} to {} slots",
                self.allocated, DEFAULT_CAPACITY
            );
            self.buffer = Vec::with_capacity(DEFAULT_CAPACITY);
            self.allocated = DEFAULT_CAPACITY;
        }
    }

    /// Move the contents out, leaving `self` empty with the default capacity.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Iterate over values by following the link chain.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buffer, self.head, self.tail)
    }

    /// Iterate mutably over values in logical order.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + '_ {
        self.buffer.iter_mut().map(Node::value_mut)
    }

    /// Count the elements for which `predicate` holds.
    pub fn count_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&V) -> bool,
    {
        self.iter().filter(|v| predicate(v)).count()
    }

    /// Replace every element with `transform` applied to it.
    pub fn vectorise<F>(&mut self, mut transform: F)
    where
        F: FnMut(&V) -> V,
    {
        for node in &mut self.buffer {
            let next = transform(node.value());
            node.replace(next);
        }
    }

    /// Render all elements separated by `delimiter`.
    pub fn join(&self, delimiter: &str) -> String
    where
        V: fmt::Display,
    {
        let mut out = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            let _ = write!(out, "{}", value);
        }
        out
    }

    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.len() as isize;
        let i = if index < 0 { index + len } else { index };
        if i < 0 || i >= len {
            return Err(MolError::Index(format!(
                "index {} out of range for length {}",
                index, len
            )));
        }
        Ok(i as usize)
    }

    fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("linked array could not grow: {}", err);
        }
    }

    fn grow_to(&mut self, target: usize) -> Result<()> {
        self.buffer.try_reserve_exact(target - self.buffer.len())?;
        debug!(
            "growing linked array from {} to {} slots",
            self.allocated, target
        );
        self.allocated = target;
        Ok(())
    }

    /// Push a node after the current tail. Room must already be reserved.
    fn push_linked(&mut self, value: V) {
        let pos = self.buffer.len();
        self.buffer.push(Node::with_links(value, self.tail, None));
        if let Some(t) = self.tail {
            self.buffer[t].set_next(Some(pos));
        }
        if self.head.is_none() {
            self.head = Some(pos);
        }
        self.tail = Some(pos);
    }

    /// Rebuild the links of every node from `start` onward, then head/tail.
    fn relink_from(&mut self, start: usize) {
        let len = self.buffer.len();
        for i in start.min(len)..len {
            let node = &mut self.buffer[i];
            node.set_prev(i.checked_sub(1));
            node.set_next(if i + 1 < len { Some(i + 1) } else { None });
        }
        self.head = if len > 0 { Some(0) } else { None };
        self.tail = len.checked_sub(1);
    }
}

impl<V: Clone> LinkedArray<V> {
    /// Build an array from a slice, reserving twice its length.
    pub fn from_slice(values: &[V]) -> Self {
        let mut arr = Self::with_capacity((values.len() * 2).max(DEFAULT_CAPACITY));
        for value in values {
            arr.push_linked(value.clone());
        }
        arr
    }

    /// Deep copy into a fresh array that shares nothing with `self`.
    pub fn copy(&self) -> Self {
        let mut out = Self::with_capacity((self.len() * 2).max(DEFAULT_CAPACITY));
        for value in self.iter() {
            out.push_linked(value.clone());
        }
        out
    }

    /// Append clones of every element of `other`.
    pub fn extend_from(&mut self, other: &LinkedArray<V>) {
        self.reserve(other.len());
        for value in other.iter() {
            self.push_linked(value.clone());
        }
    }

    /// Elements at `start, start + step, ...` up to and including `end`.
    ///
    /// Negative `start`/`end` are normalized by adding `len`. Both ends are
    /// inclusive. A positive `step` walks forward from `start`; a negative
    /// `step` walks backward from `end` down to `start`, so
    /// `slice(0, -1, -1)` is the reversed array.
    ///
    /// Fails with [`MolError::Index`] when either end is outside `[0, len)`
    /// after normalization, when `step == 0`, or when `start > end`.
    pub fn slice(&self, start: isize, end: isize, step: isize) -> Result<Self> {
        let len = self.len() as isize;
        let s = if start < 0 { start + len } else { start };
        let e = if end < 0 { end + len } else { end };
        if s < 0 || s >= len || e < 0 || e >= len || step == 0 || s > e {
            return Err(MolError::Index(format!(
                "invalid slice [{}, {}] step {} for length {}",
                start, end, step, len
            )));
        }

        let (s, e) = (s as usize, e as usize);
        let stride = step.unsigned_abs();
        let count = (e - s) / stride + 1;
        let mut out = Self::with_capacity((count * 2).max(DEFAULT_CAPACITY));
        if step > 0 {
            for i in (s..=e).step_by(stride) {
                out.push_linked(self.buffer[i].value().clone());
            }
        } else {
            for i in (s..=e).rev().step_by(stride) {
                out.push_linked(self.buffer[i].value().clone());
            }
        }
        Ok(out)
    }

    /// Clone the values into a `Vec` in logical order.
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Result<V>
    where
        V: Add<Output = V>,
    {
        let mut values = self.iter();
        let first = values
            .next()
            .ok_or_else(|| MolError::Empty("sum of an empty array".into()))?
            .clone();
        Ok(values.fold(first, |acc, v| acc + v.clone()))
    }
}

impl<V: PartialEq> LinkedArray<V> {
    /// Position of the first element equal to `value`.
    pub fn index(&self, value: &V) -> Result<usize> {
        self.index_from(value, 0)
    }

    /// Position of the first element equal to `value` at or after `from`.
    pub fn index_from(&self, value: &V, from: usize) -> Result<usize> {
        self.buffer
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, node)| *node == value)
            .map(|(i, _)| i)
            .ok_or_else(|| {
                MolError::NotFound(format!("value not present at or after position {}", from))
            })
    }

    /// Whether any element equals `value`. Walks the link chain.
    pub fn contains(&self, value: &V) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &V) -> usize {
        self.count_if(|v| v == value)
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns `false` and leaves the array untouched when there is none.
    pub fn remove(&mut self, value: &V) -> bool {
        match self.index(value) {
            Ok(i) => self.pop_at(i as isize).is_ok(),
            Err(_) => false,
        }
    }

    /// Leftmost position where `pattern` occurs as a contiguous run.
    pub fn subsequence_index(&self, pattern: &LinkedArray<V>) -> Result<usize> {
        self.subsequence_index_from(pattern, 0)
    }

    /// Leftmost position `>= from` where `pattern` occurs as a contiguous run.
    ///
    /// Uses a KMP failure table over `pattern`, O(n + m). An empty pattern,
    /// or one longer than the remaining suffix, is never found.
    pub fn subsequence_index_from(&self, pattern: &LinkedArray<V>, from: usize) -> Result<usize> {
        pattern::find_from(self.buffer.as_slice(), pattern.buffer.as_slice(), from)
            .ok_or_else(|| not_a_subsequence(from))
    }

    /// Like [`subsequence_index_from`](Self::subsequence_index_from) for a
    /// pattern held in a plain slice.
    pub fn position_of_slice(&self, pattern: &[V], from: usize) -> Result<usize> {
        pattern::find_from(self.buffer.as_slice(), pattern, from)
            .ok_or_else(|| not_a_subsequence(from))
    }

    /// Whether `pattern` occurs anywhere as a contiguous run.
    pub fn is_subsequence(&self, pattern: &LinkedArray<V>) -> bool {
        self.subsequence_index(pattern).is_ok()
    }
}

fn not_a_subsequence(from: usize) -> MolError {
    MolError::NotFound(format!("pattern does not occur at or after position {}", from))
}

impl<V: Ord> LinkedArray<V> {
    /// Stable in-place insertion sort, ascending unless `descending`.
    ///
    /// Values move between nodes; the nodes and their links stay put.
    pub fn sort(&mut self, descending: bool) {
        for i in 1..self.buffer.len() {
            let mut j = i;
            while j > 0 {
                let (left, right) = self.buffer.split_at_mut(j);
                let prev = &mut left[j - 1];
                let cur = &mut right[0];
                let out_of_order = if descending { *prev < *cur } else { *prev > *cur };
                if !out_of_order {
                    break;
                }
                prev.swap_values(cur);
                j -= 1;
            }
        }
    }

    /// Smallest element.
    pub fn min(&self) -> Result<&V> {
        self.iter()
            .min()
            .ok_or_else(|| MolError::Empty("min of an empty array".into()))
    }

    /// Largest element.
    pub fn max(&self) -> Result<&V> {
        self.iter()
            .max()
            .ok_or_else(|| MolError::Empty("max of an empty array".into()))
    }
}

impl<V> Default for LinkedArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for LinkedArray<V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedArray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements separated by `", "`.
impl<V: fmt::Display> fmt::Display for LinkedArray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}

impl<V: PartialEq> PartialEq for LinkedArray<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for LinkedArray<V> {}

impl<V: PartialEq, const N: usize> PartialEq<[V; N]> for LinkedArray<V> {
    fn eq(&self, other: &[V; N]) -> bool {
        self.len() == N && self.iter().eq(other.iter())
    }
}

impl<V: PartialEq> PartialEq<Vec<V>> for LinkedArray<V> {
    fn eq(&self, other: &Vec<V>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// # Panics
///
/// Panics when `index` is out of range; use [`LinkedArray::get`] to get an
/// error instead.
impl<V> Index<isize> for LinkedArray<V> {
    type Output = V;

    fn index(&self, index: isize) -> &V {
        match self.normalize(index) {
            Ok(i) => self.buffer[i].value(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<V> IndexMut<isize> for LinkedArray<V> {
    fn index_mut(&mut self, index: isize) -> &mut V {
        match self.normalize(index) {
            Ok(i) => self.buffer[i].value_mut(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<V> FromIterator<V> for LinkedArray<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut arr = Self::with_capacity(lower.saturating_mul(2).max(DEFAULT_CAPACITY));
        for value in iter {
            arr.append(value);
        }
        arr
    }
}

impl<V> Extend<V> for LinkedArray<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.append(value);
        }
    }
}

impl<V> From<Vec<V>> for LinkedArray<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V: Clone> From<&[V]> for LinkedArray<V> {
    fn from(values: &[V]) -> Self {
        Self::from_slice(values)
    }
}

impl<V: Clone> AddAssign<&LinkedArray<V>> for LinkedArray<V> {
    fn add_assign(&mut self, rhs: &LinkedArray<V>) {
        self.extend_from(rhs);
    }
}

impl<V: Clone> Add<&LinkedArray<V>> for &LinkedArray<V> {
    type Output = LinkedArray<V>;

    fn add(self, rhs: &LinkedArray<V>) -> LinkedArray<V> {
        let mut out = self.copy();
        out.extend_from(rhs);
        out
    }
}

impl<V> IntoIterator for LinkedArray<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter::new(self.buffer)
    }
}

impl<'a, V> IntoIterator for &'a LinkedArray<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
