use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::trace;

use super::{Iter, IterMut, Link, Node, seek, seek_end};
use crate::Value;
#[doc(inline)]
pub use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A singly linked list of [`Value`]s. Each node exclusively owns the node after it, so the
/// sequence owns its whole chain through the head node.
///
/// There is no cached tail, so every positional operation walks the chain from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedSequence.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second LinkedSequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `prepend` | `O(1)` |
/// | `append` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `reverse` | `O(n)` |
/// | `rotate_right` | `O(n)` |
/// | `merge` | `O(n)` |
/// | `interleave` | `O(min(n, m))` |
/// | `middle` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `split` | `O(n)` |
///
/// Transformations which combine two sequences ([`merge`](LinkedSequence::merge) and
/// [`interleave`](LinkedSequence::interleave)) relink the nodes of the other sequence rather than
/// copying them, so they take the other sequence by value.
pub struct LinkedSequence {
    pub(crate) head: Link,
    pub(crate) len: usize,
}

impl LinkedSequence {
    /// Creates a new LinkedSequence with no elements.
    pub const fn new() -> LinkedSequence {
        LinkedSequence {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the LinkedSequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedSequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element, if there is one.
    pub fn front(&self) -> Option<Value> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Value {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<Value, IndexOutOfBounds> {
        self.iter()
            .nth(index)
            .copied()
            .ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Inserts `value` so that it ends up at position `index`, linking it in front of the node
    /// currently at that position. `index` may be equal to the length.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// let mut seq: LinkedSequence = [1, 2, 3].into_iter().collect();
    /// seq.insert(1, 4);
    /// seq.insert(4, 5);
    /// assert_eq!(seq.to_string(), "(1) -> (4) -> (2) -> (3) -> (5)");
    /// ```
    pub fn insert(&mut self, index: usize, value: Value) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: Value) -> Result<(), IndexOutOfBounds> {
        self.check_position(index)?;

        let link = seek(&mut self.head, index);
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Unlinks and returns the element at `index`, joining its neighbours together.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<Value, IndexOutOfBounds> {
        let len = self.len;
        let link = seek(&mut self.head, index);

        match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                self.len -= 1;
                Ok(node.value)
            },
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Adds `value` to the end of the LinkedSequence. This walks the whole chain.
    pub fn append(&mut self, value: Value) {
        *seek_end(&mut self.head) = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Adds `value` to the front of the LinkedSequence.
    pub fn prepend(&mut self, value: Value) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        *self = LinkedSequence::new();
    }

    /// Reverses the order of the elements in place by redirecting every link to point at the
    /// previous node.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// let mut seq: LinkedSequence = (1..=4).collect();
    /// seq.reverse();
    /// assert_eq!(seq.to_string(), "(4) -> (3) -> (2) -> (1)");
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = mem::replace(&mut node.next, prev);
            prev = Some(node);
        }

        self.head = prev;
    }

    /// Rotates all elements `k` places to the right, so that the last `k` elements (modulo the
    /// length) move to the front. Does nothing for an empty LinkedSequence.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// let mut seq: LinkedSequence = (1..=5).collect();
    /// seq.rotate_right(2);
    /// assert_eq!(seq.to_string(), "(4) -> (5) -> (1) -> (2) -> (3)");
    /// ```
    pub fn rotate_right(&mut self, k: usize) {
        if self.is_empty() || k == 0 {
            return;
        }

        let k = k % self.len;
        if k == 0 {
            return;
        }

        self.reopen_ring(self.len - k);
    }

    /// Appends all elements of `other` to the end of self by linking its head after the tail of
    /// self. No nodes are copied.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// let mut seq: LinkedSequence = [1, 2, 3].into_iter().collect();
    /// seq.merge([5, 6].into_iter().collect());
    /// assert_eq!(seq.to_string(), "(1) -> (2) -> (3) -> (5) -> (6)");
    /// assert_eq!(seq.len(), 5);
    /// ```
    pub fn merge(&mut self, mut other: LinkedSequence) {
        if other.is_empty() {
            return;
        }

        let (chain, other_len) = other.take_chain();
        trace!(len = self.len, other_len, "merging sequences");

        *seek_end(&mut self.head) = chain;
        self.len += other_len;
    }

    /// Weaves the nodes of `other` into self, alternating between the two and starting with self.
    /// Once either runs out of nodes, the rest of the other is attached to the end. Nodes are
    /// relinked in place, no new nodes are allocated.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// let mut seq: LinkedSequence = [1, 2].into_iter().collect();
    /// seq.interleave([3, 4, 5, 6].into_iter().collect());
    /// assert_eq!(seq.to_string(), "(1) -> (3) -> (2) -> (4) -> (5) -> (6)");
    /// ```
    pub fn interleave(&mut self, mut other: LinkedSequence) {
        let (mut theirs, other_len) = other.take_chain();
        let mut ours = self.head.take();
        trace!(len = self.len, other_len, "interleaving sequences");

        let mut tail = &mut self.head;
        loop {
            match (ours, theirs) {
                (Some(mut a), Some(mut b)) => {
                    ours = a.next.take();
                    theirs = b.next.take();
                    tail = &mut tail.insert(a).next.insert(b).next;
                },
                (rest, None) | (None, rest) => {
                    *tail = rest;
                    break;
                },
            }
        }

        self.len += other_len;
    }

    /// Returns the element at position `len / 2`, found with a slow and a fast cursor. The fast
    /// cursor moves two nodes for every node the slow one moves, so the slow cursor is halfway
    /// along when the fast one reaches the end.
    ///
    /// # Panics
    /// Panics if the LinkedSequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedSequence;
    /// assert_eq!((1..=5).collect::<LinkedSequence>().middle(), 3);
    /// assert_eq!((1..=4).collect::<LinkedSequence>().middle(), 3);
    /// ```
    pub fn middle(&self) -> Value {
        self.try_middle().throw()
    }

    pub fn try_middle(&self) -> Result<Value, EmptyContainer> {
        let mut slow = self.head.as_deref().ok_or(EmptyContainer)?;
        let mut fast = slow;

        while let Some(next) = fast.next.as_deref() {
            slow = match slow.next.as_deref() {
                Some(node) => node,
                None => break,
            };
            match next.next.as_deref() {
                Some(node) => fast = node,
                None => break,
            }
        }

        Ok(slow.value)
    }

    /// Returns the position of the first element equal to `value`, if there is one.
    pub fn index_of(&self, value: Value) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if *element == value { return Some(index); }
        }
        None
    }

    /// Copies the elements before `index` and the elements from `index` onwards into two new
    /// LinkedSequences, leaving self unchanged.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn split(&self, index: usize) -> (LinkedSequence, LinkedSequence) {
        self.try_split(index).throw()
    }

    pub fn try_split(
        &self,
        index: usize,
    ) -> Result<(LinkedSequence, LinkedSequence), IndexOutOfBounds> {
        self.check_position(index)?;

        Ok((
            self.iter().take(index).copied().collect(),
            self.iter().skip(index).copied().collect(),
        ))
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.into_iter()
    }
}

impl LinkedSequence {
    /// Turns the chain into a ring by linking the tail back to the head, then cuts the ring open
    /// again after the first `cut` nodes. The node that was at position `cut` becomes the new head
    /// and the node before it the new tail.
    ///
    /// Both steps happen here, so the chain is acyclic again before this returns. With owned links
    /// the ring is never materialised: the nodes after the cut are detached first and the old head
    /// is then linked after the old tail.
    pub(crate) fn reopen_ring(&mut self, cut: usize) {
        debug_assert!(0 < cut && cut < self.len);

        let mut front = seek(&mut self.head, cut).take();
        let back = self.head.take();
        *seek_end(&mut front) = back;
        self.head = front;
    }

    /// Detaches the whole chain from self, leaving it empty. Returns the chain and its length.
    pub(crate) fn take_chain(&mut self) -> (Link, usize) {
        (self.head.take(), mem::take(&mut self.len))
    }

    /// Checks that `index` is a valid position to insert or split at, including one past the end.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index <= self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Walks the chain and asserts that the number of reachable nodes matches `len`.
    #[cfg(test)]
    pub(crate) fn verify_len(&self) {
        let mut count = 0;
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            count += 1;
            curr = node.next.as_deref();
        }
        assert_eq!(count, self.len, "Reachable nodes should match the stored length.");
    }
}

impl Extend<Value> for LinkedSequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        // Keep a cursor on the end so that each value is linked without walking the chain again.
        let mut end = seek_end(&mut self.head);
        let mut added = 0;

        for value in iter {
            end = &mut end.insert(Node::boxed(value, None)).next;
            added += 1;
        }

        self.len += added;
    }
}

impl FromIterator<Value> for LinkedSequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl Default for LinkedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        // Unlink nodes one at a time, the recursive drop of Box<Node> could overflow the stack for
        // long chains.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl Clone for LinkedSequence {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for LinkedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedSequence {}

impl Hash for LinkedSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl Debug for LinkedSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedSequence")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl Display for LinkedSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();

        match iter.next() {
            Some(first) => write!(f, "({first})")?,
            None => return write!(f, "()"),
        }
        for value in iter {
            write!(f, " -> ({value})")?;
        }
        Ok(())
    }
}
