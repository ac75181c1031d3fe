use std::iter::FusedIterator;

use super::{LinkedSequence, Node};
use crate::Value;

impl<'a> IntoIterator for &'a LinkedSequence {
    type Item = &'a Value;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }
}

/// A borrowing iterator over the elements of a [`LinkedSequence`], from head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) next: Option<&'a Node>,
    // Tracks the number of items left to yield, for an exact size_hint.
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl FusedIterator for Iter<'_> {}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a> IntoIterator for &'a mut LinkedSequence {
    type Item = &'a mut Value;

    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: self.head.as_deref_mut(),
            len: self.len,
        }
    }
}

/// A mutable borrowing iterator over the elements of a [`LinkedSequence`], from head to tail.
pub struct IterMut<'a> {
    pub(crate) next: Option<&'a mut Node>,
    pub(crate) len: usize,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.len -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl FusedIterator for IterMut<'_> {}

impl ExactSizeIterator for IterMut<'_> {
    fn len(&self) -> usize {
        self.len
    }
}
