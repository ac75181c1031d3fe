use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::{ArrayOptions, GrowthFactor, DEFAULT_CAP};
use crate::Value;
use crate::collections::contiguous::buffer::Buffer;
#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, ConfigError, EmptyContainer, IndexOrCapOverflow, IndexOutOfBounds,
    InvalidGrowthFactor, InvalidState,
};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A variable size contiguous collection of [`Value`]s, backed by a manually allocated buffer that
/// grows by a configurable factor.
///
/// Only the first [`len`](GrowableArray::len) slots of the buffer hold elements. The remaining
/// slots up to [`cap`](GrowableArray::cap) are spare room and are never exposed. The capacity never
/// shrinks for the lifetime of the array.
///
/// GrowableArray dereferences to a slice of its elements, so all of the read-only and in-place
/// methods of `[Value]` are available as well.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second GrowableArray.
/// - `k`: The rotation offset.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `prepend` | `O(n)` |
/// | `insert` | `O(n-i)`*, `O(n)` |
/// | `remove` | `O(n-i)` |
/// | `reverse` | `O(n)` |
/// | `rotate_right` | `O(n)` |
/// | `merge` | `O(n+m)` |
/// | `interleave` | `O(n+m)` |
/// | `middle` | `O(1)` |
/// | `index_of` | `O(n)` |
/// | `split` | `O(n)` |
///
/// \* If the GrowableArray doesn't have enough capacity for the new element, it has to grow first,
/// which takes `O(n)`.
pub struct GrowableArray {
    pub(crate) buf: Buffer,
    pub(crate) len: usize,
    pub(crate) growth: GrowthFactor,
}

impl GrowableArray {
    /// Creates a new, empty GrowableArray with a capacity of 10 and a growth factor of 2.0.
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 10);
    /// assert_eq!(arr.growth_factor().get(), 2.0);
    /// ```
    pub fn new() -> GrowableArray {
        GrowableArray::with_cap_and_growth(DEFAULT_CAP, GrowthFactor::DEFAULT).throw()
    }

    /// Creates a new, empty GrowableArray with the default capacity and the provided growth factor.
    ///
    /// # Errors
    /// Returns [`InvalidGrowthFactor`] if `factor` isn't a finite value greater than 1.0, because
    /// such a factor would never increase the capacity.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr = GrowableArray::with_growth_factor(1.5).unwrap();
    /// assert_eq!(arr.growth_factor().get(), 1.5);
    ///
    /// assert!(GrowableArray::with_growth_factor(1.0).is_err());
    /// ```
    pub fn with_growth_factor(factor: f64) -> Result<GrowableArray, InvalidGrowthFactor> {
        GrowableArray::options().growth_factor(factor).build()
    }

    /// Returns a builder for configuring the capacity and growth factor of a new GrowableArray.
    pub const fn options() -> ArrayOptions {
        ArrayOptions::new()
    }

    pub(crate) fn with_cap_and_growth(
        cap: usize,
        growth: GrowthFactor,
    ) -> Result<GrowableArray, CapacityOverflow> {
        Ok(GrowableArray {
            buf: Buffer::zeroed(cap)?,
            len: 0,
            growth,
        })
    }

    /// Returns the number of elements in the GrowableArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub const fn growth_factor(&self) -> GrowthFactor {
        self.growth
    }

    /// Returns the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Value {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<Value, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.buf[index])
    }

    /// Inserts `value` at `index`, moving all following elements one slot to the right. `index`
    /// may be equal to the length, in which case this is equivalent to
    /// [`append`](GrowableArray::append).
    ///
    /// # Panics
    /// Panics if `index > len`, or if the required growth would exceed the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray = (0..3).collect();
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(5, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: Value) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: Value) -> Result<(), IndexOrCapOverflow> {
        self.check_position(index)?;
        Ok(self.insert_unchecked(index, value)?)
    }

    /// Removes and returns the element at `index`, moving all following elements one slot to the
    /// left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray = [5, 6, 7].into_iter().collect();
    /// assert_eq!(arr.remove(0), 5);
    /// assert_eq!(&*arr, &[6, 7]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Value {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<Value, IndexOutOfBounds> {
        self.check_index(index)?;

        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Adds `value` to the end of the GrowableArray, growing it if required.
    ///
    /// # Panics
    /// Panics if the required growth would exceed the maximum capacity.
    pub fn append(&mut self, value: Value) {
        self.try_append(value).throw()
    }

    pub fn try_append(&mut self, value: Value) -> Result<(), CapacityOverflow> {
        self.reserve_one()?;

        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Adds `value` to the start of the GrowableArray, moving all existing elements to the right.
    ///
    /// # Panics
    /// Panics if the required growth would exceed the maximum capacity.
    pub fn prepend(&mut self, value: Value) {
        self.try_prepend(value).throw()
    }

    pub fn try_prepend(&mut self, value: Value) -> Result<(), CapacityOverflow> {
        // Position 0 is valid for any length.
        self.insert_unchecked(0, value)
    }

    /// Removes all elements, keeping the allocated capacity.
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    /// Reverses the order of all elements in place.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray = (1..=4).collect();
    /// arr.reverse();
    /// assert_eq!(&*arr, &[4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        self.reverse_range(0, self.len);
    }

    /// Rotates all elements `k` places to the right, wrapping elements from the end around to the
    /// front. `k` is taken modulo the length.
    ///
    /// # Panics
    /// Panics if the GrowableArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray = (1..=5).collect();
    /// arr.rotate_right(2);
    /// assert_eq!(&*arr, &[4, 5, 1, 2, 3]);
    /// arr.rotate_right(13);
    /// assert_eq!(&*arr, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn rotate_right(&mut self, k: usize) {
        self.try_rotate_right(k).throw()
    }

    /// Rotates all elements `k` places to the right, returning an [`Err`] for an empty
    /// GrowableArray rather than panicking.
    pub fn try_rotate_right(&mut self, k: usize) -> Result<(), InvalidState> {
        if self.is_empty() {
            return Err(InvalidState);
        }

        let k = k % self.len;
        self.reverse_range(0, self.len);
        self.reverse_range(0, k);
        self.reverse_range(k, self.len);
        Ok(())
    }

    /// Copies all elements of `other` onto the end of self, growing as many times as required.
    /// `other` is left unchanged.
    ///
    /// # Panics
    /// Panics if the required growth would exceed the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray = (1..=3).collect();
    /// let other: GrowableArray = [6, 7].into_iter().collect();
    /// arr.merge(&other);
    /// assert_eq!(&*arr, &[1, 2, 3, 6, 7]);
    /// assert_eq!(&*other, &[6, 7]);
    /// ```
    pub fn merge(&mut self, other: &GrowableArray) {
        self.try_merge(other).throw()
    }

    pub fn try_merge(&mut self, other: &GrowableArray) -> Result<(), CapacityOverflow> {
        let new_len = self.len.checked_add(other.len).ok_or(CapacityOverflow)?;

        let mut new_cap = self.cap();
        while new_cap < new_len {
            new_cap = self.growth.next_cap(new_cap);
        }
        self.grow_to(new_cap)?;

        self.buf[self.len..new_len].copy_from_slice(other);
        self.len = new_len;
        Ok(())
    }

    /// Creates a new GrowableArray by taking elements from `a` and `b` in turn, starting with `a`.
    /// Once either runs out, the rest of the other is added in order. Neither input is modified.
    ///
    /// The result is created with the default capacity and growth factor.
    ///
    /// # Panics
    /// Panics if the required growth would exceed the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let a: GrowableArray = [1, 2].into_iter().collect();
    /// let b: GrowableArray = [3, 4, 5, 6].into_iter().collect();
    /// assert_eq!(&*GrowableArray::interleave(&a, &b), &[1, 3, 2, 4, 5, 6]);
    /// ```
    pub fn interleave(a: &GrowableArray, b: &GrowableArray) -> GrowableArray {
        let mut result = GrowableArray::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len || j < b.len {
            if i < a.len {
                result.append(a[i]);
                i += 1;
            }
            if j < b.len {
                result.append(b[j]);
                j += 1;
            }
        }

        result
    }

    /// Returns the element at position `len / 2`. For an even length, this is the first element
    /// of the second half.
    ///
    /// # Panics
    /// Panics if the GrowableArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// assert_eq!((1..=5).collect::<GrowableArray>().middle(), 3);
    /// assert_eq!((1..=4).collect::<GrowableArray>().middle(), 3);
    /// ```
    pub fn middle(&self) -> Value {
        self.try_middle().throw()
    }

    pub fn try_middle(&self) -> Result<Value, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        Ok(self.buf[self.len / 2])
    }

    /// Returns the position of the first element equal to `value`, if there is one.
    pub fn index_of(&self, value: Value) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if *element == value { return Some(index); }
        }
        None
    }

    /// Copies the elements before `index` and the elements from `index` onwards into two new
    /// GrowableArrays, leaving self unchanged. Both halves use the growth factor of self.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray = (0..5).collect();
    /// let (left, right) = arr.split(2);
    /// assert_eq!(&*left, &[0, 1]);
    /// assert_eq!(&*right, &[2, 3, 4]);
    /// assert_eq!(arr.len(), 5);
    /// ```
    pub fn split(&self, index: usize) -> (GrowableArray, GrowableArray) {
        self.try_split(index).throw()
    }

    pub fn try_split(&self, index: usize) -> Result<(GrowableArray, GrowableArray), IndexOutOfBounds> {
        self.check_position(index)?;

        Ok((
            self.copy_range(0, index),
            self.copy_range(index, self.len),
        ))
    }
}

impl GrowableArray {
    /// Inserts `value` at `index` without checking that `index <= len`.
    pub(crate) fn insert_unchecked(&mut self, index: usize, value: Value) -> Result<(), CapacityOverflow> {
        self.reserve_one()?;

        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Ensures there is room for at least one more element, growing by the growth factor if the
    /// GrowableArray is full.
    pub(crate) fn reserve_one(&mut self) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.grow_to(self.growth.next_cap(self.cap()))?;
        }
        Ok(())
    }

    pub(crate) fn grow_to(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        if new_cap > self.cap() {
            debug!(len = self.len, old_cap = self.cap(), new_cap, "growing array");
        }
        self.buf.grow_to(new_cap)
    }

    /// Reverses the elements in `start..end` by swapping from both ends towards the middle.
    pub(crate) fn reverse_range(&mut self, mut start: usize, mut end: usize) {
        while start + 1 < end {
            end -= 1;
            self.buf.swap(start, end);
            start += 1;
        }
    }

    /// Creates a new GrowableArray holding a copy of the elements in `start..end`.
    pub(crate) fn copy_range(&self, start: usize, end: usize) -> GrowableArray {
        let mut arr = GrowableArray::with_cap_and_growth(DEFAULT_CAP, self.growth).throw();
        arr.extend(&self.buf[start..end]);
        arr
    }

    /// Checks that `index` refers to an existing element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Checks that `index` is a valid position to insert or split at, including one past the end.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index <= self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl Extend<Value> for GrowableArray {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a> Extend<&'a Value> for GrowableArray {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<Value> for GrowableArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut arr = GrowableArray::new();
        arr.extend(iter);
        arr
    }
}

impl Default for GrowableArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for GrowableArray {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len]
    }
}

impl DerefMut for GrowableArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf[..self.len]
    }
}

impl AsRef<[Value]> for GrowableArray {
    fn as_ref(&self) -> &[Value] {
        self.deref()
    }
}

impl AsMut<[Value]> for GrowableArray {
    fn as_mut(&mut self) -> &mut [Value] {
        self.deref_mut()
    }
}

impl Borrow<[Value]> for GrowableArray {
    fn borrow(&self) -> &[Value] {
        self.as_ref()
    }
}

impl BorrowMut<[Value]> for GrowableArray {
    fn borrow_mut(&mut self) -> &mut [Value] {
        self.as_mut()
    }
}

impl Clone for GrowableArray {
    fn clone(&self) -> Self {
        let mut arr = GrowableArray::with_cap_and_growth(self.cap(), self.growth).throw();
        arr.buf[..self.len].copy_from_slice(self);
        arr.len = self.len;
        arr
    }
}

impl PartialEq for GrowableArray {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for GrowableArray {}

impl Hash for GrowableArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl Debug for GrowableArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("growth_factor", &self.growth.get())
            .finish()
    }
}

impl Display for GrowableArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
