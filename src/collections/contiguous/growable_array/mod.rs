//! A module containing [`GrowableArray`] and its configuration types, [`ArrayOptions`] and
//! [`GrowthFactor`].
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`], because a GrowableArray dereferences to a slice of its elements.
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod growable_array;
mod iter;
mod options;

pub use growable_array::*;
pub use options::*;
