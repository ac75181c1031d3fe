//! Contiguous collection types. Namely [`GrowableArray`], an index-addressed array of
//! [`Value`](crate::Value)s that grows by a configurable factor.

pub(crate) mod buffer;
pub mod growable_array;

#[doc(inline)]
pub use growable_array::{ArrayOptions, GrowableArray, GrowthFactor};
