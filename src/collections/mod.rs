//! Linear collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [Value]>`](std::ops::Deref) (and DerefMut),
//! which saves writing some of the more repetitive slice functionality.
//!
//! [`Value`]: crate::Value

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
