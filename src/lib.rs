//! This crate provides two linear collections of integers, written from scratch: a contiguous
//! [`GrowableArray`](collections::contiguous::GrowableArray) and a singly linked
//! [`LinkedSequence`](collections::linked::LinkedSequence).
//!
//! # Purpose
//! Both types expose the same core set of operations (insertion, removal, reversal, rotation,
//! merging, interleaving, splitting and searching) so that the contiguous and linked
//! representations can be compared directly. Writing them by hand, rather than wrapping [`Vec`] or
//! [`LinkedList`](std::collections::LinkedList), keeps the interesting parts visible: the
//! allocation and growth policy of the array and the relinking of owned nodes in the sequence.
//!
//! # Error Handling
//! Fallible operations come in pairs. A method such as
//! [`try_insert`](collections::contiguous::GrowableArray::try_insert) returns a [`Result`], while
//! its counterpart [`insert`](collections::contiguous::GrowableArray::insert) panics with the same
//! error. It is more ergonomic for most callers to panic on a bad index than to handle an error
//! every time, but the `try_` variants are there when the caller wants to recover.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with small
//! structs (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Logging
//! Allocation growth and chain relinking emit [`tracing`] events at the `debug` and `trace`
//! levels. Nothing is printed unless the application installs a subscriber.
//!
//! # Features
//! - `contiguous`: [`GrowableArray`](collections::contiguous::GrowableArray) and its options.
//! - `linked`: [`LinkedSequence`](collections::linked::LinkedSequence).
//!
//! Both are enabled by default through `collections-all`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

/// The element type stored by every collection in this crate.
pub type Value = i32;

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
