//! Linked collection types. Primarily revolves around [`LinkedSequence`], a singly linked list of
//! [`Value`](crate::Value)s.

pub mod sequence;

#[doc(inline)]
pub use sequence::LinkedSequence;
