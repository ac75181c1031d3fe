mod iter;
mod linked_sequence;
mod node;
mod tests;

pub use iter::*;
pub use linked_sequence::*;
pub(crate) use node::*;
