use crate::Value;

/// An owning link to the next node in a chain, or [`None`] at the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub value: Value,
    pub next: Link,
}

impl Node {
    pub fn boxed(value: Value, next: Link) -> Box<Node> {
        Box::new(Node { value, next })
    }
}

/// Follows up to `hops` links along the chain starting at `link`, returning the link that was
/// reached. Stops early at the end of the chain, in which case the returned link is [`None`].
///
/// The returned link is the one that owns the node at position `hops`, so replacing it splices
/// the chain at that position.
pub(crate) fn seek(mut link: &mut Link, hops: usize) -> &mut Link {
    for _ in 0..hops {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Returns the empty link at the end of the chain starting at `link`.
pub(crate) fn seek_end(mut link: &mut Link) -> &mut Link {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}
