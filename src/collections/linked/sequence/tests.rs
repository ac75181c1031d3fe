#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::Value;
use crate::util::panic::assert_panics;

fn sequence_of(values: &[Value]) -> LinkedSequence {
    values.iter().copied().collect()
}

fn values_of(seq: &LinkedSequence) -> Vec<Value> {
    seq.verify_len();
    seq.iter().copied().collect()
}

#[test]
fn test_insert_and_remove() {
    let mut seq = LinkedSequence::new();
    seq.insert(0, 2);
    seq.insert(0, 1);
    seq.insert(2, 4);
    seq.insert(2, 3);
    assert_eq!(values_of(&seq), [1, 2, 3, 4]);

    assert_eq!(seq.remove(0), 1, "Removing the head should return its value.");
    assert_eq!(seq.remove(1), 3, "Removing from the middle should relink around the node.");
    assert_eq!(seq.remove(1), 4, "Removing the tail should terminate the chain.");
    assert_eq!(values_of(&seq), [2]);

    assert_eq!(seq.try_insert(2, 0), Err(IndexOutOfBounds { index: 2, len: 1 }));
    assert_eq!(seq.try_remove(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(values_of(&seq), [2], "Failed operations shouldn't modify the sequence.");

    assert_eq!(seq.remove(0), 2);
    assert!(seq.is_empty(), "Removing the only element should empty the sequence.");
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.front(), None);

    assert_panics!({
        LinkedSequence::new().insert(1, 0);
    });
    assert_panics!({
        LinkedSequence::new().remove(0);
    }, "Index 0 out of bounds");
}

#[test]
fn test_append_and_prepend() {
    let mut seq = LinkedSequence::new();
    seq.append(2);
    seq.prepend(1);
    seq.append(3);
    seq.prepend(0);
    assert_eq!(values_of(&seq), [0, 1, 2, 3]);
    assert_eq!(seq.front(), Some(0));
    assert_eq!(seq.get(3), 3);
    assert_eq!(seq.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    let prior = seq.len();
    seq.append(99);
    assert_eq!(seq.index_of(99), Some(prior));
}

#[test]
fn test_reverse() {
    let mut seq = sequence_of(&[1, 2, 3, 4, 5]);
    seq.reverse();
    assert_eq!(values_of(&seq), [5, 4, 3, 2, 1]);

    seq.reverse();
    assert_eq!(values_of(&seq), [1, 2, 3, 4, 5], "Reversing twice should restore the order.");

    let mut empty = LinkedSequence::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = sequence_of(&[7]);
    single.reverse();
    assert_eq!(values_of(&single), [7]);
}

#[test]
fn test_rotate_right() {
    let mut seq = sequence_of(&[1, 2, 3, 4]);
    seq.rotate_right(1);
    assert_eq!(values_of(&seq), [4, 1, 2, 3]);

    seq.rotate_right(3);
    assert_eq!(values_of(&seq), [1, 2, 3, 4], "Rotating by len - k should undo a rotation by k.");

    seq.rotate_right(4);
    assert_eq!(values_of(&seq), [1, 2, 3, 4], "Rotating by len should do nothing.");

    seq.rotate_right(6);
    assert_eq!(values_of(&seq), [3, 4, 1, 2], "Rotations should wrap modulo len.");

    seq.rotate_right(0);
    assert_eq!(values_of(&seq), [3, 4, 1, 2]);

    let mut empty = LinkedSequence::new();
    empty.rotate_right(3);
    assert!(empty.is_empty(), "Rotating an empty sequence should do nothing.");

    let mut single = sequence_of(&[9]);
    single.rotate_right(5);
    assert_eq!(values_of(&single), [9]);
}

#[test]
fn test_merge() {
    let mut seq = sequence_of(&[1, 2, 3]);
    seq.merge(sequence_of(&[5, 6]));
    assert_eq!(values_of(&seq), [1, 2, 3, 5, 6]);
    assert_eq!(seq.len(), 5);

    seq.merge(LinkedSequence::new());
    assert_eq!(values_of(&seq), [1, 2, 3, 5, 6], "Merging an empty sequence should do nothing.");

    let mut empty = LinkedSequence::new();
    empty.merge(sequence_of(&[1, 2]));
    assert_eq!(values_of(&empty), [1, 2], "Merging into an empty sequence should adopt the other chain.");
}

#[test]
fn test_interleave() {
    let mut seq = sequence_of(&[1, 2]);
    seq.interleave(sequence_of(&[3, 4, 5, 6]));
    assert_eq!(values_of(&seq), [1, 3, 2, 4, 5, 6]);
    assert_eq!(seq.len(), 6);

    let mut seq = sequence_of(&[1, 3, 5, 7]);
    seq.interleave(sequence_of(&[2, 4]));
    assert_eq!(values_of(&seq), [1, 2, 3, 4, 5, 7], "The rest of self should stay attached.");

    let mut seq = sequence_of(&[1, 3]);
    seq.interleave(sequence_of(&[2, 4]));
    assert_eq!(values_of(&seq), [1, 2, 3, 4]);

    let mut seq = sequence_of(&[1, 2]);
    seq.interleave(LinkedSequence::new());
    assert_eq!(values_of(&seq), [1, 2]);

    let mut seq = LinkedSequence::new();
    seq.interleave(sequence_of(&[1, 2]));
    assert_eq!(values_of(&seq), [1, 2], "Interleaving into an empty sequence should adopt the other chain.");
}

#[test]
fn test_middle() {
    assert_eq!(sequence_of(&[1, 2, 3, 4, 5]).middle(), 3);
    assert_eq!(sequence_of(&[1, 2, 3, 4]).middle(), 3);
    assert_eq!(sequence_of(&[1, 2]).middle(), 2);
    assert_eq!(sequence_of(&[1]).middle(), 1);
    assert_eq!(LinkedSequence::new().try_middle(), Err(EmptyContainer));
    assert_panics!({
        LinkedSequence::new().middle();
    }, "at least one element");

    for len in 1..20 {
        let seq: LinkedSequence = (0..len).collect();
        assert_eq!(seq.middle(), len / 2, "The middle of {len} elements should be at len / 2.");
    }
}

#[test]
fn test_index_of() {
    let seq = sequence_of(&[4, 8, 15, 16, 23, 42, 8]);
    assert_eq!(seq.index_of(8), Some(1), "The first match should be returned.");
    assert_eq!(seq.index_of(42), Some(5));
    assert_eq!(seq.index_of(99), None);
    assert_eq!(LinkedSequence::new().index_of(0), None);
}

#[test]
fn test_split() {
    let seq = sequence_of(&[1, 2, 3, 4, 5]);
    let values = values_of(&seq);

    for index in 0..=seq.len() {
        let (left, right) = seq.split(index);
        assert_eq!(values_of(&left), values[..index]);
        assert_eq!(values_of(&right), values[index..]);
    }
    assert_eq!(values_of(&seq), values, "Splitting should leave the original intact.");

    assert_eq!(seq.try_split(6).err(), Some(IndexOutOfBounds { index: 6, len: 5 }));
    assert_panics!({
        LinkedSequence::new().split(1);
    });
}

#[test]
fn test_long_chain_drop() {
    let seq: LinkedSequence = (0..1_000_000).collect();
    assert_eq!(seq.len(), 1_000_000);
    drop(seq);
}

#[test]
fn test_equality_clone_and_hash() {
    let seq = sequence_of(&[1, 2, 3]);
    let clone = seq.clone();
    assert_eq!(seq, clone);
    assert_ne!(seq, sequence_of(&[1, 2]));
    assert_ne!(seq, sequence_of(&[1, 2, 4]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&seq), state.hash_one(&clone));
}

#[test]
fn test_iterators() {
    let mut seq = sequence_of(&[1, 2, 3]);
    for value in seq.iter_mut() {
        *value *= 2;
    }
    assert_eq!(values_of(&seq), [2, 4, 6]);

    let mut iter = seq.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.by_ref().count(), 2);
    assert_eq!(iter.next(), None);

    seq.extend([8, 10]);
    assert_eq!(values_of(&seq), [2, 4, 6, 8, 10], "Extending should link onto the existing tail.");

    seq.clear();
    assert!(seq.is_empty());
    assert!(values_of(&seq).is_empty());
}

#[test]
fn test_formatting() {
    let seq = sequence_of(&[1, 2, 3]);
    assert_eq!(seq.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(LinkedSequence::new().to_string(), "()");
    assert_eq!(format!("{seq:?}"), "LinkedSequence { contents: [1, 2, 3], len: 3 }");
}
