//! Property-based tests for LinkedSequence.
//!
//! These tests compare every operation against the equivalent manipulation of a plain vector of
//! the same values.

#![cfg(feature = "linked")]

use linear_collections::collections::linked::LinkedSequence;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates the contents of a sequence with up to `max_size` elements.
fn values_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

fn non_empty_values() -> impl Strategy<Value = Vec<i32>> {
    values_strategy(40).prop_filter("non-empty", |values| !values.is_empty())
}

fn sequence_of(values: &[i32]) -> LinkedSequence {
    values.iter().copied().collect()
}

fn values_of(seq: &LinkedSequence) -> Vec<i32> {
    seq.iter().copied().collect()
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(values in values_strategy(40)) {
        let seq = sequence_of(&values);
        prop_assert_eq!(seq.len(), seq.iter().count());
        prop_assert_eq!(seq.is_empty(), values.is_empty());
        prop_assert_eq!(seq.front(), values.first().copied());
    }

    #[test]
    fn prop_insert_then_remove_restores(values in values_strategy(40), value: i32, seed: usize) {
        let mut seq = sequence_of(&values);
        let index = seed % (values.len() + 1);

        seq.insert(index, value);
        prop_assert_eq!(seq.get(index), value);
        prop_assert_eq!(seq.len(), values.len() + 1);

        prop_assert_eq!(seq.remove(index), value);
        prop_assert_eq!(values_of(&seq), values);
    }

    #[test]
    fn prop_out_of_range_positions_fail(values in values_strategy(40), value: i32) {
        let mut seq = sequence_of(&values);
        let len = values.len();

        prop_assert!(seq.try_insert(len + 1, value).is_err());
        prop_assert!(seq.try_remove(len).is_err());
        prop_assert!(seq.try_split(len + 1).is_err());
        prop_assert_eq!(values_of(&seq), values);
    }

    #[test]
    fn prop_append_then_index_of_finds_a_match(values in values_strategy(40), value: i32) {
        let mut seq = sequence_of(&values);
        seq.append(value);
        prop_assert_eq!(
            seq.index_of(value),
            values.iter().position(|v| *v == value).or(Some(values.len()))
        );
    }

    // =========================================================================
    // Transformation Properties
    // =========================================================================

    #[test]
    fn prop_reverse_is_involution(values in values_strategy(40)) {
        let mut seq = sequence_of(&values);
        seq.reverse();

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(values_of(&seq), reversed);

        seq.reverse();
        prop_assert_eq!(values_of(&seq), values);
    }

    #[test]
    fn prop_rotations_are_inverses(values in non_empty_values(), k: usize) {
        let mut seq = sequence_of(&values);
        let len = values.len();

        seq.rotate_right(k);
        let mut rotated = values.clone();
        rotated.rotate_right(k % len);
        prop_assert_eq!(values_of(&seq), rotated);
        prop_assert_eq!(seq.len(), len);

        seq.rotate_right(len - k % len);
        prop_assert_eq!(values_of(&seq), values);
    }

    #[test]
    fn prop_merge_concatenates(left in values_strategy(40), right in values_strategy(40)) {
        let mut seq = sequence_of(&left);
        seq.merge(sequence_of(&right));

        let mut expected = left.clone();
        expected.extend_from_slice(&right);
        prop_assert_eq!(seq.len(), expected.len());
        prop_assert_eq!(values_of(&seq), expected);
    }

    #[test]
    fn prop_interleave_alternates(left in values_strategy(40), right in values_strategy(40)) {
        let mut seq = sequence_of(&left);
        seq.interleave(sequence_of(&right));

        let shared = left.len().min(right.len());
        let mut expected = Vec::new();
        for i in 0..shared {
            expected.push(left[i]);
            expected.push(right[i]);
        }
        expected.extend_from_slice(&left[shared..]);
        expected.extend_from_slice(&right[shared..]);

        prop_assert_eq!(seq.len(), expected.len());
        prop_assert_eq!(values_of(&seq), expected);
    }

    #[test]
    fn prop_middle_is_at_half_len(values in non_empty_values()) {
        prop_assert_eq!(sequence_of(&values).middle(), values[values.len() / 2]);
    }

    #[test]
    fn prop_split_recombines(values in values_strategy(40), seed: usize) {
        let seq = sequence_of(&values);
        let index = seed % (values.len() + 1);

        let (mut left, right) = seq.split(index);
        prop_assert_eq!(left.len(), index);
        prop_assert_eq!(right.len(), values.len() - index);
        left.merge(right);
        prop_assert_eq!(&left, &seq);
    }
}
