//! Property tests for the sequence and container laws.
//!
//! Verifies that:
//! 1. Every sequence kind agrees with a plain vector under edits
//! 2. Immutable edits never change the receiver
//! 3. Filtering partitions and mapping with identity is a no-op
//! 4. Subsequences read the same elements as positional access
//! 5. Containers drain in their advertised order

use lineal_core::{
    AnySequence, ContainerExt, Deque, MutableArraySequence, Queue, Sequence, SequenceKind, Stack,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = SequenceKind> {
    prop_oneof![
        Just(SequenceKind::MutableArray),
        Just(SequenceKind::ImmutableArray),
        Just(SequenceKind::MutableList),
        Just(SequenceKind::ImmutableList),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 0..24)
}

#[derive(Debug, Clone)]
enum Edit {
    Append(i64),
    Prepend(i64),
    Insert(i64, isize),
    Remove(isize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        any::<i64>().prop_map(Edit::Append),
        any::<i64>().prop_map(Edit::Prepend),
        (any::<i64>(), -2isize..30).prop_map(|(item, index)| Edit::Insert(item, index)),
        (-2isize..30).prop_map(Edit::Remove),
    ]
}

fn contents<S: Sequence<i64>>(s: &S) -> Vec<i64> {
    s.iter().copied().collect()
}

/// Apply an edit to the model; `false` when the edit must be rejected.
fn apply_to_model(model: &mut Vec<i64>, edit: &Edit) -> bool {
    match *edit {
        Edit::Append(item) => model.push(item),
        Edit::Prepend(item) => model.insert(0, item),
        Edit::Insert(item, index) => {
            if index < 0 || index as usize > model.len() {
                return false;
            }
            model.insert(index as usize, item);
        }
        Edit::Remove(index) => {
            if index < 0 || index as usize >= model.len() {
                return false;
            }
            model.remove(index as usize);
        }
    }
    true
}

fn apply_to_sequence(s: &mut AnySequence<i64>, edit: &Edit) -> Option<AnySequence<i64>> {
    let edited = match *edit {
        Edit::Append(item) => s.append(item),
        Edit::Prepend(item) => s.prepend(item),
        Edit::Insert(item, index) => s.insert_at(item, index),
        Edit::Remove(index) => s.remove(index),
    };
    edited.ok().map(|edited| edited.into_owned())
}

// ============================================================================
// SEQUENCE PROPERTIES
// ============================================================================

proptest! {
    /// Property: every kind behaves like a vector under the same edits
    #[test]
    fn prop_edits_match_vector(
        kind in kind_strategy(),
        initial in items_strategy(),
        edits in prop::collection::vec(edit_strategy(), 0..16)
    ) {
        let mut model = initial.clone();
        let mut sequence = AnySequence::from_items(kind, initial);
        for edit in &edits {
            let accepted = apply_to_model(&mut model, edit);
            let result = apply_to_sequence(&mut sequence, edit);
            prop_assert_eq!(accepted, result.is_some());
            if let Some(next) = result {
                sequence = next;
            }
            prop_assert_eq!(contents(&sequence), model.clone());
        }
    }

    /// Property: immutable edits leave the receiver as it was
    #[test]
    fn prop_immutable_receiver_unchanged(
        initial in items_strategy(),
        edit in edit_strategy()
    ) {
        for kind in [SequenceKind::ImmutableArray, SequenceKind::ImmutableList] {
            let mut sequence = AnySequence::from_items(kind, initial.clone());
            let _ = apply_to_sequence(&mut sequence, &edit);
            prop_assert_eq!(contents(&sequence), initial.clone());
        }
    }

    /// Property: filter and its negation split the sequence without loss
    #[test]
    fn prop_filter_partitions(kind in kind_strategy(), initial in items_strategy()) {
        let sequence = AnySequence::from_items(kind, initial.clone());
        let even = sequence.filter(|x| x % 2 == 0);
        let odd = sequence.filter(|x| x % 2 != 0);
        prop_assert_eq!(even.len() + odd.len(), sequence.len());
        prop_assert!(even.iter().all(|x| x % 2 == 0));
        prop_assert_eq!(even.kind(), kind);
    }

    /// Property: mapping with identity changes nothing
    #[test]
    fn prop_map_identity(kind in kind_strategy(), initial in items_strategy()) {
        let sequence = AnySequence::from_items(kind, initial);
        prop_assert_eq!(sequence.map(|x| *x), sequence);
    }

    /// Property: slicing equals clamped vector slicing
    #[test]
    fn prop_slice_clamps(
        initial in items_strategy(),
        start in -5isize..30,
        end in -5isize..30
    ) {
        let sequence = MutableArraySequence::from(initial.clone());
        let start_clamped = start.clamp(0, initial.len() as isize) as usize;
        let end_clamped = end.clamp(0, initial.len() as isize) as usize;
        let expected = if start_clamped < end_clamped {
            initial[start_clamped..end_clamped].to_vec()
        } else {
            Vec::new()
        };
        prop_assert_eq!(contents(&sequence.slice(start, end).unwrap()), expected);
    }

    /// Property: the subsequence over the whole range is an equal copy
    #[test]
    fn prop_whole_subsequence(kind in kind_strategy(), initial in items_strategy()) {
        prop_assume!(!initial.is_empty());
        let sequence = AnySequence::from_items(kind, initial.clone());
        let end = initial.len() as isize - 1;
        prop_assert_eq!(sequence.subsequence(0, end).unwrap(), sequence);
    }

    /// Property: subsequence(i, j) holds exactly the elements get(i..=j)
    #[test]
    fn prop_subsequence_matches_reads(
        kind in kind_strategy(),
        initial in items_strategy(),
        a in 0usize..24,
        b in 0usize..24
    ) {
        prop_assume!(!initial.is_empty());
        let last = initial.len() - 1;
        let start = a.min(b).min(last);
        let end = a.max(b).min(last);
        let sequence = AnySequence::from_items(kind, initial.clone());
        let sub = sequence.subsequence(start as isize, end as isize).unwrap();
        prop_assert_eq!(sub.kind(), kind);
        prop_assert_eq!(sub.len(), end - start + 1);
        for offset in 0..sub.len() {
            let read = sequence.get((start + offset) as isize).unwrap();
            prop_assert_eq!(sub.get(offset as isize).unwrap(), read);
        }
    }
}

// ============================================================================
// CONTAINER PROPERTIES
// ============================================================================

proptest! {
    /// Property: a queue drains in insertion order, a stack in reverse
    #[test]
    fn prop_drain_order(initial in items_strategy()) {
        let mut queue = Queue::new();
        let mut stack = Stack::new();
        for item in &initial {
            queue.enqueue(*item);
            stack.push(*item);
        }
        let mut from_queue = Vec::new();
        while let Ok(item) = queue.dequeue() {
            from_queue.push(item);
        }
        let mut from_stack = Vec::new();
        while let Ok(item) = stack.pop() {
            from_stack.push(item);
        }
        let mut reversed = initial.clone();
        reversed.reverse();
        prop_assert_eq!(from_queue, initial);
        prop_assert_eq!(from_stack, reversed);
    }

    /// Property: a deque's sort agrees with the vector sort
    #[test]
    fn prop_deque_sort(initial in items_strategy()) {
        let mut deque = Deque::from_iter(initial.iter().copied());
        deque.sort();
        let mut expected = initial;
        expected.sort();
        prop_assert_eq!(deque.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Property: every contiguous window is found as a subsequence
    #[test]
    fn prop_windows_are_subsequences(
        initial in items_strategy(),
        start in 0usize..24,
        width in 0usize..6
    ) {
        let start = start.min(initial.len());
        let end = (start + width).min(initial.len());
        let deque = Deque::from_iter(initial.iter().copied());
        let window = Deque::from_iter(initial[start..end].iter().copied());
        prop_assert!(deque.contains_subsequence(&window));
    }
}
