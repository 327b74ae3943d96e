use strum::IntoEnumIterator;

use lineal_core::{
    AnySequence, ContainerExt, Deque, ErrorKind, ImmutableArraySequence, Queue, Sequence,
    SequenceKind, Stack,
};

fn items<'a, T: Clone + 'a>(iter: impl Iterator<Item = &'a T>) -> Vec<T> {
    iter.cloned().collect()
}

#[test]
fn test_queue_fifo() {
    let mut q = Queue::new();
    for i in 1..=3 {
        q.enqueue(i);
    }
    assert_eq!(q.dequeue(), Ok(1));
    assert_eq!(q.dequeue(), Ok(2));
    assert_eq!(q.dequeue(), Ok(3));
    assert_eq!(q.dequeue().unwrap_err().kind, ErrorKind::EmptyContainer);
}

#[test]
fn test_stack_lifo() {
    let mut s = Stack::new();
    for i in 1..=3 {
        s.push(i);
    }
    assert_eq!(s.pop(), Ok(3));
    assert_eq!(s.pop(), Ok(2));
    assert_eq!(s.pop(), Ok(1));
    assert_eq!(s.pop().unwrap_err().kind, ErrorKind::EmptyContainer);
}

#[test]
fn test_deque_ends() {
    let mut d = Deque::new();
    d.push_back(1);
    d.push_front(0);
    d.push_back(2);
    assert_eq!(items(d.iter()), vec![0, 1, 2]);
}

#[test]
fn test_empty_messages() {
    insta::assert_snapshot!(Stack::<i32>::new().pop().unwrap_err().to_string(), @"Empty container: stack is empty");
    insta::assert_snapshot!(Deque::<i32>::new().back().unwrap_err().to_string(), @"Empty container: deque is empty");
}

#[test]
fn test_contains_subsequence() {
    let q = Queue::from_iter([10, 20, 30, 40]);
    assert!(q.contains_subsequence(&Queue::from_iter([20, 30])));
    assert!(!q.contains_subsequence(&Queue::from_iter([20, 40])));
    assert!(q.contains_subsequence(&Queue::new()));
    assert!(q.contains_subsequence(&q.clone()));
}

#[test]
fn test_from_every_sequence_kind() {
    for kind in SequenceKind::iter() {
        let source = AnySequence::from_items(kind, [1, 2, 3]);
        let mut q = Queue::from_sequence(&source);
        let mut s = Stack::from_sequence(&source);
        let d = Deque::from_sequence(&source);
        assert_eq!(q.dequeue(), Ok(1), "{kind}");
        assert_eq!(s.pop(), Ok(3), "{kind}");
        assert_eq!(items(d.iter()), vec![1, 2, 3], "{kind}");
        assert_eq!(source.len(), 3);
    }
}

#[test]
fn test_from_empty_sequence() {
    let source = ImmutableArraySequence::<i32>::new();
    assert!(Deque::from_sequence(&source).is_empty());
}

#[test]
fn test_concat_keeps_operands() {
    let a = Deque::from_iter([1, 2]);
    let b = Deque::from_iter([3, 4]);
    let c = a.concat(&b);
    assert_eq!(items(c.iter()), vec![1, 2, 3, 4]);
    assert_eq!(items(a.iter()), vec![1, 2]);
    assert_eq!(items(b.iter()), vec![3, 4]);
}

#[test]
fn test_split_partitions() {
    let s = Stack::from_iter([5, -1, 3, -7, 0]);
    let (negative, rest) = s.split(|x| *x < 0);
    assert_eq!(items(negative.iter()), vec![-1, -7]);
    assert_eq!(items(rest.iter()), vec![5, 3, 0]);
    assert_eq!(negative.len() + rest.len(), s.len());
}

#[test]
fn test_get_by_position() {
    let q = Queue::from_iter(["a", "b"]);
    assert_eq!(q.get(1), Ok(&"b"));
    assert_eq!(q.get(2).unwrap_err().kind, ErrorKind::IndexOutOfRange);
    assert_eq!(q.get(-1).unwrap_err().kind, ErrorKind::IndexOutOfRange);
}

#[test]
fn test_clear_then_reuse() {
    let mut q = Queue::from_iter([1, 2, 3]);
    q.clear();
    assert!(q.is_empty());
    q.enqueue(4);
    assert_eq!(q.front(), Ok(&4));
}

#[test]
fn test_deque_sort_doubles() {
    let mut d = Deque::from_iter([2.5, -1.0, 0.5]);
    d.sort();
    assert_eq!(items(d.iter()), vec![-1.0, 0.5, 2.5]);
}

#[test]
fn test_debug() {
    let d = Deque::from_iter([1, 2]);
    insta::assert_debug_snapshot!(d, @r###"
    Deque {
        sequence: [
            1,
            2,
        ],
    }
    "###);
}

#[test]
fn test_structural_equality() {
    let s = Stack::from_iter([1, 2, 3]);
    assert_eq!(s, Stack::from_iter([1, 2, 3]));
    assert_ne!(s, Stack::from_iter([1, 2]));
    assert_ne!(s, Stack::from_iter([3, 2, 1]));
    assert_ne!(Stack::from_iter([1, 2]), s);

    // the freed head slot is reused by the enqueue
    let mut q = Queue::from_iter([0, 1, 2, 3]);
    q.dequeue().unwrap();
    assert_eq!(q, Queue::from_iter([1, 2, 3]));
    q.enqueue(4);
    assert_eq!(q, Queue::from_iter([1, 2, 3, 4]));

    let mut d = Deque::from_iter([1, 2, 3]);
    d.pop_back().unwrap();
    d.push_front(0);
    assert_eq!(d, Deque::from_iter([0, 1, 2]));
    assert_ne!(d, Deque::from_iter([1, 2, 0]));
    assert_eq!(Deque::<i32>::new(), Deque::from_iter([]));
}

#[test]
fn test_reduce_long_containers() {
    let n = 200_000i64;
    let q: Queue<i64> = (0..n).collect();
    assert_eq!(q.reduce(|sum, x| sum + x, 0i64), n * (n - 1) / 2);
    let source = AnySequence::from_items(SequenceKind::ImmutableList, 0..n);
    let d = Deque::from_sequence(&source);
    assert_eq!(d.len(), n as usize);
    assert_eq!(d.back(), Ok(&(n - 1)));
    assert_eq!(d.reduce(|count, _| count + 1, 0usize), n as usize);
}
