use crate::error::{self, Error, ErrorKind};
use crate::sequence::{MutableListSequence, Sequence};
use crate::store::LinkedListIter;

/// The core container interface: a container must implement this to
/// function.
///
/// If you do, [`ContainerExt`] provides the rest of the container API on top
/// of it.
pub trait ContainerCore<T: Clone>: Sized {
    /// Lowercase name used in error details
    const NAME: &'static str;

    /// The wrapped mutable list
    fn sequence(&self) -> &MutableListSequence<T>;

    /// Wrap an owned list as this kind of container.
    fn from_list(sequence: MutableListSequence<T>) -> Self;

    /// Remove the element this container gives up first: the head of a
    /// queue, the top of a stack.
    fn take_next(&mut self) -> error::Result<T>;

    /// The error for reading or removing from an empty container.
    fn empty_error() -> Error {
        ErrorKind::EmptyContainer.with_detail(format!("{} is empty", Self::NAME))
    }
}

/// Copy any sequence into a fresh mutable list.
///
/// A mutable list is copied wholesale; any other variant is read by index
/// and appended one element at a time.
pub(crate) fn adopt<T: Clone, S: Sequence<T>>(source: &S) -> MutableListSequence<T> {
    if let Some(list) = source.as_mutable_list() {
        return list.clone();
    }
    source.iter().cloned().collect()
}

pub trait ContainerExt<T: Clone>: ContainerCore<T> {
    /// A container holding a copy of `source`'s elements in order.
    fn from_sequence<S: Sequence<T>>(source: &S) -> Self {
        Self::from_list(adopt(source))
    }

    fn len(&self) -> usize {
        self.sequence().len()
    }

    fn is_empty(&self) -> bool {
        self.sequence().is_empty()
    }

    /// The element at `index`, counted from the front.
    fn get(&self, index: isize) -> error::Result<&T> {
        self.sequence().get(index)
    }

    /// Iterate front to back.
    fn iter(&self) -> LinkedListIter<'_, T> {
        self.sequence().nodes()
    }

    /// Remove elements one at a time until none are left.
    fn clear(&mut self) {
        while !self.is_empty() {
            if self.take_next().is_err() {
                break;
            }
        }
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == item)
    }

    /// Whether `sub` occurs as a contiguous run. An empty `sub` always
    /// matches.
    fn contains_subsequence(&self, sub: &Self) -> bool
    where
        T: PartialEq,
    {
        if sub.is_empty() {
            return true;
        }
        let haystack = self.iter().collect::<Vec<_>>();
        let needle = sub.iter().collect::<Vec<_>>();
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
    }

    fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        Self::from_list(self.sequence().map(f))
    }

    /// Keep the elements matching `predicate`, in order.
    fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Self {
        Self::from_list(self.sequence().filter(predicate))
    }

    /// Left fold from front to back.
    fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A {
        self.iter().fold(initial, f)
    }

    /// A new container with this container's elements followed by `other`'s.
    fn concat(&self, other: &Self) -> Self {
        let mut sequence = self.sequence().clone();
        for item in other.iter() {
            sequence.push_back(item.clone());
        }
        Self::from_list(sequence)
    }

    /// A new container holding `start..=end`.
    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self> {
        Ok(Self::from_list(self.sequence().subsequence(start, end)?))
    }

    /// Partition into (matching, not matching), keeping relative order.
    fn split(&self, mut predicate: impl FnMut(&T) -> bool) -> (Self, Self) {
        let mut matching = MutableListSequence::new();
        let mut rest = MutableListSequence::new();
        for item in self.iter() {
            if predicate(item) {
                matching.push_back(item.clone());
            } else {
                rest.push_back(item.clone());
            }
        }
        (Self::from_list(matching), Self::from_list(rest))
    }
}

impl<T: Clone, C: ContainerCore<T>> ContainerExt<T> for C {}

/// Pair up two containers' elements up to the shorter length.
pub(crate) fn zip_pairs<T, U, A, B>(a: &A, b: &B) -> MutableListSequence<(T, U)>
where
    T: Clone,
    U: Clone,
    A: ContainerCore<T>,
    B: ContainerCore<U>,
{
    a.sequence()
        .nodes()
        .zip(b.sequence().nodes())
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}
