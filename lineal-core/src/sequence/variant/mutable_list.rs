use crate::error::{self, ErrorKind};
use crate::sequence::traits::{ensure_same_kind, Edited, Sequence, SequenceKind};
use crate::store::{LinkedList, LinkedListIter};

/// A linked-list-backed sequence that changes in place.
///
/// This is the backing storage of the queue, stack and deque containers.
#[derive(Clone, PartialEq)]
pub struct MutableListSequence<T> {
    list: LinkedList<T>,
}

impl<T: Clone> MutableListSequence<T> {
    pub fn new() -> Self {
        MutableListSequence {
            list: LinkedList::new(),
        }
    }

    /// A sequence holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        Ok(MutableListSequence {
            list: LinkedList::from_prefix(items, count)?,
        })
    }

    pub fn push_back(&mut self, item: T) {
        self.list.append(item);
    }

    pub fn push_front(&mut self, item: T) {
        self.list.prepend(item);
    }

    /// Remove the element at `index` and hand it back.
    pub fn take_at(&mut self, index: isize) -> error::Result<T> {
        self.list.remove(index)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterate by following the links, without positional lookups.
    pub fn nodes(&self) -> LinkedListIter<'_, T> {
        self.list.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MutableListSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.list, f)
    }
}

impl<T: Clone> Default for MutableListSequence<T> {
    fn default() -> Self {
        MutableListSequence::new()
    }
}

impl<T: Clone> From<LinkedList<T>> for MutableListSequence<T> {
    fn from(list: LinkedList<T>) -> Self {
        MutableListSequence { list }
    }
}

impl<T: Clone> From<Vec<T>> for MutableListSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> FromIterator<T> for MutableListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MutableListSequence {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Sequence<T> for MutableListSequence<T> {
    #[inline]
    fn kind(&self) -> SequenceKind {
        SequenceKind::MutableList
    }

    fn empty() -> Self {
        MutableListSequence::new()
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    fn get(&self, index: isize) -> error::Result<&T> {
        self.list.get(index)
    }

    fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        self.list.get_mut(index)
    }

    fn first(&self) -> error::Result<&T> {
        self.list.first()
    }

    fn last(&self) -> error::Result<&T> {
        self.list.last()
    }

    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self> {
        Ok(self.list.sub_list(start, end)?.into())
    }

    fn append(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        self.list.append(item);
        Ok(Edited::InPlace(self))
    }

    fn prepend(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        self.list.prepend(item);
        Ok(Edited::InPlace(self))
    }

    fn insert_at(&mut self, item: T, index: isize) -> error::Result<Edited<'_, Self>> {
        self.list.insert_at(item, index)?;
        Ok(Edited::InPlace(self))
    }

    fn remove(&mut self, index: isize) -> error::Result<Edited<'_, Self>> {
        self.list.remove(index)?;
        Ok(Edited::InPlace(self))
    }

    fn concat<S: Sequence<T>>(&self, other: &S) -> error::Result<Self> {
        ensure_same_kind(self.kind(), other.kind())?;
        let other = other
            .as_mutable_list()
            .ok_or_else(|| ErrorKind::ConcatTypeMismatch.with_detail("expected a mutable list"))?;
        Ok(self.list.concat(Some(&other.list))?.into())
    }

    fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        self.list.iter().map(f).collect()
    }

    fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.list
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    fn reduce<A>(&self, f: impl FnMut(A, &T) -> A, initial: A) -> A {
        self.list.iter().fold(initial, f)
    }

    fn zip<S: Sequence<T>>(&self, other: &S, mut combiner: impl FnMut(&T, &T) -> T) -> Self {
        self.list
            .iter()
            .zip(other.iter())
            .map(|(a, b)| combiner(a, b))
            .collect()
    }

    fn as_mutable_list(&self) -> Option<&MutableListSequence<T>> {
        Some(self)
    }

    fn as_linked_list(&self) -> Option<&LinkedList<T>> {
        Some(&self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(items: &[i32]) -> MutableListSequence<i32> {
        items.iter().copied().collect()
    }

    fn items(s: &MutableListSequence<i32>) -> Vec<i32> {
        s.nodes().copied().collect()
    }

    #[test]
    fn test_edits_in_place() {
        let mut s = sequence(&[2]);
        s.prepend(1)
            .unwrap()
            .append(4)
            .unwrap()
            .insert_at(3, 2)
            .unwrap();
        assert_eq!(items(&s), vec![1, 2, 3, 4]);
        s.remove(0).unwrap();
        assert_eq!(items(&s), vec![2, 3, 4]);
    }

    #[test]
    fn test_take_at() {
        let mut s = sequence(&[1, 2, 3]);
        assert_eq!(s.take_at(2), Ok(3));
        assert_eq!(s.last(), Ok(&2));
    }

    #[test]
    fn test_capability_query() {
        let s = sequence(&[1]);
        assert!(s.as_mutable_list().is_some());
    }

    #[test]
    fn test_concat_copies_both() {
        let a = sequence(&[1, 2]);
        let b = sequence(&[3]);
        let c = a.concat(&b).unwrap();
        assert_eq!(items(&c), vec![1, 2, 3]);
        assert_eq!(items(&a), vec![1, 2]);
    }

    #[test]
    fn test_first_last_on_empty() {
        let s = MutableListSequence::<i32>::new();
        assert_eq!(s.first().unwrap_err().kind, ErrorKind::EmptyContainer);
        assert_eq!(s.last().unwrap_err().kind, ErrorKind::EmptyContainer);
    }
}
