use crate::error::{self, ErrorKind};
use crate::sequence::traits::{ensure_same_kind, Edited, Sequence, SequenceKind};
use crate::store::LinkedList;

/// A linked-list-backed sequence that is never changed after construction.
///
/// Edits rebuild the whole chain node by node and return the copy.
#[derive(Clone, PartialEq)]
pub struct ImmutableListSequence<T> {
    list: LinkedList<T>,
}

impl<T: Clone> ImmutableListSequence<T> {
    pub fn new() -> Self {
        ImmutableListSequence {
            list: LinkedList::new(),
        }
    }

    /// A sequence holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        Ok(ImmutableListSequence {
            list: LinkedList::from_prefix(items, count)?,
        })
    }

    /// Copy the chain, let `edit` change the copy, and wrap the result.
    fn edited_copy(
        &self,
        edit: impl FnOnce(&mut LinkedList<T>) -> error::Result<()>,
    ) -> error::Result<Self> {
        let mut list = self.list.clone();
        edit(&mut list)?;
        Ok(ImmutableListSequence { list })
    }

    /// A copy with `item` added at the end.
    pub fn appended(&self, item: T) -> Self {
        let mut list = self.list.clone();
        list.append(item);
        ImmutableListSequence { list }
    }

    /// A copy with `item` added at the start.
    pub fn prepended(&self, item: T) -> Self {
        let mut list = self.list.clone();
        list.prepend(item);
        ImmutableListSequence { list }
    }

    /// A copy with `item` placed at `index`.
    pub fn inserted_at(&self, item: T, index: isize) -> error::Result<Self> {
        self.edited_copy(|list| list.insert_at(item, index))
    }

    /// A copy without the element at `index`.
    pub fn removed(&self, index: isize) -> error::Result<Self> {
        self.edited_copy(|list| list.remove(index).map(|_| ()))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ImmutableListSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.list, f)
    }
}

impl<T: Clone> Default for ImmutableListSequence<T> {
    fn default() -> Self {
        ImmutableListSequence::new()
    }
}

impl<T: Clone> From<LinkedList<T>> for ImmutableListSequence<T> {
    fn from(list: LinkedList<T>) -> Self {
        ImmutableListSequence { list }
    }
}

impl<T: Clone> From<Vec<T>> for ImmutableListSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> FromIterator<T> for ImmutableListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableListSequence {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Sequence<T> for ImmutableListSequence<T> {
    #[inline]
    fn kind(&self) -> SequenceKind {
        SequenceKind::ImmutableList
    }

    fn empty() -> Self {
        ImmutableListSequence::new()
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    fn get(&self, index: isize) -> error::Result<&T> {
        self.list.get(index)
    }

    fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        Err(ErrorKind::Immutable.with_detail(format!("cannot write index {index}")))
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
        Ok(Edited::Fresh(self.appended(item)))
    }

    fn prepend(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        Ok(Edited::Fresh(self.prepended(item)))
    }

    fn insert_at(&mut self, item: T, index: isize) -> error::Result<Edited<'_, Self>> {
        Ok(Edited::Fresh(self.inserted_at(item, index)?))
    }

    fn remove(&mut self, index: isize) -> error::Result<Edited<'_, Self>> {
        Ok(Edited::Fresh(self.removed(index)?))
    }

    fn concat<S: Sequence<T>>(&self, other: &S) -> error::Result<Self> {
        ensure_same_kind(self.kind(), other.kind())?;
        let mut list = self.list.clone();
        for item in other.iter() {
            list.append(item.clone());
        }
        Ok(ImmutableListSequence { list })
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

    fn as_linked_list(&self) -> Option<&LinkedList<T>> {
        Some(&self.list)
    }
}
