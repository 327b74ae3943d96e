use crate::error;
use crate::store::LinkedList;

use super::traits::{Edited, Sequence, SequenceKind};
use super::variant::{
    ImmutableArraySequence, ImmutableListSequence, MutableArraySequence, MutableListSequence,
};

/// A sequence whose variant is chosen at runtime.
///
/// Every operation dispatches to the wrapped variant, so edits keep that
/// variant's semantics: mutable variants change in place, immutable ones
/// produce a fresh `AnySequence` of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySequence<T> {
    MutableArray(MutableArraySequence<T>),
    ImmutableArray(ImmutableArraySequence<T>),
    MutableList(MutableListSequence<T>),
    ImmutableList(ImmutableListSequence<T>),
}

macro_rules! dispatch {
    ($value:expr, $sequence:ident => $body:expr) => {
        match $value {
            AnySequence::MutableArray($sequence) => $body,
            AnySequence::ImmutableArray($sequence) => $body,
            AnySequence::MutableList($sequence) => $body,
            AnySequence::ImmutableList($sequence) => $body,
        }
    };
}

impl<T: Clone> AnySequence<T> {
    /// An empty sequence of the given kind.
    pub fn new(kind: SequenceKind) -> Self {
        Self::from_items(kind, std::iter::empty())
    }

    /// A sequence of the given kind holding `items` in order.
    pub fn from_items(kind: SequenceKind, items: impl IntoIterator<Item = T>) -> Self {
        match kind {
            SequenceKind::MutableArray => AnySequence::MutableArray(items.into_iter().collect()),
            SequenceKind::ImmutableArray => {
                AnySequence::ImmutableArray(items.into_iter().collect())
            }
            SequenceKind::MutableList => AnySequence::MutableList(items.into_iter().collect()),
            SequenceKind::ImmutableList => AnySequence::ImmutableList(items.into_iter().collect()),
        }
    }

    fn settle(&mut self, fresh: Option<Self>) -> Edited<'_, Self> {
        match fresh {
            Some(fresh) => Edited::Fresh(fresh),
            None => Edited::InPlace(self),
        }
    }
}

impl<T: Clone> From<MutableArraySequence<T>> for AnySequence<T> {
    fn from(sequence: MutableArraySequence<T>) -> Self {
        AnySequence::MutableArray(sequence)
    }
}

impl<T: Clone> From<ImmutableArraySequence<T>> for AnySequence<T> {
    fn from(sequence: ImmutableArraySequence<T>) -> Self {
        AnySequence::ImmutableArray(sequence)
    }
}

impl<T: Clone> From<MutableListSequence<T>> for AnySequence<T> {
    fn from(sequence: MutableListSequence<T>) -> Self {
        AnySequence::MutableList(sequence)
    }
}

impl<T: Clone> From<ImmutableListSequence<T>> for AnySequence<T> {
    fn from(sequence: ImmutableListSequence<T>) -> Self {
        AnySequence::ImmutableList(sequence)
    }
}

impl<T: Clone> Sequence<T> for AnySequence<T> {
    fn kind(&self) -> SequenceKind {
        dispatch!(self, s => s.kind())
    }

    /// An empty mutable array; use [`AnySequence::new`] to pick the kind.
    fn empty() -> Self {
        AnySequence::MutableArray(MutableArraySequence::new())
    }

    fn len(&self) -> usize {
        dispatch!(self, s => s.len())
    }

    fn get(&self, index: isize) -> error::Result<&T> {
        dispatch!(self, s => s.get(index))
    }

    fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        dispatch!(self, s => s.get_mut(index))
    }

    fn first(&self) -> error::Result<&T> {
        dispatch!(self, s => s.first())
    }

    fn last(&self) -> error::Result<&T> {
        dispatch!(self, s => s.last())
    }

    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self> {
        dispatch!(self, s => s.subsequence(start, end).map(AnySequence::from))
    }

    // the default would produce `empty()`, which loses the kind
    fn slice(&self, start: isize, end: isize) -> error::Result<Self> {
        dispatch!(self, s => s.slice(start, end).map(AnySequence::from))
    }

    fn append(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        let fresh = dispatch!(&mut *self, s => s.append(item)?.into_fresh().map(AnySequence::from));
        Ok(self.settle(fresh))
    }

    fn prepend(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        let fresh =
            dispatch!(&mut *self, s => s.prepend(item)?.into_fresh().map(AnySequence::from));
        Ok(self.settle(fresh))
    }

    fn insert_at(&mut self, item: T, index: isize) -> error::Result<Edited<'_, Self>> {
        let fresh = dispatch!(&mut *self, s => s.insert_at(item, index)?.into_fresh().map(AnySequence::from));
        Ok(self.settle(fresh))
    }

    fn remove(&mut self, index: isize) -> error::Result<Edited<'_, Self>> {
        let fresh =
            dispatch!(&mut *self, s => s.remove(index)?.into_fresh().map(AnySequence::from));
        Ok(self.settle(fresh))
    }

    fn concat<S: Sequence<T>>(&self, other: &S) -> error::Result<Self> {
        dispatch!(self, s => s.concat(other).map(AnySequence::from))
    }

    fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        dispatch!(self, s => AnySequence::from(s.map(f)))
    }

    fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Self {
        dispatch!(self, s => AnySequence::from(s.filter(predicate)))
    }

    fn zip<S: Sequence<T>>(&self, other: &S, combiner: impl FnMut(&T, &T) -> T) -> Self {
        dispatch!(self, s => AnySequence::from(s.zip(other, combiner)))
    }

    fn as_mutable_list(&self) -> Option<&MutableListSequence<T>> {
        dispatch!(self, s => s.as_mutable_list())
    }

    fn as_linked_list(&self) -> Option<&LinkedList<T>> {
        dispatch!(self, s => s.as_linked_list())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::error::ErrorKind;

    fn items(s: &AnySequence<i32>) -> Vec<i32> {
        s.iter().copied().collect()
    }

    #[test]
    fn test_kind_is_preserved() {
        for kind in SequenceKind::iter() {
            let s = AnySequence::from_items(kind, [1, 2, 3]);
            assert_eq!(s.kind(), kind);
            assert_eq!(s.map(|x| x + 1).kind(), kind);
            assert_eq!(s.slice(5, 9).unwrap().kind(), kind);
            assert_eq!(s.subsequence(0, 1).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_edit_follows_variant() {
        for kind in SequenceKind::iter() {
            let mut s = AnySequence::from_items(kind, [1, 2]);
            let fresh = s.append(3).unwrap().into_fresh();
            if kind.is_mutable() {
                assert!(fresh.is_none());
                assert_eq!(items(&s), vec![1, 2, 3]);
            } else {
                assert_eq!(items(&fresh.unwrap()), vec![1, 2, 3]);
                assert_eq!(items(&s), vec![1, 2]);
            }
        }
    }

    #[test]
    fn test_failed_edit_propagates() {
        let mut s = AnySequence::<i32>::new(SequenceKind::ImmutableList);
        assert_eq!(
            s.remove(0).unwrap_err().kind,
            ErrorKind::EmptyContainer
        );
    }

    #[test]
    fn test_concat_across_kinds() {
        let a = AnySequence::from_items(SequenceKind::MutableArray, [1]);
        let b = AnySequence::from_items(SequenceKind::ImmutableArray, [2]);
        assert_eq!(a.concat(&b).unwrap_err().kind, ErrorKind::IncompatibleTypes);
        let c = MutableArraySequence::from(vec![2, 3]);
        assert_eq!(items(&a.concat(&c).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_mutable_list_capability_passes_through() {
        let s = AnySequence::from_items(SequenceKind::MutableList, [1]);
        assert!(s.as_mutable_list().is_some());
        let s = AnySequence::from_items(SequenceKind::MutableArray, [1]);
        assert!(s.as_mutable_list().is_none());
    }
}
