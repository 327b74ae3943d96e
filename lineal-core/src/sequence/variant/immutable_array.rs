use crate::error::{self, checked_index, checked_position, ErrorKind};
use crate::sequence::traits::{ensure_same_kind, Edited, Sequence, SequenceKind};
use crate::store::DynamicArray;

/// An array-backed sequence that is never changed after construction.
///
/// Every edit copies into a buffer of exactly the new size, so the buffer
/// capacity always equals the length.
#[derive(Clone, PartialEq)]
pub struct ImmutableArraySequence<T> {
    items: DynamicArray<T>,
}

impl<T: Clone> ImmutableArraySequence<T> {
    pub fn new() -> Self {
        ImmutableArraySequence {
            items: DynamicArray::with_capacity(0),
        }
    }

    /// A sequence holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        Ok(ImmutableArraySequence {
            items: DynamicArray::from_prefix(items, count)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// A copy with `item` added at the end.
    pub fn appended(&self, item: T) -> Self {
        self.items
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect()
    }

    /// A copy with `item` added at the start.
    pub fn prepended(&self, item: T) -> Self {
        std::iter::once(item)
            .chain(self.items.iter().cloned())
            .collect()
    }

    /// A copy with `item` placed at `index`.
    pub fn inserted_at(&self, item: T, index: isize) -> error::Result<Self> {
        let index = checked_position(index, self.len())?;
        let items = self.as_slice();
        Ok(items[..index]
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .chain(items[index..].iter().cloned())
            .collect())
    }

    /// A copy without the element at `index`.
    pub fn removed(&self, index: isize) -> error::Result<Self> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyContainer.with_detail("array is empty"));
        }
        let index = checked_index(index, self.len())?;
        let items = self.as_slice();
        Ok(items[..index]
            .iter()
            .chain(items[index + 1..].iter())
            .cloned()
            .collect())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ImmutableArraySequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.items, f)
    }
}

impl<T: Clone> Default for ImmutableArraySequence<T> {
    fn default() -> Self {
        ImmutableArraySequence::new()
    }
}

impl<T: Clone> From<Vec<T>> for ImmutableArraySequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> FromIterator<T> for ImmutableArraySequence<T> {
    // DynamicArray's FromIterator allocates exactly the collected length.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableArraySequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Sequence<T> for ImmutableArraySequence<T> {
    #[inline]
    fn kind(&self) -> SequenceKind {
        SequenceKind::ImmutableArray
    }

    fn empty() -> Self {
        ImmutableArraySequence::new()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.size()
    }

    #[inline]
    fn get(&self, index: isize) -> error::Result<&T> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        Err(ErrorKind::Immutable.with_detail(format!("cannot write index {index}")))
    }

    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self> {
        Ok(ImmutableArraySequence {
            items: self.items.sub_array(start, end)?,
        })
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
        Ok(self.items.iter().chain(other.iter()).cloned().collect())
    }

    fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        self.items.iter().map(f).collect()
    }

    fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    fn zip<S: Sequence<T>>(&self, other: &S, mut combiner: impl FnMut(&T, &T) -> T) -> Self {
        self.items
            .iter()
            .zip(other.iter())
            .map(|(a, b)| combiner(a, b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(items: &[i32]) -> ImmutableArraySequence<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_append_leaves_receiver() {
        let mut s = sequence(&[1, 2]);
        let appended = s.append(3).unwrap().into_fresh().unwrap();
        assert_eq!(s.as_slice(), &[1, 2]);
        assert_eq!(appended.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_capacity_equals_length() {
        let s = sequence(&[1, 2, 3]);
        let edited = [
            s.appended(4),
            s.prepended(0),
            s.inserted_at(9, 1).unwrap(),
            s.removed(1).unwrap(),
            s.subsequence(0, 1).unwrap(),
            s.filter(|x| x % 2 == 1),
        ];
        for e in edited {
            assert_eq!(e.capacity(), e.len());
        }
        assert_eq!(ImmutableArraySequence::<i32>::new().capacity(), 0);
    }

    #[test]
    fn test_inserted_at() {
        let s = sequence(&[1, 3]);
        assert_eq!(s.inserted_at(2, 1).unwrap().as_slice(), &[1, 2, 3]);
        assert_eq!(s.inserted_at(4, 2).unwrap().as_slice(), &[1, 3, 4]);
        assert_eq!(
            s.inserted_at(4, 3).unwrap_err().kind,
            ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_removed() {
        let s = sequence(&[1, 2, 3]);
        assert_eq!(s.removed(0).unwrap().as_slice(), &[2, 3]);
        assert_eq!(s.removed(2).unwrap().as_slice(), &[1, 2]);
        assert_eq!(s.removed(3).unwrap_err().kind, ErrorKind::IndexOutOfRange);
        assert_eq!(
            ImmutableArraySequence::<i32>::new()
                .removed(0)
                .unwrap_err()
                .kind,
            ErrorKind::EmptyContainer
        );
    }

    #[test]
    fn test_subscript_write_is_rejected() {
        let mut s = sequence(&[1]);
        assert_eq!(s.get_mut(0).unwrap_err().kind, ErrorKind::Immutable);
        assert_eq!(s.set(0, 5).unwrap_err().kind, ErrorKind::Immutable);
        assert_eq!(s.get(0), Ok(&1));
    }
}
