use crate::error::{self, checked_position};
use crate::sequence::traits::{ensure_same_kind, Edited, Sequence, SequenceKind};
use crate::store::DynamicArray;

/// Numerator and denominator of the growth factor (1.5).
const GROWTH: (usize, usize) = (3, 2);

/// An array-backed sequence that changes in place.
///
/// The buffer over-allocates when it grows, so its capacity may exceed the
/// length and repeated appends are amortized.
#[derive(Clone, PartialEq)]
pub struct MutableArraySequence<T> {
    items: DynamicArray<T>,
}

impl<T: Clone> MutableArraySequence<T> {
    pub fn new() -> Self {
        MutableArraySequence {
            items: DynamicArray::with_capacity(0),
        }
    }

    /// A sequence holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        Ok(MutableArraySequence {
            items: DynamicArray::from_prefix(items, count)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Make room for `required` elements, growing by the growth factor.
    fn reserve_for(&mut self, required: usize) -> error::Result<()> {
        let capacity = self.items.capacity();
        if capacity >= required {
            return Ok(());
        }
        let grown = capacity * GROWTH.0 / GROWTH.1 + 1;
        self.items.ensure_capacity(required.max(grown) as isize)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MutableArraySequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.items, f)
    }
}

impl<T: Clone> Default for MutableArraySequence<T> {
    fn default() -> Self {
        MutableArraySequence::new()
    }
}

impl<T: Clone> From<DynamicArray<T>> for MutableArraySequence<T> {
    fn from(items: DynamicArray<T>) -> Self {
        MutableArraySequence { items }
    }
}

impl<T: Clone> From<Vec<T>> for MutableArraySequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> FromIterator<T> for MutableArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MutableArraySequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Sequence<T> for MutableArraySequence<T> {
    #[inline]
    fn kind(&self) -> SequenceKind {
        SequenceKind::MutableArray
    }

    fn empty() -> Self {
        MutableArraySequence::new()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.size()
    }

    #[inline]
    fn get(&self, index: isize) -> error::Result<&T> {
        self.items.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        self.items.get_mut(index)
    }

    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self> {
        Ok(self.items.sub_array(start, end)?.into())
    }

    fn append(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        self.reserve_for(self.len() + 1)?;
        self.items.push(item);
        Ok(Edited::InPlace(self))
    }

    fn prepend(&mut self, item: T) -> error::Result<Edited<'_, Self>> {
        self.insert_at(item, 0)
    }

    fn insert_at(&mut self, item: T, index: isize) -> error::Result<Edited<'_, Self>> {
        // validate before growing so a failed call leaves the buffer as is
        checked_position(index, self.len())?;
        self.reserve_for(self.len() + 1)?;
        self.items.insert(index, item)?;
        Ok(Edited::InPlace(self))
    }

    fn remove(&mut self, index: isize) -> error::Result<Edited<'_, Self>> {
        self.items.remove(index)?;
        Ok(Edited::InPlace(self))
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
