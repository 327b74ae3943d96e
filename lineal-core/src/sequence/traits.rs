use std::ops::{Deref, DerefMut};

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{self, ErrorKind};

use crate::store::LinkedList;

use super::iter::SequenceIter;
use super::variant::MutableListSequence;

/// Identifies the concrete variant behind a sequence.
///
/// Concatenation compares kinds instead of relying on type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SequenceKind {
    MutableArray,
    ImmutableArray,
    MutableList,
    ImmutableList,
}

impl SequenceKind {
    /// Whether mutating operations on this kind change the receiver.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SequenceKind::MutableArray | SequenceKind::MutableList)
    }
}

/// The outcome of `append`, `prepend`, `insert_at` and `remove`.
///
/// Mutable variants change the receiver and hand it back; immutable variants
/// leave it alone and return a freshly allocated sequence. Either way the
/// result dereferences to the sequence, so calls chain.
#[derive(Debug)]
pub enum Edited<'a, S> {
    /// The receiver was modified
    InPlace(&'a mut S),
    /// A new sequence; the receiver is untouched
    Fresh(S),
}

impl<S> Edited<'_, S> {
    pub fn is_in_place(&self) -> bool {
        matches!(self, Edited::InPlace(_))
    }

    /// The new sequence, if one was created.
    pub fn into_fresh(self) -> Option<S> {
        match self {
            Edited::InPlace(_) => None,
            Edited::Fresh(sequence) => Some(sequence),
        }
    }
}

impl<S: Clone> Edited<'_, S> {
    /// The resulting sequence as an owned value.
    ///
    /// This clones the receiver when it was edited in place.
    pub fn into_owned(self) -> S {
        match self {
            Edited::InPlace(sequence) => sequence.clone(),
            Edited::Fresh(sequence) => sequence,
        }
    }
}

impl<S> Deref for Edited<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        match self {
            Edited::InPlace(sequence) => sequence,
            Edited::Fresh(sequence) => sequence,
        }
    }
}

impl<S> DerefMut for Edited<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        match self {
            Edited::InPlace(sequence) => sequence,
            Edited::Fresh(sequence) => sequence,
        }
    }
}

/// The capability set shared by every sequence variant.
///
/// Positions are signed so that negative input is reported as an error
/// rather than being unrepresentable. Ranges passed to
/// [`Sequence::subsequence`] are inclusive; ranges passed to
/// [`Sequence::slice`] are exclusive and clamped.
///
/// `Clone` is a deep copy: the clone never shares storage with the original.
pub trait Sequence<T: Clone>: Clone {
    /// The concrete variant of this sequence
    fn kind(&self) -> SequenceKind;

    /// A sequence of the same variant without elements
    fn empty() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`
    fn get(&self, index: isize) -> error::Result<&T>;

    /// Subscript write access.
    ///
    /// Immutable variants always fail with [`ErrorKind::Immutable`].
    fn get_mut(&mut self, index: isize) -> error::Result<&mut T>;

    /// Overwrite the element at `index` through [`Sequence::get_mut`].
    fn set(&mut self, index: isize, item: T) -> error::Result<()> {
        *self.get_mut(index)? = item;
        Ok(())
    }

    fn first(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyContainer.with_detail("sequence is empty"));
        }
        self.get(0)
    }

    fn last(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyContainer.with_detail("sequence is empty"));
        }
        self.get(self.len() as isize - 1)
    }

    /// A new sequence of the same variant holding `start..=end`.
    fn subsequence(&self, start: isize, end: isize) -> error::Result<Self>;

    /// A new sequence holding `start..end` after clamping both ends into
    /// the sequence. An empty clamped range gives an empty sequence.
    fn slice(&self, start: isize, end: isize) -> error::Result<Self> {
        let start = start.max(0);
        let end = end.min(self.len() as isize);
        if start >= end {
            return Ok(Self::empty());
        }
        self.subsequence(start, end - 1)
    }

    fn append(&mut self, item: T) -> error::Result<Edited<'_, Self>>;

    fn prepend(&mut self, item: T) -> error::Result<Edited<'_, Self>>;

    /// Insert so the item ends up at `index`, which may equal the length.
    fn insert_at(&mut self, item: T, index: isize) -> error::Result<Edited<'_, Self>>;

    fn remove(&mut self, index: isize) -> error::Result<Edited<'_, Self>>;

    /// A new sequence with this sequence's elements followed by `other`'s.
    ///
    /// Both operands must be the same variant, otherwise this fails with
    /// [`ErrorKind::IncompatibleTypes`].
    fn concat<S: Sequence<T>>(&self, other: &S) -> error::Result<Self>;

    fn map(&self, f: impl FnMut(&T) -> T) -> Self;

    /// Keep the elements matching `predicate`, in order.
    fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Self;

    /// Left fold in index order.
    fn reduce<A>(&self, mut f: impl FnMut(A, &T) -> A, initial: A) -> A {
        let mut accumulator = initial;
        for item in self.iter() {
            accumulator = f(accumulator, item);
        }
        accumulator
    }

    /// Combine elements pairwise up to the shorter length.
    fn zip<S: Sequence<T>>(&self, other: &S, combiner: impl FnMut(&T, &T) -> T) -> Self;

    fn iter(&self) -> SequenceIter<'_, T, Self> {
        SequenceIter::new(self)
    }

    /// Capability query used by the containers to adopt a mutable list.
    fn as_mutable_list(&self) -> Option<&MutableListSequence<T>> {
        None
    }

    /// The backing chain of a list variant, which [`SequenceIter`] walks
    /// by its links instead of by position.
    fn as_linked_list(&self) -> Option<&LinkedList<T>> {
        None
    }
}

/// Reject a concatenation between different variants.
pub(crate) fn ensure_same_kind(this: SequenceKind, other: SequenceKind) -> error::Result<()> {
    if this == other {
        Ok(())
    } else {
        Err(ErrorKind::IncompatibleTypes.with_detail(format!("cannot concat {other} onto {this}")))
    }
}
