use std::cmp::Ordering;

use crate::error;
use crate::sequence::{MutableListSequence, Sequence};

use super::traits::{zip_pairs, ContainerCore, ContainerExt};

/// A double-ended queue: push and pop at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Deque<T> {
    sequence: MutableListSequence<T>,
}

impl<T: Clone> Deque<T> {
    pub fn new() -> Self {
        Deque {
            sequence: MutableListSequence::new(),
        }
    }

    pub fn push_front(&mut self, item: T) {
        self.sequence.push_front(item);
    }

    pub fn push_back(&mut self, item: T) {
        self.sequence.push_back(item);
    }

    pub fn pop_front(&mut self) -> error::Result<T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.take_at(0)
    }

    pub fn pop_back(&mut self) -> error::Result<T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        let index = self.back_index();
        self.sequence.take_at(index)
    }

    pub fn front(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.first()
    }

    pub fn back(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.last()
    }

    pub fn front_mut(&mut self) -> error::Result<&mut T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.get_mut(0)
    }

    pub fn back_mut(&mut self) -> error::Result<&mut T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        let index = self.back_index();
        self.sequence.get_mut(index)
    }

    /// Sort ascending. Incomparable pairs, such as NaN, are treated as
    /// equal. The sort is stable.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// Stable sort with a caller-supplied ordering.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        let mut items = self.sequence.nodes().cloned().collect::<Vec<_>>();
        items.sort_by(compare);
        self.sequence = items.into_iter().collect();
    }

    pub fn zip<U: Clone>(&self, other: &Deque<U>) -> Deque<(T, U)> {
        Deque::from_list(zip_pairs(self, other))
    }

    fn back_index(&self) -> isize {
        self.len() as isize - 1
    }
}

impl<T: Clone> ContainerCore<T> for Deque<T> {
    const NAME: &'static str = "deque";

    fn sequence(&self) -> &MutableListSequence<T> {
        &self.sequence
    }

    fn from_list(sequence: MutableListSequence<T>) -> Self {
        Deque { sequence }
    }

    fn take_next(&mut self) -> error::Result<T> {
        self.pop_front()
    }
}

impl<T: Clone> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T: Clone> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            sequence: iter.into_iter().collect(),
        }
    }
}
