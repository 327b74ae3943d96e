use crate::error;
use crate::sequence::{MutableListSequence, Sequence};

use super::traits::{zip_pairs, ContainerCore, ContainerExt};

/// First in, first out: enqueue at the tail, dequeue from the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Queue<T> {
    sequence: MutableListSequence<T>,
}

impl<T: Clone> Queue<T> {
    pub fn new() -> Self {
        Queue {
            sequence: MutableListSequence::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.sequence.push_back(item);
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> error::Result<T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.take_at(0)
    }

    pub fn front(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.first()
    }

    pub fn front_mut(&mut self) -> error::Result<&mut T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.get_mut(0)
    }

    pub fn zip<U: Clone>(&self, other: &Queue<U>) -> Queue<(T, U)> {
        Queue::from_list(zip_pairs(self, other))
    }
}

impl<T: Clone> ContainerCore<T> for Queue<T> {
    const NAME: &'static str = "queue";

    fn sequence(&self) -> &MutableListSequence<T> {
        &self.sequence
    }

    fn from_list(sequence: MutableListSequence<T>) -> Self {
        Queue { sequence }
    }

    fn take_next(&mut self) -> error::Result<T> {
        self.dequeue()
    }
}

impl<T: Clone> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: Clone> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            sequence: iter.into_iter().collect(),
        }
    }
}
