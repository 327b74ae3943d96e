use crate::error;
use crate::sequence::{MutableListSequence, Sequence};

use super::traits::{zip_pairs, ContainerCore, ContainerExt};

/// Last in, first out. The top is the tail of the wrapped list.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    sequence: MutableListSequence<T>,
}

impl<T: Clone> Stack<T> {
    pub fn new() -> Self {
        Stack {
            sequence: MutableListSequence::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.sequence.push_back(item);
    }

    /// Remove and return the top.
    pub fn pop(&mut self) -> error::Result<T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        let index = self.top_index();
        self.sequence.take_at(index)
    }

    pub fn top(&self) -> error::Result<&T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        self.sequence.last()
    }

    pub fn top_mut(&mut self) -> error::Result<&mut T> {
        if self.is_empty() {
            return Err(Self::empty_error());
        }
        let index = self.top_index();
        self.sequence.get_mut(index)
    }

    pub fn zip<U: Clone>(&self, other: &Stack<U>) -> Stack<(T, U)> {
        Stack::from_list(zip_pairs(self, other))
    }

    fn top_index(&self) -> isize {
        self.len() as isize - 1
    }
}

impl<T: Clone> ContainerCore<T> for Stack<T> {
    const NAME: &'static str = "stack";

    fn sequence(&self) -> &MutableListSequence<T> {
        &self.sequence
    }

    fn from_list(sequence: MutableListSequence<T>) -> Self {
        Stack { sequence }
    }

    fn take_next(&mut self) -> error::Result<T> {
        self.pop()
    }
}

impl<T: Clone> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T: Clone> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            sequence: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::sequence::ImmutableListSequence;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.top(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop().unwrap_err().kind, ErrorKind::EmptyContainer);
        assert_eq!(s.top().unwrap_err().kind, ErrorKind::EmptyContainer);
    }

    #[test]
    fn test_top_mut() {
        let mut s = Stack::from_iter([1, 2]);
        *s.top_mut().unwrap() += 40;
        assert_eq!(s.pop(), Ok(42));
    }

    #[test]
    fn test_from_sequence_keeps_order() {
        let source = ImmutableListSequence::from(vec![1, 2, 3]);
        let mut s = Stack::from_sequence(&source);
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.get(0), Ok(&1));
    }

    #[test]
    fn test_clear_pops_everything() {
        let mut s = Stack::from_iter([1, 2, 3]);
        s.clear();
        assert!(s.is_empty());
        s.push(4);
        assert_eq!(s.top(), Ok(&4));
    }

    #[test]
    fn test_map_filter_reduce() {
        let s = Stack::from_iter([1, 2, 3, 4]);
        let doubled = s.map(|x| x * 2);
        assert_eq!(doubled.reduce(|acc, x| acc + x, 0), 20);
        let odd = s.filter(|x| x % 2 == 1);
        assert_eq!(odd.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_concat_and_subsequence() {
        let a = Stack::from_iter([1, 2]);
        let b = Stack::from_iter([3]);
        let c = a.concat(&b);
        assert_eq!(c.top(), Ok(&3));
        assert_eq!(c.len(), 3);
        let sub = c.subsequence(1, 2).unwrap();
        assert_eq!(sub.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(
            c.subsequence(2, 1).unwrap_err().kind,
            ErrorKind::InvalidRange
        );
    }
}
