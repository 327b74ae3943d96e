use crate::store::LinkedListIter;

use super::traits::Sequence;

/// An iterator over a sequence in index order.
///
/// List-backed sequences are walked by following the links, so a full pass
/// is linear; other sequences are read through [`Sequence::get`]. Either way
/// the sequence is never changed and `iter()` can be called again to restart.
pub struct SequenceIter<'a, T, S> {
    sequence: &'a S,
    links: Option<LinkedListIter<'a, T>>,
    index: usize,
    len: usize,
}

impl<'a, T, S> SequenceIter<'a, T, S>
where
    T: Clone,
    S: Sequence<T>,
{
    pub(crate) fn new(sequence: &'a S) -> Self {
        SequenceIter {
            sequence,
            links: sequence.as_linked_list().map(|list| list.iter()),
            index: 0,
            len: sequence.len(),
        }
    }
}

impl<'a, T, S> Iterator for SequenceIter<'a, T, S>
where
    T: Clone + 'a,
    S: Sequence<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let item = match &mut self.links {
            Some(links) => links.next(),
            None => self.sequence.get(self.index as isize).ok(),
        };
        self.index += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T, S> ExactSizeIterator for SequenceIter<'a, T, S>
where
    T: Clone + 'a,
    S: Sequence<T>,
{
}
