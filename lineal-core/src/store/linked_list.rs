use crate::error::{self, checked_index, checked_position, checked_range, ErrorKind};

type NodeId = usize;

struct Node<T> {
    item: T,
    next: Option<NodeId>,
}

/// A singly linked chain of nodes with head and tail links.
///
/// Nodes live in an arena and link to their successor by slot index, so
/// adding at either end is O(1) and nothing is shared between chains.
/// Positional access always walks forward from the head. Slots freed by
/// removal are reused by later insertions.
pub struct LinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id].as_ref().expect("linked node is live")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id].as_mut().expect("linked node is live")
    }

    fn allocate(&mut self, item: T, next: Option<NodeId>) -> NodeId {
        let node = Some(Node { item, next });
        if let Some(id) = self.free.pop() {
            self.nodes[id] = node;
            id
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let node = self.nodes[id].take().expect("linked node is live");
        self.free.push(id);
        node.item
    }

    /// Walk from the head to the node at `position`, which must be below
    /// the length.
    fn id_at(&self, position: usize) -> NodeId {
        let mut current = self.head.expect("non-empty chain has a head");
        for _ in 0..position {
            current = self.node(current).next.expect("chain is long enough");
        }
        current
    }

    pub fn first(&self) -> error::Result<&T> {
        match self.head {
            Some(id) => Ok(&self.node(id).item),
            None => Err(ErrorKind::EmptyContainer.with_detail("list is empty")),
        }
    }

    pub fn last(&self) -> error::Result<&T> {
        match self.tail {
            Some(id) => Ok(&self.node(id).item),
            None => Err(ErrorKind::EmptyContainer.with_detail("list is empty")),
        }
    }

    pub fn get(&self, index: isize) -> error::Result<&T> {
        let index = checked_index(index, self.len)?;
        Ok(&self.node(self.id_at(index)).item)
    }

    pub fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        let index = checked_index(index, self.len)?;
        let id = self.id_at(index);
        Ok(&mut self.node_mut(id).item)
    }

    pub fn append(&mut self, item: T) {
        let id = self.allocate(item, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub fn prepend(&mut self, item: T) {
        let id = self.allocate(item, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    /// Insert so the item ends up at `index`; `index == len` appends.
    pub fn insert_at(&mut self, item: T, index: isize) -> error::Result<()> {
        let index = checked_position(index, self.len)?;
        if index == 0 {
            self.prepend(item);
        } else if index == self.len {
            self.append(item);
        } else {
            let previous = self.id_at(index - 1);
            let next = self.node(previous).next;
            let id = self.allocate(item, next);
            self.node_mut(previous).next = Some(id);
            self.len += 1;
        }
        Ok(())
    }

    /// Unlink and return the item at `index`.
    pub fn remove(&mut self, index: isize) -> error::Result<T> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyContainer.with_detail("list is empty"));
        }
        let index = checked_index(index, self.len)?;
        let removed = if index == 0 {
            let id = self.id_at(0);
            self.head = self.node(id).next;
            if self.head.is_none() {
                self.tail = None;
            }
            id
        } else {
            let previous = self.id_at(index - 1);
            let id = self.node(previous).next.expect("chain is long enough");
            let next = self.node(id).next;
            self.node_mut(previous).next = next;
            if self.tail == Some(id) {
                self.tail = Some(previous);
            }
            id
        };
        self.len -= 1;
        let item = self.release(removed);
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }
        Ok(item)
    }

    /// Free every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// A chain holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        let count = usize::try_from(count)
            .map_err(|_| ErrorKind::NegativeCount.with_detail(format!("count {count}")))?;
        if count > items.len() {
            return Err(ErrorKind::InvalidArgument.with_detail(format!(
                "count {count} exceeds {} supplied items",
                items.len()
            )));
        }
        Ok(items[..count].iter().cloned().collect())
    }

    /// A new chain holding copies of the nodes `start..=end`.
    pub fn sub_list(&self, start: isize, end: isize) -> error::Result<Self> {
        let (start, end) = checked_range(start, end, self.len)?;
        Ok(self
            .iter()
            .skip(start)
            .take(end - start + 1)
            .cloned()
            .collect())
    }

    /// A new chain with copies of this chain's nodes followed by copies of
    /// `other`'s. Neither operand is modified.
    pub fn concat(&self, other: Option<&LinkedList<T>>) -> error::Result<Self> {
        let other = other.ok_or_else(|| ErrorKind::NullReference.with_detail("list to concat"))?;
        let mut result = self.clone();
        for item in other {
            result.append(item.clone());
        }
        Ok(result)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

// Copies by walking and rebuilding, so the clone's arena is compact.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator following the links from the head.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
