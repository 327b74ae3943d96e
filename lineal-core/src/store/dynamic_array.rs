use crate::error::{self, checked_index, checked_position, checked_range, ErrorKind};

/// A resizable, contiguous buffer of element slots.
///
/// `size` is the number of valid elements; `capacity` the number of slots
/// reserved for them. `size <= capacity` always holds. Growth is exact: the
/// buffer never over-allocates on its own, so a caller that wants amortized
/// appends picks the new capacity itself through [`DynamicArray::ensure_capacity`].
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// An empty buffer with exactly `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: isize) -> error::Result<&T> {
        let index = checked_index(index, self.size())?;
        Ok(&self.data[index])
    }

    pub fn get_mut(&mut self, index: isize) -> error::Result<&mut T> {
        let index = checked_index(index, self.size())?;
        Ok(&mut self.data[index])
    }

    pub fn set(&mut self, index: isize, value: T) -> error::Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Grow the reserved slots to exactly `new_capacity`.
    ///
    /// A capacity at or below the current one is a no-op.
    pub fn ensure_capacity(&mut self, new_capacity: isize) -> error::Result<()> {
        let new_capacity = usize::try_from(new_capacity).map_err(|_| {
            ErrorKind::NegativeSize.with_detail(format!("capacity {new_capacity}"))
        })?;
        if new_capacity > self.capacity {
            self.data.reserve_exact(new_capacity - self.data.len());
            self.capacity = new_capacity;
        }
        Ok(())
    }

    /// Add an element after the last one, growing by exactly one slot when
    /// the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.reserve_exact(1);
            self.capacity += 1;
        }
        self.data.push(item);
    }

    /// Insert at `index`, shifting later elements right.
    pub fn insert(&mut self, index: isize, item: T) -> error::Result<()> {
        let index = checked_position(index, self.size())?;
        if self.data.len() == self.capacity {
            self.data.reserve_exact(1);
            self.capacity += 1;
        }
        self.data.insert(index, item);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: isize) -> error::Result<T> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyContainer.with_detail("array is empty"));
        }
        let index = checked_index(index, self.size())?;
        Ok(self.data.remove(index))
    }

    /// Drop every element, keeping the reserved slots.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> DynamicArray<T> {
    /// A buffer holding a copy of the first `count` items.
    pub fn from_prefix(items: &[T], count: isize) -> error::Result<Self> {
        let count = usize::try_from(count)
            .map_err(|_| ErrorKind::NegativeCount.with_detail(format!("count {count}")))?;
        if count > items.len() {
            return Err(ErrorKind::InvalidArgument.with_detail(format!(
                "count {count} exceeds {} supplied items",
                items.len()
            )));
        }
        let mut array = DynamicArray::with_capacity(count);
        array.data.extend_from_slice(&items[..count]);
        Ok(array)
    }

    /// A new buffer holding exactly the elements `start..=end`.
    pub fn sub_array(&self, start: isize, end: isize) -> error::Result<Self> {
        let (start, end) = checked_range(start, end, self.size())?;
        let mut array = DynamicArray::with_capacity(end - start + 1);
        array.data.extend_from_slice(&self.data[start..=end]);
        Ok(array)
    }
}

impl<T: Default> DynamicArray<T> {
    /// A buffer of `size` default elements.
    pub fn new(size: isize) -> error::Result<Self> {
        let mut array = DynamicArray::with_capacity(0);
        array.resize(size)?;
        Ok(array)
    }

    /// Set the size to `new_size`.
    ///
    /// The reserved slots grow only when `new_size` exceeds the capacity.
    /// Newly exposed elements hold `T::default()`; shrinking drops the tail.
    pub fn resize(&mut self, new_size: isize) -> error::Result<()> {
        self.ensure_capacity(new_size)?;
        let new_size = new_size as usize;
        self.data.truncate(new_size);
        while self.data.len() < new_size {
            self.data.push(T::default());
        }
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::with_capacity(0)
    }
}

// Vec::clone only reserves what it needs; we keep the slot count.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        DynamicArray {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let data: Vec<T> = iter.into_iter().collect();
        let capacity = data.len();
        DynamicArray { data, capacity }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
