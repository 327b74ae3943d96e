//! Backing stores owned by the sequence variants.
mod dynamic_array;
mod linked_list;

pub use dynamic_array::DynamicArray;
pub use linked_list::{Iter as LinkedListIter, LinkedList};
