//! Queue, stack and deque.
//!
//! Each container owns a [`MutableListSequence`](crate::sequence::MutableListSequence)
//! and shares its general operations through [`ContainerExt`].
mod deque;
mod queue;
mod stack;
mod traits;

pub use deque::Deque;
pub use queue::Queue;
pub use stack::Stack;
pub use traits::{ContainerCore, ContainerExt};
