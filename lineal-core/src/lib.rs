//! Generic linear collections.
//!
//! Two storage engines, [`DynamicArray`] and [`LinkedList`], back four
//! [`Sequence`] variants: mutable and immutable, array and list. The
//! [`Queue`], [`Stack`] and [`Deque`] containers wrap a mutable list.
//!
//! Every fallible operation returns a [`Result`] carrying an [`Error`] with
//! one of the [`ErrorKind`]s.
pub mod container;
pub mod error;
pub mod sequence;
pub mod store;

pub use container::{ContainerCore, ContainerExt, Deque, Queue, Stack};
pub use error::{Error, ErrorKind, Result};
pub use sequence::{
    AnySequence, Edited, ImmutableArraySequence, ImmutableListSequence, MutableArraySequence,
    MutableListSequence, Sequence, SequenceIter, SequenceKind,
};
pub use store::{DynamicArray, LinkedList};
