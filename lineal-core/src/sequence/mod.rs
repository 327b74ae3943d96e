//! A sequence is an ordered, indexable collection of elements.
//!
//! Four variants implement the [`Sequence`] contract: array or linked list
//! storage, each either edited in place or copied on every edit.
//! [`AnySequence`] picks one of them at runtime.
mod any;
mod iter;
mod traits;
mod variant;

pub use any::AnySequence;
pub use iter::SequenceIter;
pub use traits::{Edited, Sequence, SequenceKind};
pub use variant::{
    ImmutableArraySequence, ImmutableListSequence, MutableArraySequence, MutableListSequence,
};
