mod immutable_array;
mod immutable_list;
mod mutable_array;
mod mutable_list;

pub use immutable_array::ImmutableArraySequence;
pub use immutable_list::ImmutableListSequence;
pub use mutable_array::MutableArraySequence;
pub use mutable_list::MutableListSequence;
