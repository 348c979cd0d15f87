//! An ordered map backed by an unbalanced binary search tree, with the ordering supplied by a
//! caller-provided comparator rather than an [`Ord`] bound on the keys.
//!
//! # Purpose
//! Most tree maps bake their ordering into the key type. [`OrderedMap`] instead takes a
//! [comparator](compare::Compare) at construction and consults it for every placement decision,
//! which makes it possible to keep the same key type in differently-ordered maps, or to order
//! keys that don't implement [`Ord`] at all. The comparator is fixed for the life of the map.
//!
//! # Method
//! The tree is deliberately unbalanced: no rotations, no height or weight bookkeeping. Inserting
//! keys in sorted order degrades it into a linked list, so every lookup and mutation is `O(h)`
//! where `h` can reach `n`. That trade was made knowingly - the mutation logic stays small
//! enough to read in one sitting, and the structure is honest about what it is.
//!
//! Mutation never uses parent pointers. Each node exclusively owns its children, and the
//! restructuring done by removal works purely by relinking owned subtrees, so there are no
//! shared or weak references anywhere in the crate.
//!
//! # Concurrency
//! There is none. The map is a plain single-threaded structure with no interior mutability;
//! exclusive access for mutation is whatever `&mut` gives you. Iterators borrow the map, so the
//! compiler already rules out mutating while a traversal is outstanding.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod compare;
pub mod map;

#[doc(inline)]
pub use map::OrderedMap;
