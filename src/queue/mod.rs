//! # String queue on a ring
//!
//! A queue of owned, NUL-terminated strings linked through a circular
//! intrusive list, plus the in-place structural algorithms that operate on
//! it: middle-element deletion, adjacent-duplicate elimination, pairwise
//! swap, reversal, and merge sort.
//!
//! ## Core Components
//!
//! - [`element::Element`]: one heap string plus its embedded ring link.
//! - [`queue::Queue`]: the container, identified by its boxed sentinel;
//!   lifecycle, insert, remove and size.
//! - `algo` and `sort` extend [`queue::Queue`] with the structural
//!   algorithms; none of them allocates.
//!
//! Ownership follows the links: the queue owns every element currently in
//! the ring, and removal hands the element back as a `Box` — destroying a
//! still-linked element is not expressible.

pub mod element;
pub mod queue;

mod algo;
mod sort;

#[cfg(test)]
mod tests;
