//! # ringq
//!
//! A string-valued queue built on a circular intrusive doubly-linked list
//! with a sentinel: O(1) insert and remove at both ends, O(n) size, and a
//! set of in-place structural algorithms - middle-element deletion,
//! adjacent-duplicate elimination, pairwise swap, reversal, and an
//! allocation-free merge sort.
//!
//! The ring substrate lives in [`ring`]; the queue and its algorithms in
//! [`queue`]. Everything is single-threaded: the queue is neither `Send`
//! nor `Sync`, and callers serialize access.
//!
//! # Examples
//!
//! ```
//! use ringq::Queue;
//!
//! let mut q = Queue::new();
//! q.try_push_back("banana").unwrap();
//! q.try_push_back("apple").unwrap();
//! q.try_push_front("cherry").unwrap();
//! assert_eq!(q.len(), 3);
//!
//! q.sort();
//!
//! let mut buf = [0u8; 8];
//! let e = q.pop_front(&mut buf).unwrap();
//! assert_eq!(e.value().to_bytes(), b"apple");
//! assert_eq!(&buf[..6], b"apple\0");
//! ```

#![no_std]

extern crate alloc;

pub mod queue;
pub mod ring;

pub use queue::element::{AllocError, Element};
pub use queue::queue::Queue;
