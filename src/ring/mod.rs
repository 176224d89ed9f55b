//! # Circular intrusive ring list
//!
//! This module provides the substrate the queue is built on: a circular
//! doubly-linked list of [`link::RingLink`]s around one self-linked
//! sentinel.
//!
//! ## Core Components
//!
//! - [`link::RingLink`]: the link type; O(1) init, insert and unlink.
//! - [`traits::RingEntry`]: the contract for types embedding a `RingLink`,
//!   normally implemented with `#[derive(RingEntry)]`.
//! - [`iter::RingIter`]: forward iteration over the member links of a ring.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw
//! pointers. The user of this module is responsible for upholding several
//! invariants:
//!
//! - A link's address must stay stable from `init`/insert until unlink.
//! - A link must not be in two rings at the same time.
//! - When iterating, the ring must not be modified.
//! - `entry_of` may only be called on the embedded link of a live value of
//!   the implementing type.
//!
//! # Examples
//!
//! ```
//! use ringq::ring::link::RingLink;
//! use ringq::ring::iter::RingIter;
//! use core::ptr::NonNull;
//!
//! let mut sentinel = RingLink::new();
//! sentinel.init();
//! assert!(sentinel.is_empty_ring());
//!
//! let mut a = RingLink::new();
//! let mut b = RingLink::new();
//! unsafe {
//!     sentinel.insert_before(NonNull::from(&mut a));
//!     sentinel.insert_before(NonNull::from(&mut b));
//!
//!     let order: Vec<NonNull<RingLink>> = RingIter::new(&sentinel).collect();
//!     assert_eq!(order, vec![NonNull::from(&mut a), NonNull::from(&mut b)]);
//! }
//! ```

pub mod iter;
pub mod link;
pub mod traits;
