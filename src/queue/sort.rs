//! Merge sort over the ring, ascending by lexicographic byte comparison.
//!
//! The ring is first broken into a terminated singly-linked chain; the
//! chain is sorted by recursive two-speed splitting and merging, touching
//! only `next` references; the `prev` references are rebuilt in one forward
//! pass when the ring is closed again. No node is allocated or freed, and
//! the recursion depth is the split depth, O(log n).

use core::ptr::NonNull;

use crate::ring::link::RingLink;

use super::queue::{next_of, value_of, Queue};

impl Queue {
    /// Sorts the queue ascending by lexicographic byte comparison of the
    /// values. Equal values keep their relative order. No-op on an empty
    /// or single-element queue.
    pub fn sort(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }
        let sentinel = self.sentinel_ptr();
        let Some(first) = self.first() else {
            return;
        };
        let Some(last) = self.last() else {
            return;
        };
        unsafe {
            // Break the ring into a terminated chain, sort it forward-only.
            (*last.as_ptr()).set_next(None);
            let head = merge_sort(first, last);

            // Walk the chain fixing backward links, then close the ring.
            (*sentinel.as_ptr()).set_next(Some(head));
            let mut node = sentinel;
            while let Some(next) = (*node.as_ptr()).next() {
                (*next.as_ptr()).set_prev(Some(node));
                node = next;
            }
            (*node.as_ptr()).set_next(Some(sentinel));
            (*sentinel.as_ptr()).set_prev(Some(node));
        }
    }
}

/// Sorts the chain from `l` through `r` inclusive, returning the head of
/// the sorted, `None`-terminated result.
///
/// # Safety
///
/// `l` through `r` must be a forward-reachable chain of live element links;
/// only their `next` references are read or written.
unsafe fn merge_sort(l: NonNull<RingLink>, r: NonNull<RingLink>) -> NonNull<RingLink> {
    unsafe {
        if l == r {
            (*l.as_ptr()).set_next(None);
            return l;
        }
        if next_of(l) == r {
            if value_of(l) > value_of(r) {
                (*l.as_ptr()).set_next(None);
                (*r.as_ptr()).set_next(Some(l));
                return r;
            }
            (*r.as_ptr()).set_next(None);
            return l;
        }

        // Two-speed walk, bounded by the sublist's explicit right end.
        let mut tortoise = l;
        let mut hare = l;
        loop {
            let Some(step) = (*hare.as_ptr()).next() else {
                break;
            };
            if step == r {
                break;
            }
            let Some(leap) = (*step.as_ptr()).next() else {
                break;
            };
            if leap == r {
                break;
            }
            hare = leap;
            tortoise = next_of(tortoise);
        }

        let mid = next_of(tortoise);
        let left = merge_sort(l, tortoise);
        let right = merge_sort(mid, r);
        merge(left, right)
    }
}

/// Merges two sorted, `None`-terminated chains into one.
///
/// # Safety
///
/// Both chains must consist of live element links.
unsafe fn merge(left: NonNull<RingLink>, right: NonNull<RingLink>) -> NonNull<RingLink> {
    unsafe {
        let mut left = Some(left);
        let mut right = Some(right);
        let mut head: Option<NonNull<RingLink>> = None;
        let mut tail: Option<NonNull<RingLink>> = None;

        while let (Some(l), Some(r)) = (left, right) {
            // Ties go to the left chain, keeping the sort stable.
            let taken = if value_of(l) <= value_of(r) {
                left = (*l.as_ptr()).next();
                l
            } else {
                right = (*r.as_ptr()).next();
                r
            };
            match tail {
                Some(t) => (*t.as_ptr()).set_next(Some(taken)),
                None => head = Some(taken),
            }
            tail = Some(taken);
        }

        // At most one chain is still non-empty; splice it whole.
        let rest = left.or(right);
        let tail = tail.expect("merge joins two non-empty chains");
        (*tail.as_ptr()).set_next(rest);
        head.expect("merge joins two non-empty chains")
    }
}
