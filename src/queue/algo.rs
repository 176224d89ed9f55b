//! In-place structural algorithms: middle deletion, duplicate elimination,
//! pairwise swap and reversal. All O(n), none allocates.

use super::queue::{next_of, prev_of, release, value_of, Queue};

impl Queue {
    /// Removes and destroys the middle element.
    ///
    /// The middle is found by a probe walking forward from the first node
    /// and a tracker walking backward from the last, one step each, until
    /// they meet or become adjacent; the probe then marks the middle
    /// (size 6 removes 0-based index 2). A single element is its own
    /// middle. Returns `false` on an empty queue, which is left untouched.
    pub fn delete_middle(&mut self) -> bool {
        let Some(mut probe) = self.first() else {
            return false;
        };
        let Some(mut tracker) = self.last() else {
            return false;
        };
        unsafe {
            while probe != tracker && next_of(probe) != tracker {
                probe = next_of(probe);
                tracker = prev_of(tracker);
            }
            release(probe);
        }
        true
    }

    /// Removes every run of equal adjacent values longer than one, the
    /// whole run included - only values occurring exactly once survive.
    ///
    /// The queue must already be sorted ascending; handing an unsorted
    /// queue to this operation is a contract breach and eliminates only
    /// whatever runs happen to be adjacent.
    pub fn delete_duplicates(&mut self) -> bool {
        let sentinel = self.sentinel_ptr();
        let Some(mut cur) = self.first() else {
            return true;
        };
        unsafe {
            while cur != sentinel {
                let mut run_end = next_of(cur);
                let mut duplicated = false;
                while run_end != sentinel && value_of(run_end) == value_of(cur) {
                    let victim = run_end;
                    run_end = next_of(run_end);
                    release(victim);
                    duplicated = true;
                }
                if duplicated {
                    release(cur);
                }
                cur = run_end;
            }
        }
        true
    }

    /// Exchanges each adjacent pair of nodes (1st with 2nd, 3rd with 4th,
    /// and so on) in place; an odd-length queue keeps its last node where
    /// it is. No-op on an empty or single-element queue.
    pub fn swap_pairs(&mut self) {
        let sentinel = self.sentinel_ptr();
        let Some(mut first) = self.first() else {
            return;
        };
        unsafe {
            loop {
                let second = next_of(first);
                if second == sentinel {
                    break;
                }
                first.as_mut().unlink();
                (*second.as_ptr()).insert_after(first);
                let after = next_of(first);
                if after == sentinel {
                    break;
                }
                first = after;
            }
        }
    }

    /// Reverses the queue by exchanging next and prev on every link,
    /// sentinel included. No-op on an empty or single-element queue.
    pub fn reverse(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }
        let sentinel = self.sentinel_ptr();
        unsafe {
            let mut cur = sentinel;
            loop {
                let next = next_of(cur);
                (*cur.as_ptr()).flip();
                cur = next;
                if cur == sentinel {
                    break;
                }
            }
        }
    }
}
