extern crate std;

use std::string::{String, ToString};
use std::vec::Vec;

use crate::ring::traits::RingEntry;

use super::element::Element;
use super::queue::Queue;

mod queue;

fn filled(values: &[&str]) -> Queue {
    let mut q = Queue::new();
    for v in values {
        q.try_push_back(v).expect("allocation");
    }
    q
}

fn values(q: &Queue) -> Vec<String> {
    q.iter()
        .map(|v| v.to_str().expect("utf-8 value").to_string())
        .collect()
}

/// Walks the ring backwards from the sentinel, checking the `prev`
/// references mirror the forward order exactly.
fn assert_ring_consistent(q: &Queue) {
    let sentinel = q.sentinel_ptr();
    let mut backwards = Vec::new();
    let mut cur = unsafe { sentinel.as_ref() }
        .prev()
        .expect("sentinel is linked");
    while cur != sentinel {
        let element = unsafe { Element::entry_of(cur).as_ref() };
        backwards.push(element.value().to_str().expect("utf-8 value").to_string());
        cur = unsafe { cur.as_ref() }
            .prev()
            .expect("queued node is linked");
    }
    backwards.reverse();
    assert_eq!(backwards, values(q));
    assert_eq!(backwards.len(), q.len());
}
