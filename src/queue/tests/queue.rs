extern crate std;

use std::format;
use std::string::String;
use std::vec;
use std::vec::Vec;

use crate::queue::element::instrument;

use super::super::queue::Queue;
use super::{filled, values};

#[test]
fn test_new_queue_is_empty() {
    let mut q = Queue::new();
    assert!(q.is_empty());
    assert!(!q.is_singular());
    assert_eq!(q.len(), 0);

    let mut buf = [0u8; 8];
    assert!(q.pop_front(&mut buf).is_none());
    assert!(q.pop_back(&mut buf).is_none());
}

#[test]
fn test_push_back_pop_front_is_fifo() {
    let mut q = filled(&["one", "two", "three"]);
    assert_eq!(q.len(), 3);

    let mut buf = [0u8; 16];
    let mut popped = Vec::new();
    while let Some(e) = q.pop_front(&mut buf) {
        popped.push(String::from(e.value().to_str().expect("utf-8 value")));
    }
    assert_eq!(popped, vec!["one", "two", "three"]);
    assert!(q.is_empty());
}

#[test]
fn test_push_front_pop_front_is_lifo() {
    let mut q = Queue::new();
    q.try_push_front("one").expect("allocation");
    q.try_push_front("two").expect("allocation");
    q.try_push_front("three").expect("allocation");

    assert_eq!(values(&q), vec!["three", "two", "one"]);

    let mut buf = [0u8; 16];
    let e = q.pop_front(&mut buf).expect("non-empty");
    assert_eq!(e.value().to_bytes(), b"three");
    assert_eq!(q.len(), 2);
}

#[test]
fn test_push_front_pop_back_is_fifo() {
    let mut q = Queue::new();
    q.try_push_front("one").expect("allocation");
    q.try_push_front("two").expect("allocation");

    let mut buf = [0u8; 16];
    let e = q.pop_back(&mut buf).expect("non-empty");
    assert_eq!(e.value().to_bytes(), b"one");
    let e = q.pop_back(&mut buf).expect("non-empty");
    assert_eq!(e.value().to_bytes(), b"two");
    assert!(q.pop_back(&mut buf).is_none());
}

#[test]
fn test_interleaved_len_tracks_inserts_minus_removes() {
    let mut q = Queue::new();
    let mut buf = [0u8; 8];

    q.try_push_back("a").expect("allocation");
    q.try_push_front("b").expect("allocation");
    q.try_push_back("c").expect("allocation");
    assert_eq!(q.len(), 3);

    q.pop_back(&mut buf).expect("non-empty");
    assert_eq!(q.len(), 2);

    q.try_push_front("d").expect("allocation");
    q.try_push_front("e").expect("allocation");
    assert_eq!(q.len(), 4);

    q.pop_front(&mut buf).expect("non-empty");
    q.pop_front(&mut buf).expect("non-empty");
    q.pop_front(&mut buf).expect("non-empty");
    q.pop_front(&mut buf).expect("non-empty");
    assert_eq!(q.len(), 0);
    assert!(q.pop_front(&mut buf).is_none());
}

#[test]
fn test_singular_queue() {
    let q = filled(&["only"]);
    assert!(q.is_singular());
    assert!(!q.is_empty());
    assert_eq!(q.len(), 1);
}

#[test]
fn test_pop_copies_and_terminates() {
    let mut q = filled(&["hello"]);
    let mut buf = [0xffu8; 16];
    q.pop_front(&mut buf).expect("non-empty");
    assert_eq!(&buf[..6], b"hello\0");
}

#[test]
fn test_pop_truncates_long_value() {
    let mut q = filled(&["abcdef"]);
    let mut buf = [0u8; 4];
    let e = q.pop_front(&mut buf).expect("non-empty");
    assert_eq!(&buf, b"abc\0");
    // the element keeps the full value; only the copy is truncated
    assert_eq!(e.value().to_bytes(), b"abcdef");
}

#[test]
fn test_pop_with_empty_buffer_copies_nothing() {
    let mut q = filled(&["abc"]);
    let e = q.pop_front(&mut []).expect("non-empty");
    assert_eq!(e.value().to_bytes(), b"abc");
    assert!(q.is_empty());
}

#[test]
fn test_value_stops_at_interior_nul() {
    let q = filled(&["ab\0cd"]);
    assert_eq!(values(&q), vec!["ab"]);
}

#[test]
fn test_empty_value() {
    let mut q = filled(&[""]);
    let mut buf = [0xffu8; 4];
    let e = q.pop_front(&mut buf).expect("non-empty");
    assert_eq!(e.value().to_bytes(), b"");
    assert_eq!(buf[0], 0);
}

#[test]
fn test_failed_shell_allocation_leaves_queue_unchanged() {
    instrument::reset();
    let mut q = filled(&["a", "b"]);

    instrument::fail_alloc_in(0);
    assert!(q.try_push_back("c").is_err());

    assert_eq!(q.len(), 2);
    assert_eq!(values(&q), vec!["a", "b"]);
}

#[test]
fn test_failed_value_allocation_leaves_queue_unchanged() {
    instrument::reset();
    let mut q = filled(&["a", "b"]);

    // the shell allocation succeeds, the value buffer fails
    instrument::fail_alloc_in(1);
    assert!(q.try_push_front("c").is_err());

    assert_eq!(q.len(), 2);
    assert_eq!(values(&q), vec!["a", "b"]);

    // and the queue keeps working afterwards
    q.try_push_front("c").expect("allocation");
    assert_eq!(values(&q), vec!["c", "a", "b"]);
}

#[test]
fn test_failed_allocations_leak_no_elements() {
    instrument::reset();
    let before = instrument::live_elements();

    let mut q = Queue::new();
    instrument::fail_alloc_in(0);
    assert!(q.try_push_back("a").is_err());
    instrument::fail_alloc_in(1);
    assert!(q.try_push_back("b").is_err());

    drop(q);
    assert_eq!(instrument::live_elements(), before);
}

#[test]
fn test_drop_releases_every_element() {
    instrument::reset();
    let before = instrument::live_elements();

    let mut q = filled(&["a", "b", "c", "d", "e"]);
    assert_eq!(instrument::live_elements(), before + 5);

    let mut buf = [0u8; 4];
    let e = q.pop_front(&mut buf).expect("non-empty");
    drop(e);
    assert_eq!(instrument::live_elements(), before + 4);

    drop(q);
    assert_eq!(instrument::live_elements(), before);
}

#[test]
fn test_removed_element_outlives_queue() {
    let mut q = filled(&["keep"]);
    let mut buf = [0u8; 8];
    let e = q.pop_front(&mut buf).expect("non-empty");
    drop(q);
    assert_eq!(e.value().to_bytes(), b"keep");
}

#[test]
fn test_debug_lists_values() {
    let q = filled(&["a", "b"]);
    assert_eq!(format!("{q:?}"), r#"["a", "b"]"#);
}
