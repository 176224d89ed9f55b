use core::ffi::CStr;
use core::fmt;
use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::ring::iter::RingIter;
use crate::ring::link::RingLink;
use crate::ring::traits::RingEntry;

use super::element::{AllocError, Element};

/// A queue of owned strings on a circular intrusive list.
///
/// The queue is identified by its sentinel, a payload-free ring link boxed
/// for address stability. All access must be serialized by the caller; the
/// type is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use ringq::Queue;
///
/// let mut q = Queue::new();
/// q.try_push_back("b").unwrap();
/// q.try_push_back("a").unwrap();
/// q.sort();
///
/// let mut buf = [0u8; 4];
/// let e = q.pop_front(&mut buf).unwrap();
/// assert_eq!(e.value().to_bytes(), b"a");
/// ```
pub struct Queue {
    sentinel: Box<RingLink>,
}

impl Queue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let mut sentinel = Box::new(RingLink::new());
        sentinel.init();
        Self { sentinel }
    }

    #[inline]
    pub(crate) fn sentinel_ptr(&self) -> NonNull<RingLink> {
        NonNull::from(self.sentinel.as_ref())
    }

    /// Whether the queue holds no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentinel.is_empty_ring()
    }

    /// Whether the queue holds exactly one element. O(1).
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.sentinel.is_singular()
    }

    /// The number of elements, counted by a full traversal.
    ///
    /// The ring carries no cached length, so this is O(n) every time.
    pub fn len(&self) -> usize {
        unsafe { RingIter::new(&self.sentinel) }.count()
    }

    /// Inserts a copy of `s` at the head of the queue. O(1) plus the copy.
    ///
    /// On allocation failure the queue is unchanged.
    pub fn try_push_front(&mut self, s: &str) -> Result<(), AllocError> {
        let element = Element::try_new(s)?;
        let link = NonNull::from(Box::leak(element).link_mut());
        unsafe { self.sentinel.insert_after(link) };
        Ok(())
    }

    /// Inserts a copy of `s` at the tail of the queue. O(1) plus the copy.
    ///
    /// On allocation failure the queue is unchanged.
    pub fn try_push_back(&mut self, s: &str) -> Result<(), AllocError> {
        let element = Element::try_new(s)?;
        let link = NonNull::from(Box::leak(element).link_mut());
        unsafe { self.sentinel.insert_before(link) };
        Ok(())
    }

    /// Removes the head element, or returns `None` if the queue is empty.
    ///
    /// The element's value is copied into `out`, truncated to
    /// `out.len() - 1` bytes and NUL-terminated. Removal only unlinks:
    /// the element itself is handed back to the caller, who destroys it by
    /// dropping the box.
    pub fn pop_front(&mut self, out: &mut [u8]) -> Option<Box<Element>> {
        let link = self.first()?;
        Some(unsafe { self.take(link, out) })
    }

    /// Removes the tail element; otherwise as [`pop_front`](Self::pop_front).
    pub fn pop_back(&mut self, out: &mut [u8]) -> Option<Box<Element>> {
        let link = self.last()?;
        Some(unsafe { self.take(link, out) })
    }

    /// The first member link, if any.
    pub(crate) fn first(&self) -> Option<NonNull<RingLink>> {
        self.sentinel.next().filter(|&n| n != self.sentinel_ptr())
    }

    /// The last member link, if any.
    pub(crate) fn last(&self) -> Option<NonNull<RingLink>> {
        self.sentinel.prev().filter(|&n| n != self.sentinel_ptr())
    }

    /// Unlinks `link` and reconstitutes its owning element.
    ///
    /// # Safety
    ///
    /// `link` must belong to an element currently linked in this queue.
    unsafe fn take(&mut self, mut link: NonNull<RingLink>, out: &mut [u8]) -> Box<Element> {
        unsafe {
            link.as_mut().unlink();
            let element = Box::from_raw(Element::entry_of(link).as_ptr());
            element.copy_value(out);
            element
        }
    }

    /// Iterates over the queued values, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: unsafe { RingIter::new(&self.sentinel) },
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        let sentinel = self.sentinel_ptr();
        let mut cur = self.sentinel.next();
        while let Some(link) = cur.filter(|&n| n != sentinel) {
            cur = unsafe { link.as_ref().next() };
            drop(unsafe { Box::from_raw(Element::entry_of(link).as_ptr()) });
        }
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the values of a [`Queue`], head to tail.
pub struct Iter<'a> {
    inner: RingIter<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|link| unsafe { Element::entry_of(link).as_ref() }.value())
    }
}

/// Successor of a queued node.
///
/// # Safety
///
/// `link` must point at a live, linked ring node.
#[inline]
pub(crate) unsafe fn next_of(link: NonNull<RingLink>) -> NonNull<RingLink> {
    unsafe { link.as_ref() }
        .next()
        .expect("queued node is always linked")
}

/// Predecessor of a queued node.
///
/// # Safety
///
/// `link` must point at a live, linked ring node.
#[inline]
pub(crate) unsafe fn prev_of(link: NonNull<RingLink>) -> NonNull<RingLink> {
    unsafe { link.as_ref() }
        .prev()
        .expect("queued node is always linked")
}

/// The value of the element embedding `link`.
///
/// # Safety
///
/// `link` must be the embedded link of a live queue element.
#[inline]
pub(crate) unsafe fn value_of<'a>(link: NonNull<RingLink>) -> &'a CStr {
    unsafe { Element::entry_of(link).as_ref() }.value()
}

/// Unlinks the node and destroys its element, string then shell.
///
/// # Safety
///
/// `link` must be the embedded link of a live, linked queue element.
pub(crate) unsafe fn release(mut link: NonNull<RingLink>) {
    unsafe {
        link.as_mut().unlink();
        drop(Box::from_raw(Element::entry_of(link).as_ptr()));
    }
}
