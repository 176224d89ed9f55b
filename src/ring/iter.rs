use core::marker::PhantomData;
use core::ptr::NonNull;

use super::link::RingLink;

/// An iterator over the member links of a ring, excluding the sentinel.
pub struct RingIter<'a> {
    sentinel: NonNull<RingLink>,
    current: Option<NonNull<RingLink>>,
    _marker: PhantomData<&'a RingLink>,
}

impl<'a> RingIter<'a> {
    /// Creates a new iterator over the ring identified by `sentinel`.
    ///
    /// # Safety
    ///
    /// `sentinel` must be ring-initialized, and the ring must not be
    /// modified while the iterator is alive.
    pub unsafe fn new(sentinel: &'a RingLink) -> Self {
        let sentinel_ptr = NonNull::from(sentinel);
        Self {
            sentinel: sentinel_ptr,
            current: sentinel.next().filter(|&n| n != sentinel_ptr),
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for RingIter<'a> {
    type Item = NonNull<RingLink>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current =
                unsafe { current.as_ref().next() }.filter(|&n| n != self.sentinel);
        })
    }
}
