use core::ptr::NonNull;

use super::link::RingLink;

/// A type that embeds a [`RingLink`] and can be recovered from it.
///
/// This is normally implemented with `#[derive(RingEntry)]`, which requires
/// a named field called `link` and generates the accessor pair plus an
/// offset-based [`entry_of`](Self::entry_of).
///
/// # Safety
///
/// Implementations must return accessors for one and the same embedded
/// link, and `entry_of` must invert them: for any live value `v`,
/// `entry_of(NonNull::from(v.link()))` must point back at `v`.
pub unsafe trait RingEntry: Sized {
    /// The embedded link.
    fn link(&self) -> &RingLink;

    /// The embedded link, mutably.
    fn link_mut(&mut self) -> &mut RingLink;

    /// Recovers the embedding value from a pointer to its link.
    ///
    /// # Safety
    ///
    /// `link` must point at the embedded link of a live value of `Self`.
    unsafe fn entry_of(link: NonNull<RingLink>) -> NonNull<Self>;
}
