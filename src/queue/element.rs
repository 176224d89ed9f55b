use core::alloc::Layout;
use core::ffi::CStr;
use core::fmt;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};
use alloc::boxed::Box;
use alloc::ffi::CString;
use alloc::vec::Vec;

use ringq_derive::RingEntry;

use crate::ring::link::RingLink;

/// An allocation inside the queue failed; the queue is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue allocation failed")
    }
}

impl core::error::Error for AllocError {}

/// A queue element: one owned NUL-terminated string plus its ring link.
///
/// Linked elements are owned by their queue and only reachable by
/// reference; a removed element comes back as a `Box<Element>` and is
/// destroyed by dropping it, string first, shell second.
#[derive(RingEntry)]
#[ring_entry(crate_path = "crate")]
pub struct Element {
    link: RingLink,
    value: Box<CStr>,
}

impl Element {
    /// Allocates a detached element holding a copy of `s`.
    ///
    /// The copy stops at the first NUL byte of `s` and owns exactly
    /// `len + 1` bytes, terminator included. Allocation happens in two
    /// steps, shell then value buffer; if the value buffer cannot be
    /// allocated, the shell is freed before the error is returned.
    pub(crate) fn try_new(s: &str) -> Result<Box<Element>, AllocError> {
        let shell = Self::try_alloc_shell().ok_or(AllocError)?;
        match Self::try_copy_value(s) {
            Ok(value) => {
                unsafe {
                    shell.as_ptr().write(Element {
                        link: RingLink::new(),
                        value,
                    });
                }
                #[cfg(test)]
                instrument::element_created();
                Ok(unsafe { Box::from_raw(shell.as_ptr()) })
            }
            Err(e) => {
                unsafe { dealloc(shell.as_ptr().cast(), Layout::new::<Element>()) };
                Err(e)
            }
        }
    }

    fn try_alloc_shell() -> Option<NonNull<Element>> {
        #[cfg(test)]
        if instrument::should_fail_alloc() {
            return None;
        }
        NonNull::new(unsafe { alloc(Layout::new::<Element>()) }.cast::<Element>())
    }

    fn try_copy_value(s: &str) -> Result<Box<CStr>, AllocError> {
        #[cfg(test)]
        if instrument::should_fail_alloc() {
            return Err(AllocError);
        }
        let bytes = s.as_bytes();
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let mut buf = Vec::new();
        buf.try_reserve_exact(len + 1).map_err(|_| AllocError)?;
        buf.extend_from_slice(&bytes[..len]);
        buf.push(0);
        let value = CString::from_vec_with_nul(buf)
            .expect("terminator is the only NUL byte")
            .into_boxed_c_str();
        Ok(value)
    }

    /// The owned string.
    #[inline]
    pub fn value(&self) -> &CStr {
        &self.value
    }

    /// Copies the value into `out`, truncating silently to `out.len() - 1`
    /// bytes, then NUL-terminates. Returns the number of value bytes
    /// copied. An empty `out` is left untouched.
    pub fn copy_value(&self, out: &mut [u8]) -> usize {
        if out.is_empty() {
            return 0;
        }
        let bytes = self.value.to_bytes();
        let len = bytes.len().min(out.len() - 1);
        out[..len].copy_from_slice(&bytes[..len]);
        out[len] = 0;
        len
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").field("value", &self.value).finish()
    }
}

#[cfg(test)]
impl Drop for Element {
    fn drop(&mut self) {
        instrument::element_dropped();
    }
}
