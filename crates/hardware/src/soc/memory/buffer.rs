//! Guest RAM Buffer.
//!
//! Backing storage for the guest memory window. On Unix the buffer is an
//! anonymous private `mmap`, so the default 128 MiB window costs host memory
//! only for the pages a program actually touches. Other hosts fall back to a
//! zeroed heap allocation.

use std::ptr::NonNull;
use std::slice;

use crate::common::SimError;

/// Zero-initialized, fixed-size byte buffer.
#[derive(Debug)]
pub struct RamBuffer {
    ptr: NonNull<u8>,
    size: usize,
}

impl RamBuffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RamAllocation` if `size` is zero or the host refuses
    /// the allocation.
    #[cfg(unix)]
    pub fn new(size: usize) -> Result<Self, SimError> {
        if size == 0 {
            return Err(SimError::RamAllocation { size });
        }
        // SAFETY: anonymous private mapping with no address hint; the result is
        // checked against MAP_FAILED before use.
        let raw = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if raw == libc::MAP_FAILED {
            return Err(SimError::RamAllocation { size });
        }
        let ptr = NonNull::new(raw.cast::<u8>()).ok_or(SimError::RamAllocation { size })?;
        Ok(Self { ptr, size })
    }

    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RamAllocation` if `size` is zero.
    #[cfg(not(unix))]
    pub fn new(size: usize) -> Result<Self, SimError> {
        if size == 0 {
            return Err(SimError::RamAllocation { size });
        }
        let boxed: Box<[u8]> = vec![0u8; size].into_boxed_slice();
        let ptr = NonNull::new(Box::into_raw(boxed).cast::<u8>())
            .ok_or(SimError::RamAllocation { size })?;
        Ok(Self { ptr, size })
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Always `false`; zero-sized buffers cannot be constructed.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Views the whole buffer as a byte slice.
    pub const fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `size` initialized bytes for the lifetime
        // of `self`, and shared access is tied to `&self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    /// Views the whole buffer as a mutable byte slice.
    pub const fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as above; exclusive access is tied to `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl Drop for RamBuffer {
    fn drop(&mut self) {
        #[cfg(unix)]
        // SAFETY: `ptr`/`size` describe the mapping created in `new`, unmapped once.
        unsafe {
            let _ = libc::munmap(self.ptr.as_ptr().cast(), self.size);
        }
        #[cfg(not(unix))]
        // SAFETY: `ptr`/`size` came from `Box::into_raw` of a `[u8]` of this length.
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.size,
            )));
        }
    }
}
