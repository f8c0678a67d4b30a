//! Movable global memory, the allocation type the clipboard takes ownership of.
//!
//! `SetClipboardData` owns the memory on success; on failure the caller still
//! owns it and must free it. Both outcomes are carried by types:
//! [`GlobalBuffer`] frees itself on drop until it is installed, and
//! [`Rejected`] hands the buffer back so the normal drop releases it.

use std::ptr;

use tt_core::ClipboardError;
use winapi::shared::minwindef::HGLOBAL;
use winapi::um::winbase::{GlobalAlloc, GlobalFree, GlobalLock, GlobalSize, GlobalUnlock, GHND};

use crate::win32::last_error;

/// Caller-owned global memory holding a clipboard payload.
#[derive(Debug)]
pub struct GlobalBuffer {
    handle: HGLOBAL,
    len: usize,
}

impl GlobalBuffer {
    /// Allocates movable memory and copies `bytes` into it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ClipboardError> {
        // Zero-sized global allocations are discarded handles; keep at least one byte.
        let size = bytes.len().max(1);

        // SAFETY: plain allocation call, the handle is checked below.
        let handle = unsafe { GlobalAlloc(GHND, size) };
        if handle.is_null() {
            return Err(ClipboardError::Alloc {
                size,
                code: last_error(),
            });
        }

        // From here on the drop of `buffer` frees the allocation on every error path.
        let buffer = Self {
            handle,
            len: bytes.len(),
        };

        {
            // SAFETY: `handle` is a live allocation owned by `buffer`.
            let locked = unsafe { LockedMemory::lock(handle) }.ok_or_else(|| {
                ClipboardError::Alloc {
                    size,
                    code: last_error(),
                }
            })?;

            // SAFETY: the locked block is at least `size >= bytes.len()` bytes long.
            unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), locked.as_mut_ptr(), bytes.len()) };
        }

        Ok(buffer)
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn as_raw(&self) -> HGLOBAL {
        self.handle
    }

    /// Gives up ownership without freeing. Only valid once the OS owns the memory.
    pub(crate) fn into_raw(self) -> HGLOBAL {
        let handle = self.handle;
        std::mem::forget(self);
        handle
    }
}

impl Drop for GlobalBuffer {
    fn drop(&mut self) {
        // SAFETY: we still own the allocation; ownership handed to the OS goes
        // through `into_raw`, which skips this drop.
        unsafe { GlobalFree(self.handle) };
    }
}

/// The clipboard accepted the buffer and now owns its memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Installed {
    pub len: usize,
}

/// The clipboard refused the buffer; ownership stays with the caller.
///
/// Dropping this value frees the memory.
#[derive(Debug)]
pub struct Rejected {
    pub buffer: GlobalBuffer,
    pub error: ClipboardError,
}

impl From<Rejected> for ClipboardError {
    fn from(rejected: Rejected) -> Self {
        rejected.error
    }
}

/// A global memory block locked for direct access, unlocked on drop.
pub(crate) struct LockedMemory {
    handle: HGLOBAL,
    ptr: *mut u8,
    size: usize,
}

impl LockedMemory {
    /// # Safety
    /// `handle` must be a valid global memory handle for the lifetime of the guard.
    pub(crate) unsafe fn lock(handle: HGLOBAL) -> Option<Self> {
        let ptr = GlobalLock(handle) as *mut u8;
        if ptr.is_null() {
            return None;
        }

        Some(Self {
            handle,
            ptr,
            size: GlobalSize(handle),
        })
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        // SAFETY: GlobalSize reports the length of the locked block.
        unsafe { std::slice::from_raw_parts(self.ptr, self.size) }
    }

    pub(crate) fn as_mut_ptr(&self) -> *mut u8 {
        self.ptr
    }
}

impl Drop for LockedMemory {
    fn drop(&mut self) {
        // SAFETY: paired with the successful GlobalLock in `lock`.
        unsafe { GlobalUnlock(self.handle) };
    }
}
