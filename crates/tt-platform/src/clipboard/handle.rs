use std::marker::PhantomData;
use std::ptr;

use tracing::debug;
use tt_core::{ClipboardError, ClipboardFormat};
use winapi::shared::minwindef::FALSE;
use winapi::um::winuser::{
    CloseClipboard, CountClipboardFormats, EmptyClipboard, GetClipboardData,
    GetClipboardFormatNameW, GetClipboardSequenceNumber, IsClipboardFormatAvailable,
    OpenClipboard, RegisterClipboardFormatW, SetClipboardData,
};

use super::encoding::{decode_ansi, decode_wide, encode_ansi, encode_wide, to_wide_nul};
use super::memory::{GlobalBuffer, Installed, LockedMemory, Rejected};
use crate::win32::last_error;

/// Longest custom format name looked up by [`Clipboard::format_name`].
const FORMAT_NAME_CAPACITY: usize = 120;

/// Scoped ownership of the system clipboard.
///
/// Creating a `Clipboard` opens the clipboard; dropping it closes it, whatever
/// the exit path. Keep the scope short: every other process is locked out of
/// the clipboard while it is alive.
///
/// Neither `Send` nor `Sync`: the OS ties the lock to the opening thread.
#[derive(Debug)]
pub struct Clipboard {
    _not_send: PhantomData<*const ()>,
}

impl Clipboard {
    /// Opens the clipboard.
    ///
    /// Fails with [`ClipboardError::Busy`] while another window holds it. No
    /// retry happens here; callers pick their own policy.
    pub fn open() -> Result<Self, ClipboardError> {
        // SAFETY: a null owner associates the lock with the current task.
        if unsafe { OpenClipboard(ptr::null_mut()) } == FALSE {
            return Err(ClipboardError::Busy { code: last_error() });
        }

        Ok(Self {
            _not_send: PhantomData,
        })
    }

    /// Empties the clipboard. Watchers, our own included, get notified.
    pub fn clear(&self) -> Result<(), ClipboardError> {
        // SAFETY: the clipboard is open for the lifetime of `self`.
        if unsafe { EmptyClipboard() } == FALSE {
            return Err(ClipboardError::Os {
                operation: "EmptyClipboard",
                code: last_error(),
            });
        }
        Ok(())
    }

    /// Size in bytes of the content stored under `format`, 0 if absent.
    pub fn size(&self, format: ClipboardFormat) -> usize {
        self.with_data(format, |bytes| bytes.len()).unwrap_or(0)
    }

    /// Raw content stored under `format`, empty if absent.
    pub fn read_raw(&self, format: ClipboardFormat) -> Vec<u8> {
        self.with_data(format, <[u8]>::to_vec).unwrap_or_default()
    }

    /// Copies at most `buf.len()` bytes of `format` into `buf`.
    ///
    /// Returns the number of copied bytes, 0 if the format is absent.
    pub fn read_raw_into(&self, format: ClipboardFormat, buf: &mut [u8]) -> usize {
        self.with_data(format, |bytes| {
            let len = bytes.len().min(buf.len());
            buf[..len].copy_from_slice(&bytes[..len]);
            len
        })
        .unwrap_or(0)
    }

    /// Reads `CF_UNICODETEXT`, empty if absent or unreadable.
    pub fn read_text(&self) -> String {
        self.with_data(ClipboardFormat::UNICODETEXT, decode_wide)
            .unwrap_or_default()
    }

    /// Reads the legacy 8-bit `CF_TEXT`, empty if absent or unreadable.
    pub fn read_ansi_text(&self) -> String {
        self.with_data(ClipboardFormat::TEXT, decode_ansi)
            .unwrap_or_default()
    }

    /// Replaces the clipboard content with `bytes` under `format`.
    pub fn write_raw(&self, format: ClipboardFormat, bytes: &[u8]) -> Result<(), ClipboardError> {
        let buffer = GlobalBuffer::from_bytes(bytes)?;

        if let Err(err) = self.clear() {
            debug!(error = %err, "clearing before write failed, installing anyway");
        }

        let installed = self.install(format, buffer)?;
        debug!(format = %format, len = installed.len, "clipboard data installed");
        Ok(())
    }

    /// Writes `text` as `CF_UNICODETEXT`.
    pub fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.write_raw(ClipboardFormat::UNICODETEXT, &encode_wide(text))
    }

    /// Writes `text` as the legacy 8-bit `CF_TEXT`.
    pub fn write_ansi_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.write_raw(ClipboardFormat::TEXT, &encode_ansi(text))
    }

    /// Hands `buffer` to the clipboard under `format` without clearing first.
    ///
    /// On success the OS owns the memory. On failure the buffer comes back in
    /// [`Rejected`] and is freed when that value is dropped.
    pub fn install(
        &self,
        format: ClipboardFormat,
        buffer: GlobalBuffer,
    ) -> Result<Installed, Rejected> {
        // SAFETY: the clipboard is open and `buffer` owns a valid movable allocation.
        let accepted = unsafe { SetClipboardData(format.id(), buffer.as_raw()) };

        if accepted.is_null() {
            return Err(Rejected {
                buffer,
                error: ClipboardError::Os {
                    operation: "SetClipboardData",
                    code: last_error(),
                },
            });
        }

        let len = buffer.len();
        let _owned_by_os = buffer.into_raw();
        Ok(Installed { len })
    }

    /// Whether `format` is currently on the clipboard. Does not need the lock.
    pub fn is_format_available(format: ClipboardFormat) -> bool {
        // SAFETY: read-only query.
        unsafe { IsClipboardFormatAvailable(format.id()) != FALSE }
    }

    /// Clipboard sequence number, bumped by the OS on every change.
    pub fn sequence_number() -> u32 {
        // SAFETY: read-only query.
        unsafe { GetClipboardSequenceNumber() }
    }

    /// Number of formats currently on the clipboard.
    pub fn count_formats() -> usize {
        // SAFETY: read-only query.
        let count = unsafe { CountClipboardFormats() };
        usize::try_from(count).unwrap_or(0)
    }

    /// Registers (or looks up) a custom format by name.
    pub fn register_format(name: &str) -> Option<ClipboardFormat> {
        let wide = to_wide_nul(name);
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        let id = unsafe { RegisterClipboardFormatW(wide.as_ptr()) };
        (id != 0).then_some(ClipboardFormat(id))
    }

    /// Name of a predefined or registered format, `None` if unknown.
    pub fn format_name(format: ClipboardFormat) -> Option<String> {
        if !format.is_registered() {
            return format.predefined_name();
        }

        let mut buffer = [0u16; FORMAT_NAME_CAPACITY];
        // SAFETY: the length passed matches the buffer.
        let len = unsafe {
            GetClipboardFormatNameW(format.id(), buffer.as_mut_ptr(), buffer.len() as i32)
        };

        match usize::try_from(len) {
            Ok(len) if len > 0 => Some(String::from_utf16_lossy(&buffer[..len])),
            _ => None,
        }
    }

    fn with_data<T>(&self, format: ClipboardFormat, read: impl FnOnce(&[u8]) -> T) -> Option<T> {
        // SAFETY: the clipboard is open; the returned handle is owned by the
        // clipboard and stays valid until it is closed or emptied.
        let handle = unsafe { GetClipboardData(format.id()) };
        if handle.is_null() {
            return None;
        }

        // SAFETY: `handle` is valid while `self` holds the clipboard.
        let locked = unsafe { LockedMemory::lock(handle) }?;
        Some(read(locked.as_slice()))
    }
}

impl Drop for Clipboard {
    fn drop(&mut self) {
        // Closing can only fail when the clipboard was not open; nothing to do then.
        // SAFETY: paired with the successful OpenClipboard in `open`.
        unsafe { CloseClipboard() };
    }
}
