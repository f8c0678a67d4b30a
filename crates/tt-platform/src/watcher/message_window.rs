use std::mem::MaybeUninit;
use std::ptr;

use tracing::debug;
use tt_core::ports::{NotificationSourcePort, Wake, WatcherError};
use winapi::shared::minwindef::FALSE;
use winapi::shared::windef::HWND;
use winapi::um::winuser::{
    AddClipboardFormatListener, CreateWindowExW, DestroyWindow, DispatchMessageW, GetMessageW,
    RemoveClipboardFormatListener, TranslateMessage, HWND_MESSAGE, MSG, WM_CLIPBOARDUPDATE,
};

use crate::clipboard::encoding::to_wide_nul;
use crate::win32::last_error;

use super::StopHandle;

/// Hidden message-only window subscribed to clipboard updates.
///
/// The subscription and the window live exactly as long as this value.
/// Messages are pumped on the thread that created it.
#[derive(Debug)]
pub struct MessageWindow {
    hwnd: HWND,
    stop: StopHandle,
}

impl MessageWindow {
    /// Creates the window and registers it as a clipboard format listener.
    pub fn create() -> Result<Self, WatcherError> {
        // The predefined STATIC class needs no registration of our own.
        let class = to_wide_nul("STATIC");

        // SAFETY: `class` is NUL-terminated and outlives the call; a message-only
        // window needs no instance, menu or creation parameter.
        let hwnd = unsafe {
            CreateWindowExW(
                0,
                class.as_ptr(),
                ptr::null(),
                0,
                0,
                0,
                0,
                0,
                HWND_MESSAGE,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        if hwnd.is_null() {
            return Err(WatcherError::CreateReceiver { code: last_error() });
        }

        // SAFETY: `hwnd` was just created on this thread.
        if unsafe { AddClipboardFormatListener(hwnd) } == FALSE {
            let code = last_error();
            // SAFETY: the window is ours and not yet wrapped in a guard.
            unsafe { DestroyWindow(hwnd) };
            return Err(WatcherError::RegisterListener { code });
        }

        debug!("clipboard listener registered");
        Ok(Self {
            hwnd,
            stop: StopHandle::for_current_thread(),
        })
    }

    /// Stops the thread that pumps this window's messages.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop
    }
}

impl NotificationSourcePort for MessageWindow {
    fn wait(&mut self) -> Wake {
        let mut msg = MaybeUninit::<MSG>::uninit();

        // No window filter: WM_QUIT is posted to the thread, not to our window.
        // SAFETY: `msg` is a valid out pointer for GetMessageW.
        let ret = unsafe { GetMessageW(msg.as_mut_ptr(), ptr::null_mut(), 0, 0) };
        match ret {
            0 => Wake::Terminate,
            -1 => Wake::Spurious { code: last_error() },
            _ => {
                // SAFETY: GetMessageW filled `msg` on a positive return.
                let msg = unsafe { msg.assume_init() };
                // SAFETY: `msg` came from this thread's queue.
                unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }

                if msg.hwnd == self.hwnd && msg.message == WM_CLIPBOARDUPDATE {
                    Wake::Changed
                } else {
                    Wake::Other
                }
            }
        }
    }
}

impl Drop for MessageWindow {
    fn drop(&mut self) {
        // SAFETY: the window was created and subscribed in `create`.
        unsafe {
            RemoveClipboardFormatListener(self.hwnd);
            DestroyWindow(self.hwnd);
        }
        debug!("clipboard listener unregistered");
    }
}
