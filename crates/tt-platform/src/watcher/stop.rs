//! Ending the watcher loop from outside.
//!
//! The loop blocks in `GetMessageW`; posting `WM_QUIT` to its thread is the
//! only wake that terminates it.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{info, warn};
use winapi::shared::minwindef::{BOOL, DWORD, FALSE, TRUE};
use winapi::um::consoleapi::SetConsoleCtrlHandler;
use winapi::um::processthreadsapi::GetCurrentThreadId;
use winapi::um::winuser::{PostThreadMessageW, WM_QUIT};

use crate::win32::last_error;

/// Thread that should receive `WM_QUIT` on console close; 0 when unset.
static CONSOLE_STOP_THREAD: AtomicU32 = AtomicU32::new(0);

/// Posts `WM_QUIT` to the thread running a watcher loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopHandle {
    thread_id: u32,
}

impl StopHandle {
    pub fn for_current_thread() -> Self {
        // SAFETY: no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };
        Self { thread_id }
    }

    pub fn thread_id(&self) -> u32 {
        self.thread_id
    }

    /// Asks the loop to terminate. Returns `false` if the message could not be posted.
    pub fn stop(&self) -> bool {
        post_quit(self.thread_id)
    }
}

fn post_quit(thread_id: u32) -> bool {
    // SAFETY: posting to a thread id has no memory preconditions.
    let posted = unsafe { PostThreadMessageW(thread_id, WM_QUIT, 0, 0) } != FALSE;
    if !posted {
        warn!(thread_id, code = last_error(), "failed to post quit message");
    }
    posted
}

/// Stops `handle`'s loop on Ctrl+C, Ctrl+Break or console close.
///
/// Only one target is kept; a second call replaces it.
pub fn install_console_stop(handle: StopHandle) -> bool {
    CONSOLE_STOP_THREAD.store(handle.thread_id, Ordering::SeqCst);

    // SAFETY: the routine is a plain function with the expected signature.
    let installed = unsafe { SetConsoleCtrlHandler(Some(console_ctrl_handler), TRUE) } != FALSE;
    if !installed {
        warn!(code = last_error(), "failed to install console control handler");
    }
    installed
}

unsafe extern "system" fn console_ctrl_handler(ctrl_type: DWORD) -> BOOL {
    let thread_id = CONSOLE_STOP_THREAD.load(Ordering::SeqCst);
    if thread_id == 0 {
        return FALSE;
    }

    info!(ctrl_type, "console stop requested");
    if post_quit(thread_id) {
        TRUE
    } else {
        FALSE
    }
}
