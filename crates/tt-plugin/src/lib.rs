//! # tt-plugin
//!
//! Translation Aggregator plugin build of the cleaner.
//!
//! The host hands us each captured line before its own substitutions run and
//! either keeps it (null return) or replaces it with the string we return.
//! The cleaner is fixed: strip markup tags, then collapse a line that repeats
//! itself.
//!
//! Returned strings live in a single process-wide slot. A pointer stays valid
//! until the next call that returns a string or until `TAPluginFree`. Calls
//! are not reentrant.

mod slot;

use std::ffi::c_void;
use std::ptr;

use once_cell::sync::Lazy;
use tracing::error;
use tt_core::TextCleaner;

use crate::slot::ReturnSlot;

/// Plugin interface version reported to the host.
pub const TA_PLUGIN_VERSION: u32 = 1;

const TAG_PATTERN: &str = "<[^>]+>";
const REPEAT_PATTERN: &str = r".*(.+)\1+";

static CLEANER: Lazy<TextCleaner> = Lazy::new(build_cleaner);
static RETURN_SLOT: ReturnSlot = ReturnSlot::new();

fn build_cleaner() -> TextCleaner {
    let mut cleaner = TextCleaner::default();
    for (pattern, replacement) in [(TAG_PATTERN, ""), (REPEAT_PATTERN, "$1")] {
        if let Err(err) = cleaner.push(pattern, replacement) {
            error!(error = %err, pattern, "built-in plugin replacer rejected");
        }
    }
    cleaner
}

/// Cleans `input`, `None` when the host should keep its own text.
pub fn modify(input: &str) -> Option<String> {
    CLEANER.clean(input)
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn TAPluginGetVersion(_reserved: *const c_void) -> u32 {
    TA_PLUGIN_VERSION
}

/// # Safety
/// `input` must be null or point to a NUL-terminated UTF-16 string.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn TAPluginModifyStringPreSubstitution(input: *mut u16) -> *mut u16 {
    if input.is_null() {
        return ptr::null_mut();
    }

    let text = String::from_utf16_lossy(wide_until_nul(input));
    match modify(&text) {
        Some(cleaned) => RETURN_SLOT.store(&cleaned),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn TAPluginFree() {
    RETURN_SLOT.clear();
}

/// # Safety
/// `start` must point to a NUL-terminated UTF-16 string that outlives the slice.
unsafe fn wide_until_nul<'a>(start: *const u16) -> &'a [u16] {
    let mut len = 0;
    while *start.add(len) != 0 {
        len += 1;
    }
    std::slice::from_raw_parts(start, len)
}
