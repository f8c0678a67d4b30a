use winapi::um::errhandlingapi::GetLastError;

/// Calling thread's last OS error code.
pub(crate) fn last_error() -> u32 {
    // SAFETY: GetLastError only reads thread-local state.
    unsafe { GetLastError() }
}
