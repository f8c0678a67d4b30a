use std::sync::Mutex;

use once_cell::sync::OnceCell;

/// Single live buffer handed across the plugin boundary.
///
/// Storing replaces the previous buffer, so only the latest pointer is valid.
pub(crate) struct ReturnSlot {
    buffer: OnceCell<Mutex<Vec<u16>>>,
}

impl ReturnSlot {
    pub(crate) const fn new() -> Self {
        Self {
            buffer: OnceCell::new(),
        }
    }

    fn buffer(&self) -> &Mutex<Vec<u16>> {
        self.buffer.get_or_init(|| Mutex::new(Vec::new()))
    }

    /// Copies `text` in as a NUL-terminated wide string and returns its address.
    pub(crate) fn store(&self, text: &str) -> *mut u16 {
        let mut buffer = self.buffer().lock().unwrap_or_else(|p| p.into_inner());
        buffer.clear();
        buffer.extend(text.encode_utf16());
        buffer.push(0);
        buffer.as_mut_ptr()
    }

    /// Releases the stored buffer; pointers from `store` dangle afterwards.
    pub(crate) fn clear(&self) {
        if let Some(buffer) = self.buffer.get() {
            let mut buffer = buffer.lock().unwrap_or_else(|p| p.into_inner());
            *buffer = Vec::new();
        }
    }

    #[cfg(test)]
    fn snapshot(&self) -> Vec<u16> {
        self.buffer()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}
