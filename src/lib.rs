//! vn-text-trim: cleans text hooked from visual novels as it lands on the clipboard.

pub mod bootstrap;

pub use bootstrap::run;
