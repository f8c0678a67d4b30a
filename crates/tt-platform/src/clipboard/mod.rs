//! System clipboard access.
//!
//! ### Open clipboard
//!
//! Any read or write needs the clipboard lock, which is taken by creating a
//! [`Clipboard`] and released when it goes out of scope:
//!
//! ```ignore
//! let clip = Clipboard::open()?;
//! let text = clip.read_text();
//! if !text.is_empty() {
//!     println!("Content of clipboard={text}");
//! }
//! ```
//!
//! ### Use own clipboard format
//!
//! ```ignore
//! let format = Clipboard::register_format("vn-text-trim raw").expect("format");
//! let clip = Clipboard::open()?;
//! clip.write_raw(format, &[1, 2, 3, 55, 2])?;
//! ```

pub mod encoding;

#[cfg(windows)]
mod handle;
#[cfg(windows)]
mod memory;

#[cfg(windows)]
pub use handle::Clipboard;
#[cfg(windows)]
pub use memory::{GlobalBuffer, Installed, Rejected};
