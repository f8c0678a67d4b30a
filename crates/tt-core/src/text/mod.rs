//! Text cleaning pipeline.
//!
//! A [`TextReplacer`] is one compiled pattern plus a replacement template.
//! A [`TextCleaner`] chains replacers in registration order and reports a single
//! changed/unchanged verdict for the whole chain.
//!
//! ```text
//! input ──► replacer[0] ──► replacer[1] ──► … ──► output
//!                                                   │
//!                          len(output) != len(input) ──► changed
//! ```

mod cleaner;
mod error;
mod replacer;
mod template;

pub use cleaner::{wide_len, Cleaned, TextCleaner};
pub use error::PatternError;
pub use replacer::{TextReplacer, DEFAULT_BACKTRACK_LIMIT};
