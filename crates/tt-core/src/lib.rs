//! # tt-core
//!
//! Core domain models and business logic for vn-text-trim.
//!
//! This crate contains the text cleaning pipeline, the configuration DTO and the
//! port traits implemented by the platform layer. It has no OS dependencies.

#[macro_use]
mod macros;

// Public module exports
pub mod clipboard;
pub mod config;
pub mod ports;
pub mod text;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardError, ClipboardFormat};
pub use config::{AppConfig, ClipboardSettings, ConfigError, LogSettings, TextSettings};
pub use text::{Cleaned, PatternError, TextCleaner, TextReplacer, DEFAULT_BACKTRACK_LIMIT};
