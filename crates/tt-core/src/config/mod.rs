//! # Configuration DTO
//!
//! Maps the TOML document into an [`AppConfig`]. Every pattern is compiled
//! here, so a configuration that loads is a configuration that can clean: an
//! invalid pattern is a load-time error and never reaches the watcher loop.
//!
//! Reading the file is left to the caller (the binary's bootstrap).

mod app_config;
mod error;

pub use app_config::{AppConfig, ClipboardSettings, LogSettings, TextSettings};
pub use error::ConfigError;
