use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ConfigError;
use crate::text::{TextCleaner, TextReplacer, DEFAULT_BACKTRACK_LIMIT};

/// Application configuration, loaded once at startup and never reloaded.
#[derive(Debug, Default)]
pub struct AppConfig {
    /// Ordered replacers from the `[[replace]]` array.
    pub replace: Vec<TextReplacer>,

    /// Clipboard write behaviour from `[clipboard]`.
    pub clipboard: ClipboardSettings,

    /// Logging defaults from `[log]`.
    pub log: LogSettings,

    /// Pattern engine tuning from `[text]`.
    pub text: TextSettings,
}

/// `[text]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Backtracking budget of one search; a line that exhausts it is left as is.
    pub backtrack_limit: usize,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

/// `[clipboard]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Maximum write attempts per notification, `0` retries forever.
    pub write_retry_limit: u32,

    /// Pause between two write attempts, in milliseconds.
    pub write_retry_delay_ms: u64,
}

impl ClipboardSettings {
    pub fn retry_limit(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.write_retry_limit)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.write_retry_delay_ms)
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: Option<String>,

    /// Directory for an additional log file. No file logging when absent.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(content)?;
        Self::from_toml(&value)
    }

    /// Create AppConfig from a TOML value, compiling every replacer.
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let text: TextSettings = section(value, "text")?;

        let replace = match value.get("replace") {
            None => Vec::new(),
            Some(toml::Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| parse_replacer(index, entry, text.backtrack_limit))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ConfigError::NotAnArray),
        };

        Ok(Self {
            replace,
            clipboard: section(value, "clipboard")?,
            log: section(value, "log")?,
            text,
        })
    }

    /// Splits off the replacers as a ready-to-use cleaner.
    pub fn take_cleaner(&mut self) -> TextCleaner {
        TextCleaner::new(std::mem::take(&mut self.replace))
    }
}

fn parse_replacer(
    index: usize,
    entry: &toml::Value,
    backtrack_limit: usize,
) -> Result<TextReplacer, ConfigError> {
    let table = entry
        .as_table()
        .ok_or(ConfigError::UnexpectedEntry { index })?;

    let pattern = table.get("pattern").ok_or(ConfigError::MissingKey {
        index,
        key: "pattern",
    })?;
    let replacement = table.get("replacement").ok_or(ConfigError::MissingKey {
        index,
        key: "replacement",
    })?;

    let pattern = pattern.as_str().ok_or(ConfigError::NotAString {
        index,
        key: "pattern",
    })?;
    let replacement = replacement.as_str().ok_or(ConfigError::NotAString {
        index,
        key: "replacement",
    })?;

    TextReplacer::with_backtrack_limit(pattern, replacement, backtrack_limit)
        .map_err(|source| ConfigError::Pattern { index, source })
}

fn section<T>(value: &toml::Value, name: &'static str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match value.get(name) {
        None => Ok(T::default()),
        Some(section) => section
            .clone()
            .try_into()
            .map_err(|source| ConfigError::InvalidSection {
                section: name,
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replacers_in_order() {
        let config = AppConfig::from_toml_str(
            r#"
            [[replace]]
            pattern = "<[^>]+>"
            replacement = ""

            [[replace]]
            pattern = '.*(.+)\1+'
            replacement = "$1"
            "#,
        )
        .unwrap();

        let patterns: Vec<_> = config.replace.iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["<[^>]+>", r".*(.+)\1+"]);
        assert_eq!(config.replace[1].replacement(), "$1");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert!(config.replace.is_empty());
        assert_eq!(config.clipboard, ClipboardSettings::default());
        assert_eq!(config.clipboard.retry_limit(), None);
        assert_eq!(config.clipboard.retry_delay(), Duration::ZERO);
        assert_eq!(config.log, LogSettings::default());
        assert_eq!(config.text.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);
    }

    #[test]
    fn backtrack_limit_reaches_the_replacers() {
        let long_line: String = (0x4E00u32..0x4E00 + 200).filter_map(char::from_u32).collect();
        let document = r#"
            [text]
            backtrack_limit = 1000

            [[replace]]
            pattern = '.*(.+)\1+'
            replacement = "$1"
        "#;

        let mut config = AppConfig::from_toml_str(document).unwrap();
        assert_eq!(config.text.backtrack_limit, 1000);

        // The budget is far too small for this line, so it is left untouched.
        let line = format!("「台詞」「台詞」{long_line}");
        assert_eq!(config.take_cleaner().clean(&line), None);
    }

    #[test]
    fn reads_optional_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [clipboard]
            write_retry_limit = 10
            write_retry_delay_ms = 25

            [log]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.clipboard.retry_limit(), NonZeroU32::new(10));
        assert_eq!(config.clipboard.retry_delay(), Duration::from_millis(25));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert_eq!(config.log.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn missing_pattern_key_is_reported() {
        let err = AppConfig::from_toml_str(
            r#"
            [[replace]]
            replacement = ""
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingKey {
                index: 0,
                key: "pattern"
            }
        ));
        assert_eq!(err.to_string(), "Missing pattern key! (entry #0)");
    }

    #[test]
    fn missing_replacement_key_is_reported() {
        let err = AppConfig::from_toml_str(
            r#"
            [[replace]]
            pattern = "a"

            [[replace]]
            pattern = "b"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingKey {
                index: 0,
                key: "replacement"
            }
        ));
    }

    #[test]
    fn non_string_keys_are_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [[replace]]
            pattern = 42
            replacement = ""
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::NotAString {
                index: 0,
                key: "pattern"
            }
        ));
    }

    #[test]
    fn non_table_entries_are_rejected() {
        let err = AppConfig::from_toml_str(r#"replace = ["oops"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedEntry { index: 0 }));
    }

    #[test]
    fn replace_must_be_an_array() {
        let err = AppConfig::from_toml_str(r#"replace = "scalar""#).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnArray));
    }

    #[test]
    fn invalid_pattern_is_a_load_time_error() {
        let err = AppConfig::from_toml_str(
            r#"
            [[replace]]
            pattern = "ok"
            replacement = ""

            [[replace]]
            pattern = "([unterminated"
            replacement = ""
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Pattern { index: 1, .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[[replace]\npattern =").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrongly_typed_section_is_reported() {
        let err = AppConfig::from_toml_str(
            r#"
            [clipboard]
            write_retry_limit = "many"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidSection {
                section: "clipboard",
                ..
            }
        ));
    }

    #[test]
    fn take_cleaner_moves_replacers() {
        let mut config = AppConfig::from_toml_str(
            r#"
            [[replace]]
            pattern = "x"
            replacement = ""
            "#,
        )
        .unwrap();

        let cleaner = config.take_cleaner();
        assert_eq!(cleaner.len(), 1);
        assert!(config.replace.is_empty());
    }
}
