//! # Configuration Loader
//!
//! Reads the TOML file and hands the document to [`AppConfig::from_toml`],
//! which compiles every pattern. A config that loads is a config that runs.

use std::path::Path;

use tt_core::{AppConfig, ConfigError};

/// Load configuration from a TOML file.
///
/// # Errors
///
/// - [`ConfigError::Io`] if the file cannot be read
/// - [`ConfigError::Parse`] if the content is not valid TOML
/// - any mapping error from [`AppConfig::from_toml`]
pub fn load_config(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    let toml_value: toml::Value = toml::from_str(&content)?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_replacers_and_sections() {
        let temp_file = write_config(
            r#"
            [[replace]]
            pattern = "<[^>]+>"
            replacement = ""

            [[replace]]
            pattern = ".*(.+)\\1+"
            replacement = "$1"

            [clipboard]
            write_retry_limit = 10
            write_retry_delay_ms = 25

            [log]
            level = "warn"
            directory = "logs"
        "#,
        );

        let mut config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.replace.len(), 2);
        assert_eq!(config.clipboard.write_retry_limit, 10);
        assert_eq!(config.clipboard.write_retry_delay_ms, 25);
        assert_eq!(config.log.level.as_deref(), Some("warn"));
        assert_eq!(config.log.directory, Some(PathBuf::from("logs")));

        let cleaner = config.take_cleaner();
        assert_eq!(cleaner.clean("<b>こんにちは</b>").as_deref(), Some("こんにちは"));
    }

    #[test]
    fn test_load_config_accepts_empty_file() {
        let temp_file = write_config("");
        let config = load_config(temp_file.path()).unwrap();
        assert!(config.replace.is_empty());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("Cannot open config file:"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let temp_file = write_config("[[replace]\npattern = ");
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_reports_bad_pattern() {
        let temp_file = write_config(
            r#"
            [[replace]]
            pattern = "("
            replacement = ""
        "#,
        );
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { index: 0, .. }));
    }
}
