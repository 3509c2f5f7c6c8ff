use crate::utils::error::{BookError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, every section may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub birthdays: BirthdaysConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BirthdaysConfig {
    pub window_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a TOML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BookError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::{
            validate_log_level, validate_path, validate_positive_number, validate_range,
        };

        if let Some(file) = &self.storage.file {
            validate_path("storage.file", file)?;
        }
        if let Some(page_size) = self.listing.page_size {
            validate_positive_number("listing.page_size", page_size, 1)?;
        }
        if let Some(window) = self.birthdays.window_days {
            validate_range("birthdays.window_days", window, 1, 366)?;
        }
        if let Some(level) = &self.logging.level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
file = "/tmp/contacts.bin"

[listing]
page_size = 5

[birthdays]
window_days = 7

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.storage.file.as_deref(), Some("/tmp/contacts.bin"));
        assert_eq!(config.listing.page_size, Some(5));
        assert_eq!(config.birthdays.window_days, Some(7));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[listing]\npage_size = 3\n").unwrap();
        assert!(config.storage.file.is_none());
        assert_eq!(config.listing.page_size, Some(3));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = TomlConfig::from_toml_str("[listing]\npages = 3\n");
        assert!(matches!(result, Err(BookError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[listing]\npage_size = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[birthdays]\nwindow_days = 400\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\nfile = \"book.bin\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.file.as_deref(), Some("book.bin"));
    }
}
