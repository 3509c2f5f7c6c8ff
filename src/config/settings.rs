use crate::adapters::storage::DEFAULT_FILE_NAME;
use crate::config::toml_config::TomlConfig;
use crate::core::session::DEFAULT_BIRTHDAY_WINDOW;
use crate::domain::address_book::DEFAULT_PAGE_SIZE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_log_level, validate_path, validate_positive_number, validate_range, Validate,
};
use std::path::PathBuf;

/// Values given explicitly on the command line; they win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub file: Option<String>,
    pub page_size: Option<usize>,
    pub birthday_window: Option<i64>,
    pub log_level: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: String,
    pub page_size: usize,
    pub birthday_window: i64,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: DEFAULT_FILE_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            birthday_window: DEFAULT_BIRTHDAY_WINDOW,
            log_level: None,
        }
    }
}

impl Settings {
    /// Layers defaults, then the optional settings file, then explicit overrides.
    pub fn resolve(file_config: Option<&TomlConfig>, overrides: Overrides) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(config) = file_config {
            config.validate()?;
            if let Some(file) = &config.storage.file {
                settings.file = file.clone();
            }
            if let Some(page_size) = config.listing.page_size {
                settings.page_size = page_size;
            }
            if let Some(window) = config.birthdays.window_days {
                settings.birthday_window = window;
            }
            if let Some(level) = &config.logging.level {
                settings.log_level = Some(level.clone());
            }
        }

        if let Some(file) = overrides.file {
            settings.file = file;
        }
        if let Some(page_size) = overrides.page_size {
            settings.page_size = page_size;
        }
        if let Some(window) = overrides.birthday_window {
            settings.birthday_window = window;
        }
        if let Some(level) = overrides.log_level {
            settings.log_level = Some(level);
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        validate_range("birthday_window", self.birthday_window, 1, 366)?;
        if let Some(level) = &self.log_level {
            validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, Overrides::default()).unwrap();
        assert_eq!(settings.file, "AddressBook.bin");
        assert_eq!(settings.page_size, 2);
        assert_eq!(settings.birthday_window, 30);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_overrides_beat_file() {
        let config = TomlConfig::from_toml_str(
            "[storage]\nfile = \"from_file.bin\"\n[listing]\npage_size = 4\n",
        )
        .unwrap();
        let overrides = Overrides {
            file: Some("from_cli.bin".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(Some(&config), overrides).unwrap();
        assert_eq!(settings.file, "from_cli.bin");
        assert_eq!(settings.page_size, 4);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = Overrides {
            page_size: Some(0),
            ..Default::default()
        };
        assert!(Settings::resolve(None, overrides).is_err());
    }
}
