//! Validated value types stored inside a contact record.

use crate::utils::error::{BookError, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

fn birthday_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("static birthday regex"))
}

/// Contact name, also the unique key inside an address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookError::InvalidName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number made of decimal digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookError::InvalidPhone { value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Date of birth written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Accepts only zero-padded `DD.MM.YYYY` text naming a real calendar day.
    pub fn parse(value: &str) -> Result<Self> {
        if !birthday_pattern().is_match(value) {
            return Err(BookError::InvalidBirthday {
                value: value.to_string(),
            });
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| BookError::InvalidBirthday {
                value: value.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

macro_rules! string_conversions {
    ($ty:ident, $parse:expr) => {
        impl TryFrom<String> for $ty {
            type Error = BookError;

            fn try_from(value: String) -> Result<Self> {
                $parse(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }
    };
}

string_conversions!(Name, Name::parse);
string_conversions!(Phone, Phone::parse);
string_conversions!(Birthday, |value: String| Birthday::parse(&value));

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_digits_only() {
        for value in ["0", "12345", "380501234567"] {
            assert_eq!(Phone::parse(value).unwrap().as_str(), value);
        }
        for value in ["", "12a45", "+380", "555 1234", "١٢٣"] {
            assert!(matches!(
                Phone::parse(value),
                Err(BookError::InvalidPhone { .. })
            ));
        }
    }

    #[test]
    fn test_birthday_round_trips_text() {
        for value in ["01.01.2000", "29.02.2024", "31.12.1999"] {
            assert_eq!(Birthday::parse(value).unwrap().to_string(), value);
        }
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        for value in ["1.1.2000", "2000-01-01", "31.02.2000", "29.02.2023", "01.13.2000", "abc"] {
            assert!(
                matches!(Birthday::parse(value), Err(BookError::InvalidBirthday { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_name_must_not_be_blank() {
        assert!(Name::parse("Alice").is_ok());
        assert!(matches!(Name::parse("  "), Err(BookError::InvalidName)));
    }

    #[test]
    fn test_serde_goes_through_validation() {
        let phone: Phone = serde_json::from_str("\"5551234\"").unwrap();
        assert_eq!(phone.as_str(), "5551234");
        assert!(serde_json::from_str::<Phone>("\"55x\"").is_err());
        assert_eq!(
            serde_json::to_string(&Birthday::parse("05.06.1990").unwrap()).unwrap(),
            "\"05.06.1990\""
        );
    }
}
