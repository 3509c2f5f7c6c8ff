use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Not enough arguments, expected: {expected}")]
    MissingArguments { expected: &'static str },

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact name cannot be empty")]
    InvalidName,

    #[error("Invalid phone number: {value:?}, only digits are allowed")]
    InvalidPhone { value: String },

    #[error("Incorrect data format, should be DD.MM.YYYY: {value:?}")]
    InvalidBirthday { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arguments,
    Lookup,
    Format,
    Storage,
    Config,
}

impl BookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookError::MissingArguments { .. } => ErrorCategory::Arguments,
            BookError::ContactNotFound { .. } | BookError::PhoneNotFound { .. } => {
                ErrorCategory::Lookup
            }
            BookError::InvalidName
            | BookError::InvalidPhone { .. }
            | BookError::InvalidBirthday { .. } => ErrorCategory::Format,
            BookError::IoError(_) | BookError::SerializationError(_) => ErrorCategory::Storage,
            BookError::ConfigError { .. } | BookError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// The text shown at the prompt when a command fails.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookError::MissingArguments { .. } => "Error! Give me name and phone please!".into(),
            BookError::ContactNotFound { .. } => "Error! User not found!".into(),
            BookError::PhoneNotFound { .. }
            | BookError::InvalidPhone { .. }
            | BookError::InvalidBirthday { .. } => "Error! Phone number is incorrect!".into(),
            BookError::InvalidName => "Error! Name cannot be empty!".into(),
            BookError::IoError(e) => format!("Error! Could not save address book: {}", e),
            BookError::SerializationError(e) => {
                format!("Error! Could not save address book: {}", e)
            }
            BookError::ConfigError { message } => format!("Error! {}", message),
            BookError::InvalidConfigValueError { field, reason, .. } => {
                format!("Error! Invalid setting {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        let missing = BookError::MissingArguments { expected: "name phone" };
        assert_eq!(missing.user_friendly_message(), "Error! Give me name and phone please!");

        let not_found = BookError::ContactNotFound { name: "Bob".into() };
        assert_eq!(not_found.user_friendly_message(), "Error! User not found!");

        let bad_phone = BookError::InvalidPhone { value: "12a".into() };
        assert_eq!(bad_phone.user_friendly_message(), "Error! Phone number is incorrect!");

        let bad_date = BookError::InvalidBirthday { value: "1/2/2000".into() };
        assert_eq!(bad_date.user_friendly_message(), "Error! Phone number is incorrect!");
    }

    #[test]
    fn test_categories() {
        let err = BookError::PhoneNotFound {
            name: "Ann".into(),
            phone: "1".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);

        let io = BookError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Storage);
        assert!(io.user_friendly_message().contains("disk full"));
    }
}
