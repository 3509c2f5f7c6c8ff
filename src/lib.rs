pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Overrides, Settings};

pub use adapters::FileStorage;
pub use crate::core::{parse, Command, Outcome, Repl, Response, Session};
pub use domain::address_book::AddressBook;
pub use domain::fields::{Birthday, Name, Phone};
pub use domain::ports::Storage;
pub use domain::record::Record;
pub use utils::error::{BookError, ErrorCategory, Result};
