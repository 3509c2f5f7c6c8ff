pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use settings::{Overrides, Settings};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contact-book")]
#[command(about = "Interactive address book kept in a local file")]
pub struct CliConfig {
    /// Address book file (default: AddressBook.bin)
    #[arg(long)]
    pub file: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Contacts per block in `show all` (default: 2)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Days ahead checked by `user birthday` (default: 30)
    #[arg(long)]
    pub birthday_window: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            file: self.file.clone(),
            page_size: self.page_size,
            birthday_window: self.birthday_window,
            log_level: None,
        }
    }
}
