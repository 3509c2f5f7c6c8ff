use crate::domain::address_book::AddressBook;
use crate::domain::ports::Storage;
use crate::domain::record::Record;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "AddressBook.bin";
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    contacts: Vec<Record>,
}

/// Keeps the whole book in a single file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<AddressBook> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        if data.is_empty() {
            tracing::info!("Address book file {} is empty", self.path.display());
            return Ok(AddressBook::new());
        }

        let snapshot: Snapshot = match serde_json::from_slice(&data) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    "Could not decode {}: {}, starting empty",
                    self.path.display(),
                    e
                );
                return Ok(AddressBook::new());
            }
        };

        if snapshot.version != FORMAT_VERSION {
            tracing::warn!(
                "Unsupported address book version {} in {}, starting empty",
                snapshot.version,
                self.path.display()
            );
            return Ok(AddressBook::new());
        }

        let mut book = AddressBook::new();
        for record in snapshot.contacts {
            book.add_record(record);
        }
        tracing::info!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        let snapshot = Snapshot {
            version: FORMAT_VERSION,
            contacts: book.records().cloned().collect(),
        };
        let data = serde_json::to_vec(&snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write next to the target so the rename stays on one filesystem.
        let temp = self.temp_path();
        fs::write(&temp, data)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
