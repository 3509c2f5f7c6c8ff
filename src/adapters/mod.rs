// Adapters layer: concrete implementations of domain ports.

pub mod storage;

pub use storage::{FileStorage, DEFAULT_FILE_NAME};
