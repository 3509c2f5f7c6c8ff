pub mod command;
pub mod repl;
pub mod session;

pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
pub use command::{parse, Command, ParsedCommand};
pub use repl::Repl;
pub use session::{Outcome, Response, Session};
