use crate::core::command::parse;
use crate::core::session::{Outcome, Session};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter the command >>> ";

/// Read-eval-print loop over any line source and sink.
pub struct Repl<S: Storage> {
    session: Session<S>,
}

impl<S: Storage> Repl<S> {
    pub fn new(session: Session<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Runs until an exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut line = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                tracing::info!("Input closed, leaving the prompt");
                writeln!(output)?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD.
            let text = String::from_utf8_lossy(&line);
            let parsed = parse(text.trim_end_matches(['\r', '\n']));
            let response = self.session.execute(&parsed);
            writeln!(output, "{}", response.text)?;

            if response.outcome == Outcome::Terminate {
                return Ok(());
            }
        }
    }
}
