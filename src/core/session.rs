//! Command handlers bound to one address book and its storage.
//!
//! Each handler returns `Result<String>`; [`Session::execute`] turns every
//! error into its fixed prompt message, so no handler formats errors itself.

use crate::core::command::{Command, ParsedCommand, COMMANDS};
use crate::domain::address_book::{divider, AddressBook, DEFAULT_PAGE_SIZE};
use crate::domain::fields::{Birthday, Name, Phone};
use crate::domain::ports::Storage;
use crate::domain::record::Record;
use crate::utils::error::{BookError, Result};
use chrono::NaiveDate;

pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 30;

pub const GREETING: &str = "Hello! Can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const UNKNOWN_COMMAND: &str = "Unknown command! Enter again!";
pub const EMPTY_BOOK: &str = "Address book is empty";

/// Whether the prompt keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub outcome: Outcome,
}

impl Response {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: Outcome::Continue,
        }
    }
}

pub struct Session<S: Storage> {
    book: AddressBook,
    storage: S,
    page_size: usize,
    birthday_window: i64,
    today: Option<NaiveDate>,
}

impl<S: Storage> Session<S> {
    /// Loads the book from `storage` once.
    pub fn open(storage: S) -> Result<Self> {
        let book = storage.load()?;
        Ok(Self::with_book(book, storage))
    }

    pub fn with_book(book: AddressBook, storage: S) -> Self {
        Self {
            book,
            storage,
            page_size: DEFAULT_PAGE_SIZE,
            birthday_window: DEFAULT_BIRTHDAY_WINDOW,
            today: None,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn birthday_window(mut self, days: i64) -> Self {
        self.birthday_window = days;
        self
    }

    /// Pins the date used for birthday arithmetic instead of the local clock.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn current_date(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn execute(&mut self, parsed: &ParsedCommand) -> Response {
        let command = parsed.command;
        tracing::debug!("Dispatching {:?} with {} argument(s)", command, parsed.args.len());

        let result = self.run(command, &parsed.args).and_then(|text| {
            if command.is_mutating() {
                self.storage.save(&self.book)?;
            }
            Ok(text)
        });

        match result {
            Ok(text) => Response {
                text,
                outcome: match command {
                    Command::Exit => Outcome::Terminate,
                    _ => Outcome::Continue,
                },
            },
            Err(e) => {
                tracing::debug!("{:?} failed ({:?}): {}", command, e.category(), e);
                Response::reply(e.user_friendly_message())
            }
        }
    }

    fn run(&mut self, command: Command, args: &[String]) -> Result<String> {
        match command {
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => self.add(args),
            Command::Change => self.change(args),
            Command::Phone => self.phone(args),
            Command::ShowAll => Ok(self.show_all()),
            Command::Exit => Ok(FAREWELL.to_string()),
            Command::DeletePhone => self.del_phone(args),
            Command::Birthday => self.birthday(args),
            Command::UpcomingBirthdays => Ok(self.upcoming_birthdays()),
            Command::Help => Ok(help()),
            Command::Search => self.find(args),
            Command::Unknown => Ok(UNKNOWN_COMMAND.to_string()),
        }
    }

    fn add(&mut self, args: &[String]) -> Result<String> {
        let [name, phone, rest @ ..] = args else {
            return Err(missing(Command::Add));
        };
        let name = Name::parse(name.as_str())?;
        let phone = Phone::parse(phone.as_str())?;

        if let Some(record) = self.book.get_mut(name.as_str()) {
            record.add_phone(phone.clone());
            return Ok(format!("Add phone {} to user {}", phone, name));
        }

        let birthday = rest.first().map(|b| Birthday::parse(b)).transpose()?;
        let text = format!("Add user {} with phone number {}", name, phone);
        self.book
            .add_record(Record::new(name).with_phone(phone).with_birthday(birthday));
        Ok(text)
    }

    fn change(&mut self, args: &[String]) -> Result<String> {
        let [name, old, new, ..] = args else {
            return Err(missing(Command::Change));
        };
        let old_phone = Phone::parse(old.as_str())?;
        let new_phone = Phone::parse(new.as_str())?;
        self.book
            .find_record_mut(name)?
            .edit_phone(&old_phone, new_phone)?;
        Ok(format!(
            "Change to user {} phone number from {} to {}",
            name, old, new
        ))
    }

    fn phone(&self, args: &[String]) -> Result<String> {
        let name = args.first().ok_or_else(|| missing(Command::Phone))?;
        Ok(self.book.find_record(name)?.to_string())
    }

    fn del_phone(&mut self, args: &[String]) -> Result<String> {
        let [name, phone, ..] = args else {
            return Err(missing(Command::DeletePhone));
        };
        let target = Phone::parse(phone.as_str())?;
        self.book.find_record_mut(name)?.del_phone(&target)?;
        Ok(format!("Delete phone {} from user {}", phone, name))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return EMPTY_BOOK.to_string();
        }
        let mut result = String::from("List of all users:\n");
        for page in self.book.pages(self.page_size, None, self.current_date()) {
            result.push_str(&page);
        }
        result.push_str(&divider());
        result
    }

    fn birthday(&self, args: &[String]) -> Result<String> {
        let name = args.first().ok_or_else(|| missing(Command::Birthday))?;
        Ok(self.book.find_record(name)?.birthday_text())
    }

    fn upcoming_birthdays(&self) -> String {
        let mut result = format!(
            "List of users with birthday in {} days:",
            self.birthday_window
        );
        for record in self
            .book
            .upcoming_birthdays(self.birthday_window, self.current_date())
        {
            result.push('\n');
            result.push_str(&record.to_string());
        }
        result
    }

    fn find(&self, args: &[String]) -> Result<String> {
        if args.is_empty() {
            return Err(missing(Command::Search));
        }
        let query = args.join(" ").to_lowercase();
        let mut result = String::from("List with matches:\n");
        for record in self.book.records() {
            let text = record.to_string();
            if text.to_lowercase().contains(&query) {
                result.push_str(&text);
                result.push('\n');
            }
        }
        Ok(result)
    }
}

fn missing(command: Command) -> BookError {
    BookError::MissingArguments {
        expected: command.usage(),
    }
}

fn help() -> String {
    COMMANDS
        .iter()
        .map(|(command, triggers)| {
            let phrases = triggers
                .iter()
                .map(|t| t.trim_end())
                .collect::<Vec<_>>()
                .join(" | ");
            format!("{:<32} {}", phrases, command.usage())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
