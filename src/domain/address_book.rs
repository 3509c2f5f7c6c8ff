use crate::domain::record::Record;
use crate::utils::error::{BookError, Result};
use chrono::NaiveDate;

pub const DIVIDER_WIDTH: usize = 50;
pub const DEFAULT_PAGE_SIZE: usize = 2;

pub fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// Contacts keyed by name, listed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Inserts the record, replacing one with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name.as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Like [`get`](Self::get) but reports a missing contact as an error.
    pub fn find_record(&self, name: &str) -> Result<&Record> {
        self.get(name).ok_or_else(|| not_found(name))
    }

    pub fn find_record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.get_mut(name).ok_or_else(|| not_found(name))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records whose next birthday is at most `window` days after `today`.
    pub fn upcoming_birthdays(
        &self,
        window: i64,
        today: NaiveDate,
    ) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |record| record.birthday_within(window, today))
    }

    /// Lazily renders the book as text blocks of up to `page_size` records.
    ///
    /// With a `window`, only records having a birthday within that many days are paged.
    pub fn pages(&self, page_size: usize, window: Option<i64>, today: NaiveDate) -> Pages<'_> {
        Pages {
            records: self.records.iter(),
            page_size: page_size.max(1),
            window,
            today,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

fn not_found(name: &str) -> BookError {
    BookError::ContactNotFound {
        name: name.to_string(),
    }
}

/// Iterator returned by [`AddressBook::pages`].
///
/// Every block opens with a divider line and each record sits on its own line.
/// Empty blocks are never produced.
pub struct Pages<'a> {
    records: std::slice::Iter<'a, Record>,
    page_size: usize,
    window: Option<i64>,
    today: NaiveDate,
}

impl Pages<'_> {
    fn matches(&self, record: &Record) -> bool {
        match self.window {
            None => true,
            Some(window) => record.birthday_within(window, self.today),
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut block = divider();
        block.push('\n');
        let mut count = 0;
        while count < self.page_size {
            let Some(record) = self.records.next() else {
                break;
            };
            if !self.matches(record) {
                continue;
            }
            block.push_str(&record.to_string());
            block.push('\n');
            count += 1;
        }
        (count > 0).then_some(block)
    }
}
