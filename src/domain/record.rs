use crate::domain::fields::{Birthday, Name, Phone};
use crate::utils::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_BIRTHDAY: &str = "Unknown birthday";

/// One contact: a name, its phones in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Appends without checking for duplicates.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes the first phone equal to `phone`.
    pub fn del_phone(&mut self, phone: &Phone) -> Result<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })?;
        Ok(self.phones.remove(index))
    }

    /// Removes `old` and appends `new`; the record is untouched when `old` is missing.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> Result<()> {
        self.del_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Days from `today` until the next occurrence of the birthday, `0` when it is today.
    ///
    /// A 29 February birthday is celebrated on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?.date();
        [today.year(), today.year() + 1]
            .into_iter()
            .filter_map(|year| anniversary(birthday, year))
            .find(|date| *date >= today)
            .map(|date| (date - today).num_days())
    }

    /// Whether the next birthday is at most `window` days after `today`; false when unknown.
    pub fn birthday_within(&self, window: i64, today: NaiveDate) -> bool {
        self.days_to_birthday_from(today)
            .is_some_and(|days| days <= window)
    }

    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(chrono::Local::now().date_naive())
    }

    /// Birthday text, or the "Unknown birthday" sentinel.
    pub fn birthday_text(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| UNKNOWN_BIRTHDAY.to_string())
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "User {} - Phones: {} - Birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("None"),
        }
    }
}
