use crate::domain::address_book::AddressBook;
use crate::utils::error::Result;

/// Whole-book persistence backend.
pub trait Storage {
    /// Loads the stored book; an absent or unreadable snapshot yields an empty book.
    fn load(&self) -> Result<AddressBook>;
    fn save(&self, book: &AddressBook) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self) -> Result<AddressBook> {
        (**self).load()
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        (**self).save(book)
    }
}
