// Domain layer: contact value types, the address book and the storage port.

pub mod address_book;
pub mod fields;
pub mod ports;
pub mod record;
