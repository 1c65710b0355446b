//! Customer aggregate, its address value object, events and handlers.

mod address;
mod entity;
mod events;
mod handlers;

pub use address::{Address, AddressError};
pub use entity::Customer;
pub use events::{CustomerChangedAddressData, CustomerCreatedData};
pub use handlers::{SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogWithNewCustomerAddress};

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    /// A customer cannot be activated before an address is known.
    #[error("Address is mandatory to activate a customer")]
    AddressRequiredToActivate,

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
}
