//! Customer domain event payloads.

use common::CustomerId;
use serde::{Deserialize, Serialize};

use super::Address;

/// Data for CustomerCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub id: CustomerId,
    pub name: String,
}

/// Data for CustomerChangedAddress event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerChangedAddressData {
    pub id: CustomerId,
    pub name: String,

    /// The address the customer moved to.
    pub address: Address,
}
