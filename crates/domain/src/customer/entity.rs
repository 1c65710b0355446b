use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;
use crate::repository::Entity;

use super::{Address, CustomerChangedAddressData, CustomerCreatedData, CustomerError};

/// Customer aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Creates an inactive customer without an address.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_blank() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    /// Renames the customer. The old name is kept if the new one is blank.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequiredToActivate);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points += points;
    }

    /// Builds the event announcing this customer's creation.
    pub fn created_event(&self) -> DomainEvent {
        DomainEvent::customer_created(CustomerCreatedData {
            id: self.id.clone(),
            name: self.name.clone(),
        })
    }

    /// Builds the event announcing this customer's current address.
    ///
    /// Returns `None` while the customer has no address.
    pub fn changed_address_event(&self) -> Option<DomainEvent> {
        let address = self.address.clone()?;
        Some(DomainEvent::customer_changed_address(
            CustomerChangedAddressData {
                id: self.id.clone(),
                name: self.name.clone(),
                address,
            },
        ))
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn entity_name() -> &'static str {
        "Customer"
    }

    fn id(&self) -> &CustomerId {
        &self.id
    }
}
