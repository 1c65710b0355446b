use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::event::DomainEvent;
use crate::repository::Entity;

use super::{ProductCreatedData, ProductError};

/// A product that can be sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_blank() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: self.price.cents(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: price.cents(),
            });
        }
        self.price = price;
        Ok(())
    }

    /// Builds the event announcing this product's creation.
    pub fn created_event(&self, description: impl Into<String>) -> DomainEvent {
        DomainEvent::product_created(ProductCreatedData {
            name: self.name.clone(),
            description: description.into(),
            price: self.price,
        })
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn entity_name() -> &'static str {
        "Product"
    }

    fn id(&self) -> &ProductId {
        &self.id
    }
}
