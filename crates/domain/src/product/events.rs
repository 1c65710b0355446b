//! Product domain event payloads.

use serde::{Deserialize, Serialize};

use crate::Money;

/// Data for ProductCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    pub name: String,
    pub description: String,
    pub price: Money,
}
