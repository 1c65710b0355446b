use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a string-backed identifier newtype.
///
/// Identifiers are opaque strings so that callers may supply their own
/// (e.g. `"123"`) or ask for a fresh UUID via `generate`.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a customer.
    CustomerId
);

string_id!(
    /// Unique identifier for a product.
    ProductId
);

string_id!(
    /// Unique identifier for an order.
    OrderId
);

string_id!(
    /// Unique identifier for a line item within an order.
    OrderItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = CustomerId::generate();
        let id2 = CustomerId::generate();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn new_preserves_value() {
        let id = OrderId::new("123");
        assert_eq!(id.as_str(), "123");
        assert_eq!(id.to_string(), "123");
    }

    #[test]
    fn string_conversions() {
        let id: ProductId = "SKU-001".into();
        assert_eq!(id.as_ref(), "SKU-001");

        let raw: String = id.into();
        assert_eq!(raw, "SKU-001");
    }

    #[test]
    fn blank_detection() {
        assert!(CustomerId::new("").is_blank());
        assert!(CustomerId::new("   ").is_blank());
        assert!(!CustomerId::new("1").is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = OrderItemId::new("item-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"item-1\"");
        let deserialized: OrderItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
