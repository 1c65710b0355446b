//! Repository implementations for the shop domain.
//!
//! - [`sqlite`]: sqlx-backed repositories over a SQLite database
//! - [`InMemoryRepository`]: a lock-guarded in-memory store for tests

pub mod database;
pub mod error;
pub mod memory;
pub mod sqlite;

pub use database::{connect, connect_in_memory, run_migrations};
pub use error::{PersistenceError, Result};
pub use memory::InMemoryRepository;
pub use sqlite::{SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository};
