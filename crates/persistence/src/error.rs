use thiserror::Error;

/// Errors that can occur while opening or preparing the database.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for database setup.
pub type Result<T> = std::result::Result<T, PersistenceError>;
