//! Error types for carsales.
//!
//! carsales uses a hierarchical error system:
//! - `CarSalesError` is the top-level error returned by all fallible public APIs
//! - Specific error types (`StorageError`, `ValidationError`) provide detail
//!
//! Form submission does not use these types. A rejected form is an expected,
//! locally recovered result and is reported through
//! [`FormError`](crate::form::FormError) and [`Outcome`](crate::form::Outcome).
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use carsales::{CarRegistry, Config, Result};
//!
//! fn example() -> Result<()> {
//!     let registry = CarRegistry::new(Config::default())?;
//!     carsales::storage::save_snapshot(&registry, "./cars.json")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for carsales operations.
pub type Result<T> = std::result::Result<T, CarSalesError>;

/// Top-level error enum for all carsales operations.
///
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum CarSalesError {
    /// Snapshot storage error (serialization, version, capacity on reload).
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CarSalesError {
    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Snapshot storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot version doesn't match the version this build writes.
    #[error("Snapshot version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected snapshot version.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },

    /// A stored car no longer fits the registry's capacity limits.
    #[error("Snapshot exceeds capacity for manufacturer '{manufacturer}'")]
    CapacityExceeded {
        /// Manufacturer whose car was rejected on reload.
        manufacturer: String,
    },
}

impl StorageError {
    /// Creates a serialization error with the given message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a capacity error for the given manufacturer.
    pub fn capacity_exceeded(manufacturer: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            manufacturer: manufacturer.into(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CarSalesError {
    fn from(err: serde_json::Error) -> Self {
        CarSalesError::Storage(StorageError::from(err))
    }
}

/// Validation errors for configuration and stored data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
