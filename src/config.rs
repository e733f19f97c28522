//! Configuration types for carsales.
//!
//! The [`Config`] struct holds the registry's capacity limits:
//! - How many cars a single manufacturer may hold
//! - How many distinct manufacturers the registry may hold
//!
//! # Example
//! ```rust
//! use carsales::Config;
//!
//! // Use defaults (20 cars per manufacturer, 20 manufacturers)
//! let config = Config::default();
//!
//! // Customize for a small lot
//! let config = Config {
//!     max_manufacturers: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default number of cars a manufacturer may hold.
pub const DEFAULT_MAX_CARS_PER_MANUFACTURER: usize = 20;

/// Default number of distinct manufacturers.
pub const DEFAULT_MAX_MANUFACTURERS: usize = 20;

/// Registry capacity configuration.
///
/// All fields have sensible defaults. Use struct update syntax to override
/// specific settings:
///
/// ```rust
/// use carsales::Config;
///
/// let config = Config {
///     max_cars_per_manufacturer: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of cars stored under one manufacturer.
    ///
    /// Default: 20
    pub max_cars_per_manufacturer: usize,

    /// Maximum number of distinct manufacturers in the registry.
    ///
    /// Default: 20
    pub max_manufacturers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cars_per_manufacturer: DEFAULT_MAX_CARS_PER_MANUFACTURER,
            max_manufacturers: DEFAULT_MAX_MANUFACTURERS,
        }
    }
}

impl Config {
    /// Creates a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Config with explicit limits.
    ///
    /// # Example
    /// ```rust
    /// use carsales::Config;
    ///
    /// let config = Config::with_limits(2, 3);
    /// assert_eq!(config.max_cars_per_manufacturer, 2);
    /// assert_eq!(config.max_manufacturers, 3);
    /// ```
    pub fn with_limits(max_cars_per_manufacturer: usize, max_manufacturers: usize) -> Self {
        Self {
            max_cars_per_manufacturer,
            max_manufacturers,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if either limit is zero. A zero limit would
    /// make every insert fail.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_cars_per_manufacturer == 0 {
            return Err(ValidationError::invalid_field(
                "max_cars_per_manufacturer",
                "must be at least 1",
            ));
        }

        if self.max_manufacturers == 0 {
            return Err(ValidationError::invalid_field(
                "max_manufacturers",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Total number of cars the registry can hold when every manufacturer is full.
    pub fn total_capacity(&self) -> usize {
        self.max_cars_per_manufacturer
            .saturating_mul(self.max_manufacturers)
    }
}
