//! # carsales
//!
//! Validated car-sale record entry over a capacity-limited registry.
//!
//! carsales is the logic behind an "Add a Car" form: it takes six raw text
//! fields, checks them, builds a car record and stores it in a registry that
//! limits how many cars each manufacturer may hold and how many
//! manufacturers there may be.
//!
//! ## Quick Start
//!
//! ```rust
//! use carsales::{submit, CarForm, CarRegistry, Config, Outcome};
//!
//! // Owned registry with explicit limits
//! let mut registry = CarRegistry::new(Config::with_limits(10, 5))?;
//!
//! // Submit the form as typed
//! let form = CarForm::new("Toyota", "Corolla", "one owner", "120000.5", "8500", "2004");
//! let outcome = submit(&form, &mut registry);
//! assert!(outcome.is_added());
//!
//! // Bad input never reaches the registry
//! let form = CarForm::new("VW", "Golf", "", "1.0", "1", "2004");
//! assert!(matches!(submit(&form, &mut registry), Outcome::InvalidField(_)));
//! assert_eq!(registry.len(), 1);
//! # Ok::<(), carsales::CarSalesError>(())
//! ```
//!
//! ## Key Concepts
//!
//! ### Form
//!
//! A [`CarForm`] is six strings: manufacturer, model, info, kilometers,
//! price and year. [`validate_form`] turns it into a [`Car`] or names the
//! first rule that failed.
//!
//! ### Registry
//!
//! A [`CarRegistry`] groups cars by manufacturer. Each insert returns an
//! [`InsertStatus`]; capacity rejections are normal results, not errors.
//!
//! ### Outcome
//!
//! [`submit`] combines the two and returns an [`Outcome`] carrying the
//! severity, title and text a UI shows. [`AddCarPanel`] does the showing
//! through any [`FormView`].
//!
//! ## Thread Safety
//!
//! Everything is synchronous. A [`CarRegistry`] is mutated through
//! `&mut self`; put it behind a `Mutex` to share it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod types;

pub mod car;
pub mod form;
pub mod registry;
pub mod storage;

// ============================================================================
// Public API re-exports
// ============================================================================

// Configuration
pub use config::{Config, DEFAULT_MAX_CARS_PER_MANUFACTURER, DEFAULT_MAX_MANUFACTURERS};

// Error handling
pub use error::{CarSalesError, Result, StorageError, ValidationError};

// Core types
pub use types::{CarId, Timestamp};

// Domain types
pub use car::{validate_form, Car, CarForm, Field, FormError};
pub use registry::{CarCollection, CarRegistry, InsertStatus, RegistryStats};

// Form
pub use form::{submit, AddCarPanel, CapacityLimit, FormView, Outcome, PanelAction, Severity};

// Storage
pub use storage::{load_snapshot, save_snapshot, Snapshot, SNAPSHOT_VERSION};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common carsales usage.
///
/// ```rust
/// use carsales::prelude::*;
/// ```
pub mod prelude {
    pub use crate::car::{Car, CarForm, Field};
    pub use crate::config::Config;
    pub use crate::error::{CarSalesError, Result};
    pub use crate::form::{submit, Outcome, Severity};
    pub use crate::registry::{CarCollection, CarRegistry, InsertStatus};
}
