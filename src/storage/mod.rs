//! JSON snapshots of a car registry.
//!
//! A snapshot holds a registry's [`Config`] and every stored [`Car`], so a
//! host application can keep its records between sessions:
//!
//! ```json
//! {
//!   "version": 1,
//!   "config": { "max_cars_per_manufacturer": 20, "max_manufacturers": 20 },
//!   "cars": [ { "id": "…", "manufacturer": "Toyota", … } ]
//! }
//! ```
//!
//! Loading rebuilds the registry through [`CarRegistry::insert`], so a file
//! edited by hand cannot get past the field rules or the capacity limits.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::car::{validate_car, Car};
use crate::config::Config;
use crate::error::{Result, StorageError, ValidationError};
use crate::registry::{CarRegistry, InsertStatus};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a [`CarRegistry`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version, see [`SNAPSHOT_VERSION`].
    pub version: u32,

    /// Capacity limits of the saved registry.
    pub config: Config,

    /// Cars grouped by manufacturer in sorted order, insertion order within
    /// each manufacturer.
    pub cars: Vec<Car>,
}

impl Snapshot {
    /// Captures the current contents of a registry.
    pub fn from_registry(registry: &CarRegistry) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            config: *registry.config(),
            cars: registry.iter().cloned().collect(),
        }
    }

    /// Rebuilds a registry from this snapshot.
    ///
    /// # Errors
    ///
    /// - [`StorageError::VersionMismatch`] for a snapshot from another format version
    /// - A validation error for an invalid config, a car that breaks a field
    ///   rule, or a repeated car id
    /// - [`StorageError::CapacityExceeded`] if the cars don't fit the config
    pub fn into_registry(self) -> Result<CarRegistry> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            }
            .into());
        }

        let mut registry = CarRegistry::new(self.config)?;
        let mut seen = HashSet::with_capacity(self.cars.len());

        for car in self.cars {
            validate_car(&car)?;

            if !seen.insert(car.id()) {
                return Err(ValidationError::invalid_field(
                    "id",
                    format!("car id {} appears more than once", car.id()),
                )
                .into());
            }

            let manufacturer = car.manufacturer().to_owned();
            if registry.insert(car) != InsertStatus::Ok {
                return Err(StorageError::capacity_exceeded(manufacturer).into());
            }
        }

        Ok(registry)
    }
}

/// Writes a registry to `path` as pretty-printed JSON.
///
/// The file is written next to `path` first and then renamed over it, so a
/// crash mid-write leaves the previous snapshot intact.
#[instrument(skip_all, fields(path = %path.as_ref().display(), cars = registry.len()))]
pub fn save_snapshot(registry: &CarRegistry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&Snapshot::from_registry(registry))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!("Snapshot saved");
    Ok(())
}

/// Reads a registry back from a snapshot file.
///
/// # Errors
///
/// I/O and JSON errors, plus everything [`Snapshot::into_registry`] rejects.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<CarRegistry> {
    let json = fs::read_to_string(path.as_ref())?;
    let snapshot: Snapshot = serde_json::from_str(&json)?;
    debug!(
        version = snapshot.version,
        cars = snapshot.cars.len(),
        "Snapshot parsed"
    );

    let registry = snapshot.into_registry()?;
    info!(
        cars = registry.len(),
        manufacturers = registry.manufacturer_count(),
        "Snapshot loaded"
    );
    Ok(registry)
}
