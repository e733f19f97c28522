//! Capacity-limited car registry.
//!
//! The registry groups cars by manufacturer and enforces two limits from
//! [`Config`]:
//! - at most `max_cars_per_manufacturer` cars under one manufacturer
//! - at most `max_manufacturers` distinct manufacturers
//!
//! An insert that would break either limit returns a rejection status and
//! leaves the registry untouched.
//!
//! # Example
//!
//! ```rust
//! use carsales::{Car, CarForm, CarRegistry, Config, InsertStatus};
//!
//! let mut registry = CarRegistry::new(Config::with_limits(1, 1)).unwrap();
//! let corolla = Car::from_form(&CarForm::new("Toyota", "Corolla", "", "1.0", "1", "2004")).unwrap();
//! let yaris = Car::from_form(&CarForm::new("Toyota", "Yaris", "", "1.0", "1", "2010")).unwrap();
//!
//! assert_eq!(registry.insert(corolla), InsertStatus::Ok);
//! assert_eq!(
//!     registry.insert(yaris),
//!     InsertStatus::ManufacturerCapacityReached
//! );
//! assert_eq!(registry.len(), 1);
//! ```

pub mod types;

pub use types::{InsertStatus, RegistryStats};

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use crate::car::Car;
use crate::config::Config;
use crate::error::{CarSalesError, Result};
use crate::types::CarId;

/// Something cars can be inserted into.
///
/// The form controller only needs this one operation, so hosts can put
/// their own store behind the form. An `Err` is reported to the user as a
/// generic failure.
pub trait CarCollection {
    /// Attempts to store `car`, reporting whether a capacity limit refused it.
    fn insert(&mut self, car: Car) -> Result<InsertStatus>;
}

/// In-memory registry of cars grouped by manufacturer.
///
/// Manufacturers are keyed by their exact (trimmed) name and iterate in
/// sorted order. Cars under a manufacturer keep insertion order.
///
/// The registry is a plain owned value. Mutation takes `&mut self`; wrap it
/// in a `Mutex` to share it between threads.
#[derive(Clone, Debug)]
pub struct CarRegistry {
    config: Config,
    by_manufacturer: BTreeMap<String, Vec<Car>>,
    len: usize,
}

impl Default for CarRegistry {
    fn default() -> Self {
        Self {
            config: Config::default(),
            by_manufacturer: BTreeMap::new(),
            len: 0,
        }
    }
}

impl CarRegistry {
    /// Creates an empty registry with the given capacity limits.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the config is invalid (see
    /// [`Config::validate`]).
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(CarSalesError::from)?;

        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Returns the capacity limits this registry enforces.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attempts to store a car.
    ///
    /// - Existing manufacturer at its cap: [`InsertStatus::ManufacturerCapacityReached`]
    /// - New manufacturer with the manufacturer cap reached:
    ///   [`InsertStatus::ManufacturerCountCapacityReached`]
    /// - Otherwise the car is appended and [`InsertStatus::Ok`] is returned
    ///
    /// Rejections leave the registry unchanged.
    #[instrument(skip(self, car), fields(manufacturer = %car.manufacturer(), id = %car.id()))]
    pub fn insert(&mut self, car: Car) -> InsertStatus {
        match self.by_manufacturer.get_mut(car.manufacturer()) {
            Some(cars) => {
                if cars.len() >= self.config.max_cars_per_manufacturer {
                    warn!(
                        count = cars.len(),
                        max = self.config.max_cars_per_manufacturer,
                        "Manufacturer is full, car rejected"
                    );
                    return InsertStatus::ManufacturerCapacityReached;
                }
                cars.push(car);
            }
            None => {
                if self.by_manufacturer.len() >= self.config.max_manufacturers {
                    warn!(
                        manufacturers = self.by_manufacturer.len(),
                        max = self.config.max_manufacturers,
                        "Manufacturer limit reached, car rejected"
                    );
                    return InsertStatus::ManufacturerCountCapacityReached;
                }
                self.by_manufacturer
                    .insert(car.manufacturer().to_owned(), vec![car]);
            }
        }

        self.len += 1;
        debug!(total = self.len, "Car stored");
        InsertStatus::Ok
    }

    /// Number of cars across all manufacturers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no cars are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct manufacturers.
    #[inline]
    pub fn manufacturer_count(&self) -> usize {
        self.by_manufacturer.len()
    }

    /// Manufacturer names in sorted order.
    pub fn manufacturers(&self) -> impl Iterator<Item = &str> {
        self.by_manufacturer.keys().map(String::as_str)
    }

    /// Cars stored under `manufacturer`, in insertion order.
    ///
    /// Returns an empty slice for an unknown manufacturer.
    pub fn cars_by(&self, manufacturer: &str) -> &[Car] {
        self.by_manufacturer
            .get(manufacturer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up a car by id.
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.iter().find(|car| car.id() == id)
    }

    /// All cars, grouped by manufacturer in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.by_manufacturer.values().flatten()
    }

    /// How many more cars `manufacturer` can take.
    ///
    /// For an unknown manufacturer this is the full per-manufacturer limit,
    /// or zero if no new manufacturers can be added.
    pub fn remaining_capacity(&self, manufacturer: &str) -> usize {
        match self.by_manufacturer.get(manufacturer) {
            Some(cars) => self
                .config
                .max_cars_per_manufacturer
                .saturating_sub(cars.len()),
            None if self.by_manufacturer.len() >= self.config.max_manufacturers => 0,
            None => self.config.max_cars_per_manufacturer,
        }
    }

    /// Current counts.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            car_count: self.len,
            manufacturer_count: self.by_manufacturer.len(),
            full_manufacturers: self
                .by_manufacturer
                .values()
                .filter(|cars| cars.len() >= self.config.max_cars_per_manufacturer)
                .count(),
        }
    }
}

impl CarCollection for CarRegistry {
    fn insert(&mut self, car: Car) -> Result<InsertStatus> {
        Ok(CarRegistry::insert(self, car))
    }
}
