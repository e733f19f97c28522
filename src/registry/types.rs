//! Status and statistics types for the car registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a single insert attempt.
///
/// Capacity rejections are expected business outcomes, not errors: the
/// registry is unchanged and the caller shows a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertStatus {
    /// The car was stored.
    Ok,
    /// The car's manufacturer already holds `max_cars_per_manufacturer` cars.
    ManufacturerCapacityReached,
    /// The car's manufacturer is new and the registry already holds
    /// `max_manufacturers` manufacturers.
    ManufacturerCountCapacityReached,
}

impl InsertStatus {
    /// Returns true if the car was stored.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns true if a capacity limit rejected the car.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for InsertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::ManufacturerCapacityReached => "manufacturer capacity reached",
            Self::ManufacturerCountCapacityReached => "manufacturer count capacity reached",
        })
    }
}

/// Point-in-time counts for a registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Cars across all manufacturers.
    pub car_count: usize,

    /// Distinct manufacturers.
    pub manufacturer_count: usize,

    /// Manufacturers holding `max_cars_per_manufacturer` cars.
    pub full_manufacturers: usize,
}
