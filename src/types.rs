//! Core type definitions for car identifiers and timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Car identifier (UUID v7 for time-ordering).
///
/// Every car accepted by the form gets a fresh id, so two cars with
/// identical details are still distinct records.
///
/// # Example
/// ```
/// use carsales::CarId;
///
/// let id = CarId::new();
/// println!("Created car: {}", id);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarId(pub Uuid);

impl CarId {
    /// Creates a new CarId with a UUID v7 (time-ordered).
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a nil (all zeros) CarId.
    /// Useful for testing or sentinel values.
    #[inline]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Returns the raw UUID bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for CarId {
    /// Returns a nil (all zeros) CarId.
    ///
    /// For a new unique ID, use [`CarId::new()`].
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// If the system clock is before the Unix epoch, returns a timestamp of
    /// 0 (epoch) rather than panicking.
    #[inline]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(duration.as_millis() as i64)
    }

    /// Creates a timestamp from Unix milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_id_new_is_unique() {
        let id1 = CarId::new();
        let id2 = CarId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_car_id_nil() {
        let id = CarId::nil();
        assert_eq!(id.0, Uuid::nil());
        assert_eq!(CarId::default(), id);
        assert_eq!(id.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_car_id_v7_is_time_ordered() {
        let id1 = CarId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = CarId::new();
        assert!(id1.as_bytes() < id2.as_bytes());
    }

    #[test]
    fn test_car_id_json_serialization() {
        let id = CarId::new();
        let json = serde_json::to_string(&id).unwrap();
        let restored: CarId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn test_timestamp_now_is_positive() {
        assert!(Timestamp::now().as_millis() > 0);
    }

    #[test]
    fn test_timestamp_ordering() {
        let a = Timestamp::from_millis(1_000);
        let b = Timestamp::from_millis(2_000);
        assert!(a < b);
        assert_eq!(b.to_string(), "2000");
    }
}
