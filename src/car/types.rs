//! Type definitions for car records and the raw form that produces them.
//!
//! # Type Flow
//!
//! ```text
//! CarForm (six raw strings, as typed)
//!     ↓ validate_form()
//! Car (parsed, validated, immutable)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CarId, Timestamp};

// ============================================================================
// Field
// ============================================================================

/// One of the six input fields of the car form.
///
/// Used to name the field that failed validation and to tell the view
/// which input should receive focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Manufacturer name, e.g. "Toyota".
    Manufacturer,
    /// Model name, e.g. "Corolla".
    Model,
    /// Free-form notes.
    Info,
    /// Distance travelled, one decimal place.
    Kilometers,
    /// Asking price, whole currency units.
    Price,
    /// Model year, four digits.
    Year,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Manufacturer,
        Field::Model,
        Field::Info,
        Field::Kilometers,
        Field::Price,
        Field::Year,
    ];

    /// Stable lowercase name, used in logs and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::Info => "info",
            Self::Kilometers => "kilometers",
            Self::Price => "price",
            Self::Year => "year",
        }
    }

    /// Label shown next to the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Manufacturer => "Manufacturer",
            Self::Model => "Model",
            Self::Info => "Info",
            Self::Kilometers => "Km Traveled",
            Self::Price => "Price",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CarForm — raw input
// ============================================================================

/// Raw text of the car form, exactly as typed.
///
/// Nothing is parsed or trimmed here; [`validate_form`](crate::validate_form)
/// does both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarForm {
    /// Manufacturer text.
    pub manufacturer: String,
    /// Model text.
    pub model: String,
    /// Free-form info text.
    pub info: String,
    /// Kilometers text.
    pub kilometers: String,
    /// Price text.
    pub price: String,
    /// Year text.
    pub year: String,
}

impl CarForm {
    /// Creates a form with all six fields filled in.
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        info: impl Into<String>,
        kilometers: impl Into<String>,
        price: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            info: info.into(),
            kilometers: kilometers.into(),
            price: price.into(),
            year: year.into(),
        }
    }

    /// Returns the raw text of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Manufacturer => &self.manufacturer,
            Field::Model => &self.model,
            Field::Info => &self.info,
            Field::Kilometers => &self.kilometers,
            Field::Price => &self.price,
            Field::Year => &self.year,
        }
    }

    /// Replaces the raw text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Manufacturer => &mut self.manufacturer,
            Field::Model => &mut self.model,
            Field::Info => &mut self.info,
            Field::Kilometers => &mut self.kilometers,
            Field::Price => &mut self.price,
            Field::Year => &mut self.year,
        };
        *slot = value.into();
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if every field is empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// ============================================================================
// Car — validated record
// ============================================================================

/// A validated car-sale record.
///
/// Cars are created only through [`validate_form`](crate::validate_form)
/// (or [`Car::from_form`]) and have no setters. The id and `added_at`
/// timestamp are assigned at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    id: CarId,
    manufacturer: String,
    model: String,
    info: String,
    kilometers: f64,
    price: i64,
    year: i32,
    added_at: Timestamp,
}

impl Car {
    /// Only called once every rule has passed.
    pub(crate) fn new(
        manufacturer: String,
        model: String,
        info: String,
        kilometers: f64,
        price: i64,
        year: i32,
    ) -> Self {
        Self {
            id: CarId::new(),
            manufacturer,
            model,
            info,
            kilometers,
            price,
            year,
            added_at: Timestamp::now(),
        }
    }

    /// Validates a form and builds a car from it.
    ///
    /// Equivalent to [`validate_form`](crate::validate_form).
    pub fn from_form(form: &CarForm) -> Result<Self, crate::car::FormError> {
        crate::car::validate_form(form)
    }

    /// Unique id of this car.
    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Manufacturer name (trimmed); also the registry key.
    #[inline]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Model name (trimmed).
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Free-form info (trimmed, may be empty).
    #[inline]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Kilometers travelled.
    #[inline]
    pub fn kilometers(&self) -> f64 {
        self.kilometers
    }

    /// Asking price.
    #[inline]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Model year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// When the car was accepted.
    #[inline]
    pub fn added_at(&self) -> Timestamp {
        self.added_at
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}), {:.1} km, ${}",
            self.manufacturer, self.model, self.year, self.kilometers, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car::new(
            "Toyota".into(),
            "Corolla".into(),
            "one owner".into(),
            120_000.5,
            8_500,
            2004,
        )
    }

    #[test]
    fn test_car_new_assigns_id() {
        let a = corolla();
        let b = corolla();
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), CarId::nil());
    }

    #[test]
    fn test_car_accessors() {
        let car = corolla();
        assert_eq!(car.manufacturer(), "Toyota");
        assert_eq!(car.model(), "Corolla");
        assert_eq!(car.info(), "one owner");
        assert_eq!(car.kilometers(), 120_000.5);
        assert_eq!(car.price(), 8_500);
        assert_eq!(car.year(), 2004);
        assert!(car.added_at().as_millis() > 0);
    }

    #[test]
    fn test_car_display() {
        assert_eq!(
            corolla().to_string(),
            "Toyota Corolla (2004), 120000.5 km, $8500"
        );
    }

    #[test]
    fn test_car_json_roundtrip() {
        let car = corolla();
        let json = serde_json::to_string(&car).unwrap();
        let restored: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(car, restored);
    }

    #[test]
    fn test_form_get_set() {
        let mut form = CarForm::default();
        assert!(form.is_blank());
        for field in Field::ALL {
            form.set(field, field.as_str());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.as_str());
        }
        assert!(!form.is_blank());
    }

    #[test]
    fn test_form_clear() {
        let mut form = CarForm::new("Toyota", "Corolla", "info", "1.0", "2", "2000");
        form.clear();
        assert!(form.is_blank());
        assert_eq!(form, CarForm::default());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Kilometers.to_string(), "kilometers");
        assert_eq!(Field::Kilometers.label(), "Km Traveled");
        assert_eq!(Field::ALL[0], Field::Manufacturer);
    }
}
