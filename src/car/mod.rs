//! Car records and form validation.
//!
//! A **car** is the single record type: manufacturer, model, info,
//! kilometers, price and year. Cars are only ever built from a validated
//! [`CarForm`].
//!
//! # Example
//!
//! ```rust
//! use carsales::car::{validate_form, CarForm, Field, FormError};
//!
//! let form = CarForm::new("Toyota", "Corolla", "", "120.5", "8500", "2004");
//! let car = validate_form(&form).unwrap();
//! assert_eq!(car.manufacturer(), "Toyota");
//!
//! let form = CarForm::new("VW", "Golf", "", "120.5", "8500", "2004");
//! assert_eq!(
//!     validate_form(&form).unwrap_err(),
//!     FormError::InvalidField(Field::Manufacturer)
//! );
//! ```

pub mod types;
pub mod validation;

pub use types::{Car, CarForm, Field};
pub use validation::{
    is_valid_kilometers, is_valid_name, is_valid_year, validate_form, FormError,
    MIN_TOKEN_EXCLUSIVE, YEAR_RANGE,
};

pub(crate) use validation::validate_car;
