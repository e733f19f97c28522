//! Input validation for the car form.
//!
//! Turns a raw [`CarForm`] into a [`Car`], or reports the first rule that
//! failed. Rules run in a fixed order and stop at the first failure:
//!
//! ```text
//! validate_form()
//!     ├── parse kilometers / price / year   → FormError::Parse
//!     ├── manufacturer, model token rule    → FormError::InvalidField
//!     ├── year range                        → FormError::InvalidField
//!     ├── kilometers fraction not numeric   → FormError::Parse
//!     ├── kilometers decimal places         → FormError::InvalidField
//!     ├── kilometers / price non-negative   → FormError::InvalidField
//!     └── Car::new()                        ← only reached if valid
//! ```
//!
//! The individual rules are public so a view can check a field as it is
//! typed.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::car::types::{Car, CarForm, Field};
use crate::error::ValidationError;

/// A manufacturer or model needs at least one word longer than this.
pub const MIN_TOKEN_EXCLUSIVE: usize = 2;

/// Accepted model years (four digits).
pub const YEAR_RANGE: RangeInclusive<i32> = 1000..=9999;

/// Why a form was rejected.
///
/// Both variants are recovered locally by letting the user edit the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// A numeric field (kilometers, price or year) is not a number.
    ///
    /// Also raised for kilometers whose text after the `.` is not plain
    /// digits, such as `1.5e3`. The user-facing message is the same for all
    /// three fields.
    #[error("field '{0}' is not a valid number")]
    Parse(Field),

    /// A field parsed but broke its rule.
    #[error("field '{0}' is invalid")]
    InvalidField(Field),
}

impl FormError {
    /// The field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::Parse(field) | Self::InvalidField(field) => *field,
        }
    }

    /// Returns true for a parse failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Validates a [`CarForm`] and builds a [`Car`].
///
/// Every field is trimmed first.
///
/// # Rules
///
/// | Field | Constraint |
/// |-------|------------|
/// | `kilometers` | Finite decimal, at most one significant fractional digit, not negative |
/// | `price` | Integer, not negative |
/// | `year` | Integer in 1000–9999 |
/// | `manufacturer` | At least one whitespace-separated word of 3+ chars |
/// | `model` | Same as `manufacturer` |
/// | `info` | Anything |
pub fn validate_form(form: &CarForm) -> Result<Car, FormError> {
    let manufacturer = form.manufacturer.trim();
    let model = form.model.trim();
    let info = form.info.trim();
    let km_text = form.kilometers.trim();

    // Numbers first: a non-numeric field hides every other problem
    let kilometers = parse_kilometers(km_text).ok_or(FormError::Parse(Field::Kilometers))?;
    let price: i64 = form
        .price
        .trim()
        .parse()
        .map_err(|_| FormError::Parse(Field::Price))?;
    let year: i32 = form
        .year
        .trim()
        .parse()
        .map_err(|_| FormError::Parse(Field::Year))?;

    if !is_valid_name(manufacturer) {
        return Err(FormError::InvalidField(Field::Manufacturer));
    }

    if !is_valid_name(model) {
        return Err(FormError::InvalidField(Field::Model));
    }

    if !is_valid_year(year) {
        return Err(FormError::InvalidField(Field::Year));
    }

    if has_non_digit_fraction(km_text) {
        return Err(FormError::Parse(Field::Kilometers));
    }

    if !is_valid_kilometers(km_text) || kilometers < 0.0 {
        return Err(FormError::InvalidField(Field::Kilometers));
    }

    if price < 0 {
        return Err(FormError::InvalidField(Field::Price));
    }

    Ok(Car::new(
        manufacturer.to_owned(),
        model.to_owned(),
        info.to_owned(),
        kilometers,
        price,
        year,
    ))
}

/// Parses kilometers text, rejecting `inf` and `NaN`.
fn parse_kilometers(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|km| km.is_finite())
}

/// Returns true if the text after the first `.` has more than one char and
/// is not all digits. Exponent forms like `1.5e3` parse as a number but
/// their fraction can't be read as a whole number.
fn has_non_digit_fraction(text: &str) -> bool {
    text.split_once('.').is_some_and(|(_, fraction)| {
        fraction.chars().count() > 1 && !fraction.chars().all(|c| c.is_ascii_digit())
    })
}

/// Returns true if `text` has a whitespace-separated word longer than
/// [`MIN_TOKEN_EXCLUSIVE`] chars.
///
/// ```rust
/// use carsales::car::is_valid_name;
///
/// assert!(!is_valid_name("VW"));
/// assert!(is_valid_name("Volkswagen"));
/// assert!(is_valid_name("AB CD EFG"));
/// ```
pub fn is_valid_name(text: &str) -> bool {
    text.split_whitespace()
        .any(|token| token.chars().count() > MIN_TOKEN_EXCLUSIVE)
}

/// Returns true if `year` is a four-digit year.
pub fn is_valid_year(year: i32) -> bool {
    YEAR_RANGE.contains(&year)
}

/// Returns true if kilometers text has at most one significant decimal place.
///
/// Only the text after the first `.` is inspected: its first character may
/// be anything, every later character must be `'0'`. Text without a `.` is
/// always accepted. Numeric parsing is a separate step.
///
/// ```rust
/// use carsales::car::is_valid_kilometers;
///
/// assert!(is_valid_kilometers("120"));
/// assert!(is_valid_kilometers("120.5"));
/// assert!(is_valid_kilometers("120.50"));
/// assert!(!is_valid_kilometers("120.05"));
/// ```
pub fn is_valid_kilometers(text: &str) -> bool {
    match text.split_once('.') {
        None => true,
        Some((_, fraction)) => fraction.chars().skip(1).all(|c| c == '0'),
    }
}

/// Re-checks a stored [`Car`] against the form rules.
///
/// Used when cars come from somewhere other than [`validate_form`], such as
/// a snapshot file edited by hand. The kilometers decimal-place rule is not
/// checked: it applies to typed text, and `1e-2` is accepted by the form
/// but stored as `0.01`.
pub(crate) fn validate_car(car: &Car) -> Result<(), ValidationError> {
    if !is_valid_name(car.manufacturer()) {
        return Err(ValidationError::invalid_field(
            Field::Manufacturer.as_str(),
            format!("'{}' has no word of 3+ chars", car.manufacturer()),
        ));
    }

    if !is_valid_name(car.model()) {
        return Err(ValidationError::invalid_field(
            Field::Model.as_str(),
            format!("'{}' has no word of 3+ chars", car.model()),
        ));
    }

    if !is_valid_year(car.year()) {
        return Err(ValidationError::invalid_field(
            Field::Year.as_str(),
            format!("must be between 1000 and 9999, got {}", car.year()),
        ));
    }

    let km = car.kilometers();
    if !km.is_finite() || km < 0.0 {
        return Err(ValidationError::invalid_field(
            Field::Kilometers.as_str(),
            format!("must be a non-negative number, got {}", km),
        ));
    }

    if car.price() < 0 {
        return Err(ValidationError::invalid_field(
            Field::Price.as_str(),
            format!("must be non-negative, got {}", car.price()),
        ));
    }

    Ok(())
}
