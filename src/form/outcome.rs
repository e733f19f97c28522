//! User-facing results of a form submission.

use serde::{Deserialize, Serialize};

use crate::car::{Field, FormError};
use crate::registry::InsertStatus;
use crate::types::CarId;

/// How a view should present an [`Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Confirmation.
    Info,
    /// Expected refusal; the form is kept for editing.
    Warning,
    /// Bad input or an unexpected failure.
    Error,
}

/// Which capacity limit refused a car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityLimit {
    /// The manufacturer already holds its maximum number of cars.
    CarsPerManufacturer,
    /// The registry already holds its maximum number of manufacturers.
    Manufacturers,
}

/// Result of submitting the car form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The car was stored under the given id.
    Added(CarId),

    /// A capacity limit refused the car.
    CapacityWarning(CapacityLimit),

    /// Kilometers, price or year is not a number.
    FormatError,

    /// A field broke its rule.
    InvalidField(Field),

    /// The car collection failed. Holds the error text for logging only.
    Failed(String),
}

const FORMAT_REQUIREMENTS: &str = "Please ensure your fields meet the following requirements:\n\
    The \"Year\" field must contain four numeric digits only\n\
    The \"Price\" field must contain a valid integer with no decimal places\n\
    The \"Km Traveled\" field must contain a number which can have a maximum of one decimal place";

impl Outcome {
    /// Maps an insert status for car `id` to an outcome.
    pub(crate) fn from_status(status: InsertStatus, id: CarId) -> Self {
        match status {
            InsertStatus::Ok => Self::Added(id),
            InsertStatus::ManufacturerCapacityReached => {
                Self::CapacityWarning(CapacityLimit::CarsPerManufacturer)
            }
            InsertStatus::ManufacturerCountCapacityReached => {
                Self::CapacityWarning(CapacityLimit::Manufacturers)
            }
        }
    }

    /// Returns true if the car was stored.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// How the view should present this outcome.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Added(_) => Severity::Info,
            Self::CapacityWarning(_) => Severity::Warning,
            Self::FormatError | Self::InvalidField(_) | Self::Failed(_) => Severity::Error,
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added(_) => "Confirmation",
            Self::CapacityWarning(_) => "Problem adding car",
            Self::FormatError | Self::InvalidField(_) => "Invalid field",
            Self::Failed(_) => "Error",
        }
    }

    /// Dialog text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added(_) => "Record added.",
            Self::CapacityWarning(CapacityLimit::CarsPerManufacturer) => {
                "The maximum amount of cars for that manufacturer has been reached.\n\
                 Unfortunately you cannot add any further cars to this manufacturer"
            }
            Self::CapacityWarning(CapacityLimit::Manufacturers) => {
                "The maximum amount of manufacturers in the car system has been reached.\n\
                 Unfortunately you cannot add any further manufacturers to this system"
            }
            Self::FormatError => FORMAT_REQUIREMENTS,
            Self::InvalidField(field) => invalid_field_message(*field),
            Self::Failed(_) => "An unknown error has occurred.",
        }
    }

    /// Returns true if the view should clear the form afterwards.
    ///
    /// Only a stored car clears the form; every other outcome keeps the
    /// input so the user can fix it.
    pub fn clears_form(&self) -> bool {
        self.is_added()
    }
}

impl From<FormError> for Outcome {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Parse(_) => Self::FormatError,
            FormError::InvalidField(field) => Self::InvalidField(field),
        }
    }
}

fn invalid_field_message(field: Field) -> &'static str {
    match field {
        Field::Manufacturer => {
            "An error has occurred due to incorrect \"Manufacturer\" text field data.\n\
             This text field must contain a word of at least three characters."
        }
        Field::Model => {
            "An error has occurred due to incorrect \"Model\" text field data.\n\
             This text field must contain a word of at least three characters."
        }
        Field::Year => {
            "An error has occurred due to incorrect \"Year\" text field data.\n\
             This text field must be in the form, YYYY. ie, 2007."
        }
        Field::Kilometers => {
            "An error has occurred due to incorrect \"Km Traveled\" text field data.\n\
             This text field must contain a non-negative number with one decimal place only."
        }
        Field::Price => {
            "An error has occurred due to incorrect \"Price\" text field data.\n\
             This text field must contain a non-negative whole number."
        }
        Field::Info => "An error has occurred due to incorrect \"Info\" text field data.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let id = CarId::new();
        assert_eq!(Outcome::from_status(InsertStatus::Ok, id), Outcome::Added(id));
        assert_eq!(
            Outcome::from_status(InsertStatus::ManufacturerCapacityReached, id),
            Outcome::CapacityWarning(CapacityLimit::CarsPerManufacturer)
        );
        assert_eq!(
            Outcome::from_status(InsertStatus::ManufacturerCountCapacityReached, id),
            Outcome::CapacityWarning(CapacityLimit::Manufacturers)
        );
    }

    #[test]
    fn test_form_error_mapping() {
        assert_eq!(
            Outcome::from(FormError::Parse(Field::Price)),
            Outcome::FormatError
        );
        assert_eq!(
            Outcome::from(FormError::InvalidField(Field::Model)),
            Outcome::InvalidField(Field::Model)
        );
    }

    #[test]
    fn test_severity() {
        assert_eq!(Outcome::Added(CarId::nil()).severity(), Severity::Info);
        assert_eq!(
            Outcome::CapacityWarning(CapacityLimit::Manufacturers).severity(),
            Severity::Warning
        );
        assert_eq!(Outcome::FormatError.severity(), Severity::Error);
        assert_eq!(
            Outcome::InvalidField(Field::Year).severity(),
            Severity::Error
        );
        assert_eq!(Outcome::Failed("boom".into()).severity(), Severity::Error);
    }

    #[test]
    fn test_only_added_clears_form() {
        assert!(Outcome::Added(CarId::nil()).clears_form());
        assert!(!Outcome::CapacityWarning(CapacityLimit::CarsPerManufacturer).clears_form());
        assert!(!Outcome::FormatError.clears_form());
        assert!(!Outcome::InvalidField(Field::Manufacturer).clears_form());
        assert!(!Outcome::Failed(String::new()).clears_form());
    }

    #[test]
    fn test_messages_name_the_field() {
        for (field, label) in [
            (Field::Manufacturer, "\"Manufacturer\""),
            (Field::Model, "\"Model\""),
            (Field::Year, "\"Year\""),
            (Field::Kilometers, "\"Km Traveled\""),
            (Field::Price, "\"Price\""),
        ] {
            let msg = Outcome::InvalidField(field).message();
            assert!(msg.contains(label), "{}", msg);
        }
    }

    #[test]
    fn test_failed_message_is_generic() {
        let outcome = Outcome::Failed("disk on fire".into());
        assert_eq!(outcome.message(), "An unknown error has occurred.");
        assert_eq!(outcome.title(), "Error");
    }

    #[test]
    fn test_format_message_lists_numeric_fields() {
        let msg = Outcome::FormatError.message();
        assert!(msg.contains("\"Year\""));
        assert!(msg.contains("\"Price\""));
        assert!(msg.contains("\"Km Traveled\""));
    }
}
