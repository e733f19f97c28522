//! The "Add a Car" form.
//!
//! [`submit`] is a pure function from form state to [`Outcome`]: it
//! validates the raw text, builds a [`Car`](crate::Car) and inserts it into
//! a [`CarCollection`]. Nothing here knows about widgets.
//! [`AddCarPanel`] is the thin adapter that renders outcomes through a
//! [`FormView`].
//!
//! ```text
//! AddCarPanel::on_action(Save)
//!     └── submit()
//!             ├── validate_form()        → Outcome::FormatError / InvalidField
//!             └── CarCollection::insert() → Outcome::Added / CapacityWarning / Failed
//! ```

pub mod outcome;
pub mod panel;

pub use outcome::{CapacityLimit, Outcome, Severity};
pub use panel::{AddCarPanel, FormView, PanelAction};

pub use crate::car::FormError;

use tracing::{debug, error, info, instrument};

use crate::car::{validate_form, CarForm};
use crate::registry::CarCollection;

/// Validates `form` and, if it passes, inserts the resulting car.
///
/// Validation stops at the first failing rule (see
/// [`validate_form`](crate::validate_form)). The collection is only touched
/// once every rule has passed.
///
/// # Example
///
/// ```rust
/// use carsales::{submit, CarForm, CarRegistry, Outcome};
///
/// let mut registry = CarRegistry::default();
/// let form = CarForm::new("Toyota", "Corolla", "", "120.5", "8500", "2004");
///
/// let outcome = submit(&form, &mut registry);
/// assert!(outcome.is_added());
/// assert_eq!(registry.len(), 1);
///
/// let bad = CarForm::new("Toyota", "Corolla", "", "lots", "8500", "2004");
/// assert_eq!(submit(&bad, &mut registry), Outcome::FormatError);
/// ```
#[instrument(skip_all, fields(manufacturer = %form.manufacturer.trim()))]
pub fn submit<C>(form: &CarForm, cars: &mut C) -> Outcome
where
    C: CarCollection + ?Sized,
{
    let car = match validate_form(form) {
        Ok(car) => car,
        Err(err) => {
            debug!(error = %err, "Form rejected");
            return err.into();
        }
    };

    let id = car.id();
    match cars.insert(car) {
        Ok(status) => {
            let outcome = Outcome::from_status(status, id);
            if outcome.is_added() {
                info!(%id, "Car added");
            }
            outcome
        }
        Err(err) => {
            error!(error = %err, "Car collection failed");
            Outcome::Failed(err.to_string())
        }
    }
}
