//! Adapter between the form logic and a concrete UI.
//!
//! The panel owns the form text and a [`FormView`]. Button presses come in
//! as [`PanelAction`]s; the panel runs [`submit`](super::submit) and tells the
//! view what to show. Every call into the view goes through here.

use crate::car::{CarForm, Field};
use crate::form::outcome::{Outcome, Severity};
use crate::form::submit;
use crate::registry::CarCollection;

/// What a UI must be able to do for the car form.
pub trait FormView {
    /// Shows a modal message.
    fn show_message(&mut self, severity: Severity, title: &str, message: &str);

    /// Empties every input.
    fn clear_fields(&mut self);

    /// Moves keyboard focus to an input.
    fn focus(&mut self, field: Field);
}

/// A button on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// Submit the form.
    Save,
    /// Clear the form.
    Reset,
}

/// The "Add a Car" panel.
#[derive(Debug)]
pub struct AddCarPanel<V> {
    form: CarForm,
    view: V,
}

impl<V: FormView> AddCarPanel<V> {
    /// Heading shown above the form.
    pub const HEADING: &'static str = "Add a Car";

    /// Creates a panel with an empty form.
    pub fn new(view: V) -> Self {
        Self {
            form: CarForm::default(),
            view,
        }
    }

    /// Current form text.
    pub fn form(&self) -> &CarForm {
        &self.form
    }

    /// Updates one input, as the view does on each edit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// The view this panel drives.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the panel, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Handles a button press.
    ///
    /// `Save` returns the submission outcome; `Reset` returns `None`.
    pub fn on_action<C>(&mut self, action: PanelAction, cars: &mut C) -> Option<Outcome>
    where
        C: CarCollection + ?Sized,
    {
        match action {
            PanelAction::Save => Some(self.save(cars)),
            PanelAction::Reset => {
                self.reset();
                None
            }
        }
    }

    fn save<C>(&mut self, cars: &mut C) -> Outcome
    where
        C: CarCollection + ?Sized,
    {
        let outcome = submit(&self.form, cars);
        self.view
            .show_message(outcome.severity(), outcome.title(), outcome.message());

        if outcome.clears_form() {
            self.reset();
            self.view.focus(Field::Manufacturer);
        }

        outcome
    }

    fn reset(&mut self) {
        self.form.clear();
        self.view.clear_fields();
    }
}
