//! Integration tests for form submission and the panel adapter.
//!
//! Tests the full stack: AddCarPanel → submit → validate_form → CarRegistry.

use carsales::{
    submit, AddCarPanel, CapacityLimit, CarForm, CarRegistry, Config, Field, FormView, Outcome,
    PanelAction, Severity,
};

/// Everything the panel asked the view to do, in order.
#[derive(Debug, Clone, PartialEq)]
enum ViewCall {
    Message(Severity, String),
    Clear,
    Focus(Field),
}

#[derive(Debug, Default)]
struct RecordingView {
    calls: Vec<ViewCall>,
}

impl FormView for RecordingView {
    fn show_message(&mut self, severity: Severity, title: &str, _message: &str) {
        self.calls.push(ViewCall::Message(severity, title.to_string()));
    }

    fn clear_fields(&mut self) {
        self.calls.push(ViewCall::Clear);
    }

    fn focus(&mut self, field: Field) {
        self.calls.push(ViewCall::Focus(field));
    }
}

fn fill(panel: &mut AddCarPanel<RecordingView>, values: [&str; 6]) {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        panel.set_field(field, value);
    }
}

fn form(values: [&str; 6]) -> CarForm {
    let [manufacturer, model, info, km, price, year] = values;
    CarForm::new(manufacturer, model, info, km, price, year)
}

const COROLLA: [&str; 6] = ["Toyota", "Corolla", "one owner", "120.5", "8500", "2004"];

// ============================================================================
// submit
// ============================================================================

#[test]
fn test_submit_examples() {
    let cases: [([&str; 6], Outcome); 6] = [
        (["VW", "Golf", "", "1.0", "1", "2004"], Outcome::InvalidField(Field::Manufacturer)),
        (["Toyota", "A4", "", "1.0", "1", "2004"], Outcome::InvalidField(Field::Model)),
        (["Toyota", "Corolla", "", "1.0", "1", "999"], Outcome::InvalidField(Field::Year)),
        (["Toyota", "Corolla", "", "1.0", "1", "10000"], Outcome::InvalidField(Field::Year)),
        (["Toyota", "Corolla", "", "120.05", "1", "2004"], Outcome::InvalidField(Field::Kilometers)),
        (["Toyota", "Corolla", "", "120.5a", "1", "2004"], Outcome::FormatError),
    ];

    let mut registry = CarRegistry::default();
    for (values, expected) in cases {
        assert_eq!(submit(&form(values), &mut registry), expected, "{:?}", values);
    }
    assert!(registry.is_empty());
}

#[test]
fn test_submit_accepts_boundary_values() {
    let mut registry = CarRegistry::default();
    for values in [
        ["Volkswagen", "Golf GTI", "", "120", "0", "1000"],
        ["AB CD EFG", "Corolla", "", "120.50", "1", "9999"],
        ["Toyota", "Corolla", "", "3.000", "1", "2004"],
    ] {
        assert!(submit(&form(values), &mut registry).is_added(), "{:?}", values);
    }
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_submit_stores_trimmed_values() {
    let mut registry = CarRegistry::default();
    let outcome = submit(
        &form(["  Toyota  ", " Corolla ", " note ", " 7.0 ", " 10 ", " 2001 "]),
        &mut registry,
    );
    let Outcome::Added(id) = outcome else {
        panic!("expected Added, got {:?}", outcome);
    };
    let car = registry.get(id).unwrap();
    assert_eq!(car.manufacturer(), "Toyota");
    assert_eq!(car.info(), "note");
    assert_eq!(registry.cars_by("Toyota").len(), 1);
}

// ============================================================================
// AddCarPanel
// ============================================================================

#[test]
fn test_save_success_clears_and_focuses_manufacturer() {
    let mut registry = CarRegistry::default();
    let mut panel = AddCarPanel::new(RecordingView::default());
    fill(&mut panel, COROLLA);

    let outcome = panel.on_action(PanelAction::Save, &mut registry).unwrap();
    assert!(outcome.is_added());
    assert!(panel.form().is_blank());
    assert_eq!(registry.len(), 1);

    assert_eq!(
        panel.view().calls,
        [
            ViewCall::Message(Severity::Info, "Confirmation".into()),
            ViewCall::Clear,
            ViewCall::Focus(Field::Manufacturer),
        ]
    );
}

#[test]
fn test_save_invalid_keeps_form() {
    let mut registry = CarRegistry::default();
    let mut panel = AddCarPanel::new(RecordingView::default());
    fill(&mut panel, COROLLA);
    panel.set_field(Field::Year, "07");

    let outcome = panel.on_action(PanelAction::Save, &mut registry).unwrap();
    assert_eq!(outcome, Outcome::InvalidField(Field::Year));
    assert_eq!(panel.form().year, "07");
    assert_eq!(panel.form().manufacturer, "Toyota");
    assert!(registry.is_empty());

    assert_eq!(
        panel.view().calls,
        [ViewCall::Message(Severity::Error, "Invalid field".into())]
    );
}

#[test]
fn test_save_capacity_warning_keeps_form() {
    let mut registry = CarRegistry::new(Config::with_limits(1, 5)).unwrap();
    let mut panel = AddCarPanel::new(RecordingView::default());

    fill(&mut panel, COROLLA);
    panel.on_action(PanelAction::Save, &mut registry);

    fill(&mut panel, COROLLA);
    let outcome = panel.on_action(PanelAction::Save, &mut registry).unwrap();
    assert_eq!(
        outcome,
        Outcome::CapacityWarning(CapacityLimit::CarsPerManufacturer)
    );
    assert_eq!(panel.form(), &form(COROLLA));

    let last = panel.into_view().calls.pop().unwrap();
    assert_eq!(
        last,
        ViewCall::Message(Severity::Warning, "Problem adding car".into())
    );
}

#[test]
fn test_reset_only_clears() {
    let mut registry = CarRegistry::default();
    let mut panel = AddCarPanel::new(RecordingView::default());
    fill(&mut panel, COROLLA);

    assert!(panel.on_action(PanelAction::Reset, &mut registry).is_none());
    assert!(panel.form().is_blank());
    assert!(registry.is_empty());
    assert_eq!(panel.view().calls, [ViewCall::Clear]);
}
