#![no_main]

use carsales::{submit, CarForm, CarRegistry, Config};
use libfuzzer_sys::fuzz_target;

// Splits the input on '\n' into the six form fields and submits them to a
// tiny registry. Any panic is a bug.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\n');
    let mut next = || parts.next().unwrap_or_default().to_string();
    let form = CarForm::new(next(), next(), next(), next(), next(), next());

    let Ok(mut registry) = CarRegistry::new(Config::with_limits(1, 1)) else {
        return;
    };
    let first = submit(&form, &mut registry);
    let second = submit(&form, &mut registry);

    // The same form can never be stored twice in a one-car registry
    assert!(!(first.is_added() && second.is_added()));
    assert!(registry.len() <= 1);
});
