//! Demo record validation contract.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use demosite_core::error::ClientCode;
use demosite_core::model::NewDemo;
use demosite_core::{DemoSiteError, ValidationError};

#[test]
fn accepts_any_non_blank_text() {
    let long = "x".repeat(10_000);
    assert!(NewDemo::new(&long, "d").is_ok());
    assert!(NewDemo::new("名前", "説明").is_ok());
    assert!(NewDemo::new("a", "<b>markup</b>").is_ok());
}

#[test]
fn blank_fields_map_to_validation_code() {
    for (name, description) in [("", "d"), ("n", ""), ("  ", "d"), ("n", "\n\t"), ("", "")] {
        let err: DemoSiteError = NewDemo::new(name, description).expect_err("must reject").into();
        assert_eq!(err.client_code(), ClientCode::Validation);
        assert!(matches!(err, DemoSiteError::Validation(ValidationError::MissingFields)));
    }
}

#[test]
fn record_keeps_trimmed_values() {
    let rec = NewDemo::new(" Demo 1 ", " Description 1 ").unwrap().into_record(1);
    assert_eq!((rec.name.as_str(), rec.description.as_str()), ("Demo 1", "Description 1"));
}
