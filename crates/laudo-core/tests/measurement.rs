use laudo_core::CoreError;
use laudo_core::measurement::{Measurement, mm};

#[test]
fn blank_input_is_not_measured() {
    assert!(Measurement::parse("").unwrap().is_none());
    assert!(Measurement::parse("   ").unwrap().is_none());
}

#[test]
fn keeps_the_entered_spelling() {
    let m = Measurement::parse(" 12.50 ").unwrap().unwrap();
    assert_eq!(m.as_str(), "12.50");
    assert_eq!(m.to_string(), "12.50");
    assert!((m.millimetres() - 12.5).abs() < f64::EPSILON);
}

#[test]
fn rejects_non_numeric_and_signed_values() {
    for bad in ["abc", "-3", "1e3", "1,5", "1.2.3", "."] {
        let err = Measurement::parse(bad).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMeasurement(_)), "{bad}");
    }
}

#[test]
fn bare_dots_are_completed() {
    assert_eq!(mm("5.").unwrap().as_str(), "5");
    assert_eq!(mm(".5").unwrap().as_str(), "0.5");
    assert_eq!(mm(" 12. ").unwrap().to_string(), "12");
}

#[test]
fn zero_is_valid_but_not_positive() {
    let zero = mm("0").unwrap();
    assert!(!zero.is_positive());
    assert!(mm("0.1").unwrap().is_positive());
}

#[test]
fn deserialization_validates() {
    let ok: Measurement = serde_json::from_str("\"160\"").unwrap();
    assert_eq!(ok.as_str(), "160");

    assert!(serde_json::from_str::<Measurement>("\"dez\"").is_err());
    assert!(serde_json::from_str::<Measurement>("\"\"").is_err());
}

#[test]
fn serializes_as_plain_string() {
    let m = mm("7.5").unwrap();
    assert_eq!(serde_json::to_string(&m).unwrap(), "\"7.5\"");
}
