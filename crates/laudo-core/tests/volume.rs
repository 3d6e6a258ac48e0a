use laudo_core::measurement::mm;
use laudo_core::volume::{VolumeTriple, ZERO_VOLUME, ellipsoid_volume, format_ml};

#[test]
fn all_zero_dimensions() {
    assert_eq!(ellipsoid_volume("0", "0", "0"), "0.0 ml");
}

#[test]
fn typical_bladder() {
    assert_eq!(ellipsoid_volume("60", "40", "30"), "37.4 ml");
}

#[test]
fn any_zero_or_empty_dimension_yields_zero() {
    assert_eq!(ellipsoid_volume("60", "0", "30"), ZERO_VOLUME);
    assert_eq!(ellipsoid_volume("60", "40", ""), ZERO_VOLUME);
    assert_eq!(ellipsoid_volume("", "", ""), ZERO_VOLUME);
}

#[test]
fn invalid_or_negative_dimension_yields_zero() {
    assert_eq!(ellipsoid_volume("60", "abc", "30"), ZERO_VOLUME);
    assert_eq!(ellipsoid_volume("-60", "40", "30"), ZERO_VOLUME);
}

#[test]
fn decimals_are_accepted() {
    // 100 * 80 * 70.5 * 0.00052 = 293.28
    assert_eq!(ellipsoid_volume("100", "80", "70.5"), "293.3 ml");
}

#[test]
fn typed_triple_matches_string_formula() {
    let triple = VolumeTriple::new(mm("60"), mm("40"), mm("30"));
    let volume = triple.volume_ml().unwrap();
    assert_eq!(format_ml(volume), ellipsoid_volume("60", "40", "30"));
}

#[test]
fn partial_triple() {
    let empty = VolumeTriple::default();
    assert!(empty.is_empty());
    assert!(!empty.is_partial());

    let partial = VolumeTriple::new(mm("60"), None, mm("30"));
    assert!(partial.is_partial());
    assert!(partial.volume_ml().is_none());

    let zeroed = VolumeTriple::new(mm("60"), mm("0"), mm("30"));
    assert!(zeroed.is_partial());
}
