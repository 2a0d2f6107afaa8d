use tonewheel::bridge::{
    compare_raga_to_western_scale, raga_thaat, thaat_suggested_key, thaat_western_scale,
    western_equivalent, WesternEquivalent,
};
use tonewheel::{Error, NavarasaWheel, Rasa};

#[test]
fn thaat_classification() {
    assert_eq!(raga_thaat("Yaman"), Some("Kalyan"));
    assert_eq!(raga_thaat("Desh"), Some("Khamaj"));
    assert_eq!(raga_thaat("Malkauns"), Some("Bhairavi"));
    assert_eq!(raga_thaat("Miyan Ki Malhar"), Some("Kafi"));
    assert_eq!(raga_thaat("Nonexistent"), None);

    assert_eq!(thaat_western_scale("Kafi"), Some("Dorian"));
    assert_eq!(thaat_western_scale("Bilawal"), Some("Major"));
    assert_eq!(thaat_suggested_key("Kalyan"), "F");
    assert_eq!(thaat_suggested_key("Asavari"), "A");
}

#[test]
fn yaman_maps_to_f_lydian() {
    let nw = NavarasaWheel::default();
    match western_equivalent(&nw, "Yaman") {
        WesternEquivalent::Match {
            thaat,
            scale_type,
            suggested_key,
            camelot,
            compatible_camelot,
            rasas,
            western_correlations,
            ..
        } => {
            assert_eq!(thaat, "Kalyan");
            assert_eq!(scale_type, "Lydian");
            assert_eq!(suggested_key, "F");
            assert_eq!(camelot.to_string(), "4B");
            assert_eq!(compatible_camelot.len(), 4);
            assert_eq!(rasas, vec![Rasa::Sringara]);
            assert!(western_correlations.contains(&"Lydian"));
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn minor_character_scales_land_on_the_a_ring() {
    let nw = NavarasaWheel::default();
    // Darbari -> Asavari -> Natural Minor, suggested key A
    match western_equivalent(&nw, "Darbari") {
        WesternEquivalent::Match {
            scale_type,
            suggested_key,
            camelot,
            ..
        } => {
            assert_eq!(scale_type, "Natural Minor");
            assert_eq!(suggested_key, "A");
            assert_eq!(camelot.to_string(), "5A");
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn unknown_raga_is_descriptive_not_an_error() {
    let nw = NavarasaWheel::default();
    match western_equivalent(&nw, "Nonexistent") {
        WesternEquivalent::NoThaat { raga } => assert_eq!(raga, "Nonexistent"),
        other => panic!("expected NoThaat, got {other:?}"),
    }
}

#[test]
fn comparison_applies_the_lydian_adjustment() {
    let nw = NavarasaWheel::default();
    let cmp = compare_raga_to_western_scale(&nw, "Yaman", "C", 4).unwrap();

    assert_eq!(cmp.western_scale, "C Lydian");
    assert_eq!(cmp.thaat, "Kalyan");
    assert_eq!(cmp.camelot.to_string(), "5B");
    assert_eq!(cmp.raga_frequencies.len(), 7);

    let labels: Vec<&str> = cmp
        .western_frequencies
        .iter()
        .map(|(l, _)| l.as_str())
        .collect();
    assert!(labels.contains(&"F#4"), "raised fourth missing: {labels:?}");
    assert!(!labels.contains(&"F4"), "natural fourth kept: {labels:?}");
}

#[test]
fn comparison_keeps_unadjusted_scales_intact() {
    let nw = NavarasaWheel::default();
    // Bhairavi -> Phrygian: no degree adjustment is defined for it
    let cmp = compare_raga_to_western_scale(&nw, "Bhairavi", "E", 4).unwrap();
    assert_eq!(cmp.western_scale, "E Phrygian");
    assert_eq!(cmp.camelot.to_string(), "6A");
    assert_eq!(cmp.western_frequencies.len(), 7);
    assert_eq!(cmp.raga_frequencies.len(), 7);
}

#[test]
fn comparison_applies_the_dorian_adjustment() {
    let nw = NavarasaWheel::default();
    // Kafi -> Kafi thaat -> Dorian: minor scale with a raised sixth
    let cmp = compare_raga_to_western_scale(&nw, "Kafi", "C", 4).unwrap();
    assert_eq!(cmp.western_scale, "C Dorian");
    // C on the minor ring: the wheel anchors A minor at 5A, C minor at 2A
    assert_eq!(cmp.camelot.to_string(), "2A");

    let labels: Vec<&str> = cmp
        .western_frequencies
        .iter()
        .map(|(l, _)| l.as_str())
        .collect();
    assert!(labels.contains(&"A4"), "raised sixth missing: {labels:?}");
    assert!(!labels.contains(&"A#4"), "minor sixth kept: {labels:?}");
}

#[test]
fn comparison_needs_a_raga_frequency_table() {
    let nw = NavarasaWheel::default();
    // Darbari has a thaat but no seeded frequency table
    match compare_raga_to_western_scale(&nw, "Darbari", "C", 4) {
        Err(Error::UnknownRaga { name, .. }) => assert_eq!(name, "Darbari"),
        other => panic!("expected UnknownRaga, got {other:?}"),
    }
}

#[test]
fn comparison_rejects_unclassified_ragas() {
    let nw = NavarasaWheel::default();
    match compare_raga_to_western_scale(&nw, "Nonexistent", "C", 4) {
        Err(Error::UnknownRaga { name, valid }) => {
            assert_eq!(name, "Nonexistent");
            assert!(valid.contains("Yaman"));
        }
        other => panic!("expected UnknownRaga, got {other:?}"),
    }
}
