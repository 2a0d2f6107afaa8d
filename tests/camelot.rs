use tonewheel::{CamelotWheel, Error, KeyMode, WesternTuning, WheelLetter, WheelPosition};

#[test]
fn anchor_positions() {
    let wheel = CamelotWheel::new();
    assert_eq!(wheel.position("C", KeyMode::Major).unwrap().to_string(), "5B");
    assert_eq!(wheel.position("A", KeyMode::Minor).unwrap().to_string(), "5A");
    assert_eq!(wheel.position("G", KeyMode::Major).unwrap().to_string(), "6B");
    assert_eq!(wheel.position("F", KeyMode::Major).unwrap().to_string(), "4B");
    assert_eq!(wheel.position("D", KeyMode::Minor).unwrap().to_string(), "4A");
}

#[test]
fn labels_resolve_major_and_minor() {
    let wheel = CamelotWheel::new();
    assert_eq!(wheel.position_of_label("Am").unwrap().to_string(), "5A");
    assert_eq!(wheel.position_of_label("C").unwrap().to_string(), "5B");
    assert_eq!(wheel.position_of_label("Dm").unwrap().to_string(), "4A");
    assert!(wheel.position_of_label("Hm").is_err());
}

#[test]
fn enharmonic_keys_share_a_position() {
    let wheel = CamelotWheel::new();
    assert_eq!(
        wheel.position("Db", KeyMode::Major).unwrap(),
        wheel.position("C#", KeyMode::Major).unwrap()
    );
    assert_eq!(
        wheel.position("Eb", KeyMode::Minor).unwrap(),
        wheel.position("D#", KeyMode::Minor).unwrap()
    );
}

#[test]
fn every_key_resolves_on_both_rings() {
    let wheel = CamelotWheel::new();
    let mut names: Vec<&str> = tonewheel::western::NOTES.to_vec();
    names.extend(["Db", "Eb", "Gb", "Ab", "Bb"]);
    for name in names {
        for mode in [KeyMode::Major, KeyMode::Minor] {
            let pos = wheel.position(name, mode).unwrap();
            assert_eq!(wheel.key_of(pos).1, mode, "{name} {mode}");
        }
    }
}

#[test]
fn round_trip_all_positions() {
    let wheel = CamelotWheel::new();
    for number in 1..=12u8 {
        for letter in [WheelLetter::A, WheelLetter::B] {
            let pos = WheelPosition::new(number, letter).unwrap();
            let (key, mode) = wheel.key_of(pos);
            assert_eq!(wheel.position(key, mode).unwrap(), pos);

            let label = wheel.key_label_of(pos);
            assert_eq!(wheel.position_of_label(&label).unwrap(), pos);
        }
    }
}

#[test]
fn arithmetic_wraps_around() {
    let twelve_b: WheelPosition = "12B".parse().unwrap();
    assert_eq!(twelve_b.fifth_up().to_string(), "1B");

    let one_a: WheelPosition = "1A".parse().unwrap();
    assert_eq!(one_a.fifth_down().to_string(), "12A");
    assert_eq!(twelve_b.diagonal().to_string(), "1A");
}

#[test]
fn compatible_neighbors_of_c_major() {
    let wheel = CamelotWheel::new();
    let compatible = wheel.compatible("5B".parse().unwrap());
    assert_eq!(compatible.len(), 4);

    assert_eq!(compatible[0].position.to_string(), "5A");
    assert_eq!(compatible[0].key, "Am");
    assert_eq!(compatible[0].relationship, "relative major/minor switch");

    assert_eq!(compatible[1].position.to_string(), "6B");
    assert_eq!(compatible[1].key, "G");

    assert_eq!(compatible[2].position.to_string(), "4B");
    assert_eq!(compatible[2].key, "F");

    assert_eq!(compatible[3].position.to_string(), "6A");
    assert_eq!(compatible[3].key, "Em");
}

#[test]
fn notation_parsing() {
    assert_eq!("5B".parse::<WheelPosition>().unwrap().to_string(), "5B");
    assert_eq!("12a".parse::<WheelPosition>().unwrap().to_string(), "12A");

    // Any well-formed number outside 1-12 range-checks the same way,
    // whatever its magnitude
    for (bad, expected) in [("13B", 13i64), ("0A", 0), ("300B", 300), ("9999A", 9999)] {
        match bad.parse::<WheelPosition>() {
            Err(Error::OutOfRange { value, min, max, .. }) => {
                assert_eq!((value, min, max), (expected, 1, 12), "{bad}");
            }
            other => panic!("expected OutOfRange for {bad:?}, got {other:?}"),
        }
    }

    for bad in ["", "B", "XB", "5C", "5♭"] {
        match bad.parse::<WheelPosition>() {
            Err(Error::InvalidWheelPosition { input, .. }) => assert_eq!(input, bad),
            other => panic!("expected InvalidWheelPosition for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn scale_with_camelot_minor_lands_on_the_a_ring() {
    let wheel = CamelotWheel::new();
    let tuning = WesternTuning::default();

    let a_minor = wheel.scale_with_camelot(&tuning, "A", 4, "minor").unwrap();
    assert_eq!(a_minor.camelot.to_string(), "5A");
    assert_eq!(a_minor.frequencies.len(), 7);
    assert_eq!(a_minor.compatible_keys.len(), 4);
    assert_eq!(a_minor.compatible_keys[0].key, "C");

    // Non-minor scale types file on the major ring
    let c_blues = wheel.scale_with_camelot(&tuning, "C", 4, "blues").unwrap();
    assert_eq!(c_blues.camelot.to_string(), "5B");
    assert_eq!(c_blues.frequencies.len(), 6);
}
