use approx::assert_relative_eq;
use tonewheel::{Error, IndianTuning, Swara, Variant};

#[test]
fn shruti_endpoints() {
    let it = IndianTuning::default();
    assert_eq!(it.shruti_frequency(1).unwrap(), 220.0);
    assert_relative_eq!(it.shruti_frequency(14).unwrap(), 330.0, max_relative = 1e-6);
    assert_relative_eq!(
        it.shruti_frequency(22).unwrap(),
        220.0 * 243.0 / 128.0,
        max_relative = 1e-6
    );
}

#[test]
fn shrutis_ascend_within_the_octave() {
    let it = IndianTuning::new(100.0);
    let mut previous = 0.0;
    for n in 1..=22 {
        let f = it.shruti_frequency(n).unwrap();
        assert!(f > previous, "shruti {n} must be above shruti {}", n - 1);
        assert!(f >= 100.0 && f < 200.0, "shruti {n} outside the octave: {f}");
        previous = f;
    }
}

#[test]
fn shruti_number_bounds() {
    let it = IndianTuning::default();
    for bad in [0, 23, -5, 100] {
        match it.shruti_frequency(bad) {
            Err(Error::OutOfRange { name, value, min, max }) => {
                assert_eq!(name, "shruti_number");
                assert_eq!(value, bad as i64);
                assert_eq!((min, max), (1, 22));
            }
            other => panic!("expected OutOfRange for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn fixed_swaras_ignore_the_variant() {
    let it = IndianTuning::default();
    for variant in [Variant::Komal, Variant::Shuddha, Variant::Tivra] {
        assert_eq!(it.swara_frequency(Swara::Sa, variant).unwrap(), 220.0);
        assert_relative_eq!(
            it.swara_frequency(Swara::Pa, variant).unwrap(),
            330.0,
            max_relative = 1e-6
        );
    }
    assert!(Swara::Sa.is_fixed());
    assert!(Swara::Pa.is_fixed());
    assert!(!Swara::Ma.is_fixed());
}

#[test]
fn swara_shruti_positions() {
    assert_eq!(Swara::Re.shruti(Variant::Komal).unwrap(), 3);
    assert_eq!(Swara::Re.shruti(Variant::Shuddha).unwrap(), 5);
    assert_eq!(Swara::Ga.shruti(Variant::Komal).unwrap(), 6);
    assert_eq!(Swara::Ga.shruti(Variant::Shuddha).unwrap(), 8);
    assert_eq!(Swara::Ma.shruti(Variant::Shuddha).unwrap(), 10);
    assert_eq!(Swara::Ma.shruti(Variant::Tivra).unwrap(), 13);
    assert_eq!(Swara::Dha.shruti(Variant::Komal).unwrap(), 16);
    assert_eq!(Swara::Ni.shruti(Variant::Shuddha).unwrap(), 21);
}

#[test]
fn undefined_variant_is_rejected() {
    match Swara::Ga.shruti(Variant::Tivra) {
        Err(Error::InvalidVariant { swara, variant, valid }) => {
            assert_eq!(swara, "Ga");
            assert_eq!(variant, "tivra");
            assert!(valid.contains("komal"));
        }
        other => panic!("expected InvalidVariant, got {other:?}"),
    }
    assert!(Swara::Ma.shruti(Variant::Komal).is_err());
}

#[test]
fn yaman_uses_tivra_ma() {
    let it = IndianTuning::default();
    let yaman = it.raga_frequencies("Yaman").unwrap();
    assert_eq!(yaman.len(), 7);
    assert_eq!(yaman[0].0, "Sa shuddha");
    assert_eq!(yaman[0].1, 220.0);
    assert!(yaman.iter().any(|(label, _)| label == "Ma tivra"));

    let tivra_ma = yaman
        .iter()
        .find(|(label, _)| label == "Ma tivra")
        .map(|&(_, f)| f)
        .unwrap();
    assert_relative_eq!(tivra_ma, 220.0 * 729.0 / 512.0, max_relative = 1e-6);
    assert!(tivra_ma > it.swara_frequency(Swara::Ma, Variant::Shuddha).unwrap());
}

#[test]
fn bhairavi_is_all_komal() {
    let it = IndianTuning::default();
    let bhairavi = it.raga("Bhairavi").unwrap();
    for &(swara, variant) in bhairavi {
        if matches!(swara, Swara::Re | Swara::Ga | Swara::Dha | Swara::Ni) {
            assert_eq!(variant, Variant::Komal, "{} should be komal", swara.name());
        }
    }
}

#[test]
fn unknown_raga_lists_valid_names() {
    let it = IndianTuning::default();
    match it.raga_frequencies("Nonexistent") {
        Err(Error::UnknownRaga { name, valid }) => {
            assert_eq!(name, "Nonexistent");
            assert!(valid.contains("Yaman"));
            assert!(valid.contains("Bhairav"));
        }
        other => panic!("expected UnknownRaga, got {other:?}"),
    }
    assert_eq!(IndianTuning::raga_names().len(), 5);
}

#[test]
fn all_shrutis_enumerates_the_octave() {
    let it = IndianTuning::new(261.63);
    let shrutis = it.all_shrutis();
    assert_eq!(shrutis.len(), 22);
    assert_eq!(shrutis[0].0, "Shruti 1");
    assert_eq!(shrutis[0].1, 261.63);
    assert_eq!(shrutis[21].0, "Shruti 22");
    assert!(shrutis[21].1 < 2.0 * 261.63);
}

#[test]
fn sa_reference_is_tunable() {
    let it = IndianTuning::new(256.0);
    assert_eq!(it.reference_sa(), 256.0);
    assert_eq!(it.shruti_frequency(1).unwrap(), 256.0);
    assert_relative_eq!(it.shruti_frequency(14).unwrap(), 384.0, max_relative = 1e-6);
}
