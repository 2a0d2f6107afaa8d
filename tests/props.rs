use proptest::prelude::*;
use tonewheel::western::NOTES;
use tonewheel::{IndianTuning, Mode, ModeWheel, WesternTuning, WheelLetter, WheelPosition};

proptest! {
    #[test]
    fn octave_doubling_prop(note in 0usize..12, octave in -1i32..8) {
        let wt = WesternTuning::default();
        let low = wt.frequency(NOTES[note], octave).unwrap();
        let high = wt.frequency(NOTES[note], octave + 1).unwrap();
        prop_assert!((high / low - 2.0).abs() < 1e-4);
    }

    #[test]
    fn reference_pitch_scales_linearly(reference in 100.0f32..1000.0) {
        let wt = WesternTuning::new(reference);
        prop_assert_eq!(wt.frequency("A", 4).unwrap(), reference);

        let ratio = wt.frequency("C", 4).unwrap() / reference;
        let concert_ratio = 261.6256 / 440.0;
        prop_assert!((ratio - concert_ratio).abs() < 1e-4);
    }

    #[test]
    fn shrutis_stay_inside_one_octave(reference in 100.0f32..1000.0, shruti in 1i32..=22) {
        let it = IndianTuning::new(reference);
        let f = it.shruti_frequency(shruti).unwrap();
        prop_assert!(f >= reference);
        prop_assert!(f < 2.0 * reference);
    }

    #[test]
    fn wheel_position_roundtrip(number in 1u8..=12, minor in any::<bool>()) {
        let letter = if minor { WheelLetter::A } else { WheelLetter::B };
        let pos = WheelPosition::new(number, letter).unwrap();

        let reparsed: WheelPosition = pos.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, pos);

        // The four neighbor moves are involutions or inverses
        prop_assert_eq!(pos.relative().relative(), pos);
        prop_assert_eq!(pos.fifth_up().fifth_down(), pos);
        prop_assert_eq!(pos.diagonal().relative().fifth_down(), pos);
    }

    #[test]
    fn mode_paths_are_valid_walks(start in 0usize..7, end in 0usize..7, max_steps in 0usize..5) {
        let mw = ModeWheel::default();
        let start = Mode::ALL[start];
        let end = Mode::ALL[end];

        if let Some(path) = mw.transition_path(start, end, max_steps) {
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&end));
            prop_assert!(path.len() - 1 <= max_steps);
            for pair in path.windows(2) {
                prop_assert!(pair[0].compatible().contains(&pair[1]));
            }
        } else {
            // The graph's diameter is 3; only tighter bounds can fail
            prop_assert!(max_steps < 3);
        }
    }
}
