//! Cross-system bridge: mapping ragas to approximate Western equivalents.
//!
//! The bridge is pure table composition: raga → thaat classification →
//! Western scale name → suggested root key, fed into the Camelot wheel.
//! It adds no new algorithms of its own. The scale-degree adjustments in
//! [`compare_raga_to_western_scale`] are the best-effort approximations the
//! thaat tables call for (raised 4th for Lydian, lowered 7th for
//! Mixolydian, raised 6th for Dorian), keyed by scale-type name and matched
//! by note-name pattern — they are not a general transposition algorithm.

use crate::camelot::{CamelotWheel, CompatibleKey, KeyMode, WheelPosition};
use crate::error::{Error, Result};
use crate::rasa::{NavarasaWheel, Rasa};
use crate::western::WesternTuning;

/// Raga → thaat (parent scale) classification.
const RAGA_THAATS: [(&str, &str); 41] = [
    ("Yaman", "Kalyan"),
    ("Bhairav", "Bhairav"),
    ("Bhairavi", "Bhairavi"),
    ("Todi", "Todi"),
    ("Bilawal", "Bilawal"),
    ("Kafi", "Kafi"),
    ("Asavari", "Asavari"),
    ("Marwa", "Marwa"),
    ("Purvi", "Purvi"),
    ("Desh", "Khamaj"),
    ("Malkauns", "Bhairavi"),
    ("Darbari", "Asavari"),
    ("Bageshri", "Kafi"),
    ("Durga", "Bilawal"),
    ("Jaunpuri", "Asavari"),
    ("Bhimpalasi", "Kafi"),
    ("Ahir Bhairav", "Bhairav"),
    ("Pahadi", "Bilawal"),
    ("Jog", "Kafi"),
    ("Kedar", "Kalyan"),
    ("Hameer", "Kalyan"),
    ("Chandrakauns", "Bhairavi"),
    ("Miyan Ki Malhar", "Kafi"),
    ("Tilak Kamod", "Khamaj"),
    ("Shree", "Purvi"),
    ("Bairagi", "Bhairav"),
    ("Nat Kamod", "Khamaj"),
    ("Hindol", "Kalyan"),
    ("Jaijaiwanti", "Khamaj"),
    ("Lalit", "Marwa"),
    ("Bahar", "Kafi"),
    ("Gauri", "Bhairav"),
    ("Vibhas", "Bhairav"),
    ("Maand", "Bilawal"),
    ("Vrindavani Sarang", "Kafi"),
    ("Gaud Sarang", "Bilawal"),
    ("Jogiya", "Bhairav"),
    ("Komal Rishabh Asavari", "Asavari"),
    ("Bilaskhani Todi", "Todi"),
    ("Champakali", "Khamaj"),
    ("Madhuvanti", "Todi"),
];

/// Thaat → nearest Western scale name. Marwa, Purvi and Todi have no close
/// Western equivalent and say so in their mapped name.
const THAAT_WESTERN: [(&str, &str); 10] = [
    ("Bilawal", "Major"),
    ("Khamaj", "Mixolydian"),
    ("Kafi", "Dorian"),
    ("Asavari", "Natural Minor"),
    ("Bhairavi", "Phrygian"),
    ("Bhairav", "Double Harmonic Major"),
    ("Kalyan", "Lydian"),
    ("Marwa", "Marwa (no Western equivalent)"),
    ("Purvi", "Purvi (no Western equivalent)"),
    ("Todi", "Todi (no Western equivalent)"),
];

/// Thaat → conventional Western root key for the approximation.
const THAAT_KEYS: [(&str, &str); 10] = [
    ("Bilawal", "C"),
    ("Khamaj", "G"),
    ("Kafi", "D"),
    ("Asavari", "A"),
    ("Bhairavi", "E"),
    ("Bhairav", "C"),
    ("Kalyan", "F"),
    ("Marwa", "C"),
    ("Purvi", "C"),
    ("Todi", "D"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

/// The thaat classification of a raga, if one is on record.
///
/// # Example
/// ```
/// use tonewheel::bridge::raga_thaat;
///
/// assert_eq!(raga_thaat("Yaman"), Some("Kalyan"));
/// assert_eq!(raga_thaat("Nonexistent"), None);
/// ```
pub fn raga_thaat(raga: &str) -> Option<&'static str> {
    lookup(&RAGA_THAATS, raga)
}

/// The nearest Western scale name for a thaat.
pub fn thaat_western_scale(thaat: &str) -> Option<&'static str> {
    lookup(&THAAT_WESTERN, thaat)
}

/// The conventional Western root key for a thaat's approximation.
pub fn thaat_suggested_key(thaat: &str) -> &'static str {
    lookup(&THAAT_KEYS, thaat).unwrap_or("C")
}

// Scales filed on the minor ring of the Camelot wheel; everything else
// (including the thaats with no Western equivalent) goes on the major ring.
fn camelot_mode(scale_type: &str) -> KeyMode {
    match scale_type {
        "Natural Minor" | "Phrygian" | "Dorian" => KeyMode::Minor,
        _ => KeyMode::Major,
    }
}

/// Result of looking up a raga's Western equivalent. Missing table entries
/// are descriptive results, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WesternEquivalent {
    /// The raga maps through its thaat onto a Western scale and key.
    Match {
        raga: String,
        thaat: &'static str,
        scale_type: &'static str,
        suggested_key: &'static str,
        camelot: WheelPosition,
        compatible_camelot: Vec<CompatibleKey>,
        rasas: Vec<Rasa>,
        western_correlations: Vec<&'static str>,
    },
    /// No thaat classification on record for the raga.
    NoThaat { raga: String },
    /// The thaat has no Western scale mapping.
    NoWesternScale { thaat: &'static str },
}

/// A raga's frequencies next to its approximating Western scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RagaScaleComparison {
    pub raga: String,
    /// E.g. `"C Lydian"`.
    pub western_scale: String,
    pub thaat: &'static str,
    pub camelot: WheelPosition,
    pub compatible_camelot: Vec<CompatibleKey>,
    pub raga_frequencies: Vec<(String, f32)>,
    pub western_frequencies: Vec<(String, f32)>,
    pub rasas: Vec<Rasa>,
}

/// Find the Western scale, key and Camelot neighborhood that approximate a
/// raga, together with its rasas and their Western correlations.
///
/// # Example
/// ```
/// use tonewheel::bridge::{western_equivalent, WesternEquivalent};
/// use tonewheel::NavarasaWheel;
///
/// let nw = NavarasaWheel::default();
/// match western_equivalent(&nw, "Yaman") {
///     WesternEquivalent::Match { scale_type, suggested_key, .. } => {
///         assert_eq!(scale_type, "Lydian");
///         assert_eq!(suggested_key, "F");
///     }
///     other => panic!("expected a match, got {:?}", other),
/// }
/// ```
pub fn western_equivalent(navarasa: &NavarasaWheel, raga: &str) -> WesternEquivalent {
    let thaat = match raga_thaat(raga) {
        Some(t) => t,
        None => {
            return WesternEquivalent::NoThaat {
                raga: raga.to_string(),
            }
        }
    };
    let scale_type = match thaat_western_scale(thaat) {
        Some(s) => s,
        None => return WesternEquivalent::NoWesternScale { thaat },
    };

    let rasas = navarasa.rasas_of_raga(raga);

    let mut western_correlations: Vec<&'static str> = Vec::new();
    for rasa in &rasas {
        for &quality in rasa.western_correlations() {
            if !western_correlations.contains(&quality) {
                western_correlations.push(quality);
            }
        }
    }

    let suggested_key = thaat_suggested_key(thaat);
    let wheel = CamelotWheel::new();
    let camelot = match wheel.position(suggested_key, camelot_mode(scale_type)) {
        Ok(pos) => pos,
        // Suggested keys come from a static table of natural notes.
        Err(_) => return WesternEquivalent::NoWesternScale { thaat },
    };

    WesternEquivalent::Match {
        raga: raga.to_string(),
        thaat,
        scale_type,
        suggested_key,
        camelot,
        compatible_camelot: wheel.compatible(camelot),
        rasas,
        western_correlations,
    }
}

// Octave suffix of a scale label like "A#4" or "C-1".
fn label_octave(label: &str) -> Option<i32> {
    let start = label.find(|c: char| c.is_ascii_digit() || c == '-')?;
    label[start..].parse().ok()
}

// Swap the first entry whose note name starts with `from` for `to` at the
// same octave, appending the replacement. Matching is by note-name pattern,
// faithful to the approximation tables this serves.
fn swap_degree(
    tuning: &WesternTuning,
    freqs: &mut Vec<(String, f32)>,
    from: char,
    to: &str,
) -> Result<()> {
    let index = freqs.iter().position(|(label, _)| label.starts_with(from));
    if let Some(index) = index {
        let (label, _) = freqs.remove(index);
        if let Some(octave) = label_octave(&label) {
            let replacement = format!("{}{}", to, octave);
            if !freqs.iter().any(|(l, _)| *l == replacement) {
                let freq = tuning.frequency(to, octave)?;
                freqs.push((replacement, freq));
            }
        }
    }
    Ok(())
}

/// Compare a raga's just-intonation frequencies with its approximating
/// Western scale at the given root, applying the per-scale-type degree
/// adjustments (Lydian raised 4th, Mixolydian lowered 7th, Dorian raised
/// 6th).
///
/// The Western side always uses concert pitch (A4 = 440 Hz); the raga side
/// uses the wheel's own Sa reference. Fails with
/// [`Error::UnknownRaga`](crate::Error::UnknownRaga) when the raga has no
/// thaat classification or no frequency table.
///
/// # Example
/// ```
/// use tonewheel::bridge::compare_raga_to_western_scale;
/// use tonewheel::NavarasaWheel;
///
/// let nw = NavarasaWheel::default();
/// let cmp = compare_raga_to_western_scale(&nw, "Yaman", "C", 4).unwrap();
/// assert_eq!(cmp.western_scale, "C Lydian");
/// // Lydian adjustment: the natural 4th is replaced by the raised 4th
/// assert!(cmp.western_frequencies.iter().any(|(l, _)| l == "F#4"));
/// assert!(!cmp.western_frequencies.iter().any(|(l, _)| l == "F4"));
/// ```
pub fn compare_raga_to_western_scale(
    navarasa: &NavarasaWheel,
    raga: &str,
    western_root: &str,
    octave: i32,
) -> Result<RagaScaleComparison> {
    let equiv = western_equivalent(navarasa, raga);
    let (thaat, scale_type, rasas) = match equiv {
        WesternEquivalent::Match {
            thaat,
            scale_type,
            rasas,
            ..
        } => (thaat, scale_type, rasas),
        WesternEquivalent::NoThaat { .. } | WesternEquivalent::NoWesternScale { .. } => {
            return Err(Error::UnknownRaga {
                name: raga.to_string(),
                valid: RAGA_THAATS
                    .iter()
                    .map(|&(name, _)| name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        }
    };

    let raga_frequencies = navarasa.raga_frequencies(raga)?;

    let tuning = WesternTuning::default();
    let mut western_frequencies = match scale_type {
        "Natural Minor" | "Dorian" => tuning.scale(western_root, octave, "minor")?,
        _ => tuning.scale(western_root, octave, "major")?,
    };

    match scale_type {
        "Lydian" => swap_degree(&tuning, &mut western_frequencies, 'F', "F#")?,
        "Mixolydian" => swap_degree(&tuning, &mut western_frequencies, 'B', "Bb")?,
        "Dorian" => swap_degree(&tuning, &mut western_frequencies, 'A', "A")?,
        _ => {}
    }

    let wheel = CamelotWheel::new();
    let camelot = wheel.position(western_root, camelot_mode(scale_type))?;

    Ok(RagaScaleComparison {
        raga: raga.to_string(),
        western_scale: format!("{} {}", western_root, scale_type),
        thaat,
        camelot,
        compatible_camelot: wheel.compatible(camelot),
        raga_frequencies,
        western_frequencies,
        rasas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_thaat_has_a_scale_and_key() {
        for &(_, thaat) in &RAGA_THAATS {
            assert!(thaat_western_scale(thaat).is_some(), "{thaat}");
            assert!(lookup(&THAAT_KEYS, thaat).is_some(), "{thaat}");
        }
    }

    #[test]
    fn label_octave_handles_sharps_and_negatives() {
        assert_eq!(label_octave("C4"), Some(4));
        assert_eq!(label_octave("A#4"), Some(4));
        assert_eq!(label_octave("C-1"), Some(-1));
        assert_eq!(label_octave("C"), None);
    }

    #[test]
    fn mixolydian_swap_lowers_the_seventh() {
        let tuning = WesternTuning::default();
        let mut freqs = tuning.scale("C", 4, "major").unwrap();
        swap_degree(&tuning, &mut freqs, 'B', "Bb").unwrap();
        assert!(freqs.iter().any(|(l, _)| l == "Bb4"));
        assert!(!freqs.iter().any(|(l, _)| l == "B4"));
    }
}
