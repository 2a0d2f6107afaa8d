//! Equal-tempered frequency calculations for Western music.
//!
//! All note names are normalized to canonical sharp spellings through the
//! enharmonic alias table before indexing, so `"Db"` and `"C#"` are the same
//! pitch class everywhere in this module.

use crate::error::{Error, Result};

/// The 12 chromatic pitch classes in canonical (sharp) spelling.
pub const NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat aliases and the pitch-class index of their canonical sharp spelling.
const ENHARMONIC: [(&str, usize); 5] = [
    ("Db", 1),
    ("Eb", 3),
    ("Gb", 6),
    ("Ab", 8),
    ("Bb", 10),
];

/// Chromatic solfège syllables, one per semitone of the cycle.
const SOLFEGE: [&str; 12] = [
    "Do", "Di", "Re", "Ri", "Mi", "Fa", "Fi", "Sol", "Si", "La", "Li", "Ti",
];

/// Named scale patterns as semitone offsets from the root.
const SCALE_PATTERNS: [(&str, &[i32]); 8] = [
    ("major", &[0, 2, 4, 5, 7, 9, 11]),
    ("minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("minor_harmonic", &[0, 2, 3, 5, 7, 8, 11]),
    ("minor_melodic", &[0, 2, 3, 5, 7, 9, 11]),
    ("chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    ("pentatonic_major", &[0, 2, 4, 7, 9]),
    ("pentatonic_minor", &[0, 3, 5, 7, 10]),
    ("blues", &[0, 3, 5, 6, 7, 10]),
];

/// Classic just-intonation ratios used for harmonic relationship checks.
const HARMONIC_RATIOS: [(u32, u32); 9] = [
    (2, 1),   // octave
    (3, 2),   // perfect fifth
    (4, 3),   // perfect fourth
    (5, 4),   // major third
    (6, 5),   // minor third
    (5, 3),   // major sixth
    (8, 5),   // minor sixth
    (9, 8),   // major second
    (16, 15), // minor second
];

/// Index of A within [`NOTES`]; octave 4 contains the reference A.
const A_INDEX: i32 = 9;

fn valid_note_names() -> String {
    let mut names: Vec<&str> = NOTES.to_vec();
    names.extend(ENHARMONIC.iter().map(|&(flat, _)| flat));
    names.join(", ")
}

/// Normalize a note name to its canonical sharp spelling.
///
/// # Example
/// ```
/// use tonewheel::western::normalize_note;
///
/// assert_eq!(normalize_note("Db").unwrap(), "C#");
/// assert_eq!(normalize_note("F").unwrap(), "F");
/// assert!(normalize_note("H").is_err());
/// ```
pub fn normalize_note(note: &str) -> Result<&'static str> {
    pitch_class(note).map(|i| NOTES[i])
}

/// Resolve a note name (canonical or flat alias) to its pitch-class index.
pub(crate) fn pitch_class(note: &str) -> Result<usize> {
    if let Some(i) = NOTES.iter().position(|&n| n == note) {
        return Ok(i);
    }
    for &(flat, index) in &ENHARMONIC {
        if note == flat {
            return Ok(index);
        }
    }
    Err(Error::UnknownNote {
        name: note.to_string(),
        valid: valid_note_names(),
    })
}

/// Equal-tempered frequency calculator anchored at a tunable A4.
///
/// The reference pitch is fixed at construction; all tables are static and
/// read-only, so instances are cheap and freely shareable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WesternTuning {
    reference_a4: f32,
}

impl Default for WesternTuning {
    /// Concert pitch, A4 = 440 Hz.
    fn default() -> Self {
        Self::new(440.0)
    }
}

impl WesternTuning {
    /// Create a calculator with the given A4 reference frequency in Hz.
    pub fn new(reference_a4: f32) -> Self {
        Self { reference_a4 }
    }

    /// The A4 reference frequency this calculator was built with.
    pub fn reference_a4(&self) -> f32 {
        self.reference_a4
    }

    /// Calculate the frequency of a note in a given octave.
    ///
    /// Flat spellings are accepted through the enharmonic table. Octave 4
    /// contains the reference A. No rounding is performed; display rounding
    /// is a caller concern.
    ///
    /// # Arguments
    /// * `note` - Note name (e.g., `"C"`, `"D#"`, `"Bb"`)
    /// * `octave` - Signed octave number (4 for middle C's octave)
    ///
    /// # Example
    /// ```
    /// use tonewheel::WesternTuning;
    ///
    /// let wt = WesternTuning::default();
    /// assert_eq!(wt.frequency("A", 4).unwrap(), 440.0);
    /// assert!((wt.frequency("C", 4).unwrap() - 261.63).abs() < 0.01);
    /// // Enharmonic spellings are identical
    /// assert_eq!(wt.frequency("Db", 4).unwrap(), wt.frequency("C#", 4).unwrap());
    /// ```
    pub fn frequency(&self, note: &str, octave: i32) -> Result<f32> {
        let index = pitch_class(note)? as i32;
        let distance = index - A_INDEX + (octave - 4) * 12;
        Ok(self.reference_a4 * 2.0_f32.powf(distance as f32 / 12.0))
    }

    /// Calculate the frequency of a chromatic solfège syllable in a key.
    ///
    /// The 12-syllable cycle (`Do Di Re Ri Mi Fa Fi Sol Si La Li Ti`) is
    /// mapped onto the chromatic set offset by the key's pitch class; the
    /// octave carries forward when syllable plus key offset crosses 11.
    ///
    /// # Example
    /// ```
    /// use tonewheel::WesternTuning;
    ///
    /// let wt = WesternTuning::default();
    /// let do_c = wt.solfege_frequency("Do", 4, "C").unwrap();
    /// assert!((do_c - 261.63).abs() < 0.01);
    /// let sol_c = wt.solfege_frequency("Sol", 4, "C").unwrap();
    /// assert!((sol_c - 392.0).abs() < 0.01);
    /// // Ti in B carries into the next octave (A#5)
    /// let ti_b = wt.solfege_frequency("Ti", 4, "B").unwrap();
    /// assert_eq!(ti_b, wt.frequency("A#", 5).unwrap());
    /// ```
    pub fn solfege_frequency(&self, syllable: &str, octave: i32, key: &str) -> Result<f32> {
        let solfege_index =
            SOLFEGE
                .iter()
                .position(|&s| s == syllable)
                .ok_or_else(|| Error::UnknownNote {
                    name: syllable.to_string(),
                    valid: SOLFEGE.join(", "),
                })?;
        let key_index = pitch_class(key)?;

        let offset = key_index + solfege_index;
        let note = NOTES[offset % 12];
        let actual_octave = octave + (offset / 12) as i32;

        self.frequency(note, actual_octave)
    }

    /// Expand a named scale pattern into an ordered list of (label, Hz).
    ///
    /// Labels are `"C4"` style: canonical note spelling plus the actual
    /// octave after carry. Entries appear in pattern order.
    ///
    /// # Example
    /// ```
    /// use tonewheel::WesternTuning;
    ///
    /// let wt = WesternTuning::default();
    /// let c_major = wt.scale("C", 4, "major").unwrap();
    /// assert_eq!(c_major.len(), 7);
    /// assert_eq!(c_major[0].0, "C4");
    /// assert_eq!(c_major[4].0, "G4");
    ///
    /// // B major crosses into octave 5
    /// let b_major = wt.scale("B", 4, "major").unwrap();
    /// assert!(b_major.iter().any(|(label, _)| label.ends_with('5')));
    /// ```
    pub fn scale(&self, root: &str, octave: i32, scale_type: &str) -> Result<Vec<(String, f32)>> {
        let pattern = SCALE_PATTERNS
            .iter()
            .find(|&&(name, _)| name == scale_type)
            .map(|&(_, p)| p)
            .ok_or_else(|| Error::UnknownScale {
                name: scale_type.to_string(),
                valid: SCALE_PATTERNS
                    .iter()
                    .map(|&(name, _)| name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let root_index = pitch_class(root)? as i32;

        let mut scale = Vec::with_capacity(pattern.len());
        for &interval in pattern {
            let position = root_index + interval;
            let note = NOTES[(position % 12) as usize];
            let actual_octave = octave + position / 12;
            let freq = self.frequency(note, actual_octave)?;
            scale.push((format!("{}{}", note, actual_octave), freq));
        }
        Ok(scale)
    }

    /// List the supported scale type names in table order.
    pub fn scale_types() -> Vec<&'static str> {
        SCALE_PATTERNS.iter().map(|&(name, _)| name).collect()
    }

    /// Check whether two notes form one of the classic just-intonation
    /// intervals (octave, fifth, fourth, thirds, sixths, seconds).
    ///
    /// Returns whether a ratio matched within `tolerance` and a description
    /// of the relationship.
    ///
    /// # Example
    /// ```
    /// use tonewheel::WesternTuning;
    ///
    /// let wt = WesternTuning::default();
    /// let (fifth, desc) = wt.are_harmonic("C", 4, "G", 4, 0.01).unwrap();
    /// assert!(fifth);
    /// assert!(desc.starts_with("3:2"));
    /// let (tritone, _) = wt.are_harmonic("C", 4, "F#", 4, 0.01).unwrap();
    /// assert!(!tritone);
    /// ```
    pub fn are_harmonic(
        &self,
        note1: &str,
        octave1: i32,
        note2: &str,
        octave2: i32,
        tolerance: f32,
    ) -> Result<(bool, String)> {
        let freq1 = self.frequency(note1, octave1)?;
        let freq2 = self.frequency(note2, octave2)?;

        let ratio = freq1.max(freq2) / freq1.min(freq2);

        for &(num, denom) in &HARMONIC_RATIOS {
            let harmonic_ratio = num as f32 / denom as f32;
            if (ratio - harmonic_ratio).abs() < tolerance {
                return Ok((true, format!("{}:{} ratio ({:.3})", num, denom, harmonic_ratio)));
            }
        }

        Ok((false, "Not a harmonic relationship".to_string()))
    }
}
