//! Camelot wheel notation and harmonic mixing compatibility.
//!
//! The wheel is a circle-of-fifths layout of all 24 Western keys: numbers
//! 1-12 step by perfect fifths, letter B is the outer (major) ring and letter
//! A the inner (minor) ring, and a given number's A and B keys are relative
//! major/minor. This crate anchors the wheel at C major = 5B / A minor = 5A.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::western::{pitch_class, WesternTuning, NOTES};

/// Pitch class of the major key at each wheel number (index 0 is 1B),
/// stepping a fifth per number: G#, D#, A#, F, C, G, D, A, E, B, F#, C#.
const MAJOR_RING: [usize; 12] = [8, 3, 10, 5, 0, 7, 2, 9, 4, 11, 6, 1];

/// Pitch class of the minor key at each wheel number (index 0 is 1A); each
/// is the relative minor of the same-number major key:
/// F, C, G, D, A, E, B, F#, C#, G#, D#, A#.
const MINOR_RING: [usize; 12] = [5, 0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10];

/// Major or minor, the two key modes the wheel distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMode {
    Major,
    Minor,
}

impl KeyMode {
    pub fn name(self) -> &'static str {
        match self {
            KeyMode::Major => "major",
            KeyMode::Minor => "minor",
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(KeyMode::Major),
            "minor" => Ok(KeyMode::Minor),
            _ => Err(Error::UnknownScale {
                name: s.to_string(),
                valid: "major, minor".to_string(),
            }),
        }
    }
}

/// The wheel letter: A is the minor ring, B the major ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelLetter {
    A,
    B,
}

impl WheelLetter {
    /// The other ring.
    pub fn opposite(self) -> WheelLetter {
        match self {
            WheelLetter::A => WheelLetter::B,
            WheelLetter::B => WheelLetter::A,
        }
    }

    /// The key mode this ring holds.
    pub fn mode(self) -> KeyMode {
        match self {
            WheelLetter::A => KeyMode::Minor,
            WheelLetter::B => KeyMode::Major,
        }
    }
}

impl fmt::Display for WheelLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WheelLetter::A => "A",
            WheelLetter::B => "B",
        })
    }
}

/// One of the 24 positions on the Camelot wheel, e.g. `5B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelPosition {
    number: u8,
    letter: WheelLetter,
}

impl WheelPosition {
    /// Construct a position, validating the number range.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{WheelLetter, WheelPosition};
    ///
    /// let pos = WheelPosition::new(5, WheelLetter::B).unwrap();
    /// assert_eq!(pos.to_string(), "5B");
    /// assert!(WheelPosition::new(13, WheelLetter::A).is_err());
    /// ```
    pub fn new(number: u8, letter: WheelLetter) -> Result<Self> {
        if !(1..=12).contains(&number) {
            return Err(Error::OutOfRange {
                name: "wheel_number",
                value: number as i64,
                min: 1,
                max: 12,
            });
        }
        Ok(Self { number, letter })
    }

    /// The wheel number, 1-12.
    pub fn number(self) -> u8 {
        self.number
    }

    /// The wheel letter (A = minor ring, B = major ring).
    pub fn letter(self) -> WheelLetter {
        self.letter
    }

    // Numbers are 1-based, so the usual mod-12 result of 0 wraps to 12.
    fn step(self, delta: i8) -> u8 {
        let shifted = (self.number as i16 - 1 + delta as i16).rem_euclid(12);
        (shifted + 1) as u8
    }

    /// Same number, opposite letter: the relative major/minor switch.
    pub fn relative(self) -> WheelPosition {
        WheelPosition {
            number: self.number,
            letter: self.letter.opposite(),
        }
    }

    /// Same letter, number + 1 with wraparound: a perfect fifth up.
    pub fn fifth_up(self) -> WheelPosition {
        WheelPosition {
            number: self.step(1),
            letter: self.letter,
        }
    }

    /// Same letter, number - 1 with wraparound: a perfect fifth down.
    pub fn fifth_down(self) -> WheelPosition {
        WheelPosition {
            number: self.step(-1),
            letter: self.letter,
        }
    }

    /// Opposite letter, number + 1 with wraparound: the diagonal
    /// "energy boost" move.
    pub fn diagonal(self) -> WheelPosition {
        WheelPosition {
            number: self.step(1),
            letter: self.letter.opposite(),
        }
    }
}

impl fmt::Display for WheelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

impl FromStr for WheelPosition {
    type Err = Error;

    /// Parse Camelot notation such as `"5B"`. Case-insensitive in the
    /// letter; the number must land in 1-12.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidWheelPosition {
                input: s.to_string(),
                reason: "empty notation",
            });
        }
        let last = s.chars().next_back().map_or(0, char::len_utf8);
        let (digits, letter_str) = s.split_at(s.len() - last);
        let letter = match letter_str {
            "A" | "a" => WheelLetter::A,
            "B" | "b" => WheelLetter::B,
            _ => {
                return Err(Error::InvalidWheelPosition {
                    input: s.to_string(),
                    reason: "letter must be A or B",
                })
            }
        };
        // Parse wide so any well-formed number range-checks uniformly.
        let number: i64 = digits.parse().map_err(|_| Error::InvalidWheelPosition {
            input: s.to_string(),
            reason: "number must be a positive integer",
        })?;
        if !(1..=12).contains(&number) {
            return Err(Error::OutOfRange {
                name: "wheel_number",
                value: number,
                min: 1,
                max: 12,
            });
        }
        WheelPosition::new(number as u8, letter)
    }
}

/// A harmonically compatible neighbor of a wheel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibleKey {
    /// The neighboring wheel position.
    pub position: WheelPosition,
    /// Its key label, e.g. `"G"` or `"Am"`.
    pub key: String,
    /// Why the neighbor is compatible.
    pub relationship: &'static str,
}

/// A scale expansion bundled with its wheel position and compatible keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleWithCamelot {
    pub camelot: WheelPosition,
    pub frequencies: Vec<(String, f32)>,
    pub compatible_keys: Vec<CompatibleKey>,
}

/// The bijection between (key, mode) pairs and wheel positions, plus the
/// four-neighbor compatibility lookup.
///
/// The inverse maps are seeded once at construction. Each ring is a
/// permutation of the 12 pitch classes, so once a key name normalizes, its
/// position lookup cannot miss; flat-spelled keys resolve through the
/// enharmonic alias table to the same position.
#[derive(Debug, Clone)]
pub struct CamelotWheel {
    // Wheel number by pitch class, one map per ring.
    major_numbers: [u8; 12],
    minor_numbers: [u8; 12],
}

impl Default for CamelotWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl CamelotWheel {
    /// Build the pitch-class → wheel-number inverse maps for both rings.
    pub fn new() -> Self {
        let mut major_numbers = [0u8; 12];
        let mut minor_numbers = [0u8; 12];
        for i in 0..12 {
            major_numbers[MAJOR_RING[i]] = (i + 1) as u8;
            minor_numbers[MINOR_RING[i]] = (i + 1) as u8;
        }
        Self {
            major_numbers,
            minor_numbers,
        }
    }

    /// The wheel position of a key. Flat spellings are accepted.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{CamelotWheel, KeyMode};
    ///
    /// let wheel = CamelotWheel::new();
    /// let pos = wheel.position("C", KeyMode::Major).unwrap();
    /// assert_eq!(pos.to_string(), "5B");
    /// // Enharmonic spellings share a position
    /// assert_eq!(
    ///     wheel.position("C#", KeyMode::Major).unwrap(),
    ///     wheel.position("Db", KeyMode::Major).unwrap(),
    /// );
    /// ```
    pub fn position(&self, key: &str, mode: KeyMode) -> Result<WheelPosition> {
        let pc = pitch_class(key)?;
        let (number, letter) = match mode {
            KeyMode::Major => (self.major_numbers[pc], WheelLetter::B),
            KeyMode::Minor => (self.minor_numbers[pc], WheelLetter::A),
        };
        Ok(WheelPosition { number, letter })
    }

    /// The wheel position of a key label, where a trailing `m` marks minor
    /// (`"Am"` is A minor, `"C"` is C major).
    pub fn position_of_label(&self, label: &str) -> Result<WheelPosition> {
        match label.strip_suffix('m') {
            Some(key) if !key.is_empty() => self.position(key, KeyMode::Minor),
            _ => self.position(label, KeyMode::Major),
        }
    }

    /// The (key, mode) pair at a wheel position. Total over valid positions.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{CamelotWheel, KeyMode};
    ///
    /// let wheel = CamelotWheel::new();
    /// let pos = "5B".parse().unwrap();
    /// assert_eq!(wheel.key_of(pos), ("C", KeyMode::Major));
    /// ```
    pub fn key_of(&self, pos: WheelPosition) -> (&'static str, KeyMode) {
        let ring = match pos.letter {
            WheelLetter::B => &MAJOR_RING,
            WheelLetter::A => &MINOR_RING,
        };
        (NOTES[ring[(pos.number - 1) as usize]], pos.letter.mode())
    }

    /// The key label at a position: the note name with an `m` suffix on the
    /// minor ring (`"Am"`), bare on the major ring (`"C"`).
    pub fn key_label_of(&self, pos: WheelPosition) -> String {
        let (key, mode) = self.key_of(pos);
        match mode {
            KeyMode::Major => key.to_string(),
            KeyMode::Minor => format!("{}m", key),
        }
    }

    /// The four canonical harmonically compatible neighbors of a position,
    /// computed arithmetically, in canonical order: relative switch, fifth
    /// up, fifth down, diagonal.
    ///
    /// # Example
    /// ```
    /// use tonewheel::CamelotWheel;
    ///
    /// let wheel = CamelotWheel::new();
    /// let compatible = wheel.compatible("5B".parse().unwrap());
    /// assert_eq!(compatible.len(), 4);
    /// assert_eq!(compatible[0].key, "Am"); // relative minor
    /// assert_eq!(compatible[1].key, "G");  // fifth up
    /// ```
    pub fn compatible(&self, pos: WheelPosition) -> Vec<CompatibleKey> {
        [
            (pos.relative(), "relative major/minor switch"),
            (pos.fifth_up(), "perfect fifth up"),
            (pos.fifth_down(), "perfect fifth down"),
            (pos.diagonal(), "diagonal energy move"),
        ]
        .into_iter()
        .map(|(position, relationship)| CompatibleKey {
            position,
            key: self.key_label_of(position),
            relationship,
        })
        .collect()
    }

    /// Expand a scale and bundle it with its wheel position and the four
    /// compatible keys. Scale types other than `"minor"` sit on the major
    /// ring, matching how DJ software files non-minor keys.
    pub fn scale_with_camelot(
        &self,
        tuning: &WesternTuning,
        root: &str,
        octave: i32,
        scale_type: &str,
    ) -> Result<ScaleWithCamelot> {
        let frequencies = tuning.scale(root, octave, scale_type)?;
        let mode = if scale_type == "minor" {
            KeyMode::Minor
        } else {
            KeyMode::Major
        };
        let camelot = self.position(root, mode)?;
        Ok(ScaleWithCamelot {
            camelot,
            frequencies,
            compatible_keys: self.compatible(camelot),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_is_a_bijection() {
        let wheel = CamelotWheel::new();
        // Every pitch class got a wheel number, so each ring is a permutation.
        assert!(wheel.major_numbers.iter().all(|&n| (1..=12).contains(&n)));
        assert!(wheel.minor_numbers.iter().all(|&n| (1..=12).contains(&n)));
        for number in 1..=12u8 {
            for letter in [WheelLetter::A, WheelLetter::B] {
                let pos = WheelPosition::new(number, letter).unwrap();
                let (key, mode) = wheel.key_of(pos);
                assert_eq!(wheel.position(key, mode).unwrap(), pos);
            }
        }
    }

    #[test]
    fn rings_hold_relative_pairs() {
        // Each minor-ring key sits three semitones below its major partner.
        for (&major, &minor) in MAJOR_RING.iter().zip(MINOR_RING.iter()) {
            assert_eq!((major + 9) % 12, minor);
        }
    }

    #[test]
    fn step_wraps_one_based() {
        let twelve_b: WheelPosition = "12B".parse().unwrap();
        assert_eq!(twelve_b.fifth_up().to_string(), "1B");
        let one_a: WheelPosition = "1A".parse().unwrap();
        assert_eq!(one_a.fifth_down().to_string(), "12A");
    }
}
