//! The seven Western diatonic modes and their emotional compatibility graph.
//!
//! Every mode's interval vector is a rotation of the major scale, and every
//! mode carries fixed emotional metadata (primary emotion, energy 1-10,
//! intensity 1-10) plus a directed adjacency list of modes reachable by one
//! compatible transition. The adjacency is deliberately asymmetric: Locrian
//! transitions only to Phrygian, even though several modes reach Locrian.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph;
use crate::rasa::{NavarasaWheel, Rasa};
use crate::western::WesternTuning;

/// Default bound on transition-path edges.
pub const DEFAULT_MAX_STEPS: usize = 3;

/// The seven diatonic modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

/// Direction of an energy or intensity change across a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Boost,
    Reduction,
    Maintenance,
}

impl Shift {
    /// Classify the move from `source` to `target` level.
    pub fn classify(source: u8, target: u8) -> Shift {
        match target.cmp(&source) {
            std::cmp::Ordering::Greater => Shift::Boost,
            std::cmp::Ordering::Less => Shift::Reduction,
            std::cmp::Ordering::Equal => Shift::Maintenance,
        }
    }

    /// Absolute percent change from `source` to `target` level.
    pub fn percent_change(source: u8, target: u8) -> f32 {
        ((target as f32 - source as f32) / source as f32 * 100.0).abs()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shift::Boost => "boost",
            Shift::Reduction => "reduction",
            Shift::Maintenance => "maintenance",
        })
    }
}

/// Fixed emotional metadata of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeProfile {
    pub primary: &'static str,
    pub character: &'static str,
    pub moods: &'static [&'static str],
    pub western_parallel: &'static str,
    pub energy_level: u8,
    pub emotional_intensity: u8,
}

/// Historical usage notes for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeHistory {
    pub eras: &'static [&'static str],
    pub prominence: &'static str,
    pub contexts: &'static [&'static str],
}

impl Mode {
    /// All modes in rotation order (Ionian first).
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }

    /// Semitone offsets from the root. Each vector is a rotation of the
    /// major scale `[0, 2, 4, 5, 7, 9, 11]`.
    ///
    /// # Example
    /// ```
    /// use tonewheel::Mode;
    ///
    /// assert_eq!(Mode::Dorian.intervals(), [0, 2, 3, 5, 7, 9, 10]);
    /// assert_eq!(Mode::Ionian.intervals(), [0, 2, 4, 5, 7, 9, 11]);
    /// ```
    pub fn intervals(self) -> [i32; 7] {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// The mode's fixed emotional metadata.
    pub fn profile(self) -> ModeProfile {
        match self {
            Mode::Ionian => ModeProfile {
                primary: "Joy",
                character: "Happy, stable, resolved",
                moods: &["Cheerful", "Confident", "Triumphant", "Straightforward"],
                western_parallel: "Major scale",
                energy_level: 8,
                emotional_intensity: 7,
            },
            Mode::Dorian => ModeProfile {
                primary: "Serious",
                character: "Contemplative, balanced, sophisticated",
                moods: &["Melancholic", "Dignified", "Mysterious", "Introspective"],
                western_parallel: "Minor scale with raised 6th",
                energy_level: 5,
                emotional_intensity: 6,
            },
            Mode::Phrygian => ModeProfile {
                primary: "Tension",
                character: "Exotic, dark, intense",
                moods: &["Mystical", "Exotic", "Tense", "Yearning"],
                western_parallel: "Spanish/Flamenco sound",
                energy_level: 6,
                emotional_intensity: 8,
            },
            Mode::Lydian => ModeProfile {
                primary: "Wonder",
                character: "Bright, dreamlike, transcendent",
                moods: &["Magical", "Ethereal", "Floating", "Whimsical"],
                western_parallel: "Sci-fi/Fantasy sound",
                energy_level: 7,
                emotional_intensity: 6,
            },
            Mode::Mixolydian => ModeProfile {
                primary: "Playful",
                character: "Bluesy, restless, adventurous",
                moods: &["Folky", "Rustic", "Unresolved", "Wandering"],
                western_parallel: "Blues/Rock sound",
                energy_level: 9,
                emotional_intensity: 8,
            },
            Mode::Aeolian => ModeProfile {
                primary: "Sadness",
                character: "Melancholic, emotional, natural",
                moods: &["Sorrowful", "Brooding", "Reflective", "Serious"],
                western_parallel: "Natural minor scale",
                energy_level: 4,
                emotional_intensity: 9,
            },
            Mode::Locrian => ModeProfile {
                primary: "Instability",
                character: "Anxious, unstable, dissonant",
                moods: &["Tense", "Uncertain", "Chaotic", "Disoriented"],
                western_parallel: "Diminished scale feel",
                energy_level: 7,
                emotional_intensity: 10,
            },
        }
    }

    /// Modes reachable by one compatible emotional transition, in
    /// declaration order (the order decides BFS tie-breaks).
    pub fn compatible(self) -> &'static [Mode] {
        match self {
            Mode::Ionian => &[Mode::Mixolydian, Mode::Lydian, Mode::Dorian],
            Mode::Dorian => &[Mode::Aeolian, Mode::Phrygian, Mode::Mixolydian, Mode::Ionian],
            Mode::Phrygian => &[Mode::Aeolian, Mode::Dorian, Mode::Locrian],
            Mode::Lydian => &[Mode::Ionian, Mode::Mixolydian, Mode::Dorian, Mode::Aeolian],
            Mode::Mixolydian => &[Mode::Ionian, Mode::Dorian, Mode::Lydian, Mode::Aeolian],
            Mode::Aeolian => &[Mode::Dorian, Mode::Phrygian, Mode::Mixolydian, Mode::Lydian],
            Mode::Locrian => &[Mode::Phrygian],
        }
    }

    /// Rasa equivalents of this mode's emotional territory.
    pub fn rasas(self) -> &'static [Rasa] {
        match self {
            Mode::Ionian => &[Rasa::Sringara, Rasa::Haasya],
            Mode::Dorian => &[Rasa::Adbutham, Rasa::Saantha],
            Mode::Phrygian => &[Rasa::Bhayaanaka, Rasa::Beebhatsa],
            Mode::Lydian => &[Rasa::Adbutham, Rasa::Sringara],
            Mode::Mixolydian => &[Rasa::Veera, Rasa::Haasya],
            Mode::Aeolian => &[Rasa::Karuna],
            Mode::Locrian => &[Rasa::Raudra, Rasa::Bhayaanaka],
        }
    }

    /// Instruments that emphasize the mode's character.
    pub fn instruments(self) -> &'static [&'static str] {
        match self {
            Mode::Ionian => &["Piano", "Trumpet", "Violin", "Orchestra"],
            Mode::Dorian => &["Guitar", "Piano", "Saxophone", "Clarinet"],
            Mode::Phrygian => &["Flamenco guitar", "Oud", "Sitar", "Oboe"],
            Mode::Lydian => &["Harp", "Vibraphone", "Flute", "Synthesizer"],
            Mode::Mixolydian => &["Electric guitar", "Fiddle", "Bagpipes", "Banjo"],
            Mode::Aeolian => &["Cello", "Piano", "Violin", "Guitar"],
            Mode::Locrian => &["Percussion", "Prepared piano", "Distorted guitar", "Synthesizer"],
        }
    }

    /// Historical usage notes.
    pub fn history(self) -> ModeHistory {
        match self {
            Mode::Ionian => ModeHistory {
                eras: &["Renaissance", "Classical", "Baroque", "Modern"],
                prominence: "Dominant from Common Practice Period onward",
                contexts: &["Hymns", "Anthems", "Triumphant pieces"],
            },
            Mode::Dorian => ModeHistory {
                eras: &["Medieval", "Renaissance", "Folk", "Jazz", "Modern"],
                prominence: "Common in early church music, folk music",
                contexts: &["Folk songs", "Modal jazz", "Renaissance polyphony"],
            },
            Mode::Phrygian => ModeHistory {
                eras: &["Medieval", "Renaissance", "Flamenco", "Modern"],
                prominence: "Spanish music, metal, film scoring",
                contexts: &["Spanish music", "Metal", "Exotic film scoring"],
            },
            Mode::Lydian => ModeHistory {
                eras: &["Medieval", "Jazz", "Film", "Modern"],
                prominence: "Popular in film music, jazz",
                contexts: &["Film scores", "Jazz improvisation", "Dream sequences"],
            },
            Mode::Mixolydian => ModeHistory {
                eras: &["Medieval", "Folk", "Rock", "Jazz", "Modern"],
                prominence: "Common in Celtic folk, rock, blues",
                contexts: &["Folk music", "Blues", "Rock", "Jazz dominant chords"],
            },
            Mode::Aeolian => ModeHistory {
                eras: &["Baroque", "Romantic", "Pop", "Rock", "Modern"],
                prominence: "Dominant minor mode since Baroque era",
                contexts: &["Pop/Rock", "Film music", "Classical minor key works"],
            },
            Mode::Locrian => ModeHistory {
                eras: &["Modern", "Contemporary", "Avant-garde"],
                prominence: "Rare, mostly theoretical until 20th century",
                contexts: &["Experimental music", "Modern jazz", "Metal"],
            },
        }
    }

    /// Common chord progressions that exemplify the mode, in Roman numerals.
    pub fn chord_progressions(self) -> &'static [&'static str] {
        match self {
            Mode::Ionian => &[
                "I - IV - V - I",
                "I - vi - IV - V",
                "I - V - vi - IV",
                "I - IV - I - V",
            ],
            Mode::Dorian => &["i - IV - i", "i - IV - VII", "i - IV - v - i", "i - VII - IV - i"],
            Mode::Phrygian => &[
                "i - ♭II - i",
                "i - ♭II - ♭VII - i",
                "i - v - ♭II - i",
                "i - ♭II - ♭III - ♭II",
            ],
            Mode::Lydian => &["I - II - I", "I - II - vii - I", "I - II - V - I", "I - II - IV# - I"],
            Mode::Mixolydian => &[
                "I - ♭VII - I",
                "I - ♭VII - IV - I",
                "I - v - ♭VII - IV",
                "I - ♭VII - v - IV",
            ],
            Mode::Aeolian => &[
                "i - ♭VI - ♭VII - i",
                "i - ♭VII - ♭VI - i",
                "i - iv - ♭VII - i",
                "i - v - ♭VI - ♭VII",
            ],
            Mode::Locrian => &[
                "i° - ♭II - ♭VII - i°",
                "i° - ♭V - ♭II - i°",
                "i° - ♭II - ♭III - i°",
                "i° - ♭VII - ♭VI - ♭VII",
            ],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::UnknownMode {
                name: s.to_string(),
                valid: Mode::ALL
                    .iter()
                    .map(|m| m.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Detail of one compatible transition between modes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTransition {
    pub target: Mode,
    pub primary_emotion: &'static str,
    pub character: &'static str,
    pub energy_shift: Shift,
    pub intensity_shift: Shift,
    /// `abs((target_energy - source_energy) / source_energy) * 100`.
    pub energy_difference_percent: f32,
    pub energy_level: u8,
    pub emotional_intensity: u8,
    pub recommended_instruments: &'static [&'static str],
}

/// Mode frequencies next to the related rasas and an example raga.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeRagaComparison {
    pub mode: Mode,
    pub root: String,
    pub octave: i32,
    pub corresponding_rasas: &'static [Rasa],
    pub emotional_character: &'static str,
    pub western_frequencies: Vec<(String, f32)>,
    pub related_ragas: Vec<&'static str>,
    pub example_raga_frequencies: Vec<(String, f32)>,
}

/// Modal frequency expansion plus the emotional transition graph, anchored
/// at a tunable A4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeWheel {
    western: WesternTuning,
}

impl Default for ModeWheel {
    fn default() -> Self {
        Self::new(440.0)
    }
}

impl ModeWheel {
    /// Create a mode wheel with the given A4 reference frequency in Hz.
    pub fn new(reference_a4: f32) -> Self {
        Self {
            western: WesternTuning::new(reference_a4),
        }
    }

    /// The underlying equal-tempered calculator.
    pub fn tuning(&self) -> &WesternTuning {
        &self.western
    }

    /// Frequencies for all notes of a mode rooted at a note/octave, in
    /// interval order with octave carry.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{Mode, ModeWheel};
    ///
    /// let mw = ModeWheel::default();
    /// let dorian = mw.mode_frequencies(Mode::Dorian, "D", 4).unwrap();
    /// assert_eq!(dorian.len(), 7);
    /// assert_eq!(dorian[0].0, "D4");
    /// ```
    pub fn mode_frequencies(
        &self,
        mode: Mode,
        root: &str,
        octave: i32,
    ) -> Result<Vec<(String, f32)>> {
        let root_index = crate::western::pitch_class(root)? as i32;

        let mut scale = Vec::with_capacity(7);
        for interval in mode.intervals() {
            let position = root_index + interval;
            let note = crate::western::NOTES[(position % 12) as usize];
            let actual_octave = octave + position / 12;
            let freq = self.western.frequency(note, actual_octave)?;
            scale.push((format!("{}{}", note, actual_octave), freq));
        }
        Ok(scale)
    }

    /// Transition detail for every one-hop compatible mode, in adjacency
    /// order.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{Mode, ModeWheel};
    /// use tonewheel::modes::Shift;
    ///
    /// let mw = ModeWheel::default();
    /// let transitions = mw.compatible_transitions(Mode::Ionian);
    /// // Ionian (energy 8) -> Mixolydian (energy 9) is a boost
    /// assert_eq!(transitions[0].target, Mode::Mixolydian);
    /// assert_eq!(transitions[0].energy_shift, Shift::Boost);
    /// assert!((transitions[0].energy_difference_percent - 12.5).abs() < 1e-4);
    /// ```
    pub fn compatible_transitions(&self, mode: Mode) -> Vec<ModeTransition> {
        let source = mode.profile();
        mode.compatible()
            .iter()
            .map(|&target| {
                let profile = target.profile();
                ModeTransition {
                    target,
                    primary_emotion: profile.primary,
                    character: profile.character,
                    energy_shift: Shift::classify(source.energy_level, profile.energy_level),
                    intensity_shift: Shift::classify(
                        source.emotional_intensity,
                        profile.emotional_intensity,
                    ),
                    energy_difference_percent: Shift::percent_change(
                        source.energy_level,
                        profile.energy_level,
                    ),
                    energy_level: profile.energy_level,
                    emotional_intensity: profile.emotional_intensity,
                    recommended_instruments: target.instruments(),
                }
            })
            .collect()
    }

    /// Shortest emotional transition path between two modes using at most
    /// `max_steps` transitions, or `None` when no such path exists.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{Mode, ModeWheel};
    ///
    /// let mw = ModeWheel::default();
    /// let path = mw.transition_path(Mode::Ionian, Mode::Aeolian, 3).unwrap();
    /// assert_eq!(path.first(), Some(&Mode::Ionian));
    /// assert_eq!(path.last(), Some(&Mode::Aeolian));
    ///
    /// // Lydian and Locrian share no direct edge
    /// assert!(mw.transition_path(Mode::Lydian, Mode::Locrian, 1).is_none());
    /// ```
    pub fn transition_path(&self, start: Mode, end: Mode, max_steps: usize) -> Option<Vec<Mode>> {
        graph::shortest_path(start, end, max_steps, |m| m.compatible().iter().copied())
    }

    /// Compare a mode to the ragas related through its rasa equivalents.
    ///
    /// The example frequencies come from the first related raga that has a
    /// frequency table; ragas without one are listed but not expanded.
    pub fn compare_to_raga(
        &self,
        mode: Mode,
        root: &str,
        octave: i32,
        navarasa: &NavarasaWheel,
    ) -> Result<ModeRagaComparison> {
        let western_frequencies = self.mode_frequencies(mode, root, octave)?;
        let corresponding_rasas = mode.rasas();

        let mut related_ragas: Vec<&'static str> = Vec::new();
        for &rasa in corresponding_rasas {
            for &raga in rasa.ragas() {
                if !related_ragas.contains(&raga) {
                    related_ragas.push(raga);
                }
            }
        }

        let example_raga_frequencies = related_ragas
            .iter()
            .find_map(|raga| navarasa.raga_frequencies(raga).ok())
            .unwrap_or_default();

        Ok(ModeRagaComparison {
            mode,
            root: root.to_string(),
            octave,
            corresponding_rasas,
            emotional_character: mode.profile().character,
            western_frequencies,
            related_ragas,
            example_raga_frequencies,
        })
    }
}
