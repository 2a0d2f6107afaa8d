//! The Navarasa — nine sentiments of Indian aesthetic theory — as an
//! emotional compatibility graph over ragas.
//!
//! Each rasa carries fixed metadata (English gloss, mood, traditional time
//! of day, color, energy 1-10), a list of traditionally associated ragas,
//! and a directed adjacency list of emotionally coherent transitions. Like
//! the mode graph, the adjacency is asymmetric and preserved exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph;
use crate::indian::IndianTuning;
use crate::modes::Shift;

/// The nine rasas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rasa {
    Sringara,
    Haasya,
    Karuna,
    Raudra,
    Veera,
    Bhayaanaka,
    Beebhatsa,
    Adbutham,
    Saantha,
}

/// Fixed descriptive metadata of a rasa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasaProfile {
    pub english: &'static str,
    pub mood: &'static str,
    pub time: &'static str,
    pub color: &'static str,
}

impl Rasa {
    /// All rasas in traditional order.
    pub const ALL: [Rasa; 9] = [
        Rasa::Sringara,
        Rasa::Haasya,
        Rasa::Karuna,
        Rasa::Raudra,
        Rasa::Veera,
        Rasa::Bhayaanaka,
        Rasa::Beebhatsa,
        Rasa::Adbutham,
        Rasa::Saantha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rasa::Sringara => "Sringara",
            Rasa::Haasya => "Haasya",
            Rasa::Karuna => "Karuna",
            Rasa::Raudra => "Raudra",
            Rasa::Veera => "Veera",
            Rasa::Bhayaanaka => "Bhayaanaka",
            Rasa::Beebhatsa => "Beebhatsa",
            Rasa::Adbutham => "Adbutham",
            Rasa::Saantha => "Saantha",
        }
    }

    /// The rasa's descriptive metadata.
    pub fn profile(self) -> RasaProfile {
        match self {
            Rasa::Sringara => RasaProfile {
                english: "Love/Erotic",
                mood: "Love",
                time: "Evening",
                color: "Light green",
            },
            Rasa::Haasya => RasaProfile {
                english: "Comedy/Laughter",
                mood: "Satire",
                time: "Morning",
                color: "White",
            },
            Rasa::Karuna => RasaProfile {
                english: "Compassion/Sympathy",
                mood: "Pathos",
                time: "Late evening",
                color: "Grey",
            },
            Rasa::Raudra => RasaProfile {
                english: "Anger/Fury",
                mood: "Fury",
                time: "Noon",
                color: "Red",
            },
            Rasa::Veera => RasaProfile {
                english: "Bravery/Heroism",
                mood: "Valour",
                time: "Dawn",
                color: "Yellow",
            },
            Rasa::Bhayaanaka => RasaProfile {
                english: "Terror/Fear",
                mood: "Fright",
                time: "Night",
                color: "Black",
            },
            Rasa::Beebhatsa => RasaProfile {
                english: "Disgust/Aversion",
                mood: "Aversion",
                time: "Dusk",
                color: "Blue",
            },
            Rasa::Adbutham => RasaProfile {
                english: "Wonder/Amazement",
                mood: "Amazement",
                time: "Midnight",
                color: "Yellow",
            },
            Rasa::Saantha => RasaProfile {
                english: "Peace/Tranquility",
                mood: "Serenity",
                time: "Late night",
                color: "White",
            },
        }
    }

    /// Energy level on a 1-10 scale (Veera highest, Saantha lowest).
    pub fn energy_level(self) -> u8 {
        match self {
            Rasa::Sringara => 7,
            Rasa::Haasya => 8,
            Rasa::Karuna => 3,
            Rasa::Raudra => 9,
            Rasa::Veera => 10,
            Rasa::Bhayaanaka => 6,
            Rasa::Beebhatsa => 5,
            Rasa::Adbutham => 7,
            Rasa::Saantha => 1,
        }
    }

    /// Ragas traditionally associated with this rasa.
    pub fn ragas(self) -> &'static [&'static str] {
        match self {
            Rasa::Sringara => &["Yaman", "Behag", "Hameer", "Tilak Kamod", "Desh"],
            Rasa::Haasya => &["Durga", "Pahadi", "Jog", "Nat Kamod", "Bahar"],
            Rasa::Karuna => &["Bhairavi", "Malkauns", "Bageshri", "Todi", "Bilaskhani Todi"],
            Rasa::Raudra => &["Bhairav", "Marwa", "Chandrakauns", "Shree", "Hindol"],
            Rasa::Veera => &["Bilawal", "Darbari", "Jaijaiwanti", "Maand", "Kedar"],
            Rasa::Bhayaanaka => &["Shree", "Purvi", "Gauri", "Lalit", "Vrindavani Sarang"],
            Rasa::Beebhatsa => &[
                "Todi",
                "Komal Rishabh Asavari",
                "Bhimpalasi",
                "Jogiya",
                "Vibhas",
            ],
            Rasa::Adbutham => &[
                "Darbari",
                "Miyan Ki Malhar",
                "Champakali",
                "Madhuvanti",
                "Gaud Sarang",
            ],
            Rasa::Saantha => &["Bhimpalasi", "Jaunpuri", "Ahir Bhairav", "Bairagi", "Pahadi"],
        }
    }

    /// Rasas reachable by one emotionally coherent transition, in
    /// declaration order (the order decides BFS tie-breaks).
    pub fn compatible(self) -> &'static [Rasa] {
        match self {
            Rasa::Sringara => &[Rasa::Haasya, Rasa::Adbutham, Rasa::Saantha, Rasa::Karuna],
            Rasa::Haasya => &[Rasa::Sringara, Rasa::Veera, Rasa::Adbutham, Rasa::Saantha],
            Rasa::Karuna => &[
                Rasa::Saantha,
                Rasa::Sringara,
                Rasa::Bhayaanaka,
                Rasa::Beebhatsa,
                Rasa::Veera,
            ],
            Rasa::Raudra => &[Rasa::Veera, Rasa::Bhayaanaka, Rasa::Beebhatsa],
            Rasa::Veera => &[
                Rasa::Raudra,
                Rasa::Haasya,
                Rasa::Adbutham,
                Rasa::Sringara,
                Rasa::Karuna,
            ],
            Rasa::Bhayaanaka => &[Rasa::Raudra, Rasa::Karuna, Rasa::Beebhatsa],
            Rasa::Beebhatsa => &[Rasa::Bhayaanaka, Rasa::Raudra, Rasa::Karuna],
            Rasa::Adbutham => &[Rasa::Sringara, Rasa::Veera, Rasa::Haasya, Rasa::Saantha],
            Rasa::Saantha => &[Rasa::Karuna, Rasa::Sringara, Rasa::Adbutham, Rasa::Haasya],
        }
    }

    /// Western musical qualities that correlate with this rasa.
    pub fn western_correlations(self) -> &'static [&'static str] {
        match self {
            Rasa::Sringara => &["Major", "Lydian", "major 7th chords"],
            Rasa::Haasya => &["Major pentatonic", "Mixolydian", "dominant 7th chords"],
            Rasa::Karuna => &["Minor", "Phrygian", "minor 7th chords"],
            Rasa::Raudra => &["Diminished", "Locrian", "diminished chords"],
            Rasa::Veera => &["Major", "Lydian dominant", "sus4 chords"],
            Rasa::Bhayaanaka => &["Half-diminished", "Locrian", "minor 7♭5 chords"],
            Rasa::Beebhatsa => &["Altered dominant", "Phrygian dominant", "altered chords"],
            Rasa::Adbutham => &["Augmented", "Whole tone", "augmented chords"],
            Rasa::Saantha => &["Natural minor", "Dorian", "minor 9th chords"],
        }
    }
}

impl fmt::Display for Rasa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rasa {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rasa::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| Error::UnknownRasa {
                name: s.to_string(),
                valid: Rasa::ALL
                    .iter()
                    .map(|r| r.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Detail of one compatible transition between rasas.
#[derive(Debug, Clone, PartialEq)]
pub struct RasaTransition {
    pub target: Rasa,
    pub transition_type: Shift,
    /// `abs((target_energy - source_energy) / source_energy) * 100`.
    pub energy_difference_percent: f32,
    pub energy_level: u8,
    pub description: &'static str,
    pub recommended_ragas: &'static [&'static str],
}

/// The rasa transition graph plus raga frequency lookups, anchored at a
/// tunable Sa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavarasaWheel {
    indian: IndianTuning,
}

impl Default for NavarasaWheel {
    fn default() -> Self {
        Self::new(220.0)
    }
}

impl NavarasaWheel {
    /// Create a navarasa wheel with the given Sa reference frequency in Hz.
    pub fn new(reference_sa: f32) -> Self {
        Self {
            indian: IndianTuning::new(reference_sa),
        }
    }

    /// The underlying just-intonation calculator.
    pub fn tuning(&self) -> &IndianTuning {
        &self.indian
    }

    /// All rasas associated with a raga; empty when the raga appears in no
    /// rasa's list.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{NavarasaWheel, Rasa};
    ///
    /// let nw = NavarasaWheel::default();
    /// assert!(nw.rasas_of_raga("Bhairav").contains(&Rasa::Raudra));
    /// assert!(nw.rasas_of_raga("Nonexistent").is_empty());
    /// ```
    pub fn rasas_of_raga(&self, raga: &str) -> Vec<Rasa> {
        Rasa::ALL
            .iter()
            .copied()
            .filter(|rasa| rasa.ragas().contains(&raga))
            .collect()
    }

    /// Frequencies for a raga through the just-intonation calculator.
    pub fn raga_frequencies(&self, raga_name: &str) -> Result<Vec<(String, f32)>> {
        self.indian.raga_frequencies(raga_name)
    }

    /// Transition detail for every one-hop compatible rasa, in adjacency
    /// order.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{NavarasaWheel, Rasa};
    /// use tonewheel::modes::Shift;
    ///
    /// let nw = NavarasaWheel::default();
    /// let transitions = nw.compatible_transitions(Rasa::Sringara);
    /// // Sringara (energy 7) -> Haasya (energy 8) is a boost
    /// assert_eq!(transitions[0].target, Rasa::Haasya);
    /// assert_eq!(transitions[0].transition_type, Shift::Boost);
    /// ```
    pub fn compatible_transitions(&self, rasa: Rasa) -> Vec<RasaTransition> {
        let source_energy = rasa.energy_level();
        rasa.compatible()
            .iter()
            .map(|&target| RasaTransition {
                target,
                transition_type: Shift::classify(source_energy, target.energy_level()),
                energy_difference_percent: Shift::percent_change(
                    source_energy,
                    target.energy_level(),
                ),
                energy_level: target.energy_level(),
                description: target.profile().english,
                recommended_ragas: target.ragas(),
            })
            .collect()
    }

    /// Shortest emotional transition path between two rasas using at most
    /// `max_steps` transitions, or `None` when no such path exists.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{NavarasaWheel, Rasa};
    ///
    /// let nw = NavarasaWheel::default();
    /// let path = nw.transition_path(Rasa::Karuna, Rasa::Veera, 3).unwrap();
    /// assert_eq!(path, vec![Rasa::Karuna, Rasa::Veera]);
    /// ```
    pub fn transition_path(&self, start: Rasa, end: Rasa, max_steps: usize) -> Option<Vec<Rasa>> {
        graph::shortest_path(start, end, max_steps, |r| r.compatible().iter().copied())
    }
}
