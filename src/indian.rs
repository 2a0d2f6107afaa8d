//! Just-intonation frequency calculations for Indian classical music.
//!
//! The 22 shrutis are fixed rational intervals spanning exactly one octave
//! above Sa. Swaras resolve to shrutis through their variant (komal, shuddha,
//! tivra where applicable); Sa and Pa have a single form and ignore the
//! requested variant.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The 22 shruti ratios relative to Sa, as exact rationals in `[1, 2)`.
///
/// Index 0 is shruti 1 (Sa itself), index 21 is shruti 22 (Tivra Ni).
const SHRUTI_RATIOS: [(u32, u32); 22] = [
    (1, 1),     // 1: Sa (Shadja)
    (256, 243), // 2: Komal Re (Suddha Rishabha)
    (16, 15),   // 3: Re (Chyuta Rishabha)
    (10, 9),    // 4: Shuddha Re (Tivra Rishabha)
    (9, 8),     // 5: Tivra Re (Tivratara Rishabha)
    (32, 27),   // 6: Komal Ga (Suddha Gandhara)
    (6, 5),     // 7: Ga (Chyuta Gandhara)
    (5, 4),     // 8: Shuddha Ga (Antara Gandhara)
    (81, 64),   // 9: Tivra Ga (Tivra Gandhara)
    (4, 3),     // 10: Ma (Suddha Madhyama)
    (27, 20),   // 11: Tivra Ma (Tivra Madhyama)
    (45, 32),   // 12: Tivratar Ma (Prati Madhyama)
    (729, 512), // 13: Ati-Tivra Ma
    (3, 2),     // 14: Pa (Panchama)
    (128, 81),  // 15: Komal Dha (Suddha Dhaivata)
    (8, 5),     // 16: Dha (Chyuta Dhaivata)
    (5, 3),     // 17: Shuddha Dha (Antara Dhaivata)
    (27, 16),   // 18: Tivra Dha (Tivra Dhaivata)
    (16, 9),    // 19: Komal Ni (Suddha Nishada)
    (9, 5),     // 20: Ni (Chyuta Nishada)
    (15, 8),    // 21: Shuddha Ni (Kakali Nishada)
    (243, 128), // 22: Tivra Ni (Tivra Nishada)
];

/// The seven swaras of the saptak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swara {
    Sa,
    Re,
    Ga,
    Ma,
    Pa,
    Dha,
    Ni,
}

/// Swara variants. Not every variant is defined for every swara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Komal,
    Shuddha,
    Tivra,
}

impl Swara {
    /// All swaras in saptak order.
    pub const ALL: [Swara; 7] = [
        Swara::Sa,
        Swara::Re,
        Swara::Ga,
        Swara::Ma,
        Swara::Pa,
        Swara::Dha,
        Swara::Ni,
    ];

    /// The swara's name as written in notation.
    pub fn name(self) -> &'static str {
        match self {
            Swara::Sa => "Sa",
            Swara::Re => "Re",
            Swara::Ga => "Ga",
            Swara::Ma => "Ma",
            Swara::Pa => "Pa",
            Swara::Dha => "Dha",
            Swara::Ni => "Ni",
        }
    }

    /// True for Sa and Pa, which have exactly one form.
    pub fn is_fixed(self) -> bool {
        matches!(self, Swara::Sa | Swara::Pa)
    }

    /// The variants defined for this swara, in table order.
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Swara::Sa | Swara::Pa => &[Variant::Shuddha],
            Swara::Re | Swara::Ga | Swara::Dha | Swara::Ni => {
                &[Variant::Komal, Variant::Shuddha]
            }
            Swara::Ma => &[Variant::Shuddha, Variant::Tivra],
        }
    }

    fn variant_names(self) -> &'static str {
        match self {
            Swara::Sa | Swara::Pa => "shuddha",
            Swara::Re | Swara::Ga | Swara::Dha | Swara::Ni => "komal, shuddha",
            Swara::Ma => "shuddha, tivra",
        }
    }

    /// Resolve this swara plus variant to its shruti number (1-22).
    ///
    /// Sa and Pa ignore the variant. A variant not defined for the swara
    /// fails with [`Error::InvalidVariant`] naming the valid options.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{Swara, Variant};
    ///
    /// assert_eq!(Swara::Pa.shruti(Variant::Shuddha).unwrap(), 14);
    /// assert_eq!(Swara::Ma.shruti(Variant::Tivra).unwrap(), 13);
    /// assert!(Swara::Re.shruti(Variant::Tivra).is_err());
    /// ```
    pub fn shruti(self, variant: Variant) -> Result<u8> {
        let shruti = match (self, variant) {
            (Swara::Sa, _) => 1,
            (Swara::Pa, _) => 14,
            (Swara::Re, Variant::Komal) => 3,
            (Swara::Re, Variant::Shuddha) => 5,
            (Swara::Ga, Variant::Komal) => 6,
            (Swara::Ga, Variant::Shuddha) => 8,
            (Swara::Ma, Variant::Shuddha) => 10,
            (Swara::Ma, Variant::Tivra) => 13,
            (Swara::Dha, Variant::Komal) => 16,
            (Swara::Dha, Variant::Shuddha) => 17,
            (Swara::Ni, Variant::Komal) => 19,
            (Swara::Ni, Variant::Shuddha) => 21,
            _ => {
                return Err(Error::InvalidVariant {
                    swara: self.name(),
                    variant: variant.to_string(),
                    valid: self.variant_names(),
                })
            }
        };
        Ok(shruti)
    }
}

impl fmt::Display for Swara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Swara {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Swara::ALL
            .iter()
            .copied()
            .find(|sw| sw.name() == s)
            .ok_or_else(|| Error::UnknownNote {
                name: s.to_string(),
                valid: "Sa, Re, Ga, Ma, Pa, Dha, Ni".to_string(),
            })
    }
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Komal => "komal",
            Variant::Shuddha => "shuddha",
            Variant::Tivra => "tivra",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "komal" => Ok(Variant::Komal),
            "shuddha" => Ok(Variant::Shuddha),
            "tivra" => Ok(Variant::Tivra),
            _ => Err(Error::InvalidVariant {
                swara: "swara",
                variant: s.to_string(),
                valid: "komal, shuddha, tivra",
            }),
        }
    }
}

use Swara::*;
use Variant::*;

/// Common ragas as ordered (swara, variant) lists. The ordering is
/// authoritative; raga frequencies are emitted in exactly this order.
const RAGAS: [(&str, [(Swara, Variant); 7]); 5] = [
    (
        "Bhairav",
        [
            (Sa, Shuddha),
            (Re, Komal),
            (Ga, Shuddha),
            (Ma, Shuddha),
            (Pa, Shuddha),
            (Dha, Komal),
            (Ni, Shuddha),
        ],
    ),
    (
        "Yaman",
        [
            (Sa, Shuddha),
            (Re, Shuddha),
            (Ga, Shuddha),
            (Ma, Tivra),
            (Pa, Shuddha),
            (Dha, Shuddha),
            (Ni, Shuddha),
        ],
    ),
    (
        "Bhairavi",
        [
            (Sa, Shuddha),
            (Re, Komal),
            (Ga, Komal),
            (Ma, Shuddha),
            (Pa, Shuddha),
            (Dha, Komal),
            (Ni, Komal),
        ],
    ),
    (
        "Todi",
        [
            (Sa, Shuddha),
            (Re, Komal),
            (Ga, Komal),
            (Ma, Tivra),
            (Pa, Shuddha),
            (Dha, Komal),
            (Ni, Komal),
        ],
    ),
    (
        "Kafi",
        [
            (Sa, Shuddha),
            (Re, Shuddha),
            (Ga, Komal),
            (Ma, Shuddha),
            (Pa, Shuddha),
            (Dha, Shuddha),
            (Ni, Komal),
        ],
    ),
];

fn valid_raga_names() -> String {
    RAGAS
        .iter()
        .map(|&(name, _)| name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Just-intonation frequency calculator anchored at a tunable Sa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndianTuning {
    reference_sa: f32,
}

impl Default for IndianTuning {
    /// Sa = 220 Hz.
    fn default() -> Self {
        Self::new(220.0)
    }
}

impl IndianTuning {
    /// Create a calculator with the given Sa reference frequency in Hz.
    pub fn new(reference_sa: f32) -> Self {
        Self { reference_sa }
    }

    /// The Sa reference frequency this calculator was built with.
    pub fn reference_sa(&self) -> f32 {
        self.reference_sa
    }

    /// Frequency of a shruti by number (1-22).
    ///
    /// # Example
    /// ```
    /// use tonewheel::IndianTuning;
    ///
    /// let it = IndianTuning::new(220.0);
    /// assert_eq!(it.shruti_frequency(1).unwrap(), 220.0);  // Sa
    /// assert_eq!(it.shruti_frequency(14).unwrap(), 330.0); // Pa, 3/2
    /// assert!(it.shruti_frequency(23).is_err());
    /// ```
    pub fn shruti_frequency(&self, shruti_number: i32) -> Result<f32> {
        if !(1..=22).contains(&shruti_number) {
            return Err(Error::OutOfRange {
                name: "shruti_number",
                value: shruti_number as i64,
                min: 1,
                max: 22,
            });
        }
        let (num, den) = SHRUTI_RATIOS[(shruti_number - 1) as usize];
        Ok(self.reference_sa * num as f32 / den as f32)
    }

    /// Frequency of a swara with the given variant.
    ///
    /// Sa and Pa ignore the variant; other swaras fail with
    /// [`Error::InvalidVariant`](crate::Error::InvalidVariant) when the
    /// variant is undefined for them.
    ///
    /// # Example
    /// ```
    /// use tonewheel::{IndianTuning, Swara, Variant};
    ///
    /// let it = IndianTuning::new(220.0);
    /// let ga = it.swara_frequency(Swara::Ga, Variant::Shuddha).unwrap();
    /// assert_eq!(ga, 275.0); // 220 * 5/4
    /// ```
    pub fn swara_frequency(&self, swara: Swara, variant: Variant) -> Result<f32> {
        self.shruti_frequency(swara.shruti(variant)? as i32)
    }

    /// The (swara, variant) specification of a named raga, in order.
    pub fn raga(&self, raga_name: &str) -> Result<&'static [(Swara, Variant)]> {
        RAGAS
            .iter()
            .find(|&&(name, _)| name == raga_name)
            .map(|(_, spec)| spec.as_slice())
            .ok_or_else(|| Error::UnknownRaga {
                name: raga_name.to_string(),
                valid: valid_raga_names(),
            })
    }

    /// Frequencies for all notes of a named raga, labeled `"Sa shuddha"`
    /// style in the raga's own order. Sa and Pa are always labeled shuddha.
    ///
    /// # Example
    /// ```
    /// use tonewheel::IndianTuning;
    ///
    /// let it = IndianTuning::new(220.0);
    /// let yaman = it.raga_frequencies("Yaman").unwrap();
    /// assert_eq!(yaman.len(), 7);
    /// assert!(yaman.iter().any(|(label, _)| label == "Ma tivra"));
    /// ```
    pub fn raga_frequencies(&self, raga_name: &str) -> Result<Vec<(String, f32)>> {
        let spec = self.raga(raga_name)?;
        let mut frequencies = Vec::with_capacity(spec.len());
        for &(swara, variant) in spec {
            let variant = if swara.is_fixed() { Shuddha } else { variant };
            let freq = self.swara_frequency(swara, variant)?;
            frequencies.push((format!("{} {}", swara, variant), freq));
        }
        Ok(frequencies)
    }

    /// All 22 shruti frequencies in order, labeled `"Shruti 1"`…`"Shruti 22"`.
    pub fn all_shrutis(&self) -> Vec<(String, f32)> {
        SHRUTI_RATIOS
            .iter()
            .enumerate()
            .map(|(i, &(num, den))| {
                let freq = self.reference_sa * num as f32 / den as f32;
                (format!("Shruti {}", i + 1), freq)
            })
            .collect()
    }

    /// List the supported raga names in table order.
    pub fn raga_names() -> Vec<&'static str> {
        RAGAS.iter().map(|&(name, _)| name).collect()
    }
}
