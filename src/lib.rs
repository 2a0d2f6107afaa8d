//! Tonal model and compatibility graph engine for Western and Indian
//! classical music.
//!
//! Tonewheel computes note and scale frequencies for two tuning systems —
//! 12-tone equal temperament anchored at a tunable A4, and 22-shruti just
//! intonation anchored at a tunable Sa — and layers three symbolic
//! compatibility graphs on top: the 24-position Camelot wheel for harmonic
//! mixing, and directed emotional-transition graphs over the seven Western
//! modes and the nine rasas of Indian aesthetic theory.
//!
//! # Features
//!
//! - **Western tuning** — equal-tempered note→Hz with enharmonic
//!   normalization, chromatic solfège, named scale patterns
//! - **Indian tuning** — 22 just-intonation shruti ratios, swara variants
//!   (komal/shuddha/tivra), named raga frequency tables
//! - **Camelot wheel** — bijective (key, mode) ↔ wheel-position mapping and
//!   the four canonical harmonically compatible neighbors
//! - **Emotional graphs** — energy-annotated transition graphs over modes
//!   and rasas, with bounded shortest-path search
//! - **Cross-system bridge** — raga → thaat → Western scale/key mapping,
//!   composed with the Camelot wheel and rasa correlations
//!
//! # Quick Start
//!
//! ```rust
//! use tonewheel::{CamelotWheel, IndianTuning, WesternTuning};
//!
//! let western = WesternTuning::default(); // A4 = 440 Hz
//! assert_eq!(western.frequency("A", 4).unwrap(), 440.0);
//!
//! let indian = IndianTuning::default(); // Sa = 220 Hz
//! assert_eq!(indian.shruti_frequency(14).unwrap(), 330.0); // Pa, 3/2
//!
//! let wheel = CamelotWheel::new();
//! let pos = wheel.position_of_label("Am").unwrap();
//! assert_eq!(pos.to_string(), "5A");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`western`] | Equal-tempered frequency calculator, solfège, scales |
//! | [`indian`] | Just-intonation shruti/swara calculator, ragas |
//! | [`camelot`] | Camelot wheel positions and harmonic compatibility |
//! | [`modes`] | Western modal emotion graph |
//! | [`rasa`] | Navarasa emotion graph |
//! | [`bridge`] | Raga/thaat to Western scale cross-system mapping |
//! | [`graph`] | Bounded breadth-first shortest-path utility |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers unknown
//! note/scale/raga/mode/rasa names (each message enumerates the valid
//! names), invalid swara variants, out-of-range shruti and wheel numbers,
//! and malformed Camelot notation. The engine never catches or substitutes
//! defaults for these — every contract violation surfaces to the caller.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` — no unsafe Rust anywhere.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod bridge;
pub mod camelot;
pub mod graph;
pub mod indian;
pub mod modes;
pub mod rasa;
pub mod western;

pub use camelot::{CamelotWheel, CompatibleKey, KeyMode, WheelLetter, WheelPosition};
pub use indian::{IndianTuning, Swara, Variant};
pub use modes::{Mode, ModeWheel};
pub use rasa::{NavarasaWheel, Rasa};
pub use western::WesternTuning;
