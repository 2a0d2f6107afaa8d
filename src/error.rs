/// Crate-level error type for the tonewheel music theory library.
///
/// Every variant is an immediate, synchronous validation failure: a name
/// missing from a static table, a variant undefined for a swara, or a value
/// outside its fixed range. The engine never recovers from these internally;
/// they surface directly to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Note name (or solfège syllable) not present in the chromatic table.
    #[error("unknown note `{name}`; valid names: {valid}")]
    UnknownNote { name: String, valid: String },

    /// Scale type not present in the pattern table.
    #[error("unknown scale type `{name}`; valid scale types: {valid}")]
    UnknownScale { name: String, valid: String },

    /// Raga name not present in the raga table.
    #[error("unknown raga `{name}`; valid ragas: {valid}")]
    UnknownRaga { name: String, valid: String },

    /// Mode name not one of the seven diatonic modes.
    #[error("unknown mode `{name}`; valid modes: {valid}")]
    UnknownMode { name: String, valid: String },

    /// Rasa name not one of the nine rasas.
    #[error("unknown rasa `{name}`; valid rasas: {valid}")]
    UnknownRasa { name: String, valid: String },

    /// Variant not defined for the given swara.
    #[error("invalid variant `{variant}` for {swara}; valid variants: {valid}")]
    InvalidVariant {
        swara: &'static str,
        variant: String,
        valid: &'static str,
    },

    /// Integer parameter outside its fixed range (shruti number, wheel number).
    #[error("`{name}` out of range: got {value}, expected {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Malformed Camelot wheel notation.
    #[error("invalid wheel position `{input}`: {reason}")]
    InvalidWheelPosition { input: String, reason: &'static str },
}

/// Convenience Result type for tonewheel operations.
pub type Result<T> = std::result::Result<T, Error>;
