//! Error types for the enigma library.
//!
//! Two families exist: [`ConfigError`] is raised once while a machine is
//! being built and is fatal to that machine; [`EnigmaError::InvalidCharacter`]
//! is raised per keystroke and never disturbs rotor state.

use thiserror::Error;

/// Construction failures: bad rotor/reflector names, ring settings,
/// positions or plugboard leads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotor type name is not one of the known wirings.
    #[error("unknown rotor type '{0}'")]
    UnknownRotor(String),
    /// Reflector type name is not one of the known wirings.
    #[error("unknown reflector type '{0}'")]
    UnknownReflector(String),
    /// Ring settings or positions do not line up with the rotor list.
    #[error("{field} has {found} entries but {expected} rotors are configured")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// Ring setting outside the physical range [1, 26].
    #[error("ring setting {0} is outside the range 1..=26")]
    RingSettingOutOfRange(u8),
    /// Initial position is not a single letter A-Z.
    #[error("rotor position '{0}' is not a letter A-Z")]
    InvalidPosition(char),
    /// A machine needs at least one rotor in front of the reflector.
    #[error("at least one rotor is required")]
    EmptyRotorBank,
    /// Plug lead is not exactly two distinct letters.
    #[error("plug lead '{0}' must be exactly two distinct letters")]
    MalformedPlugLead(String),
    /// Letter already taken by another lead.
    #[error("letter '{0}' is already connected on the plugboard")]
    DuplicatePlugLetter(char),
    /// More leads than the plugboard has cables for.
    #[error("plugboard supports at most {max} leads")]
    TooManyPlugLeads { max: usize },
    /// Configuration document could not be parsed.
    #[error("malformed machine configuration: {0}")]
    Malformed(String),
}

/// Errors produced by the enigma library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The machine could not be built from the given configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// Input to an encode call is not a letter A-Z (either case).
    #[error("invalid character {0:?}: must be a letter A-Z")]
    InvalidCharacter(char),
}

impl EnigmaError {
    /// Returns `true` for construction-time failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EnigmaError::Configuration(_))
    }
}
