//! Machine configuration: the key-sheet settings for one session.
//!
//! All lists are ordered left-to-right as the operator sees the machine:
//! the first rotor name is the leftmost (slowest) wheel, and the first
//! ring setting and position letter belong to that same wheel.
//!
//! The serialized form uses the JSON keys `rotors`, `reflector`,
//! `ringSettings`, `positions` and `plugboard`; every key is optional.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default rotor order, left-to-right.
pub const DEFAULT_ROTORS: [&str; 3] = ["I", "II", "III"];

/// Default reflector.
pub const DEFAULT_REFLECTOR: &str = "B";

/// Settings from which a [`Machine`](crate::Machine) is built.
///
/// Nothing is validated here; [`Machine::new`](crate::Machine::new) checks
/// the whole configuration at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineConfig {
    /// Rotor type names, left-to-right.
    pub rotors: Vec<String>,
    /// Reflector type name.
    pub reflector: String,
    /// Ring settings (1..=26), one per rotor. `None` means all 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_settings: Option<Vec<u8>>,
    /// Initial window letters, one per rotor. `None` means all `A`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
    /// Plug leads as two-letter strings.
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: DEFAULT_ROTORS.iter().map(|s| s.to_string()).collect(),
            reflector: DEFAULT_REFLECTOR.to_string(),
            ring_settings: None,
            positions: None,
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Creates a configuration with the given rotor order and defaults
    /// for everything else.
    pub fn new<S: AsRef<str>>(rotors: &[S]) -> Self {
        MachineConfig {
            rotors: rotors.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError::Malformed`] if the document is not valid JSON
    /// or a field has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(r#"{"rotors": ["II", "IV", "V"], "positions": "BLA"}"#).unwrap();
    /// assert_eq!(config.reflector, "B");
    /// assert_eq!(config.positions.as_deref(), Some("BLA"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_reflector(mut self, reflector: &str) -> Self {
        self.reflector = reflector.to_string();
        self
    }

    pub fn with_ring_settings(mut self, ring_settings: &[u8]) -> Self {
        self.ring_settings = Some(ring_settings.to_vec());
        self
    }

    pub fn with_positions(mut self, positions: &str) -> Self {
        self.positions = Some(positions.to_string());
        self
    }

    pub fn with_plugboard<S: AsRef<str>>(mut self, leads: &[S]) -> Self {
        self.plugboard = leads.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Ring settings aligned with the rotors, defaulting to 1.
    pub(crate) fn resolved_ring_settings(&self) -> Vec<u8> {
        self.ring_settings
            .clone()
            .unwrap_or_else(|| vec![1; self.rotors.len()])
    }

    /// Initial positions aligned with the rotors, defaulting to `A`.
    pub(crate) fn resolved_positions(&self) -> Vec<char> {
        match &self.positions {
            Some(p) => p.chars().collect(),
            None => vec!['A'; self.rotors.len()],
        }
    }
}
