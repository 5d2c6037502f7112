//! Machine: plugboard plus rotor bank behind a keyboard-and-lampboard API.
//!
//! One keystroke runs plugboard, bank step, the pass through the bank and
//! back, and plugboard again. Encoding is stateful: every accepted
//! character advances the bank by exactly one step. The cipher is
//! reciprocal, so decoding is the same operation from the same start state.
//!
//! A `Machine` is a plain owned value with no interior locking. Each session
//! gets its own instance; sharing one across threads requires the caller to
//! serialize access.

use tracing::{debug, info};

use crate::config::MachineConfig;
use crate::error::{ConfigError, EnigmaError};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_bank::RotorBank;
use crate::utils::alphabet;
use crate::wiring::{ReflectorKind, RotorKind};

/// A configured rotor cipher machine.
#[derive(Debug, Clone)]
pub struct Machine {
    plugboard: Plugboard,
    bank: RotorBank,
}

impl Default for Machine {
    /// Rotors I-II-III, reflector B, rings 1, positions AAA, no leads.
    fn default() -> Self {
        Machine {
            plugboard: Plugboard::new(),
            bank: RotorBank::default(),
        }
    }
}

impl Machine {
    /// Builds a machine from a full configuration.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if a rotor or reflector name
    /// is unknown, the ring settings or positions do not line up with the
    /// rotors, a ring setting is outside 1..=26, a position is not a letter,
    /// or the plugboard leads are malformed or overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::new(&["I", "II", "III"]).with_positions("AAA");
    /// let mut machine = Machine::new(&config).unwrap();
    /// assert_eq!(machine.encode_char('A').unwrap(), 'B');
    /// assert_eq!(machine.positions_string(), "AAB");
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let count = config.rotors.len();
        if count == 0 {
            return Err(ConfigError::EmptyRotorBank.into());
        }

        let kinds = config
            .rotors
            .iter()
            .map(|name| name.parse::<RotorKind>())
            .collect::<Result<Vec<_>, _>>()?;
        let reflector_kind: ReflectorKind = config.reflector.parse()?;

        let rings = config.resolved_ring_settings();
        check_len("ring settings", count, rings.len())?;
        let positions = config.resolved_positions();
        check_len("positions", count, positions.len())?;

        // Left-to-right in the config, right-to-left in the bank.
        let rotors = kinds
            .iter()
            .zip(&rings)
            .zip(&positions)
            .rev()
            .map(|((&kind, &ring), &pos)| Rotor::new(kind, ring, pos))
            .collect::<Result<Vec<_>, _>>()?;

        let plugboard = Plugboard::configure(config.plugboard.as_slice())?;
        let bank = RotorBank::new(rotors, Reflector::new(reflector_kind))?;

        info!(
            rotors = ?config.rotors,
            reflector = %reflector_kind,
            positions = %bank.positions_string(),
            leads = plugboard.leads().len(),
            "machine configured"
        );

        Ok(Machine { plugboard, bank })
    }

    /// Encodes one keystroke.
    ///
    /// Lowercase input is accepted; the output is always uppercase.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] for anything but A-Z/a-z.
    /// A rejected keystroke does not move any rotor.
    pub fn encode_char(&mut self, c: char) -> Result<char, EnigmaError> {
        let key = alphabet::key_index(c)?;
        Ok(alphabet::letter_at(self.press(key)))
    }

    /// Encodes a message, one keystroke per character, left to right.
    ///
    /// Non-letters, including spaces, are not skipped: the whole message is
    /// rejected. The message is validated before any rotor moves, so a
    /// rejected message leaves the machine exactly as it was.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] naming the first offending
    /// character.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// let mut machine = Machine::default();
    /// let cipher = machine.encode_message("HELLOWORLD").unwrap();
    /// machine.reset();
    /// assert_eq!(machine.decode_message(&cipher).unwrap(), "HELLOWORLD");
    ///
    /// assert!(machine.encode_message("HELLO WORLD").is_err());
    /// ```
    pub fn encode_message(&mut self, message: &str) -> Result<String, EnigmaError> {
        let keys = message
            .chars()
            .map(alphabet::key_index)
            .collect::<Result<Vec<_>, _>>()?;
        let output: String = keys
            .into_iter()
            .map(|key| alphabet::letter_at(self.press(key)))
            .collect();
        debug!(
            len = output.len(),
            positions = %self.positions_string(),
            "message encoded"
        );
        Ok(output)
    }

    /// Same as [`encode_char`](Self::encode_char); the cipher is reciprocal.
    pub fn decode_char(&mut self, c: char) -> Result<char, EnigmaError> {
        self.encode_char(c)
    }

    /// Same as [`encode_message`](Self::encode_message); the cipher is reciprocal.
    pub fn decode_message(&mut self, message: &str) -> Result<String, EnigmaError> {
        self.encode_message(message)
    }

    /// Window letters, left-to-right (first entry is the leftmost rotor).
    pub fn rotor_positions(&self) -> Vec<char> {
        self.bank.positions()
    }

    /// Window letters as a string, left-to-right.
    pub fn positions_string(&self) -> String {
        self.bank.positions_string()
    }

    /// Turns the rotors to new window letters, left-to-right.
    ///
    /// Ring settings, plugboard and the reset point are unchanged.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if the string does not have one
    /// letter per rotor. Nothing moves on error.
    pub fn set_positions(&mut self, positions: &str) -> Result<(), EnigmaError> {
        let indices = positions
            .chars()
            .map(|c| alphabet::index_of(c.to_ascii_uppercase()).ok_or(ConfigError::InvalidPosition(c)))
            .collect::<Result<Vec<_>, _>>()?;
        check_len("positions", self.bank.num_rotors(), indices.len())?;
        self.bank.set_positions(&indices);
        Ok(())
    }

    /// Restores every rotor to its configured initial position.
    ///
    /// Plugboard and ring settings are not touched.
    pub fn reset(&mut self) {
        self.bank.reset();
        debug!(positions = %self.positions_string(), "machine reset");
    }

    pub fn rotor_bank(&self) -> &RotorBank {
        &self.bank
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// One validated keystroke: plugboard, step, bank pass, plugboard.
    fn press(&mut self, key: u8) -> u8 {
        let entry = self.plugboard.substitute(key);
        let lamp = self.bank.encode(entry);
        self.plugboard.substitute(lamp)
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), ConfigError> {
    if expected != found {
        return Err(ConfigError::LengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(rotors: &[&str], reflector: &str, rings: &[u8], positions: &str) -> Machine {
        let config = MachineConfig::new(rotors)
            .with_reflector(reflector)
            .with_ring_settings(rings)
            .with_positions(positions);
        Machine::new(&config).unwrap()
    }

    #[test]
    fn test_default_matches_default_config() {
        let mut a = Machine::default();
        let mut b = Machine::new(&MachineConfig::default()).unwrap();
        assert_eq!(
            a.encode_message("DEFAULTS").unwrap(),
            b.encode_message("DEFAULTS").unwrap()
        );
    }

    #[test]
    fn test_single_keystroke_vector() {
        let mut m = machine(&["I", "II", "III"], "B", &[1, 1, 1], "AAA");
        assert_eq!(m.encode_char('A').unwrap(), 'B');
        assert_eq!(m.rotor_positions(), vec!['A', 'A', 'B']);
    }

    #[test]
    fn test_lowercase_input() {
        let mut m = Machine::default();
        assert_eq!(m.encode_char('a').unwrap(), 'B');
    }

    #[test]
    fn test_invalid_character_leaves_state() {
        let mut m = machine(&["I", "II", "III"], "B", &[1, 1, 1], "ADU");
        m.encode_char('X').unwrap();
        let before = m.rotor_positions();
        assert_eq!(m.encode_char('4'), Err(EnigmaError::InvalidCharacter('4')));
        assert_eq!(m.rotor_positions(), before);
    }

    #[test]
    fn test_invalid_message_leaves_state() {
        let mut m = Machine::default();
        assert_eq!(
            m.encode_message("ATTACK AT DAWN"),
            Err(EnigmaError::InvalidCharacter(' '))
        );
        assert_eq!(m.positions_string(), "AAA");
    }

    #[test]
    fn test_empty_message() {
        let mut m = Machine::default();
        assert_eq!(m.encode_message("").unwrap(), "");
        assert_eq!(m.positions_string(), "AAA");
    }

    #[test]
    fn test_reset_keeps_plugboard() {
        let config = MachineConfig::default().with_plugboard(&["AB", "CD"]);
        let mut m = Machine::new(&config).unwrap();
        let first = m.encode_message("HELLOWORLD").unwrap();
        m.reset();
        assert_eq!(m.positions_string(), "AAA");
        assert_eq!(m.plugboard().leads().len(), 2);
        assert_eq!(m.encode_message("HELLOWORLD").unwrap(), first);
    }

    #[test]
    fn test_set_positions() {
        let mut m = Machine::default();
        m.set_positions("qev").unwrap();
        assert_eq!(m.positions_string(), "QEV");
        assert_eq!(m.encode_char('A').unwrap(), 'L');
        m.reset();
        assert_eq!(m.positions_string(), "AAA");
    }

    #[test]
    fn test_set_positions_rejects_bad_input() {
        let mut m = Machine::default();
        assert_eq!(
            m.set_positions("AB"),
            Err(EnigmaError::Configuration(ConfigError::LengthMismatch {
                field: "positions",
                expected: 3,
                found: 2,
            }))
        );
        assert_eq!(
            m.set_positions("A1B"),
            Err(EnigmaError::Configuration(ConfigError::InvalidPosition('1')))
        );
        assert_eq!(m.positions_string(), "AAA");
    }

    #[test]
    fn test_configuration_errors() {
        let cases: Vec<(MachineConfig, ConfigError)> = vec![
            (
                MachineConfig::new(&["I", "IX", "III"]),
                ConfigError::UnknownRotor("IX".to_string()),
            ),
            (
                MachineConfig::default().with_reflector("Z"),
                ConfigError::UnknownReflector("Z".to_string()),
            ),
            (
                MachineConfig::default().with_ring_settings(&[1, 1]),
                ConfigError::LengthMismatch {
                    field: "ring settings",
                    expected: 3,
                    found: 2,
                },
            ),
            (
                MachineConfig::default().with_positions("AAAA"),
                ConfigError::LengthMismatch {
                    field: "positions",
                    expected: 3,
                    found: 4,
                },
            ),
            (
                MachineConfig::default().with_ring_settings(&[1, 27, 1]),
                ConfigError::RingSettingOutOfRange(27),
            ),
            (
                MachineConfig::default().with_positions("A?A"),
                ConfigError::InvalidPosition('?'),
            ),
            (
                MachineConfig::default().with_plugboard(&["AB", "AC"]),
                ConfigError::DuplicatePlugLetter('A'),
            ),
            (
                MachineConfig::default().with_plugboard(&["ABC"]),
                ConfigError::MalformedPlugLead("ABC".to_string()),
            ),
            (MachineConfig::new::<&str>(&[]), ConfigError::EmptyRotorBank),
        ];
        for (config, expected) in cases {
            let err = Machine::new(&config).unwrap_err();
            assert_eq!(err, EnigmaError::Configuration(expected));
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn test_decode_aliases() {
        let mut m = Machine::default();
        let c = m.encode_char('K').unwrap();
        m.reset();
        assert_eq!(m.decode_char(c).unwrap(), 'K');
    }
}
