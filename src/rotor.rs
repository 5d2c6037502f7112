//! Rotor: one rotating substitution unit of the bank.
//!
//! A rotor couples a shared, immutable [`Wiring`] with the mutable state of
//! one physical wheel: its rotational position and its ring setting. The
//! letters exchanged with neighbouring rotors are always expressed in the
//! unshifted frame of the fixed entry contacts, so both directions apply the
//! offset before the wiring lookup and remove it afterwards.

use crate::error::ConfigError;
use crate::utils::alphabet;
use crate::wiring::{RotorKind, Wiring};

/// A single rotor fitted in the bank.
#[derive(Debug, Clone)]
pub struct Rotor {
    kind: RotorKind,
    wiring: &'static Wiring,
    ring_offset: u8,
    position: u8,
    initial_position: u8,
    step_count: u64,
}

impl Rotor {
    /// Creates a rotor of the given type.
    ///
    /// # Parameters
    /// - `kind`: Rotor type, selecting wiring and notches.
    /// - `ring_setting`: Ring setting as marked on the wheel (1..=26).
    /// - `position`: Initial window letter (either case).
    ///
    /// # Errors
    /// - [`ConfigError::RingSettingOutOfRange`] if `ring_setting` is not in 1..=26.
    /// - [`ConfigError::InvalidPosition`] if `position` is not a letter.
    pub fn new(kind: RotorKind, ring_setting: u8, position: char) -> Result<Self, ConfigError> {
        if !(1..=26).contains(&ring_setting) {
            return Err(ConfigError::RingSettingOutOfRange(ring_setting));
        }
        let position = alphabet::index_of(position.to_ascii_uppercase())
            .ok_or(ConfigError::InvalidPosition(position))?;
        Ok(Rotor {
            kind,
            wiring: kind.wiring(),
            ring_offset: ring_setting - 1,
            position,
            initial_position: position,
            step_count: 0,
        })
    }

    /// Rotor at ring setting 1 and position A.
    pub(crate) fn at_home(kind: RotorKind) -> Self {
        Rotor {
            kind,
            wiring: kind.wiring(),
            ring_offset: 0,
            position: 0,
            initial_position: 0,
            step_count: 0,
        }
    }

    pub fn kind(&self) -> RotorKind {
        self.kind
    }

    /// Current position, 0..=25.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Current window letter.
    pub fn position_letter(&self) -> char {
        alphabet::letter_at(self.position)
    }

    /// Ring setting as marked on the wheel (1..=26).
    pub fn ring_setting(&self) -> u8 {
        self.ring_offset + 1
    }

    /// Number of times this rotor has stepped since construction or reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Signed shift between the physical wiring and the entry contacts.
    fn offset(&self) -> i16 {
        self.position as i16 - self.ring_offset as i16
    }

    /// Passes a signal entering from the right (keyboard side).
    pub fn forward(&self, index: u8) -> u8 {
        let pin = alphabet::shift(index, self.offset());
        let contact = self.wiring.forward(pin);
        alphabet::shift(contact, -self.offset())
    }

    /// Passes a signal entering from the left (reflector side).
    pub fn backward(&self, index: u8) -> u8 {
        let contact = alphabet::shift(index, self.offset());
        let pin = self.wiring.backward(contact);
        alphabet::shift(pin, -self.offset())
    }

    /// Advances the rotor by one position.
    ///
    /// Whether this rotor is allowed to move at all is decided by the bank.
    pub fn step(&mut self) {
        self.position = alphabet::shift(self.position, 1);
        self.step_count += 1;
    }

    /// Returns `true` if the rotor currently sits on one of its notches.
    pub fn is_at_notch(&self) -> bool {
        self.kind.notches().contains(&self.position)
    }

    /// Whether a pawl can move this rotor.
    pub fn is_stepping(&self) -> bool {
        self.kind.is_stepping()
    }

    /// Moves the rotor to `position` without counting a step.
    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position % alphabet::SIZE;
    }

    /// Restores the configured initial position and clears the step counter.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.step_count = 0;
    }
}
