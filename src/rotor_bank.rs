//! RotorBank: ordered rotors terminated by a reflector.
//!
//! The bank owns every rotor in a single `Vec` indexed by slot, with slot 0
//! the rightmost (fastest) rotor. Neighbours are reached by index arithmetic
//! (`slot - 1` is the right neighbour, `slot + 1` the left), so no rotor
//! holds a reference to another.
//!
//! # Stepping
//!
//! Stepping follows the ratchet-and-pawl mechanism of the real machine.
//! There is one pawl per stepping slot, at most [`STEPPING_SLOTS`] of them:
//!
//! - Pawl 0 pushes the rightmost rotor on every keystroke.
//! - Pawl `k` (k >= 1) engages when rotor `k - 1` sits on a notch. An
//!   engaged pawl pushes rotor `k`, and also pushes rotor `k - 1` through
//!   its notch unless `k - 1` is the rightmost rotor.
//!
//! Every notch is read before any rotor moves. For three rotors this gives:
//! the middle rotor steps when the right rotor or the middle rotor itself is
//! on a notch, and the left rotor steps when the middle rotor is on its
//! notch. The second clause is the double step: the middle rotor moves on
//! two consecutive keystrokes. Rotors beyond the third slot and the thin
//! Beta/Gamma rotors never move.

use tracing::trace;

use crate::error::ConfigError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::{ReflectorKind, RotorKind};

/// Number of slots driven by a pawl.
pub const STEPPING_SLOTS: usize = 3;

/// The rotors and reflector of one machine.
#[derive(Debug, Clone)]
pub struct RotorBank {
    rotors: Vec<Rotor>,
    reflector: Reflector,
}

impl Default for RotorBank {
    /// Rotors I-II-III (left-to-right) at AAA with reflector B.
    fn default() -> Self {
        RotorBank {
            rotors: vec![
                Rotor::at_home(RotorKind::III),
                Rotor::at_home(RotorKind::II),
                Rotor::at_home(RotorKind::I),
            ],
            reflector: Reflector::new(ReflectorKind::B),
        }
    }
}

impl RotorBank {
    /// Creates a bank from rotors in right-to-left order.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyRotorBank`] if `rotors` is empty.
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector) -> Result<Self, ConfigError> {
        if rotors.is_empty() {
            return Err(ConfigError::EmptyRotorBank);
        }
        Ok(RotorBank { rotors, reflector })
    }

    /// Number of rotors, excluding the reflector.
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }

    /// Rotors in right-to-left order (slot 0 is the fastest).
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Returns the rotor at `slot`, counting from the right.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.rotors.get(slot)
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Advances the bank by one keystroke.
    pub fn step(&mut self) {
        let slots = self.rotors.len().min(STEPPING_SLOTS);
        let mut moves = [false; STEPPING_SLOTS];
        moves[0] = true;

        // Notches are sampled before anything moves. A rotor on its notch
        // engages the pawl of its left neighbour.
        for (slot, rotor) in self.rotors.iter().enumerate().take(slots - 1) {
            if rotor.is_at_notch() {
                moves[slot + 1] = true;
                if slot > 0 {
                    moves[slot] = true;
                }
            }
        }

        for (rotor, &push) in self.rotors.iter_mut().zip(moves.iter()) {
            if push && rotor.is_stepping() {
                rotor.step();
            }
        }

        trace!(moves = ?&moves[..slots], positions = %self.positions_string(), "bank stepped");
    }

    /// Runs one contact index through the bank and back, without stepping.
    ///
    /// Right-to-left through every rotor, off the reflector, then
    /// left-to-right back out.
    pub fn transform(&self, index: u8) -> u8 {
        let inward = self
            .rotors
            .iter()
            .fold(index, |signal, rotor| rotor.forward(signal));
        let reflected = self.reflector.reflect(inward);
        self.rotors
            .iter()
            .rev()
            .fold(reflected, |signal, rotor| rotor.backward(signal))
    }

    /// Steps the bank, then transforms `index`.
    pub fn encode(&mut self, index: u8) -> u8 {
        self.step();
        self.transform(index)
    }

    /// Window letters in left-to-right order, as the operator reads them.
    pub fn positions(&self) -> Vec<char> {
        self.rotors
            .iter()
            .rev()
            .map(|rotor| rotor.position_letter())
            .collect()
    }

    /// Window letters as a string, left-to-right.
    pub fn positions_string(&self) -> String {
        self.positions().into_iter().collect()
    }

    /// Sets every rotor from indices given left-to-right.
    ///
    /// Callers validate the length; extra or missing entries are ignored.
    pub(crate) fn set_positions(&mut self, left_to_right: &[u8]) {
        for (rotor, &position) in self.rotors.iter_mut().rev().zip(left_to_right) {
            rotor.set_position(position);
        }
    }

    /// Restores every rotor to its configured initial position.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alphabet;

    /// Builds a bank from left-to-right names and positions, rings at 1.
    fn bank(names: &[RotorKind], positions: &str) -> RotorBank {
        let positions: Vec<char> = positions.chars().collect();
        let rotors = names
            .iter()
            .zip(positions)
            .rev()
            .map(|(&kind, pos)| Rotor::new(kind, 1, pos).unwrap())
            .collect();
        RotorBank::new(rotors, Reflector::new(ReflectorKind::B)).unwrap()
    }

    #[test]
    fn test_default_bank() {
        let b = RotorBank::default();
        assert_eq!(b.num_rotors(), 3);
        assert_eq!(b.rotor(0).unwrap().kind(), RotorKind::III);
        assert_eq!(b.reflector().kind(), ReflectorKind::B);
        assert_eq!(b.positions_string(), "AAA");
    }

    #[test]
    fn test_empty_bank_rejected() {
        let result = RotorBank::new(Vec::new(), Reflector::new(ReflectorKind::B));
        assert_eq!(result.unwrap_err(), ConfigError::EmptyRotorBank);
    }

    #[test]
    fn test_right_rotor_always_steps() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "AAA");
        b.step();
        assert_eq!(b.positions_string(), "AAB");
    }

    #[test]
    fn test_right_notch_carries_middle() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "AAV");
        b.step();
        assert_eq!(b.positions_string(), "ABW");
    }

    #[test]
    fn test_double_step_sequence() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "ADU");
        let mut seen = Vec::new();
        for _ in 0..4 {
            b.step();
            seen.push(b.positions_string());
        }
        assert_eq!(seen, vec!["ADV", "AEW", "BFX", "BFY"]);
    }

    #[test]
    fn test_left_rotor_notch_does_nothing() {
        // Rotor I on its notch in the leftmost slot has no pawl to trigger.
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "QAA");
        b.step();
        assert_eq!(b.positions_string(), "QAB");
    }

    #[test]
    fn test_single_rotor_bank() {
        let mut b = bank(&[RotorKind::III], "V");
        b.step();
        b.step();
        assert_eq!(b.positions_string(), "X");
    }

    #[test]
    fn test_two_rotor_bank_has_no_double_step() {
        let mut b = bank(&[RotorKind::II, RotorKind::III], "EA");
        b.step();
        assert_eq!(b.positions_string(), "EB");
    }

    #[test]
    fn test_fourth_slot_never_steps() {
        let mut b = bank(
            &[RotorKind::I, RotorKind::II, RotorKind::III, RotorKind::IV],
            "QEVZ",
        );
        b.step();
        assert_eq!(b.positions_string(), "QFWA");
        assert_eq!(b.rotor(3).unwrap().step_count(), 0);
    }

    #[test]
    fn test_greek_rotor_in_fast_slot_never_steps() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::Beta], "AAA");
        for _ in 0..40 {
            b.step();
        }
        assert_eq!(b.rotor(0).unwrap().step_count(), 0);
        assert_eq!(b.positions_string(), "AAA");
    }

    #[test]
    fn test_transform_is_reciprocal() {
        let b = bank(&[RotorKind::IV, RotorKind::V, RotorKind::I], "KQZ");
        for i in 0..26 {
            let out = b.transform(i);
            assert_ne!(out, i);
            assert_eq!(b.transform(out), i);
        }
    }

    #[test]
    fn test_encode_steps_before_transform() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "AAA");
        let out = b.encode(alphabet::index_of('A').unwrap());
        assert_eq!(alphabet::letter_at(out), 'B');
        assert_eq!(b.positions_string(), "AAB");
    }

    #[test]
    fn test_reset() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "ADU");
        for _ in 0..100 {
            b.step();
        }
        b.reset();
        assert_eq!(b.positions_string(), "ADU");
        assert!(b.rotors().iter().all(|r| r.step_count() == 0));
    }

    #[test]
    fn test_set_positions_left_to_right() {
        let mut b = bank(&[RotorKind::I, RotorKind::II, RotorKind::III], "AAA");
        b.set_positions(&[16, 4, 21]);
        assert_eq!(b.positions(), vec!['Q', 'E', 'V']);
        assert_eq!(b.rotor(0).unwrap().position_letter(), 'V');
    }
}
