//! Fixed wiring tables for every rotor and reflector type.
//!
//! Each table is a bijection on 0..=25 stored in both directions, so the
//! backward pass through a rotor is a lookup rather than a search. All
//! tables are process-wide constants and are never mutated.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::utils::alphabet::{self, SIZE};

/// A 26-contact substitution with its inverse precomputed.
#[derive(Debug, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl Wiring {
    /// Builds a wiring from its 26-letter table, e.g. `b"EKMFLGDQVZ..."`.
    const fn from_table(table: &[u8; 26]) -> Self {
        let forward = alphabet::parse_table(table);
        let mut inverse = [0u8; 26];
        let mut i = 0;
        while i < 26 {
            inverse[forward[i] as usize] = i as u8;
            i += 1;
        }
        Wiring { forward, inverse }
    }

    /// Contact reached when the signal enters on `index` from the right.
    pub fn forward(&self, index: u8) -> u8 {
        self.forward[(index % SIZE) as usize]
    }

    /// Contact reached when the signal enters on `index` from the left.
    pub fn backward(&self, index: u8) -> u8 {
        self.inverse[(index % SIZE) as usize]
    }

    /// Returns `true` if the table maps every letter to a distinct letter.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 26];
        for &c in &self.forward {
            if seen[c as usize] {
                return false;
            }
            seen[c as usize] = true;
        }
        true
    }

    /// Returns `true` if the table is its own inverse with no fixed points.
    pub fn is_reflecting(&self) -> bool {
        (0..SIZE).all(|i| {
            let j = self.forward(i);
            j != i && self.forward(j) == i
        })
    }
}

static ROTOR_I: Wiring = Wiring::from_table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
static ROTOR_II: Wiring = Wiring::from_table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
static ROTOR_III: Wiring = Wiring::from_table(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
static ROTOR_IV: Wiring = Wiring::from_table(b"ESOVPZJAYQUIRHXLNFTGKDCMWB");
static ROTOR_V: Wiring = Wiring::from_table(b"VZBRGITYUPSDNHLXAWMJQOFECK");
static ROTOR_VI: Wiring = Wiring::from_table(b"JPGVOUMFYQBENHZRDKASXLICTW");
static ROTOR_VII: Wiring = Wiring::from_table(b"NZJHGRCXMYSWBOUFAIVLPEKQDT");
static ROTOR_VIII: Wiring = Wiring::from_table(b"FKQHTLXOCBJSPDZRAMEWNIUYGV");
static ROTOR_BETA: Wiring = Wiring::from_table(b"LEYJVCNIXWPBQMDRTAKZGFUHOS");
static ROTOR_GAMMA: Wiring = Wiring::from_table(b"FSOKANUERHMBTIYCWLQPZXVGJD");

static REFLECTOR_A: Wiring = Wiring::from_table(b"EJMZALYXVBWFCRQUONTSPIKHGD");
static REFLECTOR_B: Wiring = Wiring::from_table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");
static REFLECTOR_C: Wiring = Wiring::from_table(b"FVPJIAOYEDRZXWGCTKUQSBNMHL");

// Notch indices: Q, E, V, J, Z and the double notch Z+M of VI-VIII.
const NOTCH_I: [u8; 1] = [16];
const NOTCH_II: [u8; 1] = [4];
const NOTCH_III: [u8; 1] = [21];
const NOTCH_IV: [u8; 1] = [9];
const NOTCH_V: [u8; 1] = [25];
const NOTCH_ZM: [u8; 2] = [25, 12];

/// Rotor types that can be fitted into the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    /// Thin greek-wheel rotor; no notch, never steps.
    Beta,
    /// Thin greek-wheel rotor; no notch, never steps.
    Gamma,
}

impl RotorKind {
    /// Every rotor type, in catalogue order.
    pub const ALL: [RotorKind; 10] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
        RotorKind::VI,
        RotorKind::VII,
        RotorKind::VIII,
        RotorKind::Beta,
        RotorKind::Gamma,
    ];

    /// Catalogue name as written on a key sheet.
    pub fn name(self) -> &'static str {
        match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
            RotorKind::IV => "IV",
            RotorKind::V => "V",
            RotorKind::VI => "VI",
            RotorKind::VII => "VII",
            RotorKind::VIII => "VIII",
            RotorKind::Beta => "Beta",
            RotorKind::Gamma => "Gamma",
        }
    }

    /// The shared wiring table of this rotor type.
    pub fn wiring(self) -> &'static Wiring {
        match self {
            RotorKind::I => &ROTOR_I,
            RotorKind::II => &ROTOR_II,
            RotorKind::III => &ROTOR_III,
            RotorKind::IV => &ROTOR_IV,
            RotorKind::V => &ROTOR_V,
            RotorKind::VI => &ROTOR_VI,
            RotorKind::VII => &ROTOR_VII,
            RotorKind::VIII => &ROTOR_VIII,
            RotorKind::Beta => &ROTOR_BETA,
            RotorKind::Gamma => &ROTOR_GAMMA,
        }
    }

    /// Positions at which this rotor carries its left neighbour.
    pub fn notches(self) -> &'static [u8] {
        match self {
            RotorKind::I => &NOTCH_I,
            RotorKind::II => &NOTCH_II,
            RotorKind::III => &NOTCH_III,
            RotorKind::IV => &NOTCH_IV,
            RotorKind::V => &NOTCH_V,
            RotorKind::VI | RotorKind::VII | RotorKind::VIII => &NOTCH_ZM,
            RotorKind::Beta | RotorKind::Gamma => &[],
        }
    }

    /// Whether a pawl can move this rotor at all.
    pub fn is_stepping(self) -> bool {
        !matches!(self, RotorKind::Beta | RotorKind::Gamma)
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RotorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownRotor(s.to_string()))
    }
}

/// Reflector types that can terminate the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    A,
    B,
    C,
}

impl ReflectorKind {
    /// Every reflector type.
    pub const ALL: [ReflectorKind; 3] = [ReflectorKind::A, ReflectorKind::B, ReflectorKind::C];

    pub fn name(self) -> &'static str {
        match self {
            ReflectorKind::A => "A",
            ReflectorKind::B => "B",
            ReflectorKind::C => "C",
        }
    }

    pub fn wiring(self) -> &'static Wiring {
        match self {
            ReflectorKind::A => &REFLECTOR_A,
            ReflectorKind::B => &REFLECTOR_B,
            ReflectorKind::C => &REFLECTOR_C,
        }
    }
}

impl fmt::Display for ReflectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ReflectorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownReflector(s.to_string()))
    }
}
