//! Rotor cipher machine simulator.
//!
//! Simulates the electromechanical rotor machine: each keystroke passes
//! through a plugboard, a bank of rotating substitution rotors, a fixed
//! reflector, back through the rotors and the plugboard, lighting a lamp.
//! Between keystrokes the rotors advance like an odometer, including the
//! middle-rotor double step of the real device.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (letter <-> index, mod-26 arithmetic)
//!     ↓
//! Wiring     (constant rotor / reflector tables, notches)
//!     ↓
//! Rotor      (wiring + position + ring setting)      Plugboard (lead swaps)
//!     ↓ N rotors, slot 0 rightmost                        ↓
//! RotorBank  (pawl stepping + Reflector)                  ↓
//!     ↓                                                   ↓
//! Machine    (plugboard → step → bank pass → plugboard)
//! ```
//!
//! All settings are given left-to-right as the operator sees them, and
//! [`Machine::rotor_positions`] reports the window letters in the same order.
//!
//! # Examples
//!
//! Encrypt and decrypt with the same starting state:
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let config = MachineConfig::new(&["II", "IV", "V"])
//!     .with_reflector("B")
//!     .with_ring_settings(&[2, 21, 12])
//!     .with_positions("BLA")
//!     .with_plugboard(&["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"]);
//!
//! let mut machine = Machine::new(&config).unwrap();
//! let cipher = machine.encode_message("EDPUD").unwrap();
//! assert_eq!(cipher, "AUFKL");
//!
//! machine.reset();
//! assert_eq!(machine.decode_message(&cipher).unwrap(), "EDPUD");
//! ```
//!
//! Watch the double step of the middle rotor:
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let mut machine = Machine::new(&MachineConfig::default().with_positions("ADV")).unwrap();
//! machine.encode_char('A').unwrap();
//! assert_eq!(machine.positions_string(), "AEW");
//! machine.encode_char('A').unwrap();
//! assert_eq!(machine.positions_string(), "BFX");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod rotor_bank;
pub mod wiring;

mod machine;
pub(crate) mod utils;

pub use config::MachineConfig;
pub use error::{ConfigError, EnigmaError};
pub use machine::Machine;
pub use plugboard::{PlugLead, Plugboard};
pub use rotor::Rotor;
pub use rotor_bank::RotorBank;
pub use wiring::{ReflectorKind, RotorKind};
