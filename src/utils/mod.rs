//! Small shared helpers for the enigma core.

pub(crate) mod alphabet;
