//! Reflector: the fixed, non-rotating end of the rotor bank.

use crate::wiring::{ReflectorKind, Wiring};

/// Terminal element of the bank. No position, no ring, never steps.
#[derive(Debug, Clone)]
pub struct Reflector {
    kind: ReflectorKind,
    wiring: &'static Wiring,
}

impl Reflector {
    pub fn new(kind: ReflectorKind) -> Self {
        Reflector {
            kind,
            wiring: kind.wiring(),
        }
    }

    pub fn kind(&self) -> ReflectorKind {
        self.kind
    }

    /// Sends the signal back through the bank. Plain table lookup.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring.forward(index)
    }
}
