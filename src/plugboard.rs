//! Plugboard: a partial involution over the alphabet.
//!
//! Each [`PlugLead`] swaps two letters. The board keeps a full 26-entry
//! table so substitution is a single lookup; unplugged letters map to
//! themselves.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::utils::alphabet;

/// Number of cables shipped with the machine.
pub const MAX_LEADS: usize = 10;

/// A cable joining two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugLead {
    a: u8,
    b: u8,
}

impl PlugLead {
    /// Creates a lead between two letters (either case).
    ///
    /// # Errors
    /// Returns [`ConfigError::MalformedPlugLead`] if either end is not a
    /// letter or both ends are the same letter.
    pub fn new(a: char, b: char) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedPlugLead(format!("{}{}", a, b));
        let ia = alphabet::index_of(a.to_ascii_uppercase()).ok_or_else(malformed)?;
        let ib = alphabet::index_of(b.to_ascii_uppercase()).ok_or_else(malformed)?;
        if ia == ib {
            return Err(malformed());
        }
        Ok(PlugLead { a: ia, b: ib })
    }

    /// The two letters joined by this lead.
    pub fn letters(&self) -> (char, char) {
        (alphabet::letter_at(self.a), alphabet::letter_at(self.b))
    }
}

impl FromStr for PlugLead {
    type Err = ConfigError;

    /// Parses a lead from a two-letter string such as `"AB"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => PlugLead::new(a, b),
            _ => Err(ConfigError::MalformedPlugLead(s.to_string())),
        }
    }
}

impl fmt::Display for PlugLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "{}{}", a, b)
    }
}

/// Patch panel applied before and after the rotor bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; 26],
    leads: Vec<PlugLead>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Creates an empty plugboard (every letter maps to itself).
    pub fn new() -> Self {
        let mut table = [0u8; 26];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            table,
            leads: Vec::with_capacity(MAX_LEADS),
        }
    }

    /// Builds a plugboard from lead strings such as `["AB", "CD"]`.
    ///
    /// # Errors
    /// Fails on the first malformed lead, reused letter, or when more than
    /// [`MAX_LEADS`] leads are given.
    pub fn configure<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ConfigError> {
        let mut board = Plugboard::new();
        for pair in pairs {
            board.add(pair.as_ref().parse()?)?;
        }
        Ok(board)
    }

    /// Plugs in one more lead.
    ///
    /// The board is left untouched if the lead is rejected.
    ///
    /// # Errors
    /// - [`ConfigError::TooManyPlugLeads`] when all cables are in use.
    /// - [`ConfigError::DuplicatePlugLetter`] when either letter is already
    ///   connected.
    pub fn add(&mut self, lead: PlugLead) -> Result<(), ConfigError> {
        if self.leads.len() >= MAX_LEADS {
            return Err(ConfigError::TooManyPlugLeads { max: MAX_LEADS });
        }
        for end in [lead.a, lead.b] {
            if self.table[end as usize] != end {
                return Err(ConfigError::DuplicatePlugLetter(alphabet::letter_at(end)));
            }
        }
        self.table[lead.a as usize] = lead.b;
        self.table[lead.b as usize] = lead.a;
        self.leads.push(lead);
        Ok(())
    }

    /// Swaps `index` with its partner, or returns it unchanged.
    pub fn substitute(&self, index: u8) -> u8 {
        self.table[(index % alphabet::SIZE) as usize]
    }

    /// Leads currently plugged in, in insertion order.
    pub fn leads(&self) -> &[PlugLead] {
        &self.leads
    }
}
