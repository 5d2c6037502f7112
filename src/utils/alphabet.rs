//! Fixed bijection between the 26 Latin letters and indices 0..=25.
//!
//! All rotor and plugboard arithmetic runs on indices; letters only appear
//! at the machine boundary.

use crate::error::EnigmaError;

/// Number of contacts on every rotor, reflector and plugboard.
pub(crate) const SIZE: u8 = 26;

/// Returns the index of an uppercase letter, or `None` for anything else.
pub(crate) fn index_of(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at `index` (taken mod 26).
pub(crate) fn letter_at(index: u8) -> char {
    (b'A' + index % SIZE) as char
}

/// Case-normalises a keyboard character and returns its index.
///
/// # Errors
/// Returns [`EnigmaError::InvalidCharacter`] unless `c` is a letter A-Z in
/// either case.
pub(crate) fn key_index(c: char) -> Result<u8, EnigmaError> {
    index_of(c.to_ascii_uppercase()).ok_or(EnigmaError::InvalidCharacter(c))
}

/// Adds `delta` to `index` modulo 26. `delta` may be negative.
pub(crate) fn shift(index: u8, delta: i16) -> u8 {
    (index as i16 + delta).rem_euclid(SIZE as i16) as u8
}

/// Parses a 26-letter table into indices. Used for the constant wirings.
pub(crate) const fn parse_table(table: &[u8; 26]) -> [u8; 26] {
    let mut out = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        out[i] = table[i] - b'A';
        i += 1;
    }
    out
}
