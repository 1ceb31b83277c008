//! Alphabet codec: conversion between the letters `A..=Z` and positions `0..26`.
//!
//! The lookup tables are compile-time constants. Callers filter input with
//! [`is_letter`] before converting; [`to_index`] does not re-check.

/// Number of letters handled by the machine.
pub const ALPHABET_LEN: usize = 26;

/// The 26 letters in position order.
pub const LETTERS: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns `true` if `c` is one of the 26 uppercase Latin letters.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Converts an uppercase letter to its position (`'A'` → 0, `'Z'` → 25).
///
/// # Parameters
/// - `letter`: An uppercase letter. The result is unspecified for any other
///   character; check with [`is_letter`] first.
pub fn to_index(letter: char) -> usize {
    (letter as usize).wrapping_sub('A' as usize) % ALPHABET_LEN
}

/// Converts a position back to its letter (0 → `'A'`, 25 → `'Z'`).
///
/// # Parameters
/// - `index`: A position. Values of 26 or more wrap around the alphabet.
pub fn to_letter(index: usize) -> char {
    LETTERS[index % ALPHABET_LEN]
}

/// Reduces an arbitrary signed value into `0..26`.
///
/// Uses Euclidean remainder, so negative intermediates from offset
/// subtraction land on the correct letter instead of going negative.
pub fn wrap(value: i32) -> usize {
    value.rem_euclid(ALPHABET_LEN as i32) as usize
}

/// Builds a position table from a 26-letter wiring string at compile time.
///
/// Every byte must be an uppercase ASCII letter; the rotor and reflector
/// tables in this crate are written that way.
pub(crate) const fn wiring_table(wiring: &[u8; ALPHABET_LEN]) -> [usize; ALPHABET_LEN] {
    let mut table = [0usize; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[i] = (wiring[i] - b'A') as usize;
        i += 1;
    }
    table
}
