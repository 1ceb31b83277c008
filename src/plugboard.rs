//! Plugboard: symmetric letter swaps applied on entry and exit.

use crate::alphabet::{is_letter, to_index, to_letter, ALPHABET_LEN};
use crate::error::ConfigurationError;

/// Symmetric, partial letter-for-letter swap table.
///
/// Unplugged letters map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [usize; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut table = [0usize; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i;
        }
        Plugboard { table }
    }
}

impl Plugboard {
    /// Builds a plugboard from letter pairs.
    ///
    /// # Errors
    /// - [`ConfigurationError::InvalidPlugPair`] if a pair holds a non-letter
    ///   or the same letter twice.
    /// - [`ConfigurationError::DuplicatePlugLetter`] if a letter is already plugged.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&[('A', 'B')]).unwrap();
    /// assert_eq!(board.swap('A'), 'B');
    /// assert_eq!(board.swap('B'), 'A');
    /// assert_eq!(board.swap('C'), 'C');
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, ConfigurationError> {
        let mut board = Plugboard::default();
        let mut used = [false; ALPHABET_LEN];

        for &(a, b) in pairs {
            if !is_letter(a) || !is_letter(b) || a == b {
                return Err(ConfigurationError::InvalidPlugPair(format!("{}{}", a, b)));
            }
            for letter in [a, b] {
                let slot = &mut used[to_index(letter)];
                if *slot {
                    return Err(ConfigurationError::DuplicatePlugLetter(letter));
                }
                *slot = true;
            }
            let (ia, ib) = (to_index(a), to_index(b));
            board.table[ia] = ib;
            board.table[ib] = ia;
        }

        Ok(board)
    }

    /// Returns the letter plugged to `letter`, or `letter` itself.
    ///
    /// Characters outside `A..=Z` are returned unchanged.
    pub fn swap(&self, letter: char) -> char {
        if is_letter(letter) {
            to_letter(self.table[to_index(letter)])
        } else {
            letter
        }
    }

    /// Returns the number of plugged pairs.
    pub fn num_pairs(&self) -> usize {
        self.table
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i < j)
            .count()
    }
}
