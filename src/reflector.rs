//! Reflector: fixed involution that sends the signal back through the rotors.

use crate::alphabet::{wiring_table, ALPHABET_LEN};
use crate::error::ConfigurationError;

/// Historical reflectors A, B and C.
const REFLECTOR_TABLES: [(char, [usize; ALPHABET_LEN]); 3] = [
    ('A', wiring_table(b"EJMZALYXVBWFCRQUONTSPIKHGD")),
    ('B', wiring_table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT")),
    ('C', wiring_table(b"FVPJIAOYEDRZXWGCTKUQSBNMHL")),
];

/// Reflector identifiers accepted by [`Reflector::new`].
pub const REFLECTOR_IDS: [char; 3] = ['A', 'B', 'C'];

/// Fixed-point-free involutive permutation with no offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    id: char,
    wiring: [usize; ALPHABET_LEN],
}

impl Reflector {
    /// Loads reflector `id`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidReflector`] unless `id` is `A`, `B` or `C`.
    pub fn new(id: char) -> Result<Self, ConfigurationError> {
        REFLECTOR_TABLES
            .iter()
            .find(|(table_id, _)| *table_id == id)
            .map(|&(id, wiring)| Reflector { id, wiring })
            .ok_or_else(|| ConfigurationError::InvalidReflector(id.to_string()))
    }

    /// Maps a position through the reflector.
    pub fn reflect(&self, input: usize) -> usize {
        self.wiring[input % ALPHABET_LEN]
    }

    /// Returns the reflector identifier.
    pub fn id(&self) -> char {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reflector() {
        assert!(matches!(
            Reflector::new('D'),
            Err(ConfigurationError::InvalidReflector(ref s)) if s == "D"
        ));
        assert!(Reflector::new('b').is_err());
    }

    #[test]
    fn test_reflectors_are_involutions_without_fixed_points() {
        for id in REFLECTOR_IDS {
            let reflector = Reflector::new(id).unwrap();
            assert_eq!(reflector.id(), id);
            for x in 0..ALPHABET_LEN {
                let y = reflector.reflect(x);
                assert_ne!(x, y, "reflector {} fixes {}", id, x);
                assert_eq!(reflector.reflect(y), x, "reflector {} at {}", id, x);
            }
        }
    }

    #[test]
    fn test_reflectors_are_permutations() {
        for id in REFLECTOR_IDS {
            let reflector = Reflector::new(id).unwrap();
            let mut seen = [false; ALPHABET_LEN];
            for x in 0..ALPHABET_LEN {
                let y = reflector.reflect(x);
                assert!(!seen[y]);
                seen[y] = true;
            }
        }
    }

    #[test]
    fn test_reflector_b_known_pairs() {
        let reflector = Reflector::new('B').unwrap();
        // A <-> Y, B <-> R
        assert_eq!(reflector.reflect(0), 24);
        assert_eq!(reflector.reflect(1), 17);
    }
}
