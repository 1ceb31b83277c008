//! Rotor: one wired disc with a rotational offset and a turnover notch.
//!
//! The five historical rotors (I..V) are compile-time tables. A rotor's
//! wiring and notch never change after construction; only its offset moves
//! as the machine steps.

use crate::alphabet::{wiring_table, wrap, ALPHABET_LEN};
use crate::error::ConfigurationError;

/// Number of historical rotors available.
pub const NUM_ROTORS: u8 = 5;

/// Fixed wiring and notch for one historical rotor.
struct RotorTable {
    wiring: [usize; ALPHABET_LEN],
    notch: usize,
}

/// Rotors I..V, indexed by `number - 1`. Notch letters are R, F, W, K, A.
const ROTOR_TABLES: [RotorTable; NUM_ROTORS as usize] = [
    RotorTable {
        wiring: wiring_table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        notch: 17,
    },
    RotorTable {
        wiring: wiring_table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        notch: 5,
    },
    RotorTable {
        wiring: wiring_table(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        notch: 22,
    },
    RotorTable {
        wiring: wiring_table(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"),
        notch: 10,
    },
    RotorTable {
        wiring: wiring_table(b"VZBRGITYUPSDNHLXAWMJQOFECK"),
        notch: 0,
    },
];

/// A single rotor in the machine.
///
/// Holds the forward wiring, its precomputed inverse for the return path,
/// the notch position that triggers a carry and the current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    number: u8,
    wiring: [usize; ALPHABET_LEN],
    inverse: [usize; ALPHABET_LEN],
    notch: usize,
    offset: usize,
}

impl Rotor {
    /// Loads historical rotor `number` set to a zero-based `offset`.
    ///
    /// # Parameters
    /// - `number`: Rotor identifier, 1 to 5.
    /// - `offset`: Initial offset. Values of 26 or more wrap.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidRotorNumber`] if `number` is not in 1..=5.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::rotor::Rotor;
    ///
    /// let rotor = Rotor::new(1, 0).unwrap();
    /// assert_eq!(rotor.notch(), 17);
    /// assert!(Rotor::new(6, 0).is_err());
    /// ```
    pub fn new(number: u8, offset: usize) -> Result<Self, ConfigurationError> {
        if !(1..=NUM_ROTORS).contains(&number) {
            return Err(ConfigurationError::InvalidRotorNumber(number.into()));
        }
        let table = &ROTOR_TABLES[(number - 1) as usize];

        let mut inverse = [0usize; ALPHABET_LEN];
        for (input, &output) in table.wiring.iter().enumerate() {
            inverse[output] = input;
        }

        Ok(Rotor {
            number,
            wiring: table.wiring,
            inverse,
            notch: table.notch,
            offset: offset % ALPHABET_LEN,
        })
    }

    /// Passes a signal from the entry side toward the reflector.
    ///
    /// Computes `wiring[(input + offset) mod 26] - offset`, normalized into `0..26`.
    pub fn encrypt_forward(&self, input: usize) -> usize {
        let contact = wrap(input as i32 + self.offset as i32);
        wrap(self.wiring[contact] as i32 - self.offset as i32)
    }

    /// Passes a signal from the reflector back toward the entry side.
    ///
    /// Exact inverse of [`encrypt_forward`](Self::encrypt_forward) at the
    /// current offset.
    pub fn encrypt_backward(&self, input: usize) -> usize {
        let contact = wrap(input as i32 + self.offset as i32);
        wrap(self.inverse[contact] as i32 - self.offset as i32)
    }

    /// Advances the offset by one position.
    ///
    /// # Returns
    /// `true` if the new offset equals the notch, meaning the next rotor
    /// in the chain must also step.
    pub fn step(&mut self) -> bool {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
        self.offset == self.notch
    }

    /// Returns the rotor identifier (1..=5).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the current zero-based offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Sets the offset directly. Values of 26 or more wrap.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset % ALPHABET_LEN;
    }

    /// Returns the notch position.
    pub fn notch(&self) -> usize {
        self.notch
    }

    /// Returns the forward wiring table.
    pub fn wiring(&self) -> &[usize; ALPHABET_LEN] {
        &self.wiring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rotor_numbers() {
        assert!(matches!(
            Rotor::new(0, 0),
            Err(ConfigurationError::InvalidRotorNumber(0))
        ));
        assert!(matches!(
            Rotor::new(6, 0),
            Err(ConfigurationError::InvalidRotorNumber(6))
        ));
    }

    #[test]
    fn test_notch_positions() {
        let expected = [17, 5, 22, 10, 0];
        for (number, &notch) in (1..=NUM_ROTORS).zip(expected.iter()) {
            assert_eq!(Rotor::new(number, 0).unwrap().notch(), notch);
        }
    }

    #[test]
    fn test_wirings_are_permutations() {
        for number in 1..=NUM_ROTORS {
            let rotor = Rotor::new(number, 0).unwrap();
            let mut seen = [false; ALPHABET_LEN];
            for &out in rotor.wiring() {
                assert!(!seen[out], "rotor {} maps twice to {}", number, out);
                seen[out] = true;
            }
        }
    }

    #[test]
    fn test_forward_at_offset_zero() {
        let rotor = Rotor::new(1, 0).unwrap();
        // A -> E, B -> K, Z -> J
        assert_eq!(rotor.encrypt_forward(0), 4);
        assert_eq!(rotor.encrypt_forward(1), 10);
        assert_eq!(rotor.encrypt_forward(25), 9);
    }

    #[test]
    fn test_forward_with_offset_wraps_negative() {
        let rotor = Rotor::new(1, 1).unwrap();
        // A enters contact B -> K(10), minus offset 1 -> J(9)
        assert_eq!(rotor.encrypt_forward(0), 9);
        // Z enters contact A -> E(4), minus offset 1 -> D(3)
        assert_eq!(rotor.encrypt_forward(25), 3);

        // Rotor II at offset 1: B enters contact C -> D(3), minus 1 -> C(2);
        // A enters contact B -> J(9), minus 1 -> I(8)
        let rotor = Rotor::new(2, 1).unwrap();
        assert_eq!(rotor.encrypt_forward(1), 2);
        assert_eq!(rotor.encrypt_forward(0), 8);

        // Rotor II at offset 25: A enters contact Z -> E(4), minus 25 -> F(5)
        let rotor = Rotor::new(2, 25).unwrap();
        assert_eq!(rotor.encrypt_forward(0), 5);
    }

    #[test]
    fn test_backward_inverts_forward_all_offsets() {
        for number in 1..=NUM_ROTORS {
            let mut rotor = Rotor::new(number, 0).unwrap();
            for offset in 0..ALPHABET_LEN {
                rotor.set_offset(offset);
                for x in 0..ALPHABET_LEN {
                    let y = rotor.encrypt_forward(x);
                    assert_eq!(
                        rotor.encrypt_backward(y),
                        x,
                        "rotor {} offset {} input {}",
                        number,
                        offset,
                        x
                    );
                }
            }
        }
    }

    #[test]
    fn test_step_carries_at_notch() {
        let mut rotor = Rotor::new(2, 3).unwrap();
        assert!(!rotor.step()); // 4
        assert!(rotor.step()); // 5 == F
        assert!(!rotor.step()); // 6
        assert_eq!(rotor.offset(), 6);
    }

    #[test]
    fn test_step_wraps_and_carries_on_zero_notch() {
        let mut rotor = Rotor::new(5, 25).unwrap();
        assert!(rotor.step());
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_full_revolution_carries_once() {
        let mut rotor = Rotor::new(3, 0).unwrap();
        let carries = (0..ALPHABET_LEN).filter(|_| rotor.step()).count();
        assert_eq!(carries, 1);
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_offset_wraps_on_construction() {
        let rotor = Rotor::new(4, 27).unwrap();
        assert_eq!(rotor.offset(), 1);
        assert_eq!(rotor.number(), 4);
    }
}
