//! EnigmaMachine: three rotors, a reflector and a plugboard.
//!
//! Orchestrates the signal path for each letter
//! (plugboard → rotors forward → reflector → rotors backward → plugboard)
//! and the odometer stepping that follows it.
//!
//! The machine is stateful across calls: rotor offsets keep advancing from
//! wherever the previous [`encrypt`](EnigmaMachine::encrypt) left them.

use tracing::{debug, trace};

use crate::alphabet::{is_letter, to_index, to_letter};
use crate::config::MachineConfig;
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

/// A three-rotor cipher machine.
///
/// `rotors[0]` is the fast rotor: it is entered first on the forward path
/// and steps on every letter. `rotors[1]` steps when `rotors[0]` reaches its
/// notch, and `rotors[2]` steps when `rotors[1]` reaches its notch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    rotors: [Rotor; ROTOR_SLOTS],
    reflector: Reflector,
    plugboard: Plugboard,
    initial_offsets: [usize; ROTOR_SLOTS],
}

impl EnigmaMachine {
    /// Assembles a machine from already-built parts.
    ///
    /// The rotors' current offsets become the positions restored by
    /// [`reset`](Self::reset).
    pub fn new(rotors: [Rotor; ROTOR_SLOTS], reflector: Reflector, plugboard: Plugboard) -> Self {
        let initial_offsets = [rotors[0].offset(), rotors[1].offset(), rotors[2].offset()];
        EnigmaMachine {
            rotors,
            reflector,
            plugboard,
            initial_offsets,
        }
    }

    /// Builds a machine from a validated configuration.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if any part of `config` names a rotor,
    /// reflector or plug pair that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::config::MachineSettings;
    /// use enigmacrypt::EnigmaMachine;
    ///
    /// let settings = MachineSettings::from_json_str(
    ///     r#"{"Rotors":[{"Number":3,"Position":2},{"Number":2,"Position":1},
    ///        {"Number":1,"Position":1}],"Reflector":"B","Plugs":[]}"#,
    /// ).unwrap();
    /// let mut machine = EnigmaMachine::from_config(&settings.validate().unwrap()).unwrap();
    /// assert_eq!(machine.encrypt("AAAAA"), "BDZGO");
    /// ```
    pub fn from_config(config: &MachineConfig) -> Result<Self, ConfigurationError> {
        let [r0, r1, r2] = &config.rotors;
        let rotors = [
            Rotor::new(r0.number, r0.offset)?,
            Rotor::new(r1.number, r1.offset)?,
            Rotor::new(r2.number, r2.offset)?,
        ];
        let reflector = Reflector::new(config.reflector)?;
        let plugboard = Plugboard::new(&config.plugs)?;
        Ok(Self::new(rotors, reflector, plugboard))
    }

    /// Enciphers `message`, advancing the rotors once per accepted letter.
    ///
    /// Characters outside `A..=Z` (lowercase, digits, punctuation,
    /// whitespace, line terminators) are dropped: they produce no output
    /// and do not step the rotors. Because the cipher is reciprocal, the
    /// same call deciphers when started from the same rotor offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, Plugboard, Reflector, Rotor};
    ///
    /// let rotors = [
    ///     Rotor::new(1, 0).unwrap(),
    ///     Rotor::new(2, 0).unwrap(),
    ///     Rotor::new(3, 0).unwrap(),
    /// ];
    /// let mut machine = EnigmaMachine::new(rotors, Reflector::new('B').unwrap(), Plugboard::default());
    /// let cipher = machine.encrypt("HELLO, WORLD!\n");
    /// assert_eq!(cipher.len(), 10);
    ///
    /// machine.reset();
    /// assert_eq!(machine.encrypt(&cipher), "HELLOWORLD");
    /// ```
    pub fn encrypt(&mut self, message: &str) -> String {
        let mut cipher = String::with_capacity(message.len());
        let mut dropped = 0usize;

        for c in message.chars() {
            match self.encrypt_letter(c) {
                Some(out) => cipher.push(out),
                None => dropped += 1,
            }
        }

        debug!(
            accepted = cipher.len(),
            dropped,
            offsets = ?self.offsets(),
            "message enciphered"
        );
        cipher
    }

    /// Enciphers a single character and steps the rotors.
    ///
    /// # Returns
    /// `None` without touching any state if `letter` is not in `A..=Z`.
    pub fn encrypt_letter(&mut self, letter: char) -> Option<char> {
        if !is_letter(letter) {
            trace!(?letter, "skipping non-letter");
            return None;
        }

        let out = self.signal_path(letter);
        self.step();
        Some(out)
    }

    /// Runs one letter through the wiring at the current offsets.
    fn signal_path(&self, letter: char) -> char {
        let mut i = to_index(self.plugboard.swap(letter));

        for rotor in &self.rotors {
            i = rotor.encrypt_forward(i);
        }

        i = self.reflector.reflect(i);

        for rotor in self.rotors.iter().rev() {
            i = rotor.encrypt_backward(i);
        }

        self.plugboard.swap(to_letter(i))
    }

    /// Odometer stepping: the fast rotor always moves; a carry moves the
    /// next rotor, at most two levels deep.
    fn step(&mut self) {
        if self.rotors[0].step() && self.rotors[1].step() {
            self.rotors[2].step();
        }
    }

    /// Returns the current offsets of the three rotors.
    pub fn offsets(&self) -> [usize; ROTOR_SLOTS] {
        [
            self.rotors[0].offset(),
            self.rotors[1].offset(),
            self.rotors[2].offset(),
        ]
    }

    /// Overwrites the current rotor offsets. Values of 26 or more wrap.
    pub fn set_offsets(&mut self, offsets: [usize; ROTOR_SLOTS]) {
        for (rotor, offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
    }

    /// Restores the offsets the machine was built with.
    ///
    /// After a reset, enciphering the same input reproduces the same output.
    pub fn reset(&mut self) {
        self.set_offsets(self.initial_offsets);
    }

    /// Returns the rotor triple, fast rotor first.
    pub fn rotors(&self) -> &[Rotor; ROTOR_SLOTS] {
        &self.rotors
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
