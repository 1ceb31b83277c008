//! Enigma three-rotor cipher machine engine.
//!
//! Simulates the electromechanical rotor machine: a plugboard, three
//! stepping rotors chosen from the historical set I..V, and one of the
//! reflectors A, B or C. Each letter is substituted along a reciprocal
//! signal path, then the rotors advance like an odometer.
//!
//! This is a historical cipher with no modern security properties.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (A..Z <-> 0..25, modular wrap)
//!     ↓
//! Rotor ×3   (wiring + offset + notch, forward / backward pass)
//! Reflector  (fixed-point-free involution)
//! Plugboard  (symmetric letter swaps)
//!     ↓
//! EnigmaMachine (signal path + stepping, stateful across calls)
//!     ↑
//! config     (JSON settings → validated MachineConfig)
//! ```
//!
//! Signal path for every accepted letter:
//! plugboard → rotor 1, 2, 3 → reflector → rotor 3, 2, 1 → plugboard,
//! followed by one step of the fast rotor (with carries).
//!
//! # Examples
//!
//! Encipher and decipher with two identically configured machines:
//!
//! ```
//! use enigmacrypt::config::MachineSettings;
//! use enigmacrypt::EnigmaMachine;
//!
//! let settings = MachineSettings::from_json_str(r#"{
//!     "Rotors": [
//!         {"Number": 1, "Position": 1},
//!         {"Number": 2, "Position": 1},
//!         {"Number": 3, "Position": 1}
//!     ],
//!     "Reflector": "B",
//!     "Plugs": ["AB", "CD"]
//! }"#).unwrap();
//! let config = settings.validate().unwrap();
//!
//! let mut encoder = EnigmaMachine::from_config(&config).unwrap();
//! let mut decoder = EnigmaMachine::from_config(&config).unwrap();
//!
//! let cipher = encoder.encrypt("ATTACK AT DAWN");
//! assert_eq!(cipher.len(), 12);
//! assert_eq!(decoder.encrypt(&cipher), "ATTACKATDAWN");
//! ```
//!
//! Machine state carries over between calls:
//!
//! ```
//! use enigmacrypt::{EnigmaMachine, Plugboard, Reflector, Rotor};
//!
//! let rotors = [
//!     Rotor::new(1, 0).unwrap(),
//!     Rotor::new(2, 0).unwrap(),
//!     Rotor::new(3, 0).unwrap(),
//! ];
//! let mut machine = EnigmaMachine::new(rotors, Reflector::new('B').unwrap(), Plugboard::default());
//! assert_eq!(machine.encrypt("A"), "N");
//! assert_eq!(machine.encrypt("A"), "F");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod shared;
pub mod utils;

pub use config::{load_machine, MachineConfig, MachineSettings};
pub use error::ConfigurationError;
pub use machine::EnigmaMachine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use shared::SharedMachine;
