//! Machine settings: the JSON settings document and its validated form.
//!
//! A settings document looks like:
//!
//! ```json
//! {
//!   "Rotors": [
//!     { "Number": 1, "Position": 1 },
//!     { "Number": 2, "Position": 1 },
//!     { "Number": 3, "Position": 1 }
//!   ],
//!   "Reflector": "B",
//!   "Plugs": ["AB", "CD"]
//! }
//! ```
//!
//! Positions are one-based (`1` = `A`). [`MachineSettings::validate`] checks
//! every field and yields a [`MachineConfig`] with zero-based offsets, from
//! which [`EnigmaMachine::from_config`] builds the engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alphabet::ALPHABET_LEN;
use crate::error::ConfigurationError;
use crate::machine::{EnigmaMachine, ROTOR_SLOTS};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::NUM_ROTORS;

/// One rotor entry of the settings document, as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSetting {
    /// Rotor identifier, 1 to 5.
    #[serde(rename = "Number")]
    pub number: i64,
    /// Starting position, 1 to 26.
    #[serde(rename = "Position")]
    pub position: i64,
}

/// The settings document, as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Exactly three rotors, fast rotor first.
    #[serde(rename = "Rotors")]
    pub rotors: [RotorSetting; ROTOR_SLOTS],
    /// Reflector identifier: `"A"`, `"B"` or `"C"`.
    #[serde(rename = "Reflector")]
    pub reflector: String,
    /// Plug pairs such as `"AB"`.
    #[serde(rename = "Plugs", default)]
    pub plugs: Vec<String>,
}

/// Validated rotor choice with a zero-based offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorConfig {
    pub number: u8,
    pub offset: usize,
}

/// Validated machine configuration consumed by [`EnigmaMachine::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub rotors: [RotorConfig; ROTOR_SLOTS],
    pub reflector: char,
    pub plugs: Vec<(char, char)>,
}

impl MachineSettings {
    /// Parses a settings document from a JSON string.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Parse`] on malformed JSON, missing
    /// fields, or a rotor list that does not hold exactly three entries.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Io`] if the file cannot be read, or
    /// [`ConfigurationError::Parse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Checks every field and converts to a [`MachineConfig`].
    ///
    /// # Errors
    /// - [`ConfigurationError::InvalidRotorNumber`] for a rotor outside 1..=5.
    /// - [`ConfigurationError::InvalidRotorPosition`] for a position outside 1..=26.
    /// - [`ConfigurationError::InvalidReflector`] unless the reflector is `A`, `B` or `C`.
    /// - [`ConfigurationError::InvalidPlugPair`] for a plug that is not two
    ///   distinct uppercase letters.
    /// - [`ConfigurationError::DuplicatePlugLetter`] if a letter is plugged twice.
    pub fn validate(&self) -> Result<MachineConfig, ConfigurationError> {
        let mut rotors = [RotorConfig {
            number: 1,
            offset: 0,
        }; ROTOR_SLOTS];
        for (slot, (setting, rotor)) in self.rotors.iter().zip(rotors.iter_mut()).enumerate() {
            *rotor = validate_rotor(slot, setting)?;
        }

        let reflector = single_char(&self.reflector)
            .ok_or_else(|| ConfigurationError::InvalidReflector(self.reflector.clone()))?;
        Reflector::new(reflector)?;

        let plugs = self
            .plugs
            .iter()
            .map(|plug| parse_plug(plug.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        // Letter reuse across pairs is only visible on the whole set.
        Plugboard::new(&plugs)?;

        let config = MachineConfig {
            rotors,
            reflector,
            plugs,
        };
        debug!(?config, "settings validated");
        Ok(config)
    }
}

fn validate_rotor(slot: usize, setting: &RotorSetting) -> Result<RotorConfig, ConfigurationError> {
    let number = u8::try_from(setting.number)
        .ok()
        .filter(|n| (1..=NUM_ROTORS).contains(n))
        .ok_or(ConfigurationError::InvalidRotorNumber(setting.number))?;

    if !(1..=ALPHABET_LEN as i64).contains(&setting.position) {
        return Err(ConfigurationError::InvalidRotorPosition {
            slot,
            position: setting.position,
        });
    }

    Ok(RotorConfig {
        number,
        offset: (setting.position - 1) as usize,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_plug(plug: &str) -> Result<(char, char), ConfigurationError> {
    let mut chars = plug.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(ConfigurationError::InvalidPlugPair(plug.to_string())),
    }
}

/// Reads, validates and builds a machine from a settings file.
///
/// # Errors
/// Any [`ConfigurationError`] from reading, parsing or validation.
pub fn load_machine(path: impl AsRef<Path>) -> Result<EnigmaMachine, ConfigurationError> {
    let path = path.as_ref();
    let config = MachineSettings::from_file(path)?.validate()?;
    let machine = EnigmaMachine::from_config(&config)?;
    info!(
        path = %path.display(),
        rotors = ?config.rotors.map(|r| r.number),
        reflector = %config.reflector,
        plugs = machine.plugboard().num_pairs(),
        "machine loaded"
    );
    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "Rotors": [
            {"Number": 1, "Position": 1},
            {"Number": 2, "Position": 5},
            {"Number": 3, "Position": 26}
        ],
        "Reflector": "B",
        "Plugs": ["AB", "CD"]
    }"#;

    #[test]
    fn test_parse_and_validate() {
        let config = MachineSettings::from_json_str(VALID)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(
            config.rotors,
            [
                RotorConfig { number: 1, offset: 0 },
                RotorConfig { number: 2, offset: 4 },
                RotorConfig { number: 3, offset: 25 },
            ]
        );
        assert_eq!(config.reflector, 'B');
        assert_eq!(config.plugs, vec![('A', 'B'), ('C', 'D')]);
    }

    #[test]
    fn test_plugs_default_to_empty() {
        let json = r#"{"Rotors":[{"Number":1,"Position":1},{"Number":2,"Position":1},
            {"Number":3,"Position":1}],"Reflector":"A"}"#;
        let settings = MachineSettings::from_json_str(json).unwrap();
        assert!(settings.plugs.is_empty());
        assert!(settings.validate().unwrap().plugs.is_empty());
    }

    #[test]
    fn test_wrong_rotor_count_is_parse_error() {
        let json = r#"{"Rotors":[{"Number":1,"Position":1}],"Reflector":"B","Plugs":[]}"#;
        assert!(matches!(
            MachineSettings::from_json_str(json),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rotor_bounds() {
        let ok = RotorSetting {
            number: 5,
            position: 26,
        };
        assert_eq!(
            validate_rotor(0, &ok).unwrap(),
            RotorConfig { number: 5, offset: 25 }
        );

        for number in [0, 6, -1, 300] {
            let setting = RotorSetting {
                number,
                position: 1,
            };
            assert!(matches!(
                validate_rotor(0, &setting),
                Err(ConfigurationError::InvalidRotorNumber(n)) if n == number
            ));
        }

        for position in [0, 27, -3] {
            let setting = RotorSetting {
                number: 1,
                position,
            };
            assert!(matches!(
                validate_rotor(1, &setting),
                Err(ConfigurationError::InvalidRotorPosition { slot: 1, position: p }) if p == position
            ));
        }
    }

    #[test]
    fn test_parse_plug() {
        assert_eq!(parse_plug("QZ").unwrap(), ('Q', 'Z'));
        assert!(parse_plug("Q").is_err());
        assert!(parse_plug("QZX").is_err());
        assert!(parse_plug("").is_err());
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("B"), Some('B'));
        assert_eq!(single_char(""), None);
        assert_eq!(single_char("BB"), None);
    }

    #[test]
    fn test_settings_serialize_with_original_field_names() {
        let settings = MachineSettings::from_json_str(VALID).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Rotors\""));
        assert!(json.contains("\"Number\""));
        assert!(json.contains("\"Position\""));
        assert!(json.contains("\"Reflector\""));
        assert!(json.contains("\"Plugs\""));
    }
}
