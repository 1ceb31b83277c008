//! Shared machine handle for hosts that serve many callers from one machine.
//!
//! Every encryption mutates the rotor offsets, so concurrent callers of the
//! same machine are serialized: the lock is held for a whole
//! [`SharedMachine::encrypt`] call, never per letter. Hosts that want
//! independent streams build one [`EnigmaMachine`] per session instead.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use crate::machine::{EnigmaMachine, ROTOR_SLOTS};

/// Cloneable, thread-safe handle to a single stateful machine.
#[derive(Debug, Clone)]
pub struct SharedMachine {
    inner: Arc<Mutex<EnigmaMachine>>,
}

impl SharedMachine {
    /// Wraps `machine` for shared use.
    pub fn new(machine: EnigmaMachine) -> Self {
        SharedMachine {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Enciphers `message` while holding the machine lock.
    pub fn encrypt(&self, message: &str) -> String {
        self.lock().encrypt(message)
    }

    /// Returns the current rotor offsets.
    pub fn offsets(&self) -> [usize; ROTOR_SLOTS] {
        self.lock().offsets()
    }

    /// Restores the machine's initial offsets.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Encryption cannot panic halfway through a letter, so a poisoned lock
    /// still guards consistent offsets.
    fn lock(&self) -> MutexGuard<'_, EnigmaMachine> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned machine lock");
            poisoned.into_inner()
        })
    }
}
