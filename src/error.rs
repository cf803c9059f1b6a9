//! Error taxonomy
//!
//! Two families: configuration errors, all surfaced eagerly when a machine is
//! built, and input errors, surfaced per keystroke. Nothing here is
//! transient or retryable.

use thiserror::Error;

use crate::catalog::{MachineModel, ReflectorId, RotorId};

/// Rejected machine description. Never raised after construction succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown machine model: {0}")]
    UnknownModel(String),
    #[error("unknown rotor name: {0}")]
    UnknownRotor(String),
    #[error("unknown reflector name: {0}")]
    UnknownReflector(String),
    #[error("{model} takes {expected} rotors, got {got}")]
    WrongRotorCount {
        model: MachineModel,
        expected: usize,
        got: usize,
    },
    #[error("rotor/position/ring lists differ in length ({rotors}/{positions}/{rings})")]
    MismatchedLengths {
        rotors: usize,
        positions: usize,
        rings: usize,
    },
    #[error("rotor {rotor} is not available on {model}")]
    RotorNotInModel { rotor: RotorId, model: MachineModel },
    #[error("reflector {reflector} is not available on {model}")]
    ReflectorNotInModel {
        reflector: ReflectorId,
        model: MachineModel,
    },
    #[error("slot 0 of {model} takes an auxiliary rotor, got {rotor}")]
    AuxiliarySlotViolation { model: MachineModel, rotor: RotorId },
    #[error("auxiliary rotor {rotor} cannot go in stepping slot {slot}")]
    AuxiliaryRotorInSteppingSlot { rotor: RotorId, slot: usize },
    #[error("ring setting {0} out of range (0-25)")]
    InvalidRingSetting(u8),
    #[error("rotor position {0:?} is not an uppercase letter")]
    InvalidPosition(char),
    #[error("plugboard entry {0:?} is not an uppercase letter")]
    PlugboardInvalidLetter(char),
    #[error("letter {0} appears in more than one plugboard pair")]
    PlugboardConflict(char),
    #[error("plugboard pair connects {0} to itself")]
    PlugboardSelfPair(char),
    #[error("{0} has no plugboard")]
    PlugboardNotSupported(MachineModel),
}

/// Rejected keystroke. The machine state is untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("keystroke {0:?} is not an uppercase letter")]
    NotALetter(char),
}
