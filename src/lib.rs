//! Enigma machine emulation core
//!
//! Core modules:
//! - `alphabet`: letter/index codec and mod-26 arithmetic
//! - `catalog`: static rotor/reflector wiring tables, per machine model
//! - `config`: immutable machine descriptions
//! - `machine`: the machine itself (stepping engine + signal path)
//!
//! The core is synchronous, I/O-free and fully deterministic: identical
//! configurations fed identical keystrokes produce identical output and
//! identical final rotor positions on every platform. Rendering, settings
//! storage and input handling belong to callers; their whole surface is
//! `Machine::new`, `Machine::keystroke` and the read-only queries.

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod error;
pub mod machine;

pub use catalog::{MachineModel, ReflectorId, RotorId};
pub use config::{MachineConfig, Plugboard};
pub use error::{ConfigError, InputError};
pub use machine::Machine;
