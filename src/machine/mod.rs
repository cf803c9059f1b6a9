//! The machine itself
//!
//! Owns one validated configuration in compiled form and exposes the fused
//! advance-then-encrypt keystroke. All invariants are checked here, at
//! construction; there is no in-place reconfiguration that could skip them.
//! Submodules:
//! - `stepping`: the odometer mechanism (double-step anomaly)
//! - `signal`: one symbol through plugboard, rotors and reflector

pub(crate) mod signal;
pub(crate) mod stepping;

use crate::alphabet::{index_of, letter, wrap};
use crate::catalog::{ReflectorId, RotorDef};
use crate::config::MachineConfig;
use crate::error::{ConfigError, InputError};

/// One rotor slot in compiled form: wiring as lookup arrays, notch set as a
/// bitmask, plus the slot's ring setting and live position.
#[derive(Debug, Clone)]
pub(crate) struct RotorAssembly {
    /// Entry contact to exit contact
    forward: [u8; 26],
    /// Exit contact back to entry contact
    inverse: [u8; 26],
    /// Turnover positions, one bit per letter
    notches: u32,
    ring: u8,
    pub(crate) pos: u8,
}

impl RotorAssembly {
    fn compile(def: RotorDef, ring: u8, pos: u8) -> Self {
        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        for (i, c) in def.wiring.bytes().enumerate() {
            let out = c - b'A';
            forward[i] = out;
            inverse[out as usize] = i as u8;
        }
        let mut notches = 0u32;
        for c in def.notches.bytes() {
            notches |= 1 << (c - b'A');
        }
        Self {
            forward,
            inverse,
            notches,
            ring,
            pos,
        }
    }

    /// Whether the current window letter is a turnover position
    pub(crate) fn at_notch(&self) -> bool {
        self.notches & (1 << self.pos) != 0
    }

    /// Contact shift between the fixed entry frame and the wiring disk: the
    /// disk turns with the position while the ring setting rotates the
    /// wiring against the visible letters.
    fn offset(&self) -> i16 {
        i16::from(self.pos) - i16::from(self.ring)
    }

    /// Forward pass (keyboard side toward reflector)
    pub(crate) fn pass_forward(&self, signal: u8) -> u8 {
        let entry = wrap(i16::from(signal) + self.offset());
        wrap(i16::from(self.forward[entry as usize]) - self.offset())
    }

    /// Return pass (reflector side back toward the lamps)
    pub(crate) fn pass_reverse(&self, signal: u8) -> u8 {
        let entry = wrap(i16::from(signal) + self.offset());
        wrap(i16::from(self.inverse[entry as usize]) - self.offset())
    }
}

/// A running machine: one configuration, compiled, with live rotor positions.
///
/// Reconfiguration is building a new `MachineConfig` and a new `Machine`;
/// only `keystroke` ever changes state, and only the position vector.
#[derive(Debug, Clone)]
pub struct Machine {
    config: MachineConfig,
    rotors: Vec<RotorAssembly>,
    reflector: [u8; 26],
    plugboard: [u8; 26],
}

impl Machine {
    /// Build a machine, checking every configuration invariant eagerly.
    /// Nothing is ever rejected later than this.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        let model = config.model;
        let slots = model.slots();

        if config.positions.len() != config.rotors.len() || config.rings.len() != config.rotors.len()
        {
            return Err(ConfigError::MismatchedLengths {
                rotors: config.rotors.len(),
                positions: config.positions.len(),
                rings: config.rings.len(),
            });
        }
        if config.rotors.len() != slots {
            return Err(ConfigError::WrongRotorCount {
                model,
                expected: slots,
                got: config.rotors.len(),
            });
        }

        let mut rotors = Vec::with_capacity(slots);
        for (slot, ((&id, &pos), &ring)) in config
            .rotors
            .iter()
            .zip(&config.positions)
            .zip(&config.rings)
            .enumerate()
        {
            if !model.allowed_rotors().contains(&id) {
                return Err(ConfigError::RotorNotInModel { rotor: id, model });
            }
            let auxiliary = model.greek_rotors().contains(&id);
            if slots == 4 && slot == 0 && !auxiliary {
                return Err(ConfigError::AuxiliarySlotViolation { model, rotor: id });
            }
            if auxiliary && !(slots == 4 && slot == 0) {
                return Err(ConfigError::AuxiliaryRotorInSteppingSlot { rotor: id, slot });
            }
            if ring > 25 {
                return Err(ConfigError::InvalidRingSetting(ring));
            }
            let Some(pos_index) = index_of(pos) else {
                return Err(ConfigError::InvalidPosition(pos));
            };
            rotors.push(RotorAssembly::compile(id.def(), ring, pos_index));
        }

        if !model.allowed_reflectors().contains(&config.reflector) {
            return Err(ConfigError::ReflectorNotInModel {
                reflector: config.reflector,
                model,
            });
        }
        let reflector = compile_reflector(config.reflector);
        let plugboard = compile_plugboard(&config)?;

        log::debug!(
            "built {} machine: rotors {:?}, reflector {}, {} plug pairs",
            model,
            config.rotors,
            config.reflector,
            config.plugboard.pairs.len()
        );

        Ok(Self {
            config,
            rotors,
            reflector,
            plugboard,
        })
    }

    /// One keypress: advance the rotors, then encrypt through the new
    /// positions. Atomic: a rejected key changes nothing.
    pub fn keystroke(&mut self, key: char) -> Result<char, InputError> {
        let input = index_of(key).ok_or(InputError::NotALetter(key))?;
        stepping::advance(&mut self.rotors);
        for (shown, rotor) in self.config.positions.iter_mut().zip(&self.rotors) {
            *shown = letter(rotor.pos);
        }
        let output = signal::encipher(&self.rotors, &self.reflector, &self.plugboard, input);
        Ok(letter(output))
    }

    /// Encrypt the letters of a text, passing everything else through
    /// unchanged (lowercase is uppercased first, the way an operator's
    /// keyboard would)
    pub fn feed(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.keystroke(c.to_ascii_uppercase()).unwrap_or(c))
            .collect()
    }

    /// Current window letters, leftmost slot first
    pub fn positions(&self) -> Vec<char> {
        self.rotors.iter().map(|r| letter(r.pos)).collect()
    }

    /// Snapshot of the configuration, with live positions. For display or
    /// serialization by the caller.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

fn compile_reflector(id: ReflectorId) -> [u8; 26] {
    let mut table = [0u8; 26];
    for (i, c) in id.def().wiring.bytes().enumerate() {
        table[i] = c - b'A';
    }
    table
}

fn compile_plugboard(config: &MachineConfig) -> Result<[u8; 26], ConfigError> {
    let mut map = [0u8; 26];
    for (i, slot) in map.iter_mut().enumerate() {
        *slot = i as u8;
    }
    if config.plugboard.is_empty() {
        return Ok(map);
    }
    if !config.model.has_plugboard() {
        return Err(ConfigError::PlugboardNotSupported(config.model));
    }

    let mut used = 0u32;
    for &(a, b) in &config.plugboard.pairs {
        let ai = index_of(a).ok_or(ConfigError::PlugboardInvalidLetter(a))?;
        let bi = index_of(b).ok_or(ConfigError::PlugboardInvalidLetter(b))?;
        if ai == bi {
            return Err(ConfigError::PlugboardSelfPair(a));
        }
        if used & (1 << ai) != 0 {
            return Err(ConfigError::PlugboardConflict(a));
        }
        if used & (1 << bi) != 0 {
            return Err(ConfigError::PlugboardConflict(b));
        }
        used |= (1 << ai) | (1 << bi);
        map[ai as usize] = bi;
        map[bi as usize] = ai;
    }
    Ok(map)
}
