//! Machine configuration
//!
//! Immutable description of one machine setup. A `MachineConfig` is a plain
//! value: validation happens when a `Machine` is built from it, and the
//! stepping engine is the only producer of new position vectors. Any other
//! change means constructing a new configuration (and a new machine).

use serde::{Deserialize, Serialize};

use crate::catalog::{MachineModel, ReflectorId, RotorId};

/// Plugboard: a partial, symmetric pairing of letters.
///
/// Stored as a pair list, so A-B and B-A describe the same board and the
/// symmetry invariant holds by representation. Disjointness of the pairs is
/// checked at machine construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plugboard {
    pub pairs: Vec<(char, char)>,
}

impl Plugboard {
    /// Empty board (every letter passes through)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pairs(pairs: &[(char, char)]) -> Self {
        Self {
            pairs: pairs.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The letter `c` is steckered to, if any (order-insensitive)
    pub fn partner(&self, c: char) -> Option<char> {
        self.pairs.iter().find_map(|&(a, b)| {
            if a == c {
                Some(b)
            } else if b == c {
                Some(a)
            } else {
                None
            }
        })
    }
}

/// One complete machine setup: model, rotor choice (leftmost slot first),
/// window positions, ring settings (0-25, A=0), reflector and plugboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub model: MachineModel,
    pub rotors: Vec<RotorId>,
    pub positions: Vec<char>,
    pub rings: Vec<u8>,
    pub reflector: ReflectorId,
    #[serde(default)]
    pub plugboard: Plugboard,
}

impl MachineConfig {
    /// The factory setup for a model: default rotor order, all positions at
    /// A, all rings at 0, the model's standard reflector, empty plugboard.
    pub fn for_model(model: MachineModel) -> Self {
        let (rotors, reflector): (Vec<RotorId>, ReflectorId) = match model {
            MachineModel::EnigmaI | MachineModel::M3 => {
                (vec![RotorId::I, RotorId::II, RotorId::III], ReflectorId::B)
            }
            MachineModel::M4 => (
                vec![RotorId::Beta, RotorId::I, RotorId::II, RotorId::III],
                ReflectorId::BThin,
            ),
            MachineModel::Norway => (
                vec![RotorId::NI, RotorId::NII, RotorId::NIII],
                ReflectorId::N,
            ),
            MachineModel::SwissK => (
                vec![RotorId::KI, RotorId::KII, RotorId::KIII],
                ReflectorId::K,
            ),
            MachineModel::Railway => (
                vec![RotorId::RI, RotorId::RII, RotorId::RIII],
                ReflectorId::R,
            ),
        };
        let slots = rotors.len();
        Self {
            model,
            rotors,
            positions: vec!['A'; slots],
            rings: vec![0; slots],
            reflector,
            plugboard: Plugboard::new(),
        }
    }

    /// Derive a configuration with a replaced position vector. Explicit
    /// construction, not in-place mutation.
    pub fn with_positions(&self, positions: Vec<char>) -> Self {
        Self {
            positions,
            ..self.clone()
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::for_model(MachineModel::EnigmaI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_model() {
        for model in MachineModel::ALL {
            let config = MachineConfig::for_model(model);
            assert_eq!(config.rotors.len(), model.slots());
            assert_eq!(config.positions.len(), model.slots());
            assert_eq!(config.rings.len(), model.slots());
            assert!(config.plugboard.is_empty());
            assert!(model.allowed_reflectors().contains(&config.reflector));
        }
    }

    #[test]
    fn test_plugboard_partner_is_symmetric() {
        let board = Plugboard::with_pairs(&[('A', 'B'), ('X', 'Q')]);
        assert_eq!(board.partner('A'), Some('B'));
        assert_eq!(board.partner('B'), Some('A'));
        assert_eq!(board.partner('Q'), Some('X'));
        assert_eq!(board.partner('C'), None);
    }

    #[test]
    fn test_with_positions_leaves_base_untouched() {
        let base = MachineConfig::default();
        let moved = base.with_positions(vec!['X', 'Y', 'Z']);
        assert_eq!(base.positions, vec!['A', 'A', 'A']);
        assert_eq!(moved.positions, vec!['X', 'Y', 'Z']);
        assert_eq!(moved.rotors, base.rotors);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let mut config = MachineConfig::for_model(MachineModel::M4);
        config.plugboard = Plugboard::with_pairs(&[('A', 'B')]);
        let json = serde_json::to_string(&config).unwrap();
        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_deserializes_underscore_names() {
        // Underscore spellings of the hyphenated names are accepted
        let json = r#"{
            "model": "Norway",
            "rotors": ["N_I", "N_II", "N_III"],
            "positions": ["A", "A", "A"],
            "rings": [0, 0, 0],
            "reflector": "N"
        }"#;
        let config: MachineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rotors, vec![RotorId::NI, RotorId::NII, RotorId::NIII]);
        assert!(config.plugboard.is_empty());
    }
}
