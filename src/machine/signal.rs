//! Signal path
//!
//! One symbol through plugboard, rotor stack, reflector and back out. Pure
//! over the compiled state; the stepping engine has already committed the
//! position vector for this keystroke. For a fixed position vector the path
//! is involutive: plugboard and reflector are self-inverse and the two rotor
//! passes are exact inverses of each other.

use super::RotorAssembly;

/// Encrypt one contact index through the full path.
pub(crate) fn encipher(
    rotors: &[RotorAssembly],
    reflector: &[u8; 26],
    plugboard: &[u8; 26],
    input: u8,
) -> u8 {
    let mut signal = plugboard[input as usize];

    // Forward pass, rightmost rotor first (the keyboard side)
    for rotor in rotors.iter().rev() {
        signal = rotor.pass_forward(signal);
    }

    signal = reflector[signal as usize];

    // Return pass, leftmost rotor first, through the inverse wiring
    for rotor in rotors {
        signal = rotor.pass_reverse(signal);
    }

    plugboard[signal as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MachineModel, RotorId};
    use crate::config::{MachineConfig, Plugboard};
    use crate::machine::Machine;

    /// Encipher one letter at a frozen position vector (no stepping)
    fn frozen(config: &MachineConfig, input: u8) -> u8 {
        let m = Machine::new(config.clone()).unwrap();
        encipher(&m.rotors, &m.reflector, &m.plugboard, input)
    }

    #[test]
    fn test_fixed_positions_are_involutive() {
        let mut config = MachineConfig::for_model(MachineModel::EnigmaI);
        config.rotors = vec![RotorId::IV, RotorId::II, RotorId::V];
        config.positions = vec!['Q', 'E', 'V'];
        config.rings = vec![7, 0, 19];
        config.plugboard = Plugboard::with_pairs(&[('A', 'Z'), ('M', 'N')]);

        for input in 0..26 {
            let out = frozen(&config, input);
            assert_eq!(frozen(&config, out), input, "not involutive at {input}");
            assert_ne!(out, input, "fixed point at {input}");
        }
    }

    #[test]
    fn test_offset_cancels_when_position_equals_ring() {
        // position - ring is the only place either enters the path, so
        // advancing both together changes nothing
        let base = MachineConfig::for_model(MachineModel::EnigmaI);
        let mut shifted = base.clone();
        shifted.positions = vec!['D', 'D', 'D'];
        shifted.rings = vec![3, 3, 3];

        for input in 0..26 {
            assert_eq!(frozen(&base, input), frozen(&shifted, input));
        }
    }

    #[test]
    fn test_plugboard_applied_on_both_ends() {
        let base = MachineConfig::for_model(MachineModel::EnigmaI);
        let mut steckered = base.clone();
        steckered.plugboard = Plugboard::with_pairs(&[('A', 'B')]);

        // With A-B swapped, pressing A must behave exactly as pressing B on
        // the plain machine (and the lamp side swaps symmetrically)
        for (input, swapped) in [(0u8, 1u8), (1, 0)] {
            let plain_out = frozen(&base, swapped);
            let expected = match plain_out {
                0 => 1,
                1 => 0,
                other => other,
            };
            assert_eq!(frozen(&steckered, input), expected);
        }

        // Letters outside the pair map through the rotor stack unswapped
        let plain_out = frozen(&base, 2);
        if plain_out > 1 {
            assert_eq!(frozen(&steckered, 2), plain_out);
        }
    }

    #[test]
    fn test_four_rotor_stack_uses_all_slots() {
        // Swapping Beta for Gamma must change the mapping even though the
        // auxiliary rotor never steps
        let beta = MachineConfig::for_model(MachineModel::M4);
        let mut gamma = beta.clone();
        gamma.rotors[0] = RotorId::Gamma;

        let differs = (0..26).any(|input| frozen(&beta, input) != frozen(&gamma, input));
        assert!(differs);
    }

    #[test]
    fn test_ring_setting_shifts_the_mapping() {
        let base = MachineConfig::for_model(MachineModel::EnigmaI);
        let mut ringed = base.clone();
        ringed.rings = vec![0, 0, 1];

        let differs = (0..26).any(|input| frozen(&base, input) != frozen(&ringed, input));
        assert!(differs);
    }
}
