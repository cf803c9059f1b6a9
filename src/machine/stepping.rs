//! Rotor stepping engine
//!
//! The odometer mechanism, run exactly once per keystroke before the signal
//! pass. Notch membership is evaluated against the pre-step positions: a
//! rotor sitting on a notch letter trips its neighbour on the keystroke that
//! carries it off the notch. The middle rotor advancing itself when on its
//! own notch is the double-step anomaly; getting either detail wrong
//! silently shortens the cipher period.

use super::RotorAssembly;

/// Advance the position vector by one keystroke.
///
/// Only the rightmost three slots take part; the auxiliary rotor in slot 0
/// of a 4-rotor stack never steps. Callers guarantee `rotors.len()` is 3
/// or 4 (machine construction enforces it).
pub(crate) fn advance(rotors: &mut [RotorAssembly]) {
    let left = rotors.len() - 3;
    let mid = rotors.len() - 2;
    let right = rotors.len() - 1;

    let mid_at_notch = rotors[mid].at_notch();
    let right_at_notch = rotors[right].at_notch();

    rotors[right].pos = (rotors[right].pos + 1) % 26;
    if mid_at_notch {
        // Double step: the pawl engaging the left rotor also carries the
        // middle rotor forward
        rotors[mid].pos = (rotors[mid].pos + 1) % 26;
        rotors[left].pos = (rotors[left].pos + 1) % 26;
    } else if right_at_notch {
        rotors[mid].pos = (rotors[mid].pos + 1) % 26;
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{MachineModel, RotorId};
    use crate::config::MachineConfig;
    use crate::machine::Machine;

    fn positions_after(start: &[char], presses: usize) -> Vec<char> {
        let config =
            MachineConfig::for_model(MachineModel::EnigmaI).with_positions(start.to_vec());
        let mut m = Machine::new(config).unwrap();
        for _ in 0..presses {
            m.keystroke('A').unwrap();
        }
        m.positions()
    }

    #[test]
    fn test_right_rotor_always_steps() {
        assert_eq!(positions_after(&['A', 'A', 'A'], 1), vec!['A', 'A', 'B']);
        assert_eq!(positions_after(&['A', 'A', 'Z'], 1), vec!['A', 'A', 'A']);
    }

    #[test]
    fn test_right_notch_carries_middle() {
        // Rotor III notches at V: the V->W keystroke carries the middle rotor
        assert_eq!(positions_after(&['A', 'D', 'V'], 1), vec!['A', 'E', 'W']);
        // One position earlier, nothing carries
        assert_eq!(positions_after(&['A', 'D', 'U'], 1), vec!['A', 'D', 'V']);
    }

    #[test]
    fn test_middle_notch_double_steps() {
        // Rotor II notches at E: middle on its notch advances itself and the
        // left rotor on the same keystroke
        assert_eq!(positions_after(&['A', 'E', 'W'], 1), vec!['B', 'F', 'X']);
        assert_eq!(positions_after(&['A', 'E', 'V'], 1), vec!['B', 'F', 'W']);
    }

    #[test]
    fn test_double_step_odometer_sequence() {
        // The classic anomaly: the middle rotor moves on two consecutive
        // keystrokes as it passes its own notch
        assert_eq!(positions_after(&['A', 'D', 'V'], 2), vec!['B', 'F', 'X']);
        assert_eq!(positions_after(&['A', 'D', 'V'], 3), vec!['B', 'F', 'Y']);
    }

    #[test]
    fn test_middle_holds_without_notch() {
        assert_eq!(positions_after(&['A', 'A', 'A'], 21), vec!['A', 'A', 'V']);
        assert_eq!(positions_after(&['A', 'A', 'A'], 22), vec!['A', 'B', 'W']);
    }

    #[test]
    fn test_multi_notch_rotor_trips_twice_per_revolution() {
        // Rotor VI notches at both Z and M
        let mut config = MachineConfig::for_model(MachineModel::M3);
        config.rotors = vec![RotorId::I, RotorId::II, RotorId::VI];

        let mut m = Machine::new(config.with_positions(vec!['A', 'A', 'Z'])).unwrap();
        m.keystroke('A').unwrap();
        assert_eq!(m.positions(), vec!['A', 'B', 'A']);

        let mut m = Machine::new(config.with_positions(vec!['A', 'A', 'M'])).unwrap();
        m.keystroke('A').unwrap();
        assert_eq!(m.positions(), vec!['A', 'B', 'N']);
    }

    #[test]
    fn test_greek_rotor_never_steps() {
        let config = MachineConfig::for_model(MachineModel::M4)
            .with_positions(vec!['G', 'A', 'E', 'V']);
        let mut m = Machine::new(config).unwrap();
        m.keystroke('A').unwrap();
        // Stepping window is the rightmost three slots; slot 0 holds at G
        // even through a double step
        assert_eq!(m.positions(), vec!['G', 'B', 'F', 'W']);
        for _ in 0..100 {
            m.keystroke('A').unwrap();
        }
        assert_eq!(m.positions()[0], 'G');
    }

    #[test]
    fn test_ring_setting_does_not_affect_stepping() {
        // Turnover follows the window letter, not the wiring offset
        let base = MachineConfig::for_model(MachineModel::EnigmaI)
            .with_positions(vec!['A', 'D', 'V']);
        let mut ringed = base.clone();
        ringed.rings = vec![5, 10, 15];

        let mut a = Machine::new(base).unwrap();
        let mut b = Machine::new(ringed).unwrap();
        for _ in 0..30 {
            a.keystroke('A').unwrap();
            b.keystroke('A').unwrap();
        }
        assert_eq!(a.positions(), b.positions());
    }
}
