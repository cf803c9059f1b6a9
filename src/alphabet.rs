//! Letter/index codec
//!
//! All cipher arithmetic runs on 0-25 contact indices; conversion between
//! letters and indices, and mod-26 wraparound, live here. What to do with
//! non-letter input is the caller's decision.

/// The machine's symbol set, in contact order
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Convert an uppercase letter to its 0-25 contact index
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Convert a 0-25 contact index back to its uppercase letter
#[inline]
pub fn letter(index: u8) -> char {
    (b'A' + index % 26) as char
}

/// Reduce an intermediate (possibly negative) value to 0-25
#[inline]
pub fn wrap(value: i16) -> u8 {
    value.rem_euclid(26) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_letters() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('a'), None);
        assert_eq!(index_of('1'), None);
        assert_eq!(index_of(' '), None);
    }

    #[test]
    fn test_letter_round_trip() {
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(letter(i as u8), c);
            assert_eq!(index_of(c), Some(i as u8));
        }
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1), 25);
        assert_eq!(wrap(-26), 0);
        assert_eq!(wrap(-27), 25);
        assert_eq!(wrap(26), 0);
        assert_eq!(wrap(51), 25);
    }
}
