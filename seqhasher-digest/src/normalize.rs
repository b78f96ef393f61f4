//! Sequence normalization: whitespace removal plus optional case folding.
//!
//! Normalization is applied to every record before hashing, and the emitted
//! sequence text is the normalized form as well, so the digests always match
//! the bytes a consumer can re-parse from the output.

/// Whitespace-class bytes removed from sequences: ASCII space, tab, LF, VT,
/// FF, CR, and the Latin-1 next-line (0x85) and no-break space (0xA0) bytes.
const fn is_sequence_whitespace(byte: u8) -> bool {
    matches!(
        byte,
        b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b' ' | 0x85 | 0xa0
    )
}

/// Normalize raw residue bytes for hashing and output.
///
/// Every whitespace-class byte is removed from anywhere in the sequence (the
/// surviving fragments are concatenated in their original order), and unless
/// `case_sensitive` is set the remaining bytes are upper-cased with ASCII
/// semantics. The input buffer is never mutated; zero-length input yields a
/// zero-length output. Applying `normalize` to its own output returns the
/// same bytes.
///
/// # Examples
/// ```
/// use seqhasher_digest::normalize;
///
/// assert_eq!(normalize(b"ac tg\nACT", false), b"ACTGACT");
/// assert_eq!(normalize(b"ac tg\nACT", true), b"actgACT");
/// ```
pub fn normalize(sequence: &[u8], case_sensitive: bool) -> Vec<u8> {
    sequence
        .iter()
        .copied()
        .filter(|byte| !is_sequence_whitespace(*byte))
        .map(|byte| {
            if case_sensitive {
                byte
            } else {
                byte.to_ascii_uppercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_uppercases_by_default() {
        assert_eq!(normalize(b"actg", false), b"ACTG");
        assert_eq!(normalize(b"AcTg", false), b"ACTG");
    }

    #[test]
    fn test_normalize_case_sensitive_keeps_case() {
        assert_eq!(normalize(b"AcTg", true), b"AcTg");
    }

    #[test]
    fn test_normalize_strips_internal_whitespace() {
        assert_eq!(normalize(b"AC TG", false), b"ACTG");
        assert_eq!(normalize(b"AC\tTG\r\nAC", false), b"ACTGAC");
        assert_eq!(normalize(b"\x0bAC\x0cTG\x85\xa0", false), b"ACTG");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(b"", false), b"");
        assert_eq!(normalize(b" \t\n", false), b"");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(b" ac tg\nACT ", false);
        let twice = normalize(&once, false);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_for_any_bytes(
            seq in prop::collection::vec(any::<u8>(), 0..200),
            case_sensitive in any::<bool>(),
        ) {
            let once = normalize(&seq, case_sensitive);
            let twice = normalize(&once, case_sensitive);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_collapses_case_unless_sensitive(
            seq in prop::collection::vec(any::<u8>(), 0..200),
        ) {
            let upper: Vec<u8> = seq.iter().map(|b| b.to_ascii_uppercase()).collect();
            prop_assert_eq!(normalize(&seq, false), normalize(&upper, false));
        }
    }
}
