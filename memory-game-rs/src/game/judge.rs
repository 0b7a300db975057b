//! Submission judging.

use super::sequence::Sequence;

/// Check a typed-back submission against the expected sequence.
///
/// The caller is expected to have trimmed surrounding whitespace already.
/// See [`verify_bytes`] for the comparison rules.
pub fn verify(submission: &str, expected: &Sequence) -> bool {
    verify_bytes(submission.as_bytes(), expected)
}

/// Byte-level judging, used directly on raw serial lines.
///
/// Lengths must match exactly; each byte is ASCII-uppercased and compared
/// positionally with the expected symbol code. Bytes that are not symbol
/// codes (including non-ASCII) simply never match.
pub fn verify_bytes(submission: &[u8], expected: &Sequence) -> bool {
    if submission.len() != expected.len() {
        return false;
    }

    submission
        .iter()
        .zip(expected.iter())
        .all(|(byte, symbol)| byte.to_ascii_uppercase() == symbol.code())
}
