//! Payload construction, transformation, and verification
//!
//! The wire rule: every byte of a correct reply equals the corresponding
//! request byte plus one, wrapping at 255. Both sides of the rule live here.

/// Constant value every byte of the outgoing probe payload is set to.
pub const FILLER: u8 = 200;

/// Builds an outgoing payload of `size` bytes, all set to `FILLER`.
pub fn filled(size: usize) -> Vec<u8> {
    vec![FILLER; size]
}

/// Adds one to every byte in place, wrapping at 255.
pub fn increment(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = b.wrapping_add(1);
    }
}

/// Checks a reply against the expected transform of a `filler`-valued probe.
///
/// Returns true iff the reply carries at least `expected_len` bytes and each
/// of the first `expected_len` bytes equals `filler` plus one (wrapping).
/// Stops at the first mismatch; a reply shorter than `expected_len` fails.
pub fn verify(reply: &[u8], expected_len: usize, filler: u8) -> bool {
    if reply.len() < expected_len {
        return false;
    }
    let expected = filler.wrapping_add(1);
    reply[..expected_len].iter().all(|&b| b == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_sets_every_byte() {
        let payload = filled(100);
        assert_eq!(payload.len(), 100);
        assert!(payload.iter().all(|&b| b == FILLER));
    }

    #[test]
    fn filled_supports_single_byte() {
        assert_eq!(filled(1), vec![FILLER]);
    }

    #[test]
    fn increment_adds_one() {
        let mut buf = vec![200u8; 4];
        increment(&mut buf);
        assert_eq!(buf, vec![201u8; 4]);
    }

    #[test]
    fn increment_wraps_at_255() {
        let mut buf = vec![255u8, 0, 254];
        increment(&mut buf);
        assert_eq!(buf, vec![0u8, 1, 255]);
    }

    #[test]
    fn verify_accepts_correct_reply() {
        assert!(verify(&[201u8; 10], 10, FILLER));
    }

    #[test]
    fn verify_rejects_single_mismatch() {
        let mut reply = vec![201u8; 10];
        reply[7] = 200;
        assert!(!verify(&reply, 10, FILLER));
    }

    #[test]
    fn verify_rejects_short_reply() {
        assert!(!verify(&[201u8; 5], 10, FILLER));
    }

    #[test]
    fn verify_ignores_trailing_bytes() {
        // Receive buffers are larger than most probes; only the sent prefix counts.
        let mut reply = vec![201u8; 10];
        reply.extend_from_slice(&[0u8; 20]);
        assert!(verify(&reply, 10, FILLER));
    }

    #[test]
    fn verify_honors_wraparound_filler() {
        // A 255-valued probe must come back as 0, and that is not an error.
        assert!(verify(&[0u8; 8], 8, 255));
        assert!(!verify(&[255u8; 8], 8, 255));
    }

    #[test]
    fn verify_of_empty_prefix_is_trivially_true() {
        assert!(verify(&[], 0, FILLER));
    }
}
