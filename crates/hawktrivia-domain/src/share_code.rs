//! Share-code format shared by the squares service and its clients.
//!
//! A share code is a short public identifier used to look up a squares game
//! without its internal UUID. Generation lives in the squares service (it
//! needs a randomness source); the format contract lives here.

/// Share code length in characters.
pub const SHARE_CODE_LEN: usize = 6;

/// Charset for share codes: uppercase alphanumeric with ambiguous glyphs
/// (0/O, 1/I) removed.
pub const SHARE_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Validate a candidate share code against the format contract.
pub fn validate_share_code(code: &str) -> bool {
    code.len() == SHARE_CODE_LEN
        && code.bytes().all(|b| SHARE_CODE_CHARSET.contains(&b))
}
