//! Player display-name validation.

/// Validate a player display name: 1–20 chars after trimming, letters,
/// digits, spaces, hyphens and underscores only. Reserved: "House" (used by
/// the house fill mode). Rejects names starting with '@'.
pub fn validate_player_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.len() > 20 {
        return false;
    }
    if trimmed.eq_ignore_ascii_case("house") {
        return false;
    }
    if trimmed.starts_with('@') {
        return false;
    }
    trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_')
}

/// Canonical form of a display name: surrounding whitespace removed.
pub fn normalize_player_name(name: &str) -> String {
    name.trim().to_owned()
}
