use crate::error::CoreError;

/// Trims a contact name and checks it can be stored on a single
/// `<name> | <phone>` line: no `|` and no control characters.
pub fn normalize_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyName);
    }
    if trimmed.chars().any(|ch| ch == '|' || ch.is_control()) {
        return Err(CoreError::InvalidName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Case-insensitive identity comparison for contact names.
pub fn names_match(left: &str, right: &str) -> bool {
    let left = left.trim();
    let right = right.trim();
    left == right || left.to_lowercase() == right.to_lowercase()
}
