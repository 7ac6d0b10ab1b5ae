//! Line codec for the flat contacts file.
//!
//! Each contact is stored as `<name> | <phone>` on its own line.

use crate::domain::{normalize_name, Contact};
use crate::error::CoreError;

pub const LINE_SEPARATOR: &str = " | ";

pub fn format_line(contact: &Contact) -> String {
    format!("{}{}{}", contact.name, LINE_SEPARATOR, contact.phone)
}

/// Parses one persisted line. Empty trailing fields are ignored, so
/// `Bob | 5551234 | ` still reads as two parts. The phone part is
/// normalized, so a hand-edited file with raw digits loads in canonical form.
pub fn parse_line(line: &str) -> Result<Contact, CoreError> {
    let mut parts: Vec<&str> = line.split(LINE_SEPARATOR).collect();
    while parts.len() > 1 && parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    let [name, phone] = parts.as_slice() else {
        return Err(CoreError::MalformedLine(line.to_string()));
    };

    let name = normalize_name(name).map_err(|_| CoreError::MalformedLine(line.to_string()))?;
    if phone.trim().is_empty() {
        return Err(CoreError::MalformedLine(line.to_string()));
    }
    Contact::new(&name, phone)
}
