use crate::domain::name::{names_match, normalize_name};
use crate::domain::phone::normalize_phone;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// Builds a contact from user input, trimming the name and normalizing
    /// the phone number.
    pub fn new(name: &str, raw_phone: &str) -> Result<Self, CoreError> {
        let name = normalize_name(name)?;
        let phone = normalize_phone(raw_phone)
            .ok_or_else(|| CoreError::InvalidPhoneNumber(raw_phone.trim().to_string()))?;
        Ok(Self { name, phone })
    }

    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

#[cfg(test)]
mod tests {
    use super::Contact;
    use crate::error::CoreError;

    #[test]
    fn new_contact_normalizes_fields() {
        let contact = Contact::new(" Bob ", "(555) 123 4567").unwrap();
        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.phone, "555-123-4567");
    }

    #[test]
    fn new_contact_rejects_invalid_phone() {
        let err = Contact::new("Bob", "12345").unwrap_err();
        assert_eq!(err, CoreError::InvalidPhoneNumber("12345".to_string()));
    }

    #[test]
    fn new_contact_rejects_empty_name() {
        assert_eq!(Contact::new("  ", "5551234"), Err(CoreError::EmptyName));
    }

    #[test]
    fn has_name_is_case_insensitive() {
        let contact = Contact::new("Bob", "5551234").unwrap();
        assert!(contact.has_name("bob"));
        assert!(contact.has_name("BOB"));
        assert!(!contact.has_name("Rob"));
    }
}
