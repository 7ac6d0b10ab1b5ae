pub mod error;
pub mod file;
pub mod paths;

use crate::error::{Result, StoreError};
use rolodex_core::{normalize_name, normalize_phone, Contact, CoreError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use crate::file::{parse_contacts, ParsedContacts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Contact),
    Updated { contact: Contact, previous_phone: String },
    /// A contact with the same name exists and the overwrite was declined.
    Kept(Contact),
}

/// The in-memory contact list backed by a flat file.
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Loads the contacts file at `path`. A missing or unreadable file
    /// yields an empty store; skipped lines are logged.
    pub fn open(path: &Path) -> Self {
        let contacts = match file::read_contacts(path) {
            Ok(parsed) => {
                for warning in &parsed.warnings {
                    warn!(path = %path.display(), "skipping contact: {}", warning);
                }
                debug!(
                    path = %path.display(),
                    loaded = parsed.contacts.len(),
                    skipped = parsed.skipped,
                    "contacts loaded"
                );
                parsed.contacts
            }
            Err(err) => {
                warn!(error = %err, "could not read contacts, starting with an empty list");
                Vec::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            contacts,
        }
    }

    pub fn with_contacts(path: &Path, contacts: Vec<Contact>) -> Self {
        Self {
            path: path.to_path_buf(),
            contacts,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.has_name(name))
    }

    /// Adds a contact or, when the name is already present, asks `overwrite`
    /// whether to replace its phone number. The file is rewritten after any
    /// change; a failed rewrite returns `StoreError::Save` with the change
    /// still applied in memory.
    pub fn add<F>(&mut self, name: &str, raw_phone: &str, overwrite: F) -> Result<AddOutcome>
    where
        F: FnOnce(&Contact) -> bool,
    {
        let phone = normalize_phone(raw_phone)
            .ok_or_else(|| CoreError::InvalidPhoneNumber(raw_phone.trim().to_string()))?;
        let name = normalize_name(name)?;

        let outcome = match self.position(&name) {
            Some(index) => {
                let existing = &mut self.contacts[index];
                if !overwrite(existing) {
                    return Ok(AddOutcome::Kept(existing.clone()));
                }
                let previous_phone = std::mem::replace(&mut existing.phone, phone);
                AddOutcome::Updated {
                    contact: existing.clone(),
                    previous_phone,
                }
            }
            None => {
                let contact = Contact { name, phone };
                self.contacts.push(contact.clone());
                AddOutcome::Added(contact)
            }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Removes the contact with a case-insensitively matching name and
    /// rewrites the file.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(format!("contact {}", name.trim())))?;
        let removed = self.contacts.remove(index);
        self.save()?;
        Ok(removed)
    }

    pub fn save(&self) -> Result<()> {
        file::write_contacts(&self.path, &self.contacts)?;
        debug!(path = %self.path.display(), count = self.contacts.len(), "contacts saved");
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.has_name(name))
    }
}
