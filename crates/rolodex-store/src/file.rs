use crate::error::{Result, StoreError};
use crate::paths;
use rolodex_core::{format_line, parse_line, Contact};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Default)]
pub struct ParsedContacts {
    pub contacts: Vec<Contact>,
    pub warnings: Vec<String>,
    pub skipped: usize,
}

/// Parses the contents of a contacts file. Malformed lines, invalid phone
/// numbers and repeated names are skipped and reported as warnings; file
/// order is preserved for everything that parses.
pub fn parse_contacts(data: &str) -> ParsedContacts {
    let mut parsed = ParsedContacts::default();

    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        match parse_line(line) {
            Ok(contact) => {
                if parsed
                    .contacts
                    .iter()
                    .any(|existing| existing.has_name(&contact.name))
                {
                    parsed.skipped += 1;
                    parsed.warnings.push(format!(
                        "line {line_no}: duplicate contact name: {}",
                        contact.name
                    ));
                    continue;
                }
                parsed.contacts.push(contact);
            }
            Err(err) => {
                parsed.skipped += 1;
                parsed.warnings.push(format!("line {line_no}: {err}"));
            }
        }
    }

    parsed
}

pub fn read_contacts(path: &Path) -> Result<ParsedContacts> {
    let data = fs::read_to_string(path).map_err(|source| StoreError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_contacts(&data))
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&format_line(contact));
        out.push('\n');
    }
    out
}

/// Rewrites the whole file. The new contents go to a sibling temp file
/// which then replaces the target, so a failed write leaves the previous
/// file in place.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    write_atomic(path, render_contacts(contacts).as_bytes()).map_err(|source| StoreError::Save {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    paths::ensure_parent_dir(path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    restrict_file_permissions(path)
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
