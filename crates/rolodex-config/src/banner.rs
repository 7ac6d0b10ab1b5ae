use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the startup banner. A missing or unreadable file is not an error;
/// the session simply starts without one.
pub fn load_banner(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no banner file");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not load banner");
            None
        }
    }
}
