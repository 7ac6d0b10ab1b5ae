use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid contact name: {0:?} (names cannot contain '|' or line breaks)")]
    InvalidName(String),
    #[error("invalid phone number: {0} (expected 7 or 10 digits)")]
    InvalidPhoneNumber(String),
    #[error("malformed contact line: {0}")]
    MalformedLine(String),
}
