use rolodex_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("could not read contacts file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not save contacts file {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Core,
    Unreadable,
    Save,
    MissingHomeDir,
    NotFound,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::Unreadable { .. } => StoreErrorKind::Unreadable,
            StoreError::Save { .. } => StoreErrorKind::Save,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }
}
