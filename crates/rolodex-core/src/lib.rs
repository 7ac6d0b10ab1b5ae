pub mod domain;
pub mod error;
pub mod record;

pub use domain::*;
pub use error::CoreError;
pub use record::{format_line, parse_line, LINE_SEPARATOR};
