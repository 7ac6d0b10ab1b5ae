pub mod contact;
pub mod name;
pub mod phone;

pub use contact::Contact;
pub use name::{names_match, normalize_name};
pub use phone::normalize_phone;
