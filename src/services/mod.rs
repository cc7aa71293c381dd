pub mod contact_service;

pub use contact_service::{is_owner, ContactError, ContactService};
