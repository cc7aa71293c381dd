pub mod contact;

pub use contact::{Contact, ContactFields, ContactPatch, FieldTypeError, NewContact};
