//! Domain value objects and validation errors.
//!
//! Phone lookups and removals are validated through [`PhoneQuery`] before the
//! repository touches its collection.

pub mod errors;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use phone::PhoneQuery;
