//! Domain validation errors.

use thiserror::Error;

/// Reasons a contact operation can be rejected.
///
/// Every precondition violation in the storage layer surfaces as one of these.
/// None of them leave a partial change behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name was absent or empty.
    #[error("name required")]
    NameRequired,

    /// Phone number was absent or empty on add.
    #[error("phone required")]
    PhoneRequired,

    /// A contact with the same name, phone number and email is already stored.
    #[error("duplicate contact")]
    DuplicateContact,

    /// Phone query was empty, longer than ten characters, or not all digits.
    #[error("invalid phone number")]
    InvalidPhoneNumber,
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
