//! PhoneQuery value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

/// A validated phone number used to look up or remove contacts.
///
/// Stored contacts may carry any non-empty phone number, but queries against
/// them are stricter: at most [`PhoneQuery::MAX_LEN`] characters, ASCII digits
/// only. Both failure causes map to the same error.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneQuery;
///
/// let query = PhoneQuery::new("1234567890").unwrap();
/// assert_eq!(query.as_str(), "1234567890");
/// assert!(PhoneQuery::new("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneQuery(String);

impl PhoneQuery {
    /// Longest accepted query, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new PhoneQuery, validating length and format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneNumber` if the query is empty,
    /// too long, or contains anything other than ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.chars().count() > Self::MAX_LEN || !DIGITS_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhoneNumber);
        }

        Ok(Self(phone))
    }

    /// Get the query as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `phone_number` contains this query anywhere.
    pub fn is_contained_in(&self, phone_number: &str) -> bool {
        phone_number.contains(self.0.as_str())
    }

    /// True if `phone_number` is exactly this query.
    pub fn is_exactly(&self, phone_number: &str) -> bool {
        phone_number == self.0
    }
}

impl fmt::Display for PhoneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
