//! Contact model representing an entry in the contact book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the contact book.
///
/// Contacts have no generated identifier. Identity for duplicate detection is
/// the full (name, phone number, email) triple; removal goes by phone number.
/// Absent JSON fields deserialize as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Display name; required on add
    pub name: String,

    /// Email address; optional, not validated
    pub email: String,

    /// Phone number; required on add
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// True if both contacts carry the same name, phone number and email.
    pub fn same_identity(&self, other: &Contact) -> bool {
        self.name == other.name
            && self.phone_number == other.phone_number
            && self.email == other.email
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact(name={}, email={}, phoneNumber={})",
            self.name, self.email, self.phone_number
        )
    }
}
