use crate::domain::ValidationResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Owns validation and uniqueness rules for the contact collection.
/// Every read returns an owned copy; callers never see the backing store.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Append a contact after checking required fields and duplicates.
    async fn add(&self, contact: Contact) -> ValidationResult<()>;

    /// All contacts in insertion order.
    async fn list(&self) -> Vec<Contact>;

    /// Contacts whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> ValidationResult<Vec<Contact>>;

    /// Contacts whose phone number contains `phone_number`.
    async fn find_by_phone(&self, phone_number: &str) -> ValidationResult<Vec<Contact>>;

    /// Remove contacts whose phone number equals `phone_number` exactly.
    ///
    /// Returns how many were removed. Zero is not an error.
    async fn remove_by_phone(&self, phone_number: &str) -> ValidationResult<usize>;
}
