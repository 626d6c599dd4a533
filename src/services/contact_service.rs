//! Contact service layer.
//!
//! Forwards primitive arguments to the contact repository.

use crate::domain::ValidationResult;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Add a contact built from its three fields.
    async fn add_contact(
        &self,
        name: String,
        email: String,
        phone_number: String,
    ) -> ValidationResult<()>;

    /// Remove every contact whose phone number equals `phone_number`.
    ///
    /// Returns the number removed.
    async fn remove_contact_by_phone_number(&self, phone_number: &str) -> ValidationResult<usize>;

    /// All contacts in insertion order.
    async fn get_contacts(&self) -> Vec<Contact>;

    /// Contacts whose phone number contains `phone_number`.
    async fn get_contacts_by_phone_number(
        &self,
        phone_number: &str,
    ) -> ValidationResult<Vec<Contact>>;

    /// Contacts whose name equals `name`.
    async fn get_contacts_by_name(&self, name: &str) -> ValidationResult<Vec<Contact>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        debug!("Contact service instantiated");
        Self { contact_repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add_contact(
        &self,
        name: String,
        email: String,
        phone_number: String,
    ) -> ValidationResult<()> {
        debug!(name = %name, email = %email, phone_number = %phone_number, "Adding contact");
        self.contact_repo
            .add(Contact::new(name, email, phone_number))
            .await
    }

    async fn remove_contact_by_phone_number(&self, phone_number: &str) -> ValidationResult<usize> {
        debug!(phone_number = %phone_number, "Removing contact");
        self.contact_repo.remove_by_phone(phone_number).await
    }

    async fn get_contacts(&self) -> Vec<Contact> {
        debug!("Getting all contacts");
        let contacts = self.contact_repo.list().await;
        if contacts.is_empty() {
            debug!("No contacts found");
        }
        contacts
    }

    async fn get_contacts_by_phone_number(
        &self,
        phone_number: &str,
    ) -> ValidationResult<Vec<Contact>> {
        debug!(phone_number = %phone_number, "Getting contacts by phone number");
        let contacts = self.contact_repo.find_by_phone(phone_number).await?;
        if contacts.is_empty() {
            debug!(phone_number = %phone_number, "No contacts found");
        }
        Ok(contacts)
    }

    async fn get_contacts_by_name(&self, name: &str) -> ValidationResult<Vec<Contact>> {
        debug!(name = %name, "Getting contacts by name");
        let contacts = self.contact_repo.find_by_name(name).await?;
        if contacts.is_empty() {
            debug!(name = %name, "No contacts found");
        }
        Ok(contacts)
    }
}
