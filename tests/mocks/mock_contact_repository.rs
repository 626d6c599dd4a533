use async_trait::async_trait;
use contact_book::domain::{ValidationError, ValidationResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Records every call and its arguments, returns canned results, and can be
/// told to fail with a specific validation error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    added: Arc<Mutex<Vec<Contact>>>,
    queries: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<ValidationError>>>,
    removed_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contacts returned by every read.
    pub fn set_contacts(&self, contacts_list: Vec<Contact>) {
        *self.contacts.lock().unwrap() = contacts_list;
    }

    /// Make every fallible call return `error`.
    pub fn fail_with(&self, error: ValidationError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Count returned by `remove_by_phone`.
    pub fn set_removed_count(&self, count: usize) {
        *self.removed_count.lock().unwrap() = count;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Contacts passed to `add`, in call order.
    pub fn added(&self) -> Vec<Contact> {
        self.added.lock().unwrap().clone()
    }

    /// Query arguments passed to lookups and removals, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failure(&self) -> ValidationResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn add(&self, contact: Contact) -> ValidationResult<()> {
        self.track_call("add");
        self.added.lock().unwrap().push(contact);
        self.check_failure()
    }

    async fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.contacts.lock().unwrap().clone()
    }

    async fn find_by_name(&self, name: &str) -> ValidationResult<Vec<Contact>> {
        self.track_call("find_by_name");
        self.queries.lock().unwrap().push(name.to_string());
        self.check_failure()?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn find_by_phone(&self, phone_number: &str) -> ValidationResult<Vec<Contact>> {
        self.track_call("find_by_phone");
        self.queries.lock().unwrap().push(phone_number.to_string());
        self.check_failure()?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn remove_by_phone(&self, phone_number: &str) -> ValidationResult<usize> {
        self.track_call("remove_by_phone");
        self.queries.lock().unwrap().push(phone_number.to_string());
        self.check_failure()?;
        Ok(*self.removed_count.lock().unwrap())
    }
}
