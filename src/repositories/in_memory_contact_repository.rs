use crate::domain::{PhoneQuery, ValidationError, ValidationResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Contact repository backed by a single in-memory list.
///
/// Contacts are kept in insertion order and lost when the process exits.
/// Writers hold the lock across the whole check-then-act sequence, so two
/// concurrent adds of the same contact cannot both pass the duplicate scan.
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        debug!("Contact repository initialized");
        Self {
            contacts: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored contacts.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// True if no contacts are stored.
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    fn parse_phone_query(phone_number: &str) -> ValidationResult<PhoneQuery> {
        PhoneQuery::new(phone_number)
            .inspect_err(|_| warn!(phone_number = %phone_number, "Invalid phone number"))
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn add(&self, contact: Contact) -> ValidationResult<()> {
        if contact.name.is_empty() {
            warn!("Contact name is empty");
            return Err(ValidationError::NameRequired);
        }
        if contact.phone_number.is_empty() {
            warn!("Contact phone number is empty");
            return Err(ValidationError::PhoneRequired);
        }

        let mut contacts = self.contacts.write().await;
        if contacts.iter().any(|c| c.same_identity(&contact)) {
            warn!(%contact, "Contact already exists");
            return Err(ValidationError::DuplicateContact);
        }

        debug!(%contact, "Contact added");
        contacts.push(contact);
        Ok(())
    }

    async fn list(&self) -> Vec<Contact> {
        let contacts = self.contacts.read().await;
        if contacts.is_empty() {
            warn!("No contacts in repository");
        }
        contacts.clone()
    }

    async fn find_by_name(&self, name: &str) -> ValidationResult<Vec<Contact>> {
        if name.is_empty() {
            warn!("Name is empty");
            return Err(ValidationError::NameRequired);
        }

        let matches: Vec<Contact> = self
            .contacts
            .read()
            .await
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect();

        if matches.is_empty() {
            warn!(name = %name, "No contacts with name");
        }
        Ok(matches)
    }

    async fn find_by_phone(&self, phone_number: &str) -> ValidationResult<Vec<Contact>> {
        let query = Self::parse_phone_query(phone_number)?;

        let matches: Vec<Contact> = self
            .contacts
            .read()
            .await
            .iter()
            .filter(|c| query.is_contained_in(&c.phone_number))
            .cloned()
            .collect();

        if matches.is_empty() {
            warn!(phone_number = %query, "No contacts with phone number");
        }
        Ok(matches)
    }

    async fn remove_by_phone(&self, phone_number: &str) -> ValidationResult<usize> {
        let query = Self::parse_phone_query(phone_number)?;

        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| !query.is_exactly(&c.phone_number));
        let removed = before - contacts.len();

        if removed == 0 {
            warn!(phone_number = %query, "No contact with phone number");
        } else {
            debug!(phone_number = %query, removed, "Contacts removed by phone number");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Contact {
        Contact::new("John Doe", "john.doe", "1234567890")
    }

    #[tokio::test]
    async fn test_add_valid_contact() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        let contacts = repo.list().await;
        assert_eq!(contacts, vec![john()]);
    }

    #[tokio::test]
    async fn test_add_empty_name_rejected_without_side_effect() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        let result = repo.add(Contact::new("", "john.doe", "0009876543")).await;
        assert_eq!(result, Err(ValidationError::NameRequired));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_empty_phone_rejected_without_side_effect() {
        let repo = InMemoryContactRepository::new();

        let result = repo.add(Contact::new("John Doe", "john.doe", "")).await;
        assert_eq!(result, Err(ValidationError::PhoneRequired));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_checks_name_before_phone() {
        let repo = InMemoryContactRepository::new();
        let result = repo.add(Contact::default()).await;
        assert_eq!(result, Err(ValidationError::NameRequired));
    }

    #[tokio::test]
    async fn test_add_duplicate_rejected() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        let result = repo.add(john()).await;
        assert_eq!(result, Err(ValidationError::DuplicateContact));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_same_phone_different_email_is_not_duplicate() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();
        repo.add(Contact::new("John Doe", "jd@work.com", "1234567890"))
            .await
            .unwrap();
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryContactRepository::new();
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryContactRepository::new();
        let a = Contact::new("Zed", "z@x.com", "1");
        let b = Contact::new("Amy", "a@x.com", "2");
        repo.add(a.clone()).await.unwrap();
        repo.add(b.clone()).await.unwrap();

        assert_eq!(repo.list().await, vec![a, b]);
    }

    #[tokio::test]
    async fn test_list_returns_independent_copy() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        let mut snapshot = repo.list().await;
        snapshot.clear();
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_name_exact_match() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();
        repo.add(Contact::new("John", "j@x.com", "555")).await.unwrap();
        repo.add(Contact::new("John Doe", "other", "777")).await.unwrap();

        let found = repo.find_by_name("John Doe").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], john());
        assert_eq!(found[1].phone_number, "777");

        assert!(repo.find_by_name("john doe").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_empty_rejected() {
        let repo = InMemoryContactRepository::new();
        assert_eq!(
            repo.find_by_name("").await,
            Err(ValidationError::NameRequired)
        );
    }

    #[tokio::test]
    async fn test_find_by_phone_substring_match() {
        let repo = InMemoryContactRepository::new();
        repo.add(Contact::new("Jane", "jane", "0012345")).await.unwrap();
        repo.add(Contact::new("Bob", "bob", "999")).await.unwrap();

        let found = repo.find_by_phone("123").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane");
    }

    #[tokio::test]
    async fn test_find_by_phone_no_match_is_empty() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();
        assert!(repo.find_by_phone("000").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_phone_invalid_rejected() {
        let repo = InMemoryContactRepository::new();
        for bad in ["", "12345678901", "12-34", "abc"] {
            assert_eq!(
                repo.find_by_phone(bad).await,
                Err(ValidationError::InvalidPhoneNumber),
                "query {:?} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_remove_by_phone_exact_match() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();
        repo.add(Contact::new("Jane", "jane", "1234567890")).await.unwrap();
        repo.add(Contact::new("Bob", "bob", "555")).await.unwrap();

        let removed = repo.remove_by_phone("1234567890").await.unwrap();
        assert_eq!(removed, 2);

        let remaining = repo.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_remove_by_phone_does_not_use_substring() {
        let repo = InMemoryContactRepository::new();
        repo.add(Contact::new("Jane", "jane", "0012345")).await.unwrap();

        assert_eq!(repo.find_by_phone("123").await.unwrap().len(), 1);
        assert_eq!(repo.remove_by_phone("123").await.unwrap(), 0);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_by_phone_missing_is_soft_failure() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        assert_eq!(repo.remove_by_phone("0000000000").await, Ok(0));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_by_phone_invalid_rejected() {
        let repo = InMemoryContactRepository::new();
        repo.add(john()).await.unwrap();

        assert_eq!(
            repo.remove_by_phone("12345678901").await,
            Err(ValidationError::InvalidPhoneNumber)
        );
        assert_eq!(
            repo.remove_by_phone("12345a").await,
            Err(ValidationError::InvalidPhoneNumber)
        );
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_adds_store_one_copy() {
        let repo = std::sync::Arc::new(InMemoryContactRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(john()).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len().await, 1);
    }
}
