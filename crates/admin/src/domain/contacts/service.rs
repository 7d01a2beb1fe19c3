//! Contacts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::{
    api::{AdminApiClient, should_fall_back},
    domain::{
        Sourced,
        contacts::{
            errors::ContactsServiceError,
            models::{Contact, NewContact},
        },
    },
    sample,
};

#[automock]
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// List all contacts.
    async fn list_contacts(&self) -> Result<Sourced<Vec<Contact>>, ContactsServiceError>;

    /// Add a new contact.
    async fn add_contact(&self, contact: NewContact) -> Result<Contact, ContactsServiceError>;
}

fn validate(contact: &NewContact) -> Result<(), ContactsServiceError> {
    if contact.name.trim().is_empty() || contact.phone.trim().is_empty() {
        return Err(ContactsServiceError::MissingRequiredData);
    }

    Ok(())
}

/// Contacts backed by the admin REST API, degrading to the bundled sample
/// list when the backend is unreachable. Writes never degrade.
#[derive(Debug, Clone)]
pub struct ApiContactsService {
    api: AdminApiClient,
}

impl ApiContactsService {
    pub fn new(api: AdminApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ContactsService for ApiContactsService {
    async fn list_contacts(&self) -> Result<Sourced<Vec<Contact>>, ContactsServiceError> {
        match self.api.get_json("/contacts").await {
            Ok(contacts) => Ok(Sourced::live(contacts)),
            Err(error) if should_fall_back(&error) => {
                warn!("contacts backend unavailable, showing sample data: {error}");

                Ok(Sourced::fallback(sample::contacts()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn add_contact(&self, contact: NewContact) -> Result<Contact, ContactsServiceError> {
        validate(&contact)?;

        Ok(self.api.post_json("/contacts", &contact).await?)
    }
}

/// In-memory contacts, seeded from the sample set.
#[derive(Debug)]
pub struct MemContactsService {
    contacts: RwLock<Vec<Contact>>,
}

impl MemContactsService {
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(sample::contacts()),
        }
    }
}

impl Default for MemContactsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactsService for MemContactsService {
    async fn list_contacts(&self) -> Result<Sourced<Vec<Contact>>, ContactsServiceError> {
        Ok(Sourced::live(self.contacts.read().await.clone()))
    }

    async fn add_contact(&self, contact: NewContact) -> Result<Contact, ContactsServiceError> {
        validate(&contact)?;

        let created = Contact {
            id: Uuid::now_v7(),
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
            relationship: contact.relationship,
            notes: contact.notes,
            created_at: Timestamp::now(),
        };

        self.contacts.write().await.push(created.clone());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn new_contact() -> NewContact {
        NewContact {
            name: "Meera Joshi".to_owned(),
            phone: "+91 98111 22334".to_owned(),
            email: None,
            relationship: "customer".to_owned(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn added_contact_shows_up_in_the_list() -> TestResult {
        let service = MemContactsService::new();
        let before = service.list_contacts().await?.data.len();

        let created = service.add_contact(new_contact()).await?;

        let contacts = service.list_contacts().await?.data;

        assert_eq!(contacts.len(), before + 1);
        assert!(contacts.iter().any(|contact| contact.id == created.id));

        Ok(())
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let service = MemContactsService::new();
        let mut contact = new_contact();
        contact.name = "  ".to_owned();

        let result = service.add_contact(contact).await;

        assert!(
            matches!(result, Err(ContactsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }
}
