use std::sync::{Arc, LazyLock};

use chrono::Utc;
use regex::Regex;
use uuid::Uuid;

use crate::domain::model::{Contact, NewContact};
use crate::domain::ports::ContactStore;
use crate::utils::error::{Result, SiteError};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const MAX_NAME: usize = 100;
const MAX_EMAIL: usize = 254;
const MAX_PHONE: usize = 32;
const MAX_SUBJECT: usize = 200;
const MAX_MESSAGE: usize = 5000;

fn required(field: &str, value: &Option<String>, max: usize) -> Result<String> {
    let value = value.as_deref().map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(SiteError::validation(field, "is required"));
    }
    within_limit(field, value, max)?;
    Ok(value.to_string())
}

fn optional(field: &str, value: &Option<String>, max: usize) -> Result<Option<String>> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => {
            within_limit(field, value, max)?;
            Ok(Some(value.to_string()))
        }
        _ => Ok(None),
    }
}

fn within_limit(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(SiteError::validation(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}

/// Checks a submission and builds the record to persist. Nothing is
/// written when this fails.
pub fn validate_contact(payload: &NewContact) -> Result<Contact> {
    let name = required("name", &payload.name, MAX_NAME)?;
    let email = required("email", &payload.email, MAX_EMAIL)?;
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(SiteError::validation("email", "is not a valid email address"));
    }
    let message = required("message", &payload.message, MAX_MESSAGE)?;
    let phone = optional("phone", &payload.phone, MAX_PHONE)?;
    let subject = optional("subject", &payload.subject, MAX_SUBJECT)?;

    Ok(Contact {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        phone,
        subject,
        message,
        created_at: Utc::now(),
    })
}

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: NewContact) -> Result<Contact> {
        let contact = validate_contact(&payload)?;
        self.store.insert(contact.clone()).await?;
        tracing::info!(contact_id = %contact.id, "contact submission stored");
        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>> {
        self.store.list().await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.remove(id).await? {
            return Err(SiteError::NotFound(format!("contact {}", id)));
        }
        tracing::info!(contact_id = %id, "contact submission deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::contact_store::MemoryContactStore;

    fn payload(name: &str, email: &str, message: &str) -> NewContact {
        NewContact {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_trims_and_drops_blank_optionals() {
        let mut input = payload("  Ada  ", "ada@example.com", " Hi ");
        input.phone = Some("   ".into());
        input.subject = Some("Feed prices".into());

        let contact = validate_contact(&input).unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.message, "Hi");
        assert!(contact.phone.is_none());
        assert_eq!(contact.subject.as_deref(), Some("Feed prices"));
    }

    #[test]
    fn test_validate_rejects_missing_and_malformed() {
        let missing = NewContact {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            ..Default::default()
        };
        let err = validate_contact(&missing).unwrap_err();
        assert_eq!(err.to_string(), "Invalid message: is required");

        let bad_email = payload("Ada", "ada.example.com", "Hi");
        assert!(matches!(
            validate_contact(&bad_email),
            Err(SiteError::ValidationError { field, .. }) if field == "email"
        ));

        let long_name = payload(&"x".repeat(MAX_NAME + 1), "ada@example.com", "Hi");
        assert!(validate_contact(&long_name).is_err());
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let service = ContactService::new(Arc::new(MemoryContactStore::new()));

        let created = service
            .create(payload("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();
        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        service.delete(&created.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());

        let err = service.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, SiteError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_not_persisted() {
        let service = ContactService::new(Arc::new(MemoryContactStore::new()));
        let result = service.create(NewContact::default()).await;
        assert!(result.is_err());
        assert!(service.list().await.unwrap().is_empty());
    }
}
