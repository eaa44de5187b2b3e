use crate::app::contact_service::ContactService;
use crate::domain::model::{Contact, NewContact};
use crate::utils::error::{Result, SiteError};

#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    Sent(Contact),
    Invalid(String),
}

/// `/contactus`: the form, and after a submission either a confirmation or
/// the validation message with the submitted values kept in the form.
#[derive(Debug, Clone, Default)]
pub struct ContactPage {
    pub form: NewContact,
    pub outcome: Option<ContactOutcome>,
}

impl ContactPage {
    pub fn blank() -> Self {
        Self::default()
    }

    /// A body that could not be decoded as a form at all.
    pub fn rejected(reason: &str) -> Self {
        Self {
            form: NewContact::default(),
            outcome: Some(ContactOutcome::Invalid(format!(
                "Your message could not be read: {}",
                reason
            ))),
        }
    }

    /// Validation problems are shown inline; storage failures propagate.
    pub async fn submit(service: &ContactService, form: NewContact) -> Result<Self> {
        match service.create(form.clone()).await {
            Ok(contact) => Ok(Self {
                form: NewContact::default(),
                outcome: Some(ContactOutcome::Sent(contact)),
            }),
            Err(e @ SiteError::ValidationError { .. }) => Ok(Self {
                form,
                outcome: Some(ContactOutcome::Invalid(e.to_string())),
            }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::contact_store::MemoryContactStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_outcomes() {
        let service = ContactService::new(Arc::new(MemoryContactStore::new()));

        let invalid = NewContact {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let page = ContactPage::submit(&service, invalid).await.unwrap();
        assert_eq!(
            page.outcome,
            Some(ContactOutcome::Invalid("Invalid email: is required".into()))
        );
        assert_eq!(page.form.name.as_deref(), Some("Ada"));

        let valid = NewContact {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            message: Some("Need a quote".into()),
            ..Default::default()
        };
        let page = ContactPage::submit(&service, valid).await.unwrap();
        assert!(matches!(page.outcome, Some(ContactOutcome::Sent(ref c)) if c.name == "Ada"));
        assert!(page.form.name.is_none());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[test]
    fn test_rejected_body_shows_reason() {
        let page = ContactPage::rejected("missing content type");
        assert_eq!(
            page.outcome,
            Some(ContactOutcome::Invalid(
                "Your message could not be read: missing content type".into()
            ))
        );
        assert!(page.form.name.is_none());
    }
}
