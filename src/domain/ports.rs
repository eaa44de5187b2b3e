use crate::core::fetch::FetchError;
use crate::core::query::ResourceRequest;
use crate::domain::model::Contact;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the CMS. Implementations return the raw JSON body of
/// a successful response; envelope and shape checks happen in `core::fetch`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_json(&self, request: &ResourceRequest) -> std::result::Result<serde_json::Value, FetchError>;
}

/// Persistence for contact submissions. A failed write must leave the
/// visible contents unchanged.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: Contact) -> Result<()>;
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn remove(&self, id: &str) -> Result<bool>;
}

pub trait ConfigProvider: Send + Sync {
    fn cms_base_url(&self) -> &str;
    fn cms_token(&self) -> Option<&str>;
    fn bind_address(&self) -> String;
    fn contact_store_path(&self) -> &str;
}
