// Adapters layer: concrete implementations of the domain ports (CMS over HTTP, contact storage).

pub mod cms_client;
pub mod contact_store;

pub use cms_client::CmsClient;
pub use contact_store::{JsonFileContactStore, MemoryContactStore};
