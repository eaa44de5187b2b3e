pub mod fetch;
pub mod loader;
pub mod query;
pub mod scope;

pub use crate::domain::ports::{ConfigProvider, ContactStore, ContentSource};
pub use crate::utils::error::Result;
pub use fetch::{FetchError, Shape};
pub use loader::LoadState;
pub use query::{CmsQuery, ResourceRequest};
pub use scope::FetchScope;
