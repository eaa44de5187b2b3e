//! Per-route page controllers. Each controller fires its CMS calls
//! concurrently inside one [`FetchScope`](crate::core::FetchScope) and keeps
//! every result in its own [`LoadState`](crate::core::LoadState) slice.

pub mod contact;
pub mod home;
pub mod product;
pub mod project;
pub mod service;

pub use contact::{ContactOutcome, ContactPage};
pub use home::HomePage;
pub use product::ProductPage;
pub use project::ProjectPage;
pub use service::ServicePage;
