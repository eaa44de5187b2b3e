pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CmsClient, JsonFileContactStore, MemoryContactStore};
pub use config::SiteConfig;
pub use server::{build_router, AppState};
pub use utils::error::{Result, SiteError};
