//! HTTP surface: HTML pages, the contact REST resource and startup.

pub mod contact;
pub mod pages;
pub mod routes;
pub mod startup;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::app::contact_service::ContactService;
use crate::app::navigation::NavLink;
use crate::core::scope::FetchScope;
use crate::domain::ports::{ContactStore, ContentSource};

pub use routes::build_router;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub contacts: ContactService,
    pub menu: Arc<Vec<NavLink>>,
    /// Root token; every page render fetches under a child of it.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        content: Arc<dyn ContentSource>,
        store: Arc<dyn ContactStore>,
        menu: Vec<NavLink>,
    ) -> Self {
        Self {
            content,
            contacts: ContactService::new(store),
            menu: Arc::new(menu),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn fetch_scope(&self) -> FetchScope {
        FetchScope::child_of(&self.shutdown)
    }
}
