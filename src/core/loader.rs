//! Tri-state view slices and the loaders that settle them.

use serde::de::DeserializeOwned;

use crate::core::fetch::{self, FetchError};
use crate::core::query::ResourceRequest;
use crate::core::scope::FetchScope;
use crate::domain::ports::ContentSource;

/// One independently-settled piece of a page's view state.
///
/// Starts as `Loading` and settles exactly once into `Failed` or `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Applies a fetch result. Returns `false` and leaves the slice untouched
    /// when it has already settled or when the fetch was cancelled.
    pub fn settle(&mut self, result: Result<T, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }

        match result {
            Ok(value) => *self = LoadState::Ready(value),
            Err(FetchError::Cancelled) => return false,
            Err(e) => *self = LoadState::Failed(e.to_string()),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(message) => LoadState::Failed(message),
            LoadState::Ready(value) => LoadState::Ready(f(value)),
        }
    }
}

fn settled<T>(request: &ResourceRequest, result: Result<T, FetchError>) -> LoadState<T> {
    match &result {
        Err(FetchError::Cancelled) => {
            tracing::debug!(resource = %request.path(), "content fetch cancelled");
        }
        Err(e) => {
            tracing::warn!(resource = %request.path(), error = %e, "content fetch failed");
        }
        Ok(_) => {}
    }

    let mut state = LoadState::Loading;
    state.settle(result);
    state
}

pub async fn load_one<T: DeserializeOwned>(
    source: &dyn ContentSource,
    scope: &FetchScope,
    request: ResourceRequest,
) -> LoadState<T> {
    let result = scope.run(fetch::fetch_one(source, &request)).await;
    settled(&request, result)
}

pub async fn load_many<T: DeserializeOwned>(
    source: &dyn ContentSource,
    scope: &FetchScope,
    request: ResourceRequest,
) -> LoadState<Vec<T>> {
    let result = scope.run(fetch::fetch_many(source, &request)).await;
    settled(&request, result)
}

pub async fn load_first<T: DeserializeOwned>(
    source: &dyn ContentSource,
    scope: &FetchScope,
    request: ResourceRequest,
    key: &str,
) -> LoadState<T> {
    let result = scope.run(fetch::fetch_first(source, &request, key)).await;
    settled(&request, result)
}
