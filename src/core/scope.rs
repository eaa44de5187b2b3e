use std::future::Future;

use tokio_util::sync::{CancellationToken, DropGuard};

use crate::core::fetch::FetchError;

/// Cancellation scope shared by the sibling fetches of one page render.
///
/// Cancelling the scope (directly, through a [`DropGuard`], or through the
/// parent token on server shutdown) makes every pending [`FetchScope::run`]
/// resolve to [`FetchError::Cancelled`] instead of its real result.
#[derive(Debug, Clone, Default)]
pub struct FetchScope {
    token: CancellationToken,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the scope when the returned guard is dropped.
    pub fn drop_guard(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    pub async fn run<F, T>(&self, fut: F) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        if self.token.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(FetchError::Cancelled),
            result = fut => result,
        }
    }
}
