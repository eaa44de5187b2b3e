use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use super::{build_router, AppState};
use crate::adapters::cms_client::CmsClient;
use crate::adapters::contact_store::{JsonFileContactStore, MemoryContactStore};
use crate::config::SiteConfig;
use crate::domain::ports::{ConfigProvider, ContactStore};
use crate::utils::error::Result;

pub async fn build_state(config: &SiteConfig) -> Result<AppState> {
    let client = CmsClient::from_config(config)?;
    tracing::info!("Using content server at {}", client.base_url());

    let store: Arc<dyn ContactStore> = if config.contact.in_memory {
        tracing::warn!("Contact submissions are kept in memory only");
        Arc::new(MemoryContactStore::new())
    } else {
        let store = JsonFileContactStore::open(config.contact_store_path()).await?;
        tracing::info!("Contact submissions stored in {}", store.file_path().display());
        Arc::new(store)
    };

    Ok(AppState::new(Arc::new(client), store, config.navigation.clone()))
}

/// Serves until Ctrl-C or SIGTERM. Shutdown cancels the root fetch token so
/// in-flight page renders stop waiting on the CMS.
pub async fn run(config: SiteConfig) -> Result<()> {
    let state = build_state(&config).await?;
    let shutdown = state.shutdown.clone();
    let app = build_router(state);

    tracing::debug!("Binding {}", config.bind_address());
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Storefront listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }

    token.cancel();
}
