//! Summit service entry point.
//!
//! Wires configuration, adapters, application services, and the HTTP
//! router, then serves until shutdown is requested.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use summit::adapters::backend::RemoteBackend;
use summit::adapters::http::{app_router, AppServices};
use summit::adapters::identity::IntrospectionResolver;
use summit::application::{
    AgendaSessionSource, AgendaStore, AttendeeDirectory, CatalogSessionSource,
};
use summit::config::AppConfig;
use summit::ports::{BackendStore, IdentityResolver, SessionSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn BackendStore> = Arc::new(RemoteBackend::new(&config.backend)?);
    let resolver: Arc<dyn IdentityResolver> = Arc::new(IntrospectionResolver::new(&config.identity)?);

    let directory = Arc::new(AttendeeDirectory::new(store.clone()));
    let agenda = Arc::new(AgendaStore::new(store.clone()));
    let catalog: Arc<dyn SessionSource> = Arc::new(CatalogSessionSource::new(store.clone()));
    let personal: Arc<dyn SessionSource> = Arc::new(AgendaSessionSource::new(agenda.clone()));

    let app = app_router(
        AppServices {
            resolver,
            directory,
            agenda,
            catalog,
            personal,
        },
        &config.gate,
        &config.server,
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "summit listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
