use axum::{
    routing::get,
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::ServerConfig;
use crate::storage::SqliteStore;
use crate::{Error, Result};

pub mod routes;

/// Server state
///
/// The store sits behind a blocking mutex; it is only locked from
/// `spawn_blocking` tasks so runtime workers never wait on a scan.
pub struct AppState {
    pub store: Arc<Mutex<SqliteStore>>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Arc<Self> {
        Arc::new(Self { store: Arc::new(Mutex::new(store)) })
    }
}

/// Build the router: one route, permissive CORS on every response
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/gatherDictionaryData", get(routes::gather_dictionary_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store, then bind and serve until a shutdown signal arrives.
///
/// The schema is ready before the listener accepts its first connection.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let store = SqliteStore::open(&config.database)?;
    let state = AppState::new(store);
    let app = router(state);

    let addr = config.addr();
    tracing::debug!("Binding {} (database {})", addr, config.database.display());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    println!("Dictionary server listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::debug!("Server stopped, closing store");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
