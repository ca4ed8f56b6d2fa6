//! HTTP server for the contact book.
//!
//! Routes:
//! - `GET /` redirects to `/contacts`
//! - `GET /contacts` lists contacts in display order
//! - `GET /contacts/new` shows the creation form
//! - `POST /contacts/new` validates and stores a new contact
//!
//! Anything else is looked up in the static asset directory.

pub mod access_log;
pub mod handlers;

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::services::ContactService;
use axum::routing::get;
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{error, info};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }
}

/// Build the application router.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/contacts", get(handlers::list_contacts))
        .route(
            "/contacts/new",
            get(handlers::new_contact_form).post(handlers::create_contact),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(access_log::log_request))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn run_server(config: &Config, contacts: Arc<dyn ContactService>) -> ServerResult<()> {
    let addr = config.socket_addr();

    // Build the router with the injected service
    let app = router(AppState::new(contacts), &config.static_dir);

    // Bind the listening socket
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Listening on port {}...", addr.port());

    // Serve until Ctrl-C, exposing peer addresses to the access log
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
