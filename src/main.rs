//! Contact Book - main entry point.

use anyhow::Result;
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{Config, ContactStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the default filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (stderr, RUST_LOG overrides LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize the contact store
    let store = if config.seed_sample_contacts {
        ContactStore::seeded()
    } else {
        ContactStore::new()
    };
    info!("Contact store initialized with {} contact(s)", store.len());

    // Create the contact service shared by all handlers
    let contacts = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;

    info!(
        "Serving static files from {}",
        config.static_dir.display()
    );

    // Run the server (this will block until shutdown)
    if let Err(e) = contact_book::run_server(&config, contacts).await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    info!("Contact Book shutdown complete");
    Ok(())
}
