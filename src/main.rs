//! Binary entry point: wires configuration, database, store, and session.

use dotenvy::dotenv;
use stock_buddy::cli;
use stock_buddy::config::{self, database, seed};
use stock_buddy::core::store::InventoryStore;
use stock_buddy::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!("Using database at {}", app_config.database_url);

    // 4. File-backed SQLite needs the default data directory to exist
    if app_config.database_url.starts_with("sqlite://data/") {
        std::fs::create_dir_all("data")?;
    }

    // 5. Initialize the database
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;

    // 6. Resolve seed items and load the inventory store
    let seed_items = seed::resolve_seed_items(&app_config.seed_config_path)
        .inspect_err(|e| error!("Failed to load seed configuration: {e}"))?;
    let mut store = InventoryStore::load(db, seed_items)
        .await
        .inspect_err(|e| error!("Failed to load inventory: {e}"))?;
    info!("Inventory loaded with {} items.", store.len());

    // 7. Run the interactive session
    cli::run_session(&mut store).await
}
