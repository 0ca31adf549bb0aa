/**
 * Server Initialization
 *
 * Builds the application from a `Config`:
 * 1. Open the configured store (schema provisioning happens here)
 * 2. Build the token service and password hasher
 * 3. Assemble the router around the resulting `AppState`
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{Config, StoreConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{JsonFileStore, SqlStore, Store, StoreResult};

/// Open the persistence backend selected by `config`
pub async fn open_store(config: &StoreConfig) -> StoreResult<Arc<dyn Store>> {
    match config {
        StoreConfig::Sqlite { url } => {
            tracing::info!("Using SQLite store");
            Ok(Arc::new(SqlStore::connect(url).await?))
        }
        StoreConfig::Json { path } => {
            tracing::info!("Using JSON document store at {}", path.display());
            Ok(Arc::new(JsonFileStore::open(path).await?))
        }
    }
}

/// Build the shared state for a given configuration
pub async fn create_state(config: &Config) -> StoreResult<AppState> {
    let store = open_store(&config.store).await?;
    let tokens = TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl);
    let passwords = PasswordHasher::new(config.bcrypt_cost);
    Ok(AppState::new(store, tokens, passwords))
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the store cannot be opened or its schema cannot be applied.
pub async fn create_app(config: &Config) -> StoreResult<Router> {
    tracing::info!("Initializing application: {:?}", config);
    let state = create_state(config).await?;
    Ok(create_router(state))
}
