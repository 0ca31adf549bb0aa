//! Store fixtures
//!
//! Each fixture returns a fresh, migrated store. File-backed fixtures live
//! in the caller's `TempDir` and disappear with it.

use std::sync::Arc;

use postboard::backend::store::{JsonFileStore, SqlStore, Store};
use tempfile::TempDir;

/// Private in-memory SQLite store
pub async fn memory_store() -> SqlStore {
    SqlStore::in_memory()
        .await
        .expect("Failed to create in-memory store")
}

/// SQLite store backed by a file, with a multi-connection pool
pub async fn file_sql_store(dir: &TempDir) -> SqlStore {
    let url = format!("sqlite://{}", dir.path().join("postboard.db").display());
    SqlStore::connect(&url)
        .await
        .expect("Failed to create file-backed store")
}

/// JSON document store in a fresh file
pub async fn json_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::open(dir.path().join("postboard.json"))
        .await
        .expect("Failed to create document store")
}

/// Both backends, for suites that must hold for every implementation
pub async fn all_stores(dir: &TempDir) -> Vec<(&'static str, Arc<dyn Store>)> {
    vec![
        ("sqlite", Arc::new(memory_store().await) as Arc<dyn Store>),
        ("json", Arc::new(json_store(dir).await) as Arc<dyn Store>),
    ]
}
