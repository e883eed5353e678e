//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for student records
//! - Image storage for student image files

use sea_orm::DatabaseConnection;

use super::storage::ImageStorage;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `ImageStorage` keeps its lock table behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Storage for student image files, rooted at the configured image directory.
    pub images: ImageStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, images: ImageStorage) -> Self {
        Self { db, images }
    }
}
