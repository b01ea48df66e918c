//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with the relay schema
//! migrated and the role table seeded.

use invite_relay::config::DatabaseConfig;
use invite_relay::core::invite::InvitationStore;
use invite_relay::storage::StorageLayer;
use invite_relay::storage::database::Database;
use std::collections::HashMap;
use std::sync::Arc;

/// Roles present in every seeded test database
pub const ROLES: [&str; 4] = ["tenant", "landlord", "agent", "occupant"];

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
    roles: HashMap<String, i32>,
}

impl TestDatabase {
    /// Create a new in-memory test database with the schema migrated
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
            roles: HashMap::new(),
        }
    }

    /// Create a test database with the standard roles seeded
    pub async fn seeded() -> Self {
        let mut db = Self::new().await;
        for role in ROLES {
            let id = db
                .inner
                .insert_role_type(role)
                .await
                .expect("Failed to seed role");
            db.roles.insert(role.to_string(), id);
        }
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// The database as the workflow's store
    pub fn store(&self) -> Arc<dyn InvitationStore> {
        self.inner.clone()
    }

    /// Storage layer sharing this database
    pub fn storage(&self) -> StorageLayer {
        StorageLayer {
            database: Arc::clone(&self.inner),
        }
    }

    /// Id of a seeded role
    pub fn role_id(&self, role: &str) -> i32 {
        self.roles[role]
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        run_migrations: false,
    }
}
