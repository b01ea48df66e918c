use sea_orm::DatabaseConnection;

/// SeaORM-based invitation store
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
}
