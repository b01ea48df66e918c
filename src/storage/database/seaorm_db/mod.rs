// Module declarations
mod connection;
mod invitation_ops;
mod operation_ops;
mod store;
mod types;

// Re-export public types
pub use types::SeaOrmDatabase;
