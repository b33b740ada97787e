//! Infrastructure layer - Persistence and workspace wiring

pub mod config;
pub mod repository;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use repository::Repository;
pub use store::DataStore;
pub use workspace::Workspace;
