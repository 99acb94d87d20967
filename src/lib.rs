pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod views;

pub use app::AppState;
pub use auth::AuthService;
pub use dashboard::Dashboard;
pub use error::PortalError;
pub use store::RecordStore;
pub use store::in_memory::MemoryStore;
pub use store::json_file::JsonFileStore;

#[cfg(test)]
mod tests; // Include integration tests
