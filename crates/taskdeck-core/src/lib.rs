pub mod config;
pub mod error;
pub mod store;
pub mod task;

// Re-export common error type
pub use error::TaskdeckError;
