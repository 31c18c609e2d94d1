pub mod app;
pub mod config;
pub mod core;
pub mod handlers;
pub mod types;

// Re-export key components for public API
pub use self::config::ServerConfig;
pub use self::core::serve;
