//! Plateful Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation pipeline shared across all Plateful components. It holds no IO:
//! storage and persistence live behind traits in their own crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalize;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::StorageConfig;
pub use error::AppError;
pub use storage_types::StorageBackend;
