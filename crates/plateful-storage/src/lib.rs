//! Plateful Storage Library
//!
//! This crate provides the object-storage abstraction the form engine uploads
//! recipe images through, with a local-filesystem backend and an in-memory
//! backend for tests.
//!
//! # Storage key format
//!
//! All backends use the same key layout: `images/{filename}`. Keys must not
//! contain `..` or a leading `/`. Key generation is centralized in the `keys`
//! module so backends stay consistent.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use plateful_core::StorageBackend;
pub use traits::{ObjectStorage, StorageError, StorageResult};
