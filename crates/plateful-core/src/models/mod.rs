//! Data models for the application
//!
//! This module contains the domain structures for the recipe form, organized
//! by concern: the mutable draft, its building blocks, and the immutable
//! finished record handed to persistence.

mod category;
mod draft;
mod image;
mod record;
mod repeatable;
mod step;

// Re-export all models for convenient imports
pub use category::*;
pub use draft::*;
pub use image::*;
pub use record::*;
pub use repeatable::*;
pub use step::*;
