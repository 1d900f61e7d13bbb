//! Plateful Form Engine
//!
//! This crate is the business layer over the core domain: the draft store
//! (a reducer over `DraftAction`), the per-group error messages, the record
//! persistence seam, and the submission pipeline that validates, normalizes,
//! uploads the image, assembles the finished record, and hands it to
//! persistence. Keep orchestration here; keep pure validation in
//! plateful-core.

pub mod action;
pub mod engine;
pub mod errors;
pub mod persist;
pub mod store;

pub use action::{reduce, DraftAction};
pub use engine::{RecipeForm, SubmitOutcome};
pub use errors::FormErrors;
pub use persist::{MemoryRecipeStore, RecipeStore, StoreError};
pub use store::DraftStore;
