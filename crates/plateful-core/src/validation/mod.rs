//! Validation modules
//!
//! The submission pipeline lives in `pipeline`; the image content-type
//! cross-check in `image`.

pub mod image;
pub mod pipeline;

pub use image::validate_image_content_type;
pub use pipeline::{validate_draft, FieldError, FieldErrorKind, FieldGroup};
