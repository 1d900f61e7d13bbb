//! Field limits for the recipe form.
//!
//! All lengths are in characters, not bytes.

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;

pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const DESCRIPTION_MAX_LEN: usize = 100;

pub const KEYWORD_MIN_LEN: usize = 1;
pub const KEYWORD_MAX_LEN: usize = 50;
pub const MIN_KEYWORDS: usize = 3;

pub const INGREDIENT_MIN_LEN: usize = 1;
pub const INGREDIENT_MAX_LEN: usize = 50;
pub const MIN_INGREDIENTS: usize = 2;

pub const STEP_HEADER_MIN_LEN: usize = 5;
pub const STEP_HEADER_MAX_LEN: usize = 50;
pub const STEP_BODY_MAX_LEN: usize = 50;
pub const MIN_STEPS: usize = 1;

/// Default ceiling for an attached image, overridable via config.
pub const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;
