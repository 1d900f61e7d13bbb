//! Submission validation pipeline
//!
//! The validator runs over the whole draft as an ordered sequence of field
//! groups (name, description, time, categories, image, keywords, ingredients,
//! steps) and halts at the first failing group; later groups stay unvalidated
//! for that attempt.
//!
//! Each group first normalizes its value and commits the normalized form to
//! the draft, then validates the committed form. Later groups therefore
//! observe earlier groups' normalized values, and re-running the validator on
//! an accepted draft is a no-op (normalization is idempotent).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::image::validate_image_content_type;
use crate::constants::{
    DEFAULT_MAX_IMAGE_SIZE_BYTES, DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, INGREDIENT_MAX_LEN,
    INGREDIENT_MIN_LEN, KEYWORD_MAX_LEN, KEYWORD_MIN_LEN, MIN_INGREDIENTS, MIN_KEYWORDS,
    MIN_STEPS, NAME_MAX_LEN, NAME_MIN_LEN, STEP_BODY_MAX_LEN, STEP_HEADER_MAX_LEN,
    STEP_HEADER_MIN_LEN,
};
use crate::models::RecipeDraft;
use crate::normalize::{capitalize_words, collapse_whitespace};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z0-9 ]{{{},{}}}$", NAME_MIN_LEN, NAME_MAX_LEN))
        .expect("name pattern")
});

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z ]{{{},{}}}$", KEYWORD_MIN_LEN, KEYWORD_MAX_LEN))
        .expect("keyword pattern")
});

static STEP_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[A-Za-z0-9 ]{{{},{}}}$",
        STEP_HEADER_MIN_LEN, STEP_HEADER_MAX_LEN
    ))
    .expect("step header pattern")
});

static STEP_BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z0-9 ]{{0,{}}}$", STEP_BODY_MAX_LEN)).expect("step body pattern")
});

/// One named cluster of related fields validated together as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Name,
    Description,
    Time,
    Categories,
    Image,
    Keywords,
    Ingredients,
    Steps,
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldGroup::Name => "name",
            FieldGroup::Description => "description",
            FieldGroup::Time => "time",
            FieldGroup::Categories => "categories",
            FieldGroup::Image => "image",
            FieldGroup::Keywords => "keywords",
            FieldGroup::Ingredients => "ingredients",
            FieldGroup::Steps => "steps",
        };
        write!(f, "{}", name)
    }
}

/// Why a group failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required single field is empty.
    Required,
    /// A single field's content violates its format rule.
    Format,
    /// Prep and cook time are both zero.
    ZeroTotalTime,
    /// No category selected.
    NoneSelected,
    /// A repeatable group has fewer entries than its minimum.
    TooFew,
    /// One or more entries of a repeatable group violate their format rule;
    /// the specific entries are flagged on the draft.
    EntryFormat,
}

/// A validation failure, scoped to the group it occurred in. This is a
/// value the form surfaces inline, never a propagated error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub group: FieldGroup,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(group: FieldGroup, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        FieldError {
            group,
            kind,
            message: message.into(),
        }
    }
}

/// Run the full pipeline over the draft.
///
/// On success all groups hold their normalized values and `Ok(())` is
/// returned. On failure the first failing group's error is returned, that
/// group's per-entry flags (if repeatable) are set on the draft, and later
/// groups are left untouched.
pub fn validate_draft(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    validate_name(draft)?;
    validate_description(draft)?;
    validate_time(draft)?;
    validate_categories(draft)?;
    validate_image(draft)?;
    validate_keywords(draft)?;
    validate_ingredients(draft)?;
    validate_steps(draft)?;
    Ok(())
}

fn validate_name(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    draft.name = capitalize_words(&collapse_whitespace(&draft.name));

    if draft.name.is_empty() {
        return Err(FieldError::new(
            FieldGroup::Name,
            FieldErrorKind::Required,
            "No recipe name entered.",
        ));
    }
    if !NAME_RE.is_match(&draft.name) {
        return Err(FieldError::new(
            FieldGroup::Name,
            FieldErrorKind::Format,
            format!(
                "Recipe name must be {}-{} characters, letters and numbers only.",
                NAME_MIN_LEN, NAME_MAX_LEN
            ),
        ));
    }
    Ok(())
}

fn validate_description(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    draft.description = collapse_whitespace(&draft.description);

    if draft.description.is_empty() {
        return Err(FieldError::new(
            FieldGroup::Description,
            FieldErrorKind::Required,
            "No description entered.",
        ));
    }
    let len = draft.description.chars().count();
    if len < DESCRIPTION_MIN_LEN || len > DESCRIPTION_MAX_LEN {
        return Err(FieldError::new(
            FieldGroup::Description,
            FieldErrorKind::Format,
            format!(
                "Description must be {}-{} characters.",
                DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN
            ),
        ));
    }
    Ok(())
}

fn validate_time(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    if draft.total_time() == 0 {
        return Err(FieldError::new(
            FieldGroup::Time,
            FieldErrorKind::ZeroTotalTime,
            "Prep time and cook time cannot both be zero.",
        ));
    }
    Ok(())
}

fn validate_categories(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    if draft.categories.is_empty() {
        return Err(FieldError::new(
            FieldGroup::Categories,
            FieldErrorKind::NoneSelected,
            "No category selected.",
        ));
    }
    Ok(())
}

fn validate_image(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    let image = match &draft.image {
        Some(image) => image,
        None => {
            return Err(FieldError::new(
                FieldGroup::Image,
                FieldErrorKind::NoneSelected,
                "No image selected.",
            ));
        }
    };
    if let Err(reason) = validate_image_content_type(&image.filename, &image.content_type) {
        return Err(FieldError::new(
            FieldGroup::Image,
            FieldErrorKind::Format,
            format!("The selected file must be an image: {}", reason),
        ));
    }
    if image.size_bytes() > DEFAULT_MAX_IMAGE_SIZE_BYTES {
        return Err(FieldError::new(
            FieldGroup::Image,
            FieldErrorKind::Format,
            format!(
                "The selected image exceeds the {} MB limit.",
                DEFAULT_MAX_IMAGE_SIZE_BYTES / (1024 * 1024)
            ),
        ));
    }
    Ok(())
}

fn validate_keywords(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    draft.keywords.clear_flags();

    if draft.keywords.len() < MIN_KEYWORDS {
        return Err(FieldError::new(
            FieldGroup::Keywords,
            FieldErrorKind::TooFew,
            format!("At least {} keywords are required.", MIN_KEYWORDS),
        ));
    }

    for value in draft.keywords.values_mut() {
        *value = collapse_whitespace(value).to_lowercase();
    }

    let mut any_invalid = false;
    for index in 0..draft.keywords.len() {
        if !KEYWORD_RE.is_match(&draft.keywords.values()[index]) {
            draft.keywords.set_flag(index, true);
            any_invalid = true;
        }
    }
    if any_invalid {
        return Err(FieldError::new(
            FieldGroup::Keywords,
            FieldErrorKind::EntryFormat,
            "One or more keywords are invalid.",
        ));
    }
    Ok(())
}

fn validate_ingredients(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    draft.ingredients.clear_flags();

    if draft.ingredients.len() < MIN_INGREDIENTS {
        return Err(FieldError::new(
            FieldGroup::Ingredients,
            FieldErrorKind::TooFew,
            format!("At least {} ingredients are required.", MIN_INGREDIENTS),
        ));
    }

    for value in draft.ingredients.values_mut() {
        *value = collapse_whitespace(value).to_lowercase();
    }

    let mut any_invalid = false;
    for index in 0..draft.ingredients.len() {
        let len = draft.ingredients.values()[index].chars().count();
        if len < INGREDIENT_MIN_LEN || len > INGREDIENT_MAX_LEN {
            draft.ingredients.set_flag(index, true);
            any_invalid = true;
        }
    }
    if any_invalid {
        return Err(FieldError::new(
            FieldGroup::Ingredients,
            FieldErrorKind::EntryFormat,
            "One or more ingredients are invalid.",
        ));
    }
    Ok(())
}

fn validate_steps(draft: &mut RecipeDraft) -> Result<(), FieldError> {
    draft.steps.clear_flags();

    if draft.steps.len() < MIN_STEPS {
        return Err(FieldError::new(
            FieldGroup::Steps,
            FieldErrorKind::TooFew,
            format!("At least {} step is required.", MIN_STEPS),
        ));
    }

    for step in draft.steps.values_mut() {
        step.header = collapse_whitespace(&step.header);
        step.body = collapse_whitespace(&step.body);
    }

    let mut any_invalid = false;
    for index in 0..draft.steps.len() {
        let step = &draft.steps.values()[index];
        if !STEP_HEADER_RE.is_match(&step.header) || !STEP_BODY_RE.is_match(&step.body) {
            draft.steps.set_flag(index, true);
            any_invalid = true;
        }
    }
    if any_invalid {
        return Err(FieldError::new(
            FieldGroup::Steps,
            FieldErrorKind::EntryFormat,
            "One or more steps are invalid.",
        ));
    }
    Ok(())
}
