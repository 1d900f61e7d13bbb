use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, RecipeDraft, StepEntry};
use crate::normalize::slugify;

/// The immutable finished snapshot handed to persistence. Assembled only
/// after the whole draft has passed validation; the draft is reset afterward
/// and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub recipe_name: String,
    /// URL extension derived from the name (`"/good-stew"`).
    pub extension: String,
    pub categories: Vec<Category>,
    /// URL extension of the primary (first, in enumeration order) category.
    pub category_extension: String,
    pub keywords: Vec<String>,
    pub rating: u32,
    pub comments: Vec<Comment>,
    pub description: String,
    pub date_posted: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    /// Storage reference for the uploaded image.
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<StepEntry>,
}

impl RecipeRecord {
    /// Assemble the finished record from a validated, normalized draft.
    ///
    /// The caller is responsible for having run the validator first; the
    /// draft's values are copied as-is. Rating and comments start zeroed.
    pub fn assemble(draft: &RecipeDraft, image_ref: String, posted_at: DateTime<Utc>) -> Self {
        let categories = draft.categories_in_order();
        // Validation guarantees at least one selected category.
        let category_extension = categories
            .first()
            .map(|c| c.slug())
            .unwrap_or_default();

        RecipeRecord {
            id: Uuid::new_v4(),
            extension: slugify(&draft.name),
            recipe_name: draft.name.clone(),
            categories,
            category_extension,
            keywords: draft.keywords.values().to_vec(),
            rating: 0,
            comments: Vec::new(),
            description: draft.description.clone(),
            date_posted: posted_at.format("%B %-d, %Y").to_string(),
            prep_time: draft.prep_time(),
            cook_time: draft.cook_time(),
            total_time: draft.total_time(),
            image: image_ref,
            ingredients: draft.ingredients.values().to_vec(),
            steps: draft.steps.values().to_vec(),
        }
    }
}

/// A reader comment on a published recipe. Records are created with none;
/// the shape exists so the persisted payload round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub user_uid: String,
    pub name: String,
    pub date: String,
    pub comment: String,
    pub rating: u32,
    pub likes: Vec<String>,
    pub replies: Vec<Reply>,
}

/// A reply to a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub reply_id: String,
    pub user_uid: String,
    pub name: String,
    pub date: String,
    pub comment: String,
    pub likes: Vec<String>,
}
