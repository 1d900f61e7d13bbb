use std::collections::BTreeSet;

use super::{Category, ImageAttachment, Repeatable, StepEntry};

/// The in-progress recipe being composed. One draft lives for the lifetime
/// of a form session; it is created empty, mutated through named operations,
/// and discarded on reset or successful submission.
///
/// `total_time` is derived: it always equals `prep_time + cook_time` and is
/// recomputed inside the time setters, so no reachable state violates the
/// invariant. The time fields are private to keep it that way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    prep_time: u32,
    cook_time: u32,
    total_time: u32,
    pub categories: BTreeSet<Category>,
    pub image: Option<ImageAttachment>,
    pub keywords: Repeatable<String>,
    pub ingredients: Repeatable<String>,
    pub steps: Repeatable<StepEntry>,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn cook_time(&self) -> u32 {
        self.cook_time
    }

    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    pub fn set_prep_time(&mut self, minutes: u32) {
        self.prep_time = minutes;
        self.total_time = self.prep_time + self.cook_time;
    }

    pub fn set_cook_time(&mut self, minutes: u32) {
        self.cook_time = minutes;
        self.total_time = self.prep_time + self.cook_time;
    }

    /// Toggle membership of a category: insert if absent, remove if present.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.insert(category) {
            self.categories.remove(&category);
        }
    }

    /// Selected categories in the fixed enumeration order.
    pub fn categories_in_order(&self) -> Vec<Category> {
        self.categories.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time_tracks_either_setter() {
        let mut draft = RecipeDraft::new();
        assert_eq!(draft.total_time(), 0);

        draft.set_prep_time(10);
        assert_eq!(draft.total_time(), 10);

        draft.set_cook_time(20);
        assert_eq!(draft.total_time(), 30);

        draft.set_prep_time(5);
        assert_eq!(draft.total_time(), 25);
    }

    #[test]
    fn test_toggle_category_inserts_then_removes() {
        let mut draft = RecipeDraft::new();
        draft.toggle_category(Category::Dinner);
        assert!(draft.categories.contains(&Category::Dinner));
        draft.toggle_category(Category::Dinner);
        assert!(draft.categories.is_empty());
    }

    #[test]
    fn test_categories_in_order_ignores_toggle_order() {
        let mut draft = RecipeDraft::new();
        draft.toggle_category(Category::Dessert);
        draft.toggle_category(Category::Lunch);
        assert_eq!(
            draft.categories_in_order(),
            vec![Category::Lunch, Category::Dessert]
        );
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = RecipeDraft::new();
        assert!(draft.name.is_empty());
        assert!(draft.keywords.is_empty());
        assert!(draft.ingredients.is_empty());
        assert!(draft.steps.is_empty());
        assert!(draft.image.is_none());
        assert_eq!(draft.total_time(), 0);
    }
}
