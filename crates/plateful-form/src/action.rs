//! Draft mutation operations.
//!
//! The closed set of field updates the form can apply, as a sum type: the
//! compiler checks exhaustiveness, so there is no string-keyed fallback path.

use plateful_core::models::{Category, ImageAttachment, RecipeDraft};

/// One named, single-field mutation of the draft.
#[derive(Debug, Clone)]
pub enum DraftAction {
    SetName(String),
    SetDescription(String),
    SetPrepTime(u32),
    SetCookTime(u32),
    ToggleCategory(Category),
    SetImage(Option<ImageAttachment>),
    AddKeyword,
    UpdateKeyword { index: usize, value: String },
    RemoveKeyword(usize),
    AddIngredient,
    UpdateIngredient { index: usize, value: String },
    RemoveIngredient(usize),
    AddStep,
    UpdateStepHeader { index: usize, value: String },
    UpdateStepBody { index: usize, value: String },
    RemoveStep(usize),
    Reset,
}

/// Apply one action to a draft, returning the new draft value. The input is
/// untouched, so earlier snapshots stay valid for comparison.
///
/// An out-of-range index in any `Update*`/`Remove*` action is a programming
/// error and panics.
pub fn reduce(draft: &RecipeDraft, action: DraftAction) -> RecipeDraft {
    let mut next = draft.clone();
    match action {
        DraftAction::SetName(value) => next.name = value,
        DraftAction::SetDescription(value) => next.description = value,
        DraftAction::SetPrepTime(minutes) => next.set_prep_time(minutes),
        DraftAction::SetCookTime(minutes) => next.set_cook_time(minutes),
        DraftAction::ToggleCategory(category) => next.toggle_category(category),
        DraftAction::SetImage(image) => next.image = image,
        DraftAction::AddKeyword => {
            next.keywords.add();
        }
        DraftAction::UpdateKeyword { index, value } => next.keywords.update(index, value),
        DraftAction::RemoveKeyword(index) => {
            next.keywords.remove(index);
        }
        DraftAction::AddIngredient => {
            next.ingredients.add();
        }
        DraftAction::UpdateIngredient { index, value } => next.ingredients.update(index, value),
        DraftAction::RemoveIngredient(index) => {
            next.ingredients.remove(index);
        }
        DraftAction::AddStep => {
            next.steps.add();
        }
        DraftAction::UpdateStepHeader { index, value } => {
            next.steps.update_with(index, |step| step.header = value);
        }
        DraftAction::UpdateStepBody { index, value } => {
            next.steps.update_with(index, |step| step.body = value);
        }
        DraftAction::RemoveStep(index) => {
            next.steps.remove(index);
        }
        DraftAction::Reset => next = RecipeDraft::new(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_returns_new_value_keeping_snapshot() {
        let draft = RecipeDraft::new();
        let next = reduce(&draft, DraftAction::SetName("Stew".to_string()));

        assert_eq!(next.name, "Stew");
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_time_setters_keep_total_consistent() {
        let draft = RecipeDraft::new();
        let draft = reduce(&draft, DraftAction::SetPrepTime(10));
        assert_eq!(draft.total_time(), 10);
        let draft = reduce(&draft, DraftAction::SetCookTime(20));
        assert_eq!(draft.total_time(), 30);
    }

    #[test]
    fn test_step_updates_target_one_half_of_the_pair() {
        let draft = RecipeDraft::new();
        let draft = reduce(&draft, DraftAction::AddStep);
        let draft = reduce(
            &draft,
            DraftAction::UpdateStepHeader {
                index: 0,
                value: "Prepare Ingredients".to_string(),
            },
        );
        let draft = reduce(
            &draft,
            DraftAction::UpdateStepBody {
                index: 0,
                value: "Chop beef".to_string(),
            },
        );

        let step = draft.steps.get(0).unwrap();
        assert_eq!(step.header, "Prepare Ingredients");
        assert_eq!(step.body, "Chop beef");

        let draft = reduce(
            &draft,
            DraftAction::UpdateStepBody {
                index: 0,
                value: "Dice beef".to_string(),
            },
        );
        assert_eq!(draft.steps.get(0).unwrap().header, "Prepare Ingredients");
        assert_eq!(draft.steps.get(0).unwrap().body, "Dice beef");
    }

    #[test]
    fn test_remove_keyword_preserves_order_of_rest() {
        let mut draft = RecipeDraft::new();
        for value in ["beef", "stew", "winter"] {
            let next = reduce(&draft, DraftAction::AddKeyword);
            let index = next.keywords.len() - 1;
            draft = reduce(
                &next,
                DraftAction::UpdateKeyword {
                    index,
                    value: value.to_string(),
                },
            );
        }

        let draft = reduce(&draft, DraftAction::RemoveKeyword(1));
        assert_eq!(
            draft.keywords.values(),
            &["beef".to_string(), "winter".to_string()]
        );
    }

    #[test]
    fn test_reset_returns_empty_draft() {
        let draft = reduce(
            &RecipeDraft::new(),
            DraftAction::SetName("Stew".to_string()),
        );
        let draft = reduce(&draft, DraftAction::Reset);
        assert_eq!(draft, RecipeDraft::new());
    }
}
