//! Draft state store.

use plateful_core::models::RecipeDraft;

use crate::action::{reduce, DraftAction};

/// Holds the current draft and applies update operations to it. Each
/// dispatch replaces the current draft with the reduced value; the store
/// itself is the only place the "current" draft lives.
#[derive(Debug, Default)]
pub struct DraftStore {
    current: RecipeDraft,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.current
    }

    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.current
    }

    /// Apply one action. For `Add*` actions the index of the newly created
    /// entry is returned so the caller can move focus to it.
    pub fn dispatch(&mut self, action: DraftAction) -> Option<usize> {
        let focus = match &action {
            DraftAction::AddKeyword => Some(self.current.keywords.len()),
            DraftAction::AddIngredient => Some(self.current.ingredients.len()),
            DraftAction::AddStep => Some(self.current.steps.len()),
            _ => None,
        };
        self.current = reduce(&self.current, action);
        focus
    }

    /// Discard the draft, returning to the empty state.
    pub fn reset(&mut self) {
        self.current = RecipeDraft::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_add_returns_focus_index() {
        let mut store = DraftStore::new();
        assert_eq!(store.dispatch(DraftAction::AddKeyword), Some(0));
        assert_eq!(store.dispatch(DraftAction::AddKeyword), Some(1));
        assert_eq!(
            store.dispatch(DraftAction::SetName("Stew".to_string())),
            None
        );
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut store = DraftStore::new();
        store.dispatch(DraftAction::SetName("Stew".to_string()));
        store.dispatch(DraftAction::SetPrepTime(10));
        store.reset();
        assert_eq!(store.draft(), &RecipeDraft::new());
    }
}
