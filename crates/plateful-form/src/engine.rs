//! Submission pipeline.

use chrono::Utc;

use plateful_core::models::RecipeRecord;
use plateful_core::validation::{validate_draft, FieldError};
use plateful_core::AppError;
use plateful_storage::ObjectStorage;

use crate::action::DraftAction;
use crate::errors::FormErrors;
use crate::persist::RecipeStore;
use crate::store::DraftStore;

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The draft passed validation; the record was persisted and the draft
    /// reset.
    Accepted(RecipeRecord),
    /// Validation failed at one group; the message is also recorded on the
    /// form's error state. Nothing was persisted.
    Rejected(FieldError),
    /// A submission is already in flight; this attempt did nothing.
    InFlight,
}

/// The recipe form: the current draft, its per-group error messages, and the
/// in-flight submission flag.
#[derive(Default)]
pub struct RecipeForm {
    store: DraftStore,
    errors: FormErrors,
    submitting: bool,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &plateful_core::models::RecipeDraft {
        self.store.draft()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply one field update. Returns the focus index for `Add*` actions.
    pub fn dispatch(&mut self, action: DraftAction) -> Option<usize> {
        self.store.dispatch(action)
    }

    /// Explicit user reset (the confirmation dialog is the caller's job).
    pub fn reset(&mut self) {
        self.store.reset();
        self.errors.clear();
    }

    /// Run the submission pipeline: validate and normalize the draft, upload
    /// the image, assemble the finished record, hand it to persistence, and
    /// reset the draft.
    ///
    /// Validation failures come back as `Rejected` and set the group's
    /// message; the persistence collaborator is never called for them.
    /// Collaborator failures surface as `AppError` and leave the draft
    /// intact so the user can retry.
    pub async fn submit(
        &mut self,
        storage: &dyn ObjectStorage,
        records: &dyn RecipeStore,
    ) -> Result<SubmitOutcome, AppError> {
        if self.submitting {
            return Ok(SubmitOutcome::InFlight);
        }
        self.submitting = true;
        let outcome = self.submit_inner(storage, records).await;
        self.submitting = false;
        outcome
    }

    async fn submit_inner(
        &mut self,
        storage: &dyn ObjectStorage,
        records: &dyn RecipeStore,
    ) -> Result<SubmitOutcome, AppError> {
        self.errors.clear();

        if let Err(field_error) = validate_draft(self.store.draft_mut()) {
            self.errors.record(&field_error);
            tracing::debug!(
                group = %field_error.group,
                message = %field_error.message,
                "submission rejected"
            );
            return Ok(SubmitOutcome::Rejected(field_error));
        }

        // Validation guarantees the attachment is present.
        let image = self
            .store
            .draft()
            .image
            .clone()
            .ok_or_else(|| AppError::Internal("image missing after validation".to_string()))?;

        let image_ref = storage
            .upload(&image.filename, &image.content_type, image.data)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let record = RecipeRecord::assemble(self.store.draft(), image_ref, Utc::now());

        records
            .create_record(&record)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        tracing::info!(id = %record.id, name = %record.recipe_name, "recipe submitted");

        self.store.reset();
        Ok(SubmitOutcome::Accepted(record))
    }
}
