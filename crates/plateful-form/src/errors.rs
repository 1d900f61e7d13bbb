//! Per-group error messages for display.

use std::collections::HashMap;

use plateful_core::validation::{FieldError, FieldGroup};

/// The inline messages the form shows next to each group. At most one
/// message per group; per-entry markers live on the draft's repeatable
/// fields, not here.
#[derive(Debug, Default)]
pub struct FormErrors {
    messages: HashMap<FieldGroup, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: &FieldError) {
        self.messages.insert(error.group, error.message.clone());
    }

    pub fn message(&self, group: FieldGroup) -> Option<&str> {
        self.messages.get(&group).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
