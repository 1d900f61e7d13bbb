use serde::{Deserialize, Serialize};

/// One recipe step: a short header plus an optional body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry {
    pub header: String,
    /// Serialized as `step`, the field name the record payload uses.
    #[serde(rename = "step")]
    pub body: String,
}

impl StepEntry {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        StepEntry {
            header: header.into(),
            body: body.into(),
        }
    }
}
