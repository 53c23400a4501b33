use serde::{Deserialize, Serialize};

/// A label/value row in the vesting history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub label: String,
    pub value: String,
}

impl HistoryEvent {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
