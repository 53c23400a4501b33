//! Transient alert shown under the countdown.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertSeverity {
    pub fn css_value(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "success",
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Error => "error",
        }
    }
}

/// Severity/message pair. An empty message means "no alert".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiAlert {
    #[serde(rename = "type", default)]
    pub severity: AlertSeverity,
    #[serde(default)]
    pub message: String,
}

impl UiAlert {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Error, message)
    }

    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

impl From<&ActionError> for UiAlert {
    fn from(err: &ActionError) -> Self {
        UiAlert::error(err.to_string())
    }
}
