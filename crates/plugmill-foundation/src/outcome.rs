//! Build step outcomes

use serde::Serialize;
use std::path::PathBuf;

/// Result of invoking one plugin's build step.
///
/// Success carries the ordered list of bytecode artifacts found in the
/// project's build-output tree; failure carries a human-readable reason.
/// Outcomes are consumed immediately by the orchestrator and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BuildOutcome {
    Success { artifacts: Vec<PathBuf> },
    Failure { reason: String },
}

impl BuildOutcome {
    pub fn success(artifacts: Vec<PathBuf>) -> Self {
        Self::Success { artifacts }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
