//! Uniform operation outcome returned by every façade operation.

use serde::{Deserialize, Serialize};

/// The result of a conversion or download operation.
///
/// Carries a success/failure flag plus two message channels: an internal
/// diagnostic message (may contain paths and delegate error detail) and a
/// user-facing message (always safe to present). Outcomes are immutable once
/// constructed and created fresh for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// True iff the operation did not complete successfully.
    pub has_failed: bool,
    /// Diagnostic detail; not guaranteed safe for end users.
    pub internal_message: String,
    /// Sanitized, human-presentable message.
    pub user_message: String,
}

impl OperationOutcome {
    /// Creates a success outcome.
    pub fn success(internal_message: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            has_failed: false,
            internal_message: internal_message.into(),
            user_message: user_message.into(),
        }
    }

    /// Creates a failure outcome with distinct internal and user messages.
    pub fn failure(internal_message: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            has_failed: true,
            internal_message: internal_message.into(),
            user_message: user_message.into(),
        }
    }

    /// Creates a failure outcome where the message is already user-safe
    /// (precondition and cancellation failures) and is used on both channels.
    pub fn failure_from(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            has_failed: true,
            internal_message: message.clone(),
            user_message: message,
        }
    }

    /// Whether the operation completed successfully.
    pub fn is_success(&self) -> bool {
        !self.has_failed
    }
}
