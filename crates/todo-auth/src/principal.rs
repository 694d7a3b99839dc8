//! The authenticated subject of a request.

use serde::{Deserialize, Serialize};

/// Subject extracted from a verified token. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The token's `sub` claim.
    pub subject: String,
}

impl Principal {
    /// Create a principal for `subject`.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// The subject doubles as the owner ID of todo items.
    pub fn user_id(&self) -> &str {
        &self.subject
    }
}
