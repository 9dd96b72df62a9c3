//! Request context carrying the acting user.

use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Passed into service methods so every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's id.
    pub user_id: String,
}

impl RequestContext {
    /// Creates a new request context for `user_id`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
