//! Token issuing port

use crate::domain::entities::UserId;

/// Produces opaque bearer tokens
///
/// Implementations must not hand out the same token twice within a run.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self, user_id: &UserId) -> String;
}
