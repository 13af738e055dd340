//! Error types for the authorization engine.
//!
//! Scope resolution, access checks, and selection reconciliation are total
//! functions: they degrade to empty results and report problems as warnings
//! rather than failing. The operations that *can* fail are the boundaries —
//! parsing a collaborating endpoint's payload, validating an authoring draft,
//! and the authoring guards — and they all return [`AuthzError`].

use crate::permissions::ManagerGrant;

/// Errors produced at the engine's fallible boundaries.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// A collaborating endpoint returned a document that could not be parsed
    /// under any of its known shapes.
    #[error("malformed payload from {endpoint}: {source}")]
    MalformedPayload {
        /// Which endpoint the document came from (for log context).
        endpoint: &'static str,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A scoped-content draft failed field validation.
    #[error("draft failed validation: {0}")]
    InvalidDraft(#[from] validator::ValidationErrors),

    /// The caller does not hold the grant required for the attempted action.
    #[error("caller is missing the '{}' grant", .0.as_str())]
    MissingGrant(ManagerGrant),

    /// The caller's scope has not finished loading. Callers must wait for the
    /// scope fetch before authoring; a pending scope is never treated as
    /// unrestricted access.
    #[error("manager scope is still loading")]
    ScopeNotReady,

    /// A permission string from the wire did not match any known grant.
    #[error("unknown permission value '{0}'")]
    UnknownPermission(String),
}

impl AuthzError {
    /// Wraps a parse failure with the endpoint it came from.
    pub fn malformed(endpoint: &'static str, source: serde_json::Error) -> Self {
        Self::MalformedPayload { endpoint, source }
    }
}
