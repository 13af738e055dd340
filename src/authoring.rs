//! The scoped-content submission pipeline.
//!
//! When an announcement, poll, or knowledge-folder form submits, the same
//! four steps run regardless of kind: the session scope must be ready, the
//! caller must hold the grant for the kind, the draft fields must validate,
//! and the picker selection collapses into the audience the API stores.
//! [`Authoring::prepare`] is that pipeline; the surrounding application
//! sends the returned payload with the rest of the form.

use tracing::{debug, instrument};
use validator::Validate;

use staffhub_core::errors::AuthzError;
use staffhub_core::permissions::ResourceKind;
use staffhub_models::content::ScopedDraft;
use staffhub_models::scope::ManagerScope;
use staffhub_models::target::{AudiencePayload, PermissionTarget};

use crate::directory::PairDirectory;
use crate::reconcile::SelectionReconciler;

/// A draft that cleared every authoring check, with its stored audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDraft {
    pub kind: ResourceKind,
    pub target: PermissionTarget,
    pub payload: AudiencePayload,
}

/// Runs the submission checks for scoped content.
pub struct Authoring;

impl Authoring {
    /// Checks a draft against the session and collapses its audience.
    ///
    /// Fails with [`AuthzError::ScopeNotReady`] while the scope fetch is
    /// pending (a pending scope is never treated as unrestricted),
    /// [`AuthzError::MissingGrant`] when the caller lacks the grant for the
    /// draft's kind, and [`AuthzError::InvalidDraft`] when field validation
    /// fails.
    #[instrument(skip(session, directory, draft))]
    pub fn prepare<D: ScopedDraft>(
        session: &ManagerScope,
        directory: &PairDirectory,
        draft: &D,
    ) -> Result<PreparedDraft, AuthzError> {
        if !session.scope.is_ready() {
            return Err(AuthzError::ScopeNotReady);
        }

        let kind = draft.kind();
        let grant = kind.required_grant();
        if !session.allows(grant) {
            return Err(AuthzError::MissingGrant(grant));
        }

        draft.validate()?;

        let target = SelectionReconciler::collapse(draft.selection(), directory, &session.scope);
        debug!(target: "authz", kind = %kind, audience = target.kind(), "draft prepared");

        Ok(PreparedDraft {
            kind,
            payload: target.clone().into_payload(),
            target,
        })
    }
}
