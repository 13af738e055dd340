//! Draft DTOs for the three scoped-content forms.
//!
//! Each draft carries its audience [`SelectionState`] plus the fields of the
//! form that produces it. The engine's authoring flow validates the draft,
//! checks the caller's grant for the draft's kind, and collapses the
//! selection into a stored audience.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use staffhub_core::permissions::ResourceKind;

use crate::selection::SelectionState;

/// A form draft that targets an audience.
///
/// `kind` drives the grant check; `selection` feeds the reconciler.
pub trait ScopedDraft: Validate {
    fn kind(&self) -> ResourceKind;

    fn selection(&self) -> &SelectionState;
}

/// A company announcement before submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDraft {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub selection: SelectionState,
}

impl ScopedDraft for AnnouncementDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Announcement
    }

    fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

/// A poll before submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollDraft {
    #[validate(length(min = 1, max = 500, message = "Question must be between 1 and 500 characters"))]
    pub question: String,
    #[validate(custom(function = validate_poll_options))]
    pub options: Vec<String>,
    #[serde(default)]
    pub allow_multiple: bool,
    #[serde(default)]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub selection: SelectionState,
}

impl ScopedDraft for PollDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Poll
    }

    fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

/// A knowledge-base folder before creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeFolderDraft {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub selection: SelectionState,
}

impl ScopedDraft for KnowledgeFolderDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::KnowledgeFolder
    }

    fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

/// A poll needs at least two options with visible text.
fn validate_poll_options(options: &[String]) -> Result<(), ValidationError> {
    let filled = options
        .iter()
        .filter(|option| !option.trim().is_empty())
        .count();
    if filled < 2 {
        let mut error = ValidationError::new("poll_options");
        error.message = Some("A poll needs at least two non-blank options".into());
        return Err(error);
    }
    Ok(())
}
