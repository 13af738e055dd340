//! Permission vocabulary for the Staffhub authorization engine.
//!
//! Managers hold a fixed set of grant flags delivered with their scope
//! snapshot. This module defines those flags once, together with the kinds of
//! scoped content they gate, so that the mapping between "what a manager may
//! do" and "what a form is trying to create" lives in exactly one place.
//!
//! # Example
//!
//! ```ignore
//! use staffhub_core::permissions::{ManagerGrant, ResourceKind};
//!
//! let kind = ResourceKind::Poll;
//! if permissions.allows(kind.required_grant()) {
//!     // Publish the poll
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AuthzError;

/// A grant flag a manager can hold.
///
/// Admins implicitly hold every grant; managers hold whatever their scope
/// snapshot says. The storage strings are stable and match the company-hub
/// permission keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ManagerGrant {
    /// Manage employees within the managed branch-department pairs.
    ManageEmployees,
    /// Publish announcements scoped to the managed pairs.
    CreateAnnouncements,
    /// Create knowledge-base folders and upload documents into them.
    UploadKnowledge,
    /// Assign onboarding checklists and tasks.
    AssignTasks,
    /// View analytics dashboards for the managed pairs.
    ViewAnalytics,
}

impl ManagerGrant {
    /// Returns the stable storage value for this grant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageEmployees => "employees:manage",
            Self::CreateAnnouncements => "announcements:create",
            Self::UploadKnowledge => "knowledge:upload",
            Self::AssignTasks => "tasks:assign",
            Self::ViewAnalytics => "analytics:view",
        }
    }

    /// Returns all known grants.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ManagerGrant] = &[
            ManagerGrant::ManageEmployees,
            ManagerGrant::CreateAnnouncements,
            ManagerGrant::UploadKnowledge,
            ManagerGrant::AssignTasks,
            ManagerGrant::ViewAnalytics,
        ];

        ALL
    }
}

impl fmt::Display for ManagerGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManagerGrant {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employees:manage" => Ok(Self::ManageEmployees),
            "announcements:create" => Ok(Self::CreateAnnouncements),
            "knowledge:upload" => Ok(Self::UploadKnowledge),
            "tasks:assign" => Ok(Self::AssignTasks),
            "analytics:view" => Ok(Self::ViewAnalytics),
            _ => Err(AuthzError::UnknownPermission(value.to_string())),
        }
    }
}

/// The kinds of scoped content the console authors against an audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A company or team announcement.
    Announcement,
    /// A poll with selectable options.
    Poll,
    /// A knowledge-base folder.
    KnowledgeFolder,
    /// An onboarding checklist task.
    OnboardingTask,
}

impl ResourceKind {
    /// Returns the grant a manager must hold to create content of this kind.
    #[must_use]
    pub fn required_grant(&self) -> ManagerGrant {
        match self {
            Self::Announcement => ManagerGrant::CreateAnnouncements,
            Self::Poll => ManagerGrant::CreateAnnouncements,
            Self::KnowledgeFolder => ManagerGrant::UploadKnowledge,
            Self::OnboardingTask => ManagerGrant::AssignTasks,
        }
    }

    /// Returns the stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Poll => "poll",
            Self::KnowledgeFolder => "knowledge_folder",
            Self::OnboardingTask => "onboarding_task",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
