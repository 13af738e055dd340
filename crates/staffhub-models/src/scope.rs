//! Manager scope: who the caller is allowed to act for.
//!
//! The console fetches one scope snapshot per session and passes it
//! explicitly into every engine call — there is no ambient scope context.
//!
//! # The three scope states
//!
//! The legacy console encoded "admin" as an *empty* managed-pair set, which
//! made a still-loading scope indistinguishable from unrestricted access.
//! [`Scope`] replaces that with a tagged variant:
//!
//! - [`Scope::Unrestricted`] — an admin; bypasses scoping entirely.
//! - [`Scope::Loading`] — the scope fetch has not completed (or failed);
//!   grants nothing and can never be mistaken for admin.
//! - [`Scope::Restricted`] — a manager; an empty set means the manager has
//!   no assignments, not that they are an admin.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use staffhub_core::permissions::{ManagerGrant, ResourceKind};

use crate::ids::{BranchId, DepartmentId, PairId};

/// The grant flags delivered with a manager's scope snapshot.
///
/// Missing fields deserialize to `false`; the server only sends the flags a
/// deployment knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ManagerPermissions {
    pub manage_employees: bool,
    pub create_announcements: bool,
    pub upload_knowledge: bool,
    pub assign_tasks: bool,
    pub view_analytics: bool,
}

impl ManagerPermissions {
    /// Every grant enabled. What admins hold.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            manage_employees: true,
            create_announcements: true,
            upload_knowledge: true,
            assign_tasks: true,
            view_analytics: true,
        }
    }

    /// Every grant disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            manage_employees: false,
            create_announcements: false,
            upload_knowledge: false,
            assign_tasks: false,
            view_analytics: false,
        }
    }

    /// Whether the given grant is enabled.
    #[must_use]
    pub fn allows(&self, grant: ManagerGrant) -> bool {
        match grant {
            ManagerGrant::ManageEmployees => self.manage_employees,
            ManagerGrant::CreateAnnouncements => self.create_announcements,
            ManagerGrant::UploadKnowledge => self.upload_knowledge,
            ManagerGrant::AssignTasks => self.assign_tasks,
            ManagerGrant::ViewAnalytics => self.view_analytics,
        }
    }

    /// The grants currently enabled, in declaration order.
    #[must_use]
    pub fn granted(&self) -> Vec<ManagerGrant> {
        ManagerGrant::all()
            .iter()
            .copied()
            .filter(|grant| self.allows(*grant))
            .collect()
    }
}

/// What the caller may see, as a tagged variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Admin: every branch, department, pair, and employee.
    Unrestricted,
    /// The scope fetch is pending or failed. Grants nothing.
    Loading,
    /// Manager: exactly the listed branch-department pairs.
    Restricted(BTreeSet<PairId>),
}

impl Scope {
    /// Builds a restricted scope from any collection of pair IDs.
    pub fn restricted<I>(pair_ids: I) -> Self
    where
        I: IntoIterator<Item = PairId>,
    {
        Self::Restricted(pair_ids.into_iter().collect())
    }

    /// Whether the scope has finished loading.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Whether the caller bypasses scoping entirely.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Whether the caller may act on the given pair.
    #[must_use]
    pub fn manages_pair(&self, pair_id: PairId) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Loading => false,
            Self::Restricted(pairs) => pairs.contains(&pair_id),
        }
    }

    /// The managed pair set, when the caller is a manager.
    #[must_use]
    pub fn managed_pairs(&self) -> Option<&BTreeSet<PairId>> {
        match self {
            Self::Restricted(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// One session's authorization snapshot: scope plus grant flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerScope {
    pub scope: Scope,
    pub permissions: ManagerPermissions,
}

impl ManagerScope {
    /// An admin session: unrestricted scope, every grant.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            scope: Scope::Unrestricted,
            permissions: ManagerPermissions::all(),
        }
    }

    /// The placeholder used before the scope fetch completes. Grants
    /// nothing; [`Scope::is_ready`] reports `false`.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            scope: Scope::Loading,
            permissions: ManagerPermissions::none(),
        }
    }

    /// A manager session over the given pairs and flags.
    pub fn manager<I>(pair_ids: I, permissions: ManagerPermissions) -> Self
    where
        I: IntoIterator<Item = PairId>,
    {
        Self {
            scope: Scope::restricted(pair_ids),
            permissions,
        }
    }

    /// Whether the session holds the given grant. Unrestricted sessions hold
    /// every grant; loading sessions hold none.
    #[must_use]
    pub fn allows(&self, grant: ManagerGrant) -> bool {
        match self.scope {
            Scope::Unrestricted => true,
            Scope::Loading => false,
            Scope::Restricted(_) => self.permissions.allows(grant),
        }
    }

    /// Whether the session may create content of the given kind.
    #[must_use]
    pub fn can_create(&self, kind: ResourceKind) -> bool {
        self.allows(kind.required_grant())
    }
}

/// The resolver's output: every branch and department the scope reaches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedScope {
    pub branch_ids: BTreeSet<BranchId>,
    pub department_ids: BTreeSet<DepartmentId>,
}

impl ResolvedScope {
    /// Whether the scope reaches nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branch_ids.is_empty() && self.department_ids.is_empty()
    }
}

/// The manager-scope endpoint's response shape.
///
/// `is_manager` is deliberately required: a document missing it fails
/// parsing instead of silently defaulting to admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManagerScopeResponse {
    /// `false` means the session belongs to an admin.
    pub is_manager: bool,
    /// Field name is historical: the API calls these "managed departments"
    /// but the values are branch-department pair IDs.
    #[serde(rename = "managed_departments", default)]
    pub managed_pair_ids: Vec<PairId>,
    #[serde(default)]
    pub permissions: ManagerPermissions,
}

impl ManagerScopeResponse {
    /// Converts the wire shape into a session scope.
    ///
    /// Admins get [`Scope::Unrestricted`] and every grant regardless of the
    /// flags the server sent; managers get a [`Scope::Restricted`] over the
    /// listed pairs — an empty list stays empty, it does not widen to admin.
    #[must_use]
    pub fn into_scope(self) -> ManagerScope {
        if self.is_manager {
            ManagerScope::manager(self.managed_pair_ids, self.permissions)
        } else {
            ManagerScope::admin()
        }
    }
}
