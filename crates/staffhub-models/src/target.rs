//! Audience targets and their wire form.
//!
//! A stored audience is exactly one of: everyone, a branch list, a
//! department list, or a pair list. [`PermissionTarget`] encodes that
//! exclusivity in the type; [`AudiencePayload`] is the loose wire shape the
//! server speaks, where every field is optional and old documents may carry
//! the legacy `selectedBranchDepartments` key.
//!
//! # Example
//!
//! ```ignore
//! let target = PermissionTarget::branches([BranchId::new(1)]);
//! let payload = target.into_payload();
//! assert!(payload.permitted_branches.is_some());
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{BranchId, DepartmentId, EmployeeId, PairId};

/// Exactly one way of naming an audience.
///
/// `Pairs(vec![])` is meaningful: it targets nobody. Collapsing a manager's
/// out-of-scope selection produces it instead of widening to everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionTarget {
    /// No restriction; the audience is the whole company.
    AllEmployees,
    /// Everyone in the listed branches.
    Branches(Vec<BranchId>),
    /// Everyone in the listed departments, across all branches.
    Departments(Vec<DepartmentId>),
    /// Exactly the listed branch-department pairs.
    Pairs(Vec<PairId>),
}

impl PermissionTarget {
    /// Builds a branch target with sorted, deduplicated IDs.
    pub fn branches<I>(branch_ids: I) -> Self
    where
        I: IntoIterator<Item = BranchId>,
    {
        let mut ids: Vec<BranchId> = branch_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self::Branches(ids)
    }

    /// Builds a department target with sorted, deduplicated IDs.
    pub fn departments<I>(department_ids: I) -> Self
    where
        I: IntoIterator<Item = DepartmentId>,
    {
        let mut ids: Vec<DepartmentId> = department_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self::Departments(ids)
    }

    /// Builds a pair target with sorted, deduplicated IDs.
    pub fn pairs<I>(pair_ids: I) -> Self
    where
        I: IntoIterator<Item = PairId>,
    {
        let mut ids: Vec<PairId> = pair_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self::Pairs(ids)
    }

    /// Whether the target is the whole company.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::AllEmployees)
    }

    /// Whether the target names nobody at all.
    #[must_use]
    pub fn is_nobody(&self) -> bool {
        match self {
            Self::AllEmployees => false,
            Self::Branches(ids) => ids.is_empty(),
            Self::Departments(ids) => ids.is_empty(),
            Self::Pairs(ids) => ids.is_empty(),
        }
    }

    /// Stable variant label, used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AllEmployees => "all_employees",
            Self::Branches(_) => "branches",
            Self::Departments(_) => "departments",
            Self::Pairs(_) => "pairs",
        }
    }

    /// Converts into the wire shape, filling exactly one field.
    ///
    /// [`PermissionTarget::AllEmployees`] produces a payload with no
    /// audience keys at all; an empty pair list is emitted explicitly so
    /// the server stores "nobody" rather than "everyone".
    #[must_use]
    pub fn into_payload(self) -> AudiencePayload {
        let mut payload = AudiencePayload::default();
        match self {
            Self::AllEmployees => {}
            Self::Branches(ids) => payload.permitted_branches = Some(ids),
            Self::Departments(ids) => payload.permitted_departments = Some(ids),
            Self::Pairs(ids) => payload.permitted_branch_departments = Some(ids),
        }
        payload
    }
}

impl From<PermissionTarget> for AudiencePayload {
    fn from(target: PermissionTarget) -> Self {
        target.into_payload()
    }
}

/// The audience block of a stored resource, as the server speaks it.
///
/// Every field is optional and absent fields are omitted when serializing.
/// The engine treats `permittedEmployees` as opaque: per-employee audiences
/// are preserved on the wire but never drive the picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AudiencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_branch_departments: Option<Vec<PairId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_branches: Option<Vec<BranchId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_departments: Option<Vec<DepartmentId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_employees: Option<Vec<EmployeeId>>,
    /// Legacy key written by retired console builds. Read, never written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_branch_departments: Option<Vec<PairId>>,
}

impl AudiencePayload {
    /// Whether none of the audience keys is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permitted_branch_departments.is_none()
            && self.permitted_branches.is_none()
            && self.permitted_departments.is_none()
            && self.permitted_employees.is_none()
            && self.selected_branch_departments.is_none()
    }
}
