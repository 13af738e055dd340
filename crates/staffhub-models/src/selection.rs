//! The audience picker's selection state.
//!
//! The picker exposes two independent axes, branches and departments.
//! Checking a branch means "everyone in that branch" until departments are
//! also checked, at which point the audience narrows to the cross-product.
//! The reconciler in the engine crate owns that interpretation; this type
//! only carries the checked IDs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{BranchId, DepartmentId};

/// The checked entries of the audience picker, one set per axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    pub selected_branch_ids: BTreeSet<BranchId>,
    pub selected_department_ids: BTreeSet<DepartmentId>,
}

impl SelectionState {
    /// An empty selection on both axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from any pair of ID collections.
    pub fn from_parts<B, D>(branch_ids: B, department_ids: D) -> Self
    where
        B: IntoIterator<Item = BranchId>,
        D: IntoIterator<Item = DepartmentId>,
    {
        Self {
            selected_branch_ids: branch_ids.into_iter().collect(),
            selected_department_ids: department_ids.into_iter().collect(),
        }
    }

    /// A selection with only branches checked.
    pub fn branches<I>(branch_ids: I) -> Self
    where
        I: IntoIterator<Item = BranchId>,
    {
        Self::from_parts(branch_ids, [])
    }

    /// A selection with only departments checked.
    pub fn departments<I>(department_ids: I) -> Self
    where
        I: IntoIterator<Item = DepartmentId>,
    {
        Self::from_parts([], department_ids)
    }

    /// Whether nothing is checked on either axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_branch_ids.is_empty() && self.selected_department_ids.is_empty()
    }

    /// Whether both axes have at least one entry checked.
    #[must_use]
    pub fn has_both_axes(&self) -> bool {
        !self.selected_branch_ids.is_empty() && !self.selected_department_ids.is_empty()
    }
}
