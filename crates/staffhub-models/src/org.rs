//! Organizational entities: branches, departments, and employees.
//!
//! A **branch** is a physical office location; a **department** is an
//! organizational unit. Departments are instantiated per branch as
//! **branch-department pairs**, and every scoping decision in the engine is
//! ultimately a statement about pair IDs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{BranchId, DepartmentId, EmployeeId, PairId};

/// A physical or organizational office location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
}

/// An organizational unit, instantiated per branch as branch-department
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// One department's presence in one branch — the atomic unit of scoping.
///
/// Immutable once fetched; all permission grants are ultimately expressed as
/// sets of these IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BranchDepartmentPair {
    pub id: PairId,
    pub branch_id: BranchId,
    pub department_id: DepartmentId,
}

impl BranchDepartmentPair {
    /// Builds a pair from its three raw IDs. Fixture and test convenience.
    #[must_use]
    pub const fn new(id: i64, branch_id: i64, department_id: i64) -> Self {
        Self {
            id: PairId::new(id),
            branch_id: BranchId::new(branch_id),
            department_id: DepartmentId::new(department_id),
        }
    }
}

/// An employee as the directory endpoints return them.
///
/// `branch_department_ids` lists every pair the employee belongs to; the
/// access checks intersect it with a manager's managed pair set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Employee {
    pub id: EmployeeId,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    /// Pairs this employee belongs to. Employees transferring between
    /// branches can appear in more than one.
    #[serde(default)]
    pub branch_department_ids: Vec<PairId>,
    pub hired_at: Option<NaiveDate>,
}

impl Employee {
    /// The employee's display name, "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this employee belongs to the given pair.
    #[must_use]
    pub fn belongs_to(&self, pair_id: PairId) -> bool {
        self.branch_department_ids.contains(&pair_id)
    }
}
