//! Point permission queries: may this caller touch that thing.
//!
//! [`AccessValidator`] is built once per screen from the session's
//! [`ManagerScope`] and the fetched pair table, then answers membership
//! questions per row: which branches and departments to offer in the
//! picker, whether to render the edit button on an employee row, whether a
//! stored resource is visible at all.
//!
//! Every query is a pure membership test. Unrestricted sessions pass every
//! check; a still-loading scope fails every check.

use std::collections::BTreeSet;

use staffhub_models::ids::{BranchId, DepartmentId, EmployeeId, PairId};
use staffhub_models::org::{BranchDepartmentPair, Employee};
use staffhub_models::scope::{ManagerScope, ResolvedScope, Scope};
use staffhub_models::target::AudiencePayload;

use crate::resolver::ScopeResolver;

/// Answers per-row visibility and permission questions for one session.
#[derive(Debug, Clone)]
pub struct AccessValidator {
    scope: Scope,
    resolved: ResolvedScope,
    managed_employee_ids: BTreeSet<EmployeeId>,
}

impl AccessValidator {
    /// Builds a validator from the session scope and the fetched pair table.
    #[must_use]
    pub fn new(session: &ManagerScope, pairs: &[BranchDepartmentPair]) -> Self {
        Self {
            resolved: ScopeResolver::resolve(&session.scope, pairs),
            scope: session.scope.clone(),
            managed_employee_ids: BTreeSet::new(),
        }
    }

    /// Indexes the employees the scope reaches, enabling the
    /// `permittedEmployees` leg of [`Self::can_access_resource`].
    #[must_use]
    pub fn with_employees(mut self, employees: &[Employee]) -> Self {
        self.managed_employee_ids = employees
            .iter()
            .filter(|employee| self.can_access_employee(employee))
            .map(|employee| employee.id)
            .collect();
        self
    }

    /// The branch and department sets the scope reaches.
    #[must_use]
    pub fn resolved(&self) -> &ResolvedScope {
        &self.resolved
    }

    /// Whether the caller may see the given branch.
    #[must_use]
    pub fn can_access_branch(&self, branch_id: BranchId) -> bool {
        match self.scope {
            Scope::Unrestricted => true,
            Scope::Loading => false,
            Scope::Restricted(_) => self.resolved.branch_ids.contains(&branch_id),
        }
    }

    /// Whether the caller may see the given department.
    #[must_use]
    pub fn can_access_department(&self, department_id: DepartmentId) -> bool {
        match self.scope {
            Scope::Unrestricted => true,
            Scope::Loading => false,
            Scope::Restricted(_) => self.resolved.department_ids.contains(&department_id),
        }
    }

    /// Whether the caller may act on the given branch-department pair.
    #[must_use]
    pub fn can_access_pair(&self, pair_id: PairId) -> bool {
        self.scope.manages_pair(pair_id)
    }

    /// Whether the caller may see the given employee: the employee belongs
    /// to at least one managed pair.
    #[must_use]
    pub fn can_access_employee(&self, employee: &Employee) -> bool {
        match &self.scope {
            Scope::Unrestricted => true,
            Scope::Loading => false,
            Scope::Restricted(managed) => employee
                .branch_department_ids
                .iter()
                .any(|pair_id| managed.contains(pair_id)),
        }
    }

    /// Whether a stored resource is visible to the caller.
    ///
    /// A resource with no audience keys is open to everyone. Otherwise it
    /// is visible when any of its audience arrays intersects the caller's
    /// effective sets: pairs (current or legacy key) against the managed
    /// pair set, branches and departments against the resolved sets, and
    /// employees against the indexed managed employees.
    #[must_use]
    pub fn can_access_resource(&self, audience: &AudiencePayload) -> bool {
        let managed = match &self.scope {
            Scope::Unrestricted => return true,
            Scope::Loading => return false,
            Scope::Restricted(managed) => managed,
        };

        if audience.is_empty() {
            return true;
        }

        let pair_hit = |ids: &Option<Vec<PairId>>| {
            ids.as_deref()
                .is_some_and(|ids| ids.iter().any(|id| managed.contains(id)))
        };

        pair_hit(&audience.permitted_branch_departments)
            || pair_hit(&audience.selected_branch_departments)
            || audience.permitted_branches.as_deref().is_some_and(|ids| {
                ids.iter().any(|id| self.resolved.branch_ids.contains(id))
            })
            || audience.permitted_departments.as_deref().is_some_and(|ids| {
                ids.iter()
                    .any(|id| self.resolved.department_ids.contains(id))
            })
            || audience.permitted_employees.as_deref().is_some_and(|ids| {
                ids.iter().any(|id| self.managed_employee_ids.contains(id))
            })
    }

    /// Filters an employee list down to the rows the caller may see.
    #[must_use]
    pub fn accessible_employees<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|employee| self.can_access_employee(employee))
            .collect()
    }
}
