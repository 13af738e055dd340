//! Scope resolution: from a scope to the branch and department sets it
//! reaches.
//!
//! The picker and the list screens both need the question answered as sets:
//! "which branch IDs and which department IDs may this caller see at all?"
//! [`ScopeResolver`] walks the fetched pair table once and collects them.

use tracing::{debug, instrument};

use staffhub_models::org::BranchDepartmentPair;
use staffhub_models::scope::{ResolvedScope, Scope};

/// Resolves a [`Scope`] against the fetched pair table.
pub struct ScopeResolver;

impl ScopeResolver {
    /// Collects every branch and department ID the scope reaches.
    ///
    /// - `Restricted`: the branches and departments of the managed pairs.
    ///   Managed pair IDs absent from the table are skipped.
    /// - `Unrestricted`: every branch and department in the table.
    /// - `Loading`: empty sets. A pending scope reaches nothing.
    ///
    /// Total function: malformed or missing pair data narrows the result,
    /// it never fails.
    #[instrument(skip(scope, pairs))]
    #[must_use]
    pub fn resolve(scope: &Scope, pairs: &[BranchDepartmentPair]) -> ResolvedScope {
        let mut resolved = ResolvedScope::default();

        match scope {
            Scope::Loading => {}
            Scope::Unrestricted => {
                for pair in pairs {
                    resolved.branch_ids.insert(pair.branch_id);
                    resolved.department_ids.insert(pair.department_id);
                }
            }
            Scope::Restricted(managed) => {
                for pair in pairs.iter().filter(|pair| managed.contains(&pair.id)) {
                    resolved.branch_ids.insert(pair.branch_id);
                    resolved.department_ids.insert(pair.department_id);
                }
            }
        }

        debug!(
            target: "authz",
            branches = resolved.branch_ids.len(),
            departments = resolved.department_ids.len(),
            "resolved scope"
        );

        resolved
    }
}
