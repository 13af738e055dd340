//! Audience reconciliation: between the wire's stored audiences and the
//! picker's two-axis selection.
//!
//! Stored resources carry one of four audience representations (pair list,
//! branch list, department list, or the legacy flat key); the picker only
//! knows two independent check-box axes. [`SelectionReconciler`] converts
//! in both directions:
//!
//! - [`SelectionReconciler::expand`] loads a stored audience into the
//!   picker when a form opens.
//! - [`SelectionReconciler::collapse`] turns the picker state back into the
//!   single representation the API stores when the form submits.
//!
//! Both operations are total. References the lookup table cannot resolve
//! are dropped from the result but reported as [`ReconcileWarning`]s, so a
//! caller that cares about data integrity can block submission instead of
//! silently losing grants.

use tracing::{debug, instrument, warn};

use staffhub_models::ids::PairId;
use staffhub_models::scope::Scope;
use staffhub_models::selection::SelectionState;
use staffhub_models::target::{AudiencePayload, PermissionTarget};

use crate::directory::PairDirectory;

/// A reference the reconciler had to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileWarning {
    /// A stored pair ID is absent from the current lookup table, most
    /// likely deleted server-side since the resource was saved.
    UnresolvedPair(PairId),
}

/// The result of expanding a stored audience into picker state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    pub selection: SelectionState,
    pub warnings: Vec<ReconcileWarning>,
}

impl Expansion {
    /// Whether every stored reference resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Converts audiences between their stored and picker representations.
pub struct SelectionReconciler;

impl SelectionReconciler {
    /// Expands a stored audience into picker state.
    ///
    /// The representations are tried in fixed precedence order; the first
    /// present and non-empty one wins. The order decides which field is
    /// authoritative on documents saved under mixed schema versions:
    ///
    /// 1. `permittedBranchDepartments` — pair IDs, resolved via the table
    /// 2. `permittedBranches` — used directly
    /// 3. `permittedDepartments` — used directly
    /// 4. legacy `selectedBranchDepartments` — resolved like step 1
    /// 5. nothing present — empty selection (audience is everyone)
    #[instrument(skip(audience, directory))]
    #[must_use]
    pub fn expand(audience: &AudiencePayload, directory: &PairDirectory) -> Expansion {
        if let Some(pair_ids) = present(&audience.permitted_branch_departments) {
            return Self::expand_pairs(pair_ids, directory);
        }
        if let Some(branch_ids) = present(&audience.permitted_branches) {
            return Expansion {
                selection: SelectionState::branches(branch_ids.iter().copied()),
                warnings: Vec::new(),
            };
        }
        if let Some(department_ids) = present(&audience.permitted_departments) {
            return Expansion {
                selection: SelectionState::departments(department_ids.iter().copied()),
                warnings: Vec::new(),
            };
        }
        if let Some(pair_ids) = present(&audience.selected_branch_departments) {
            return Self::expand_pairs(pair_ids, directory);
        }

        Expansion::default()
    }

    fn expand_pairs(pair_ids: &[PairId], directory: &PairDirectory) -> Expansion {
        let mut expansion = Expansion::default();

        for pair_id in pair_ids {
            match directory.get(*pair_id) {
                Some(pair) => {
                    expansion
                        .selection
                        .selected_branch_ids
                        .insert(pair.branch_id);
                    expansion
                        .selection
                        .selected_department_ids
                        .insert(pair.department_id);
                }
                None => {
                    warn!(target: "authz", pair_id = %pair_id, "dropping unresolved pair reference");
                    expansion
                        .warnings
                        .push(ReconcileWarning::UnresolvedPair(*pair_id));
                }
            }
        }

        expansion
    }

    /// Collapses picker state into the single representation to store.
    ///
    /// - Both axes checked: the cross-product — every table pair whose
    ///   branch and department are both selected. A `Restricted` caller
    ///   additionally keeps only pairs they manage, so the UI can never
    ///   smuggle an out-of-scope grant through raw branch/department
    ///   selections; if the filter removes everything the result is an
    ///   explicit empty pair list (grant nobody, never widen to everyone).
    ///   A `Loading` caller always collapses to the empty pair list.
    /// - One axis checked: that axis, passed through unfiltered — the
    ///   picker only offered entries the resolved scope reaches.
    /// - Nothing checked: the audience is everyone.
    #[instrument(skip(selection, directory, scope))]
    #[must_use]
    pub fn collapse(
        selection: &SelectionState,
        directory: &PairDirectory,
        scope: &Scope,
    ) -> PermissionTarget {
        let target = if selection.has_both_axes() {
            let pair_ids = directory
                .iter()
                .filter(|pair| {
                    selection.selected_branch_ids.contains(&pair.branch_id)
                        && selection
                            .selected_department_ids
                            .contains(&pair.department_id)
                        && scope.manages_pair(pair.id)
                })
                .map(|pair| pair.id);
            PermissionTarget::pairs(pair_ids)
        } else if !selection.selected_branch_ids.is_empty() {
            PermissionTarget::branches(selection.selected_branch_ids.iter().copied())
        } else if !selection.selected_department_ids.is_empty() {
            PermissionTarget::departments(selection.selected_department_ids.iter().copied())
        } else {
            PermissionTarget::AllEmployees
        };

        debug!(target: "authz", kind = target.kind(), "collapsed selection");
        target
    }
}

fn present<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|ids| !ids.is_empty())
}
