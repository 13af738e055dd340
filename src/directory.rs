//! The branch-department pair lookup table.
//!
//! Expanding a stored audience needs pair-ID → (branch, department) lookups;
//! collapsing a selection needs the reverse, (branch, department) → pair-ID.
//! [`PairDirectory`] indexes a fetched pair list both ways.
//!
//! The table is a snapshot: another admin can delete a pair server-side
//! while a form is open, and the engine tolerates the resulting dangling
//! references (see the reconciler's warnings). [`FreshnessPolicy`] lets
//! callers decide when a snapshot is old enough to refetch before
//! submitting.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use staffhub_models::ids::{BranchId, DepartmentId, PairId};
use staffhub_models::org::BranchDepartmentPair;

/// How old a directory snapshot may get before callers should refetch.
///
/// Advisory only: a stale directory still answers every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    pub max_age: Duration,
}

impl FreshnessPolicy {
    /// A policy with the given maximum age.
    #[must_use]
    pub const fn new(max_age: Duration) -> Self {
        Self { max_age }
    }
}

impl Default for FreshnessPolicy {
    /// Five minutes, matching the console's request-cache window.
    fn default() -> Self {
        Self {
            max_age: Duration::minutes(5),
        }
    }
}

/// A both-ways index over a fetched branch-department pair list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairDirectory {
    by_id: BTreeMap<PairId, BranchDepartmentPair>,
    by_axes: BTreeMap<(BranchId, DepartmentId), PairId>,
    refreshed_at: DateTime<Utc>,
}

impl PairDirectory {
    /// Indexes a pair list fetched just now.
    ///
    /// Duplicate pair IDs keep the first occurrence; the API should never
    /// emit them, so a duplicate is logged.
    #[must_use]
    pub fn from_pairs(pairs: Vec<BranchDepartmentPair>) -> Self {
        Self::from_pairs_at(pairs, Utc::now())
    }

    /// Indexes a pair list fetched at the given instant.
    #[must_use]
    pub fn from_pairs_at(pairs: Vec<BranchDepartmentPair>, refreshed_at: DateTime<Utc>) -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_axes = BTreeMap::new();

        for pair in pairs {
            if by_id.contains_key(&pair.id) {
                debug!(target: "authz", pair_id = %pair.id, "duplicate pair record ignored");
                continue;
            }
            by_axes.insert((pair.branch_id, pair.department_id), pair.id);
            by_id.insert(pair.id, pair);
        }

        Self {
            by_id,
            by_axes,
            refreshed_at,
        }
    }

    /// Looks up a pair by its ID.
    #[must_use]
    pub fn get(&self, pair_id: PairId) -> Option<&BranchDepartmentPair> {
        self.by_id.get(&pair_id)
    }

    /// Whether the directory knows this pair ID.
    #[must_use]
    pub fn contains(&self, pair_id: PairId) -> bool {
        self.by_id.contains_key(&pair_id)
    }

    /// The pair ID at the given branch×department coordinate, if one exists.
    #[must_use]
    pub fn pair_id_at(&self, branch_id: BranchId, department_id: DepartmentId) -> Option<PairId> {
        self.by_axes.get(&(branch_id, department_id)).copied()
    }

    /// Number of indexed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the directory holds no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates the pairs in ascending pair-ID order.
    pub fn iter(&self) -> impl Iterator<Item = &BranchDepartmentPair> {
        self.by_id.values()
    }

    /// When this snapshot was fetched.
    #[must_use]
    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Whether the snapshot is older than the policy allows.
    #[must_use]
    pub fn is_stale(&self, policy: &FreshnessPolicy) -> bool {
        Utc::now() - self.refreshed_at > policy.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> PairDirectory {
        PairDirectory::from_pairs(vec![
            BranchDepartmentPair::new(5, 1, 10),
            BranchDepartmentPair::new(7, 1, 11),
            BranchDepartmentPair::new(9, 2, 12),
        ])
    }

    #[test]
    fn test_get_known_pair() {
        let directory = directory();
        let pair = directory.get(PairId::new(7)).unwrap();
        assert_eq!(pair.branch_id, BranchId::new(1));
        assert_eq!(pair.department_id, DepartmentId::new(11));
    }

    #[test]
    fn test_get_unknown_pair_is_none() {
        assert!(directory().get(PairId::new(999)).is_none());
        assert!(!directory().contains(PairId::new(999)));
    }

    #[test]
    fn test_pair_id_at_coordinate() {
        let directory = directory();
        assert_eq!(
            directory.pair_id_at(BranchId::new(2), DepartmentId::new(12)),
            Some(PairId::new(9))
        );
        // Department 12 exists, but not in branch 1.
        assert_eq!(
            directory.pair_id_at(BranchId::new(1), DepartmentId::new(12)),
            None
        );
    }

    #[test]
    fn test_len_and_iteration_order() {
        let directory = directory();
        assert_eq!(directory.len(), 3);
        assert!(!directory.is_empty());
        let ids: Vec<i64> = directory.iter().map(|pair| pair.id.into_inner()).collect();
        assert_eq!(ids, vec![5, 7, 9]);
    }

    #[test]
    fn test_duplicate_pair_id_keeps_first() {
        let directory = PairDirectory::from_pairs(vec![
            BranchDepartmentPair::new(5, 1, 10),
            BranchDepartmentPair::new(5, 2, 12),
        ]);
        assert_eq!(directory.len(), 1);
        assert_eq!(
            directory.get(PairId::new(5)).unwrap().branch_id,
            BranchId::new(1)
        );
    }

    #[test]
    fn test_staleness_against_policy() {
        let policy = FreshnessPolicy::default();

        let fresh = PairDirectory::from_pairs(vec![]);
        assert!(!fresh.is_stale(&policy));

        let old = PairDirectory::from_pairs_at(vec![], Utc::now() - Duration::minutes(10));
        assert!(old.is_stale(&policy));

        let lenient = FreshnessPolicy::new(Duration::hours(1));
        assert!(!old.is_stale(&lenient));
    }
}
