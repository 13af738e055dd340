//! Strongly-typed ID newtypes for domain entities.
//!
//! The company-hub API identifies everything with numeric IDs. This module
//! wraps them in per-entity newtypes so a `BranchId` can never be passed
//! where a `DepartmentId` is expected — the branch×department cross-product
//! code is exactly the place where that mix-up would be silent and wrong.
//!
//! # Example
//!
//! ```ignore
//! use staffhub_models::ids::{BranchId, DepartmentId};
//!
//! fn lookup_branch(id: BranchId) { /* ... */ }
//!
//! let branch = BranchId::new(1);
//! let department = DepartmentId::new(10);
//!
//! lookup_branch(branch);     // OK
//! // lookup_branch(department); // Compile error! Type mismatch.
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Macro to define a strongly-typed ID newtype over `i64`.
///
/// Generates the trait set every entity ID needs: ordering (the engine keeps
/// IDs in `BTreeSet`s for deterministic output), serde with lenient
/// deserialization (the API emits numbers or numeric strings), display, and
/// schema metadata.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw ID value.
            #[inline]
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the inner ID value.
            #[inline]
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        // Lenient deserialization: the API emits numbers or numeric strings.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                staffhub_core::serde::deserialize_lenient_id(deserializer).map(Self)
            }
        }
    };
}

// Define all entity ID types
define_id!(
    /// Strongly-typed ID for Branch entities (office locations).
    BranchId
);

define_id!(
    /// Strongly-typed ID for Department entities.
    DepartmentId
);

define_id!(
    /// Strongly-typed ID for branch-department pairs, the atomic unit of
    /// manager scoping.
    PairId
);

define_id!(
    /// Strongly-typed ID for Employee entities.
    EmployeeId
);

define_id!(
    /// Strongly-typed ID for scoped resources (announcements, polls,
    /// knowledge folders, onboarding tasks).
    ResourceId
);
