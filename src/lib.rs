//! # Staffhub Authorization Engine
//!
//! Manager-scope authorization and audience reconciliation for the Staffhub
//! company hub: which branches, departments, employees, and resources a
//! manager may see, and how the audience picker's selections map onto the
//! audience representation the API stores.
//!
//! ## Overview
//!
//! The company hub scopes managers to a set of **branch-department pairs**
//! (one department's presence in one branch). Everything a manager does is
//! bounded by that set:
//!
//! - **Scope resolution**: which branch and department IDs the pairs reach
//! - **Access checks**: may this caller touch department D, pair BD,
//!   employee E, or resource R
//! - **Selection reconciliation**: converting between stored audiences
//!   (pair lists, branch lists, department lists, legacy flat lists) and
//!   the picker's independent branch/department selections, in both
//!   directions
//! - **Authoring**: the grant-check → validate → collapse pipeline the
//!   announcement, poll, and knowledge-folder forms run on submit
//!
//! Every operation is a pure, synchronous computation over data the
//! surrounding application has already fetched. The engine performs no I/O,
//! installs no tracing subscriber, and holds no global state: the session's
//! [`ManagerScope`] is passed explicitly into every call.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── resolver.rs       # ScopeResolver: scope → reachable branch/department sets
//! ├── access.rs         # AccessValidator: point permission queries
//! ├── reconcile.rs      # SelectionReconciler: expand/collapse audiences
//! ├── directory.rs      # PairDirectory: the branch-department lookup table
//! └── authoring.rs      # Authoring: the form-submission pipeline
//! crates/
//! ├── staffhub-core     # errors, permission vocabulary, pagination, serde
//! └── staffhub-models   # IDs, org entities, scope, selections, wire shapes
//! ```
//!
//! Dependency order: [`ScopeResolver`] has no dependencies;
//! [`AccessValidator`] consumes its output; [`SelectionReconciler`] needs
//! only a [`PairDirectory`]; [`Authoring`] composes the scope checks with
//! the reconciler.
//!
//! ## The three scope states
//!
//! | Scope | Meaning | Grants |
//! |-------|---------|--------|
//! | `Unrestricted` | Admin session | Everything |
//! | `Loading` | Scope fetch pending or failed | Nothing |
//! | `Restricted(pairs)` | Manager session | Exactly the listed pairs |
//!
//! The legacy console encoded "admin" as an empty pair set, which made a
//! still-loading scope indistinguishable from unrestricted access. The
//! tagged [`Scope`] closes that hole: a pending fetch can never be
//! misclassified as admin, and a manager with zero assignments manages
//! nothing rather than everything.
//!
//! ## Example
//!
//! ```ignore
//! use staffhub::{AccessValidator, Authoring, PairDirectory, SelectionReconciler};
//! use staffhub_models::{ManagerScopeResponse, parse_pair_list};
//!
//! let pairs = parse_pair_list(&pairs_body)?;
//! let session = serde_json::from_str::<ManagerScopeResponse>(&scope_body)
//!     .map(ManagerScopeResponse::into_scope)?;
//!
//! let validator = AccessValidator::new(&session, &pairs);
//! let visible = validator.accessible_employees(&employees);
//!
//! let directory = PairDirectory::from_pairs(pairs);
//! let prepared = Authoring::prepare(&session, &directory, &draft)?;
//! api.post_announcement(&draft, &prepared.payload)?;
//! ```
//!
//! ## Modules
//!
//! - [`access`]: Point permission queries against a resolved scope
//! - [`authoring`]: The scoped-content submission pipeline
//! - [`directory`]: The branch-department pair lookup table and freshness
//! - [`reconcile`]: Audience expand/collapse between wire and picker forms
//! - [`resolver`]: Scope → reachable branch/department set resolution

pub mod access;
pub mod authoring;
pub mod directory;
pub mod reconcile;
pub mod resolver;

// Re-export workspace crates for convenience
pub use staffhub_core;
pub use staffhub_models;

pub use access::AccessValidator;
pub use authoring::{Authoring, PreparedDraft};
pub use directory::{FreshnessPolicy, PairDirectory};
pub use reconcile::{Expansion, ReconcileWarning, SelectionReconciler};
pub use resolver::ScopeResolver;

pub use staffhub_core::{AuthzError, ManagerGrant, ResourceKind};
pub use staffhub_models::{
    AudiencePayload, BranchDepartmentPair, ManagerScope, PermissionTarget, ResolvedScope, Scope,
    SelectionState,
};
