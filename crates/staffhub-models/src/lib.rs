//! # Staffhub Models
//!
//! Domain models, wire payloads, and DTOs for the Staffhub authorization
//! engine.
//!
//! This crate provides all data structures the engine operates on, from the
//! strongly-typed IDs up to the wire shapes the company-hub API speaks.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed ID newtypes (`BranchId`, `PairId`, ...)
//! - [`org`]: Branches, departments, branch-department pairs, employees
//! - [`scope`]: The session scope snapshot and its wire response
//! - [`selection`]: The audience picker's two-axis selection state
//! - [`target`]: Canonical audience targets and their wire payload
//! - [`content`]: Draft DTOs for announcements, polls, and knowledge folders
//! - [`wire`]: Endpoint document shapes and boundary normalization
//!
//! # Example
//!
//! ```ignore
//! use staffhub_models::scope::{ManagerScopeResponse, Scope};
//!
//! let response: ManagerScopeResponse = serde_json::from_str(body)?;
//! let session = response.into_scope();
//! if session.scope.is_unrestricted() {
//!     println!("admin session");
//! }
//! ```

pub mod content;
pub mod ids;
pub mod org;
pub mod scope;
pub mod selection;
pub mod target;
pub mod wire;

// Re-export commonly used types at crate root for convenience
pub use ids::{BranchId, DepartmentId, EmployeeId, PairId, ResourceId};

pub use org::{Branch, BranchDepartmentPair, Department, Employee};

pub use scope::{
    ManagerPermissions, ManagerScope, ManagerScopeResponse, ResolvedScope, Scope,
};

pub use selection::SelectionState;

pub use target::{AudiencePayload, PermissionTarget};

pub use content::{AnnouncementDraft, KnowledgeFolderDraft, PollDraft, ScopedDraft};

pub use wire::{PairListResponse, PairRecord, parse_pair_list};
