//! # Staffhub Core
//!
//! Core types, errors, and shared vocabulary for the Staffhub authorization
//! engine.
//!
//! This crate provides the foundational pieces used throughout the Staffhub
//! workspace:
//!
//! - [`errors`]: The [`AuthzError`] type returned by fallible boundaries
//! - [`permissions`]: Manager grant flags and scoped-content kinds
//! - [`pagination`]: The paginated response envelope the company-hub API emits
//! - [`serde`]: Lenient deserializers for the API's loosely-typed ID fields
//!
//! # Example
//!
//! ```ignore
//! use staffhub_core::errors::AuthzError;
//! use staffhub_core::permissions::{ManagerGrant, ResourceKind};
//!
//! // Which grant gates publishing an announcement?
//! let grant = ResourceKind::Announcement.required_grant();
//! assert_eq!(grant, ManagerGrant::CreateAnnouncements);
//!
//! // Report a missing grant
//! let error = AuthzError::MissingGrant(grant);
//! ```

pub mod errors;
pub mod pagination;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AuthzError;
pub use pagination::{Paginated, PaginationMeta};
pub use permissions::{ManagerGrant, ResourceKind};
