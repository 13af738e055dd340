//! The paginated response envelope used by the company-hub API.
//!
//! Directory-style endpoints (branch-department pairs, employees) return
//! either a bare JSON array or a paginated envelope:
//!
//! ```json
//! {
//!   "data": [...],
//!   "meta": { "total": 42, "page": 1, "limit": 25, "has_more": true }
//! }
//! ```
//!
//! This module defines the envelope once so the wire-normalization layer can
//! accept both shapes. Building queries (limit/offset arithmetic) belongs to
//! the surrounding application's fetch layer, not to this workspace.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata block of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages.
    pub total: i64,
    /// Maximum items per page (the limit that was applied).
    pub limit: i64,
    /// Current page number (1-indexed), when the server reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Whether there are more items after this page.
    pub has_more: bool,
}

/// A page of items together with its [`PaginationMeta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Position information for this page.
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Consumes the envelope and returns the items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Whether this page claims to be the last one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        !self.meta.has_more
    }
}
