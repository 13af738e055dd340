//! Wire shapes of the collaborating endpoints, normalized at the boundary.
//!
//! The company-hub API grew organically and its responses are inconsistent:
//! the branch-department listing is sometimes a paginated envelope and
//! sometimes a bare array, and individual records occasionally arrive with
//! missing or mistyped fields. Instead of branching on shape deep inside the
//! engine, everything is parsed and normalized here, once, into the canonical
//! [`BranchDepartmentPair`] form. Malformed individual records are skipped
//! with a `warn` log; a document that matches no known shape at all is a
//! [`AuthzError::MalformedPayload`].

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use staffhub_core::errors::AuthzError;
use staffhub_core::pagination::Paginated;

use crate::ids::{BranchId, DepartmentId, PairId};
use crate::org::{Branch, BranchDepartmentPair, Department};

/// The nested branch reference inside a pair record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BranchRef {
    pub id: BranchId,
    #[serde(rename = "branch_name")]
    pub name: String,
}

/// The nested department reference inside a pair record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentRef {
    pub id: DepartmentId,
    #[serde(rename = "dept_name")]
    pub name: String,
}

/// One record of the branch-department listing, exactly as the API emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PairRecord {
    pub id: PairId,
    pub branch: BranchRef,
    pub department: DepartmentRef,
}

impl PairRecord {
    /// The canonical pair this record describes.
    #[must_use]
    pub fn into_pair(self) -> BranchDepartmentPair {
        BranchDepartmentPair {
            id: self.id,
            branch_id: self.branch.id,
            department_id: self.department.id,
        }
    }

    /// The branch entity carried for display.
    #[must_use]
    pub fn branch_entity(&self) -> Branch {
        Branch {
            id: self.branch.id,
            name: self.branch.name.clone(),
        }
    }

    /// The department entity carried for display.
    #[must_use]
    pub fn department_entity(&self) -> Department {
        Department {
            id: self.department.id,
            name: self.department.name.clone(),
        }
    }
}

/// The two document shapes the branch-department endpoint emits.
///
/// Records are held as raw JSON values so that one malformed record cannot
/// fail the whole document; [`PairListResponse::normalize`] parses them one
/// at a time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PairListResponse {
    /// `{ "data": [...], "meta": {...} }`
    Envelope(Paginated<serde_json::Value>),
    /// A bare JSON array of records.
    Flat(Vec<serde_json::Value>),
}

impl PairListResponse {
    /// Parses a raw document from the branch-department endpoint.
    pub fn parse(document: &str) -> Result<Self, AuthzError> {
        serde_json::from_str(document)
            .map_err(|source| AuthzError::malformed("branch-departments", source))
    }

    /// Normalizes the records into canonical pairs.
    ///
    /// Records that do not parse as [`PairRecord`] are skipped and logged;
    /// the result carries everything that did.
    #[must_use]
    pub fn normalize(self) -> Vec<BranchDepartmentPair> {
        let records = match self {
            Self::Envelope(page) => page.into_data(),
            Self::Flat(records) => records,
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                match serde_json::from_value::<PairRecord>(value) {
                    Ok(record) => Some(record.into_pair()),
                    Err(error) => {
                        warn!(
                            target: "authz",
                            index,
                            %error,
                            "skipping malformed branch-department record"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

/// Parses and normalizes a branch-department document in one step.
pub fn parse_pair_list(document: &str) -> Result<Vec<BranchDepartmentPair>, AuthzError> {
    Ok(PairListResponse::parse(document)?.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 5,
        "branch": { "id": 1, "branch_name": "Lagos HQ" },
        "department": { "id": 10, "dept_name": "Engineering" }
    }"#;

    #[test]
    fn test_record_into_pair() {
        let record: PairRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.clone().into_pair(), BranchDepartmentPair::new(5, 1, 10));
        assert_eq!(record.branch_entity().name, "Lagos HQ");
        assert_eq!(record.department_entity().name, "Engineering");
    }

    #[test]
    fn test_flat_document_normalizes() {
        let document = format!("[{RECORD}]");
        let pairs = parse_pair_list(&document).unwrap();
        assert_eq!(pairs, vec![BranchDepartmentPair::new(5, 1, 10)]);
    }

    #[test]
    fn test_envelope_document_normalizes() {
        let document = format!(
            r#"{{"data":[{RECORD}],"meta":{{"total":1,"limit":25,"page":1,"has_more":false}}}}"#
        );
        let pairs = parse_pair_list(&document).unwrap();
        assert_eq!(pairs, vec![BranchDepartmentPair::new(5, 1, 10)]);
    }

    #[test]
    fn test_malformed_record_is_skipped_not_fatal() {
        let document = format!(r#"[{RECORD}, {{"id": "not-a-number"}}]"#);
        let pairs = parse_pair_list(&document).unwrap();
        assert_eq!(pairs, vec![BranchDepartmentPair::new(5, 1, 10)]);
    }

    #[test]
    fn test_record_with_lenient_ids() {
        let document = r#"[{
            "id": "7",
            "branch": { "id": "1", "branch_name": "Lagos HQ" },
            "department": { "id": 11, "dept_name": "People Ops" }
        }]"#;
        let pairs = parse_pair_list(document).unwrap();
        assert_eq!(pairs, vec![BranchDepartmentPair::new(7, 1, 11)]);
    }

    #[test]
    fn test_unparseable_document_is_an_error() {
        let result = parse_pair_list(r#"{"unexpected": true}"#);
        match result {
            Err(AuthzError::MalformedPayload { endpoint, .. }) => {
                assert_eq!(endpoint, "branch-departments");
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_documents_normalize_to_empty() {
        assert!(parse_pair_list("[]").unwrap().is_empty());
        let envelope = r#"{"data":[],"meta":{"total":0,"limit":25,"has_more":false}}"#;
        assert!(parse_pair_list(envelope).unwrap().is_empty());
    }
}
