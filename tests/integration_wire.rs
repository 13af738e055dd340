//! From raw endpoint documents to engine structures: the boundary
//! normalization the fetch layer runs before handing data to the engine.

use staffhub::{AccessValidator, AuthzError, PairDirectory, SelectionReconciler};
use staffhub_models::ids::{BranchId, DepartmentId, PairId};
use staffhub_models::org::BranchDepartmentPair;
use staffhub_models::scope::ManagerScopeResponse;
use staffhub_models::target::AudiencePayload;
use staffhub_models::wire::parse_pair_list;

const PAIR_DOCUMENT: &str = r#"{
    "data": [
        {
            "id": 5,
            "branch": { "id": 1, "branch_name": "Lagos HQ" },
            "department": { "id": 10, "dept_name": "Engineering" }
        },
        {
            "id": "7",
            "branch": { "id": "1", "branch_name": "Lagos HQ" },
            "department": { "id": 11, "dept_name": "People Ops" }
        },
        { "id": 6, "branch": null },
        {
            "id": 9,
            "branch": { "id": 2, "branch_name": "Abuja" },
            "department": { "id": 12, "dept_name": "Finance" }
        }
    ],
    "meta": { "total": 4, "limit": 25, "page": 1, "has_more": false }
}"#;

#[test]
fn test_envelope_document_builds_a_directory() {
    let pairs = parse_pair_list(PAIR_DOCUMENT).unwrap();
    // The half-formed record for pair 6 is skipped, everything else lands.
    assert_eq!(
        pairs,
        vec![
            BranchDepartmentPair::new(5, 1, 10),
            BranchDepartmentPair::new(7, 1, 11),
            BranchDepartmentPair::new(9, 2, 12),
        ]
    );

    let directory = PairDirectory::from_pairs(pairs);
    assert_eq!(directory.len(), 3);
    assert_eq!(
        directory.pair_id_at(BranchId::new(1), DepartmentId::new(11)),
        Some(PairId::new(7))
    );
}

#[test]
fn test_flat_document_builds_the_same_directory() {
    let flat = r#"[
        {
            "id": 5,
            "branch": { "id": 1, "branch_name": "Lagos HQ" },
            "department": { "id": 10, "dept_name": "Engineering" }
        }
    ]"#;
    let pairs = parse_pair_list(flat).unwrap();
    assert_eq!(pairs, vec![BranchDepartmentPair::new(5, 1, 10)]);
}

#[test]
fn test_unrecognized_document_fails_loudly() {
    let result = parse_pair_list(r#"{"rows": []}"#);
    assert!(matches!(
        result,
        Err(AuthzError::MalformedPayload { endpoint: "branch-departments", .. })
    ));
}

#[test]
fn test_wire_to_engine_end_to_end() {
    // Fetch both documents, build the session and directory, and run a
    // stored audience through expansion — the screen-load path.
    let pairs = parse_pair_list(PAIR_DOCUMENT).unwrap();
    let scope_body = r#"{
        "is_manager": true,
        "managed_departments": [5, 7],
        "permissions": { "create_announcements": true }
    }"#;
    let session = serde_json::from_str::<ManagerScopeResponse>(scope_body)
        .unwrap()
        .into_scope();

    let validator = AccessValidator::new(&session, &pairs);
    assert!(validator.can_access_department(DepartmentId::new(11)));
    assert!(!validator.can_access_department(DepartmentId::new(12)));

    let directory = PairDirectory::from_pairs(pairs);
    let stored: AudiencePayload =
        serde_json::from_str(r#"{"permittedBranchDepartments": [5, 7]}"#).unwrap();
    let expansion = SelectionReconciler::expand(&stored, &directory);
    assert!(expansion.is_complete());
    assert_eq!(
        expansion.selection.selected_branch_ids.len(),
        1
    );
    assert_eq!(expansion.selection.selected_department_ids.len(), 2);
}

#[test]
fn test_audience_payload_survives_serialization_unchanged() {
    // The engine must not invent keys the server does not know.
    let stored: AudiencePayload =
        serde_json::from_str(r#"{"permittedBranches": [1, 2]}"#).unwrap();
    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json, serde_json::json!({ "permittedBranches": [1, 2] }));
}
