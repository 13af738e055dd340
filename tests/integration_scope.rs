//! Scope resolution and access checks over the fixture org chart,
//! starting from the wire shapes the session is actually built from.

mod common;

use staffhub::{AccessValidator, ScopeResolver};
use staffhub_models::ids::{BranchId, DepartmentId, EmployeeId, PairId};
use staffhub_models::scope::{ManagerScopeResponse, Scope};
use staffhub_models::target::AudiencePayload;

use common::{ABUJA_FINANCE, LAGOS_ENGINEERING, LAGOS_PEOPLE_OPS};

#[test]
fn test_manager_session_from_wire_response() {
    let body = r#"{
        "is_manager": true,
        "managed_departments": [5, "7"],
        "permissions": { "create_announcements": true, "manage_employees": true }
    }"#;
    let session = serde_json::from_str::<ManagerScopeResponse>(body)
        .unwrap()
        .into_scope();

    let resolved = ScopeResolver::resolve(&session.scope, &common::pair_table());
    assert_eq!(
        resolved.branch_ids.into_iter().collect::<Vec<_>>(),
        vec![BranchId::new(1)]
    );
    assert_eq!(
        resolved.department_ids.into_iter().collect::<Vec<_>>(),
        vec![DepartmentId::new(10), DepartmentId::new(11)]
    );
}

#[test]
fn test_admin_session_from_wire_response() {
    let body = r#"{"is_manager": false}"#;
    let session = serde_json::from_str::<ManagerScopeResponse>(body)
        .unwrap()
        .into_scope();
    assert!(session.scope.is_unrestricted());

    let resolved = ScopeResolver::resolve(&session.scope, &common::pair_table());
    assert_eq!(resolved.branch_ids.len(), 2);
    assert_eq!(resolved.department_ids.len(), 3);
}

#[test]
fn test_manager_with_no_assignments_sees_nothing() {
    let body = r#"{"is_manager": true, "managed_departments": []}"#;
    let session = serde_json::from_str::<ManagerScopeResponse>(body)
        .unwrap()
        .into_scope();

    // An empty managed set is a manager with no assignments, not an admin.
    assert!(!session.scope.is_unrestricted());
    assert!(ScopeResolver::resolve(&session.scope, &common::pair_table()).is_empty());

    let validator = AccessValidator::new(&session, &common::pair_table());
    assert!(validator.accessible_employees(&common::employees()).is_empty());
}

#[test]
fn test_loading_scope_is_never_misread_as_admin() {
    let session = staffhub_models::scope::ManagerScope::loading();
    assert!(!session.scope.is_ready());

    let validator = AccessValidator::new(&session, &common::pair_table());
    assert!(!validator.can_access_branch(BranchId::new(1)));
    assert!(!validator.can_access_resource(&AudiencePayload::default()));
    assert!(validator.accessible_employees(&common::employees()).is_empty());
}

#[test]
fn test_manager_employee_visibility() {
    let validator = AccessValidator::new(&common::lagos_manager(), &common::pair_table());
    let employees = common::employees();
    let visible: Vec<i64> = validator
        .accessible_employees(&employees)
        .iter()
        .map(|employee| employee.id.into_inner())
        .collect();
    // Ada and Tunde work in Lagos; Funke splits Abuja Finance with Lagos
    // Engineering; Chidi is Abuja-only and Bola has no assignment yet.
    assert_eq!(visible, vec![301, 302, 304]);
}

#[test]
fn test_admin_sees_every_employee() {
    let validator = AccessValidator::new(&common::admin(), &common::pair_table());
    assert_eq!(
        validator.accessible_employees(&common::employees()).len(),
        common::employees().len()
    );
}

#[test]
fn test_resource_visibility_per_row() {
    let validator = AccessValidator::new(&common::lagos_manager(), &common::pair_table())
        .with_employees(&common::employees());

    // A Lagos-scoped announcement is visible.
    let lagos_announcement = AudiencePayload {
        permitted_branch_departments: Some(vec![PairId::new(LAGOS_PEOPLE_OPS)]),
        ..AudiencePayload::default()
    };
    assert!(validator.can_access_resource(&lagos_announcement));

    // A Finance-only folder is not.
    let finance_folder = AudiencePayload {
        permitted_branch_departments: Some(vec![PairId::new(ABUJA_FINANCE)]),
        ..AudiencePayload::default()
    };
    assert!(!validator.can_access_resource(&finance_folder));

    // A poll targeted at a managed employee is visible through the
    // employee leg even though no pair is listed.
    let personal_poll = AudiencePayload {
        permitted_employees: Some(vec![EmployeeId::new(301)]),
        ..AudiencePayload::default()
    };
    assert!(validator.can_access_resource(&personal_poll));

    // Department 10 exists in Lagos, so a department-wide audience matches.
    let department_wide = AudiencePayload {
        permitted_departments: Some(vec![DepartmentId::new(10)]),
        ..AudiencePayload::default()
    };
    assert!(validator.can_access_resource(&department_wide));
}

#[test]
fn test_legacy_audience_key_still_grants_visibility() {
    let validator = AccessValidator::new(&common::lagos_manager(), &common::pair_table());
    let legacy = AudiencePayload {
        selected_branch_departments: Some(vec![PairId::new(LAGOS_ENGINEERING)]),
        ..AudiencePayload::default()
    };
    assert!(validator.can_access_resource(&legacy));
}

#[test]
fn test_resolution_is_deterministic() {
    let scope = Scope::restricted([PairId::new(LAGOS_ENGINEERING), PairId::new(ABUJA_FINANCE)]);
    let first = ScopeResolver::resolve(&scope, &common::pair_table());
    let second = ScopeResolver::resolve(&scope, &common::pair_table());
    assert_eq!(first, second);
}
