//! Shared fixtures: a small org chart and the sessions acting on it.
//!
//! Layout used across the scenario tests:
//!
//! | Pair | Branch        | Department      |
//! |------|---------------|-----------------|
//! | 5    | 1 (Lagos HQ)  | 10 (Engineering)|
//! | 6    | 2 (Abuja)     | 10 (Engineering)|
//! | 7    | 1 (Lagos HQ)  | 11 (People Ops) |
//! | 9    | 2 (Abuja)     | 12 (Finance)    |
//!
//! The "Lagos manager" manages pairs 5 and 7.

use chrono::NaiveDate;

use staffhub::PairDirectory;
use staffhub_models::ids::{EmployeeId, PairId};
use staffhub_models::org::{BranchDepartmentPair, Employee};
use staffhub_models::scope::{ManagerPermissions, ManagerScope};

#[allow(dead_code)]
pub const LAGOS_ENGINEERING: i64 = 5;
#[allow(dead_code)]
pub const ABUJA_ENGINEERING: i64 = 6;
#[allow(dead_code)]
pub const LAGOS_PEOPLE_OPS: i64 = 7;
#[allow(dead_code)]
pub const ABUJA_FINANCE: i64 = 9;

#[allow(dead_code)]
pub fn pair_table() -> Vec<BranchDepartmentPair> {
    vec![
        BranchDepartmentPair::new(LAGOS_ENGINEERING, 1, 10),
        BranchDepartmentPair::new(ABUJA_ENGINEERING, 2, 10),
        BranchDepartmentPair::new(LAGOS_PEOPLE_OPS, 1, 11),
        BranchDepartmentPair::new(ABUJA_FINANCE, 2, 12),
    ]
}

#[allow(dead_code)]
pub fn directory() -> PairDirectory {
    PairDirectory::from_pairs(pair_table())
}

#[allow(dead_code)]
pub fn admin() -> ManagerScope {
    ManagerScope::admin()
}

/// A manager over both Lagos pairs, holding every grant.
#[allow(dead_code)]
pub fn lagos_manager() -> ManagerScope {
    ManagerScope::manager(
        [PairId::new(LAGOS_ENGINEERING), PairId::new(LAGOS_PEOPLE_OPS)],
        ManagerPermissions::all(),
    )
}

/// The same manager with an explicit grant set.
#[allow(dead_code)]
pub fn lagos_manager_with(permissions: ManagerPermissions) -> ManagerScope {
    ManagerScope::manager(
        [PairId::new(LAGOS_ENGINEERING), PairId::new(LAGOS_PEOPLE_OPS)],
        permissions,
    )
}

#[allow(dead_code)]
pub fn employee(id: i64, name: &str, pair_ids: &[i64]) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        first_name: name.to_string(),
        last_name: "Example".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        branch_department_ids: pair_ids.iter().map(|id| PairId::new(*id)).collect(),
        hired_at: NaiveDate::from_ymd_opt(2024, 3, 1),
    }
}

/// Everyone on the fixture org chart.
#[allow(dead_code)]
pub fn employees() -> Vec<Employee> {
    vec![
        employee(301, "Ada", &[LAGOS_ENGINEERING]),
        employee(302, "Tunde", &[LAGOS_PEOPLE_OPS]),
        employee(303, "Chidi", &[ABUJA_ENGINEERING]),
        employee(304, "Funke", &[ABUJA_FINANCE, LAGOS_ENGINEERING]),
        employee(305, "Bola", &[]),
    ]
}
