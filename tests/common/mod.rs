//! Common test utilities for integration tests
#![allow(dead_code)]

use assignment_tracker::{AssignmentFields, AssignmentRecord, Store};
use chrono::NaiveDate;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a record through a throwaway store, since IDs are only handed out by a store
pub fn record(due: &str, completed: &str, blocked: bool) -> AssignmentRecord {
    let mut store = Store::new();
    let fields = AssignmentFields::new("Test assignment", due)
        .with_completed_date(completed)
        .with_blocked(blocked);
    let id = store.add(fields).unwrap();
    store.get(id).unwrap().clone()
}

/// Create a store with one assignment in each status as of 2024-01-12
///
/// Insertion order: overdue, upcoming, blocked, completed late, completed on time
pub fn create_mixed_store() -> Store {
    let mut store = Store::new();
    for fields in [
        AssignmentFields::new("Overdue essay", "2024-01-10").with_project("English"),
        AssignmentFields::new("Upcoming lab", "2024-01-20").with_project("Chemistry"),
        AssignmentFields::new("Blocked survey", "2024-01-05").with_blocked(true),
        AssignmentFields::new("Late worksheet", "2024-01-08").with_completed_date("2024-01-09"),
        AssignmentFields::new("Quiz prep", "2024-01-08").with_completed_date("2024-01-08"),
    ] {
        store.add(fields).unwrap();
    }
    store
}
