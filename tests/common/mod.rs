#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use split_core::{
    core::services::{ExpenseService, ParticipantService},
    domain::{ExpenseDraft, ParticipantId, SplitRequest},
    Group, Money,
};
use tempfile::TempDir;

pub fn money(value: &str) -> Money {
    value.parse().expect("valid amount")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A three-person group with two expenses:
/// Asha pays 90.00 split equally, Ben pays 30.00 split with Chen.
pub fn weekend_trip() -> (Group, Vec<ParticipantId>) {
    let mut group = Group::new("Weekend", "Asha");
    let asha = group.participants[0].id.clone();
    let ben = ParticipantService::add(&mut group, "Ben").expect("add Ben");
    let chen = ParticipantService::add(&mut group, "Chen").expect("add Chen");

    ExpenseService::add(
        &mut group,
        ExpenseDraft {
            description: "Cabin".into(),
            amount: money("90.00"),
            date: date(2025, 7, 4),
            paid_by: asha.clone(),
            split: SplitRequest::Equal(vec![asha.clone(), ben.clone(), chen.clone()]),
        },
    )
    .expect("record cabin");
    ExpenseService::add(
        &mut group,
        ExpenseDraft {
            description: "Fuel".into(),
            amount: money("30.00"),
            date: date(2025, 7, 5),
            paid_by: ben.clone(),
            split: SplitRequest::Equal(vec![ben.clone(), chen.clone()]),
        },
    )
    .expect("record fuel");

    (group, vec![asha, ben, chen])
}

/// Writes the group snapshot to a fresh temp directory and returns its path.
pub fn write_snapshot(group: &Group) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("group.json");
    let json = serde_json::to_string_pretty(group).expect("serialize group");
    std::fs::write(&path, json).expect("write snapshot");
    (dir, path)
}
