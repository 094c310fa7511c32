mod common;

use common::{money, weekend_trip};
use split_core::{
    aggregate_balances, allocate_split,
    domain::{ExpenseRecord, Participant, ParticipantId, SplitRequest},
    init,
    ledger::residual_balances,
    plan_settlements, AllocationError, Money, Tolerances,
};

fn pid(id: &str) -> ParticipantId {
    ParticipantId::from(id)
}

#[test]
fn allocate_aggregate_plan_end_to_end() {
    init();

    let participants = vec![
        Participant::with_id("a", "Asha"),
        Participant::with_id("b", "Ben"),
        Participant::with_id("c", "Chen"),
    ];
    let dinner = allocate_split(money("100.00"), &SplitRequest::equal(["a", "b", "c"])).unwrap();
    let taxi = allocate_split(
        money("20.00"),
        &SplitRequest::exact([("b", money("5.00")), ("c", money("15.00"))]),
    )
    .unwrap();
    let expenses = vec![
        ExpenseRecord {
            amount: money("100.00"),
            paid_by: pid("a"),
            shares: dinner,
        },
        ExpenseRecord {
            amount: money("20.00"),
            paid_by: pid("b"),
            shares: taxi,
        },
    ];

    let balances = aggregate_balances(&participants, &expenses).unwrap();
    let nets: Vec<Money> = balances.iter().map(|b| b.net).collect();
    assert_eq!(nets, vec![money("66.66"), money("-18.33"), money("-48.33")]);

    let plan = plan_settlements(&balances);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].from, pid("c"));
    assert_eq!(plan[0].amount, money("48.33"));
    assert_eq!(plan[1].from, pid("b"));
    assert_eq!(plan[1].amount, money("18.33"));
    assert!(residual_balances(&balances, &plan)
        .iter()
        .all(|(_, left)| left.is_zero()));
}

#[test]
fn exact_mismatch_scenario() {
    let err = allocate_split(
        money("100.00"),
        &SplitRequest::exact([("a", money("40.00")), ("b", money("40.00"))]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        AllocationError::SplitMismatch {
            expected: money("100.00"),
            actual: money("80.00"),
        }
    );
    assert_eq!(
        err.to_string(),
        "Split amounts (80.00) do not equal total amount (100.00)"
    );
}

#[test]
fn group_summary_from_services() {
    let (group, ids) = weekend_trip();
    let summary = group.summary(&Tolerances::default()).unwrap();

    assert_eq!(summary.total_spent, money("120.00"));
    assert_eq!(summary.balances[0].paid, money("90.00"));
    assert_eq!(summary.balances[0].net, money("60.00"));
    assert_eq!(summary.balances[1].net, money("-15.00"));
    assert_eq!(summary.balances[2].net, money("-45.00"));

    assert_eq!(summary.settlements.len(), 2);
    assert_eq!(summary.settlements[0].from, ids[2]);
    assert_eq!(summary.settlements[0].to, ids[0]);
    assert_eq!(summary.settlements[0].amount, money("45.00"));
    assert_eq!(summary.settlements[1].from, ids[1]);
    assert_eq!(summary.settlements[1].amount, money("15.00"));
}

#[test]
fn wider_settle_threshold_ignores_small_balances() {
    let (group, _) = weekend_trip();
    let lenient = Tolerances {
        settle: money("20.00"),
        ..Tolerances::default()
    };
    let summary = group.summary(&lenient).unwrap();
    assert_eq!(summary.settlements.len(), 1);
    assert_eq!(summary.settlements[0].to_name, "Asha");
    assert_eq!(summary.settlements[0].from_name, "Chen");
}
