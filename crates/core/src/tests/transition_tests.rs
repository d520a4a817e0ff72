// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{admin, march_first, seeded, sign_in, unassigned};
use crate::{Inventory, Refusal, TransitionOutcome, check_transition, transition};
use armory_domain::{
    Assignment, AssignmentStatus, PurchaseStatus, RecordId, Transfer, TransferStatus,
    UnassignedPolicy,
};
use time::macros::date;

fn id(value: &str) -> RecordId {
    RecordId::from(value)
}

#[test]
fn test_returning_assignment_stamps_return_date_only() {
    let mut inventory: Inventory = seeded();
    let before: Assignment = inventory.assignments.get(&id("ASG001")).unwrap().clone();

    let outcome = transition(
        &mut inventory.assignments,
        &admin(),
        &id("ASG001"),
        AssignmentStatus::Returned,
        &march_first(),
    );

    let expected = Assignment {
        status: AssignmentStatus::Returned,
        return_date: Some(date!(2024 - 03 - 01)),
        ..before
    };
    assert_eq!(outcome, TransitionOutcome::Applied(expected.clone()));
    assert_eq!(inventory.assignments.get(&id("ASG001")), Some(&expected));
    assert_eq!(inventory.assignments.len(), 6);
}

#[test]
fn test_expending_assignment_leaves_return_date_empty() {
    let mut inventory: Inventory = seeded();

    let outcome = transition(
        &mut inventory.assignments,
        &sign_in("Lieutenant Brown"),
        &id("ASG004"),
        AssignmentStatus::Expended,
        &march_first(),
    );

    let TransitionOutcome::Applied(assignment) = outcome else {
        panic!("expected the transition to apply");
    };
    assert_eq!(assignment.status, AssignmentStatus::Expended);
    assert_eq!(assignment.return_date, None);
}

#[test]
fn test_admin_approval_then_reapproval_is_a_no_op() {
    let mut inventory: Inventory = seeded();
    let actor = admin();

    let first = transition(
        &mut inventory.transfers,
        &actor,
        &id("T003"),
        TransferStatus::InTransit,
        &march_first(),
    );
    let TransitionOutcome::Applied(approved) = first else {
        panic!("expected approval to apply");
    };
    assert_eq!(approved.status, TransferStatus::InTransit);
    assert_eq!(approved.approved_by.as_deref(), Some("General Smith"));

    let snapshot: Inventory = inventory.clone();
    let second = transition(
        &mut inventory.transfers,
        &actor,
        &id("T003"),
        TransferStatus::InTransit,
        &march_first(),
    );

    assert_eq!(
        second,
        TransitionOutcome::Unchanged(Refusal::IllegalTransition {
            from: "In Transit",
            to: "In Transit",
        })
    );
    assert_eq!(inventory, snapshot);
}

#[test]
fn test_only_admins_approve_transfers() {
    let mut inventory: Inventory = seeded();
    let before: Transfer = inventory.transfers.get(&id("T003")).unwrap().clone();

    let outcome = transition(
        &mut inventory.transfers,
        &sign_in("Colonel Johnson"),
        &id("T003"),
        TransferStatus::InTransit,
        &march_first(),
    );

    assert!(matches!(
        outcome.refusal(),
        Some(Refusal::NotPermitted { .. })
    ));
    assert_eq!(inventory.transfers.get(&id("T003")), Some(&before));
}

#[test]
fn test_receiving_base_completes_transfer() {
    let mut inventory: Inventory = seeded();

    let sender = transition(
        &mut inventory.transfers,
        &sign_in("Colonel Johnson"),
        &id("T001"),
        TransferStatus::Completed,
        &march_first(),
    );
    assert!(matches!(
        sender.refusal(),
        Some(Refusal::NotPermitted { .. })
    ));

    let receiver = transition(
        &mut inventory.transfers,
        &sign_in("Captain Davis"),
        &id("T001"),
        TransferStatus::Completed,
        &march_first(),
    );
    assert!(receiver.is_applied());
    assert_eq!(
        inventory.transfers.get(&id("T001")).unwrap().status,
        TransferStatus::Completed
    );
}

#[test]
fn test_pending_transfer_cannot_skip_to_completed() {
    let mut inventory: Inventory = seeded();

    let outcome = transition(
        &mut inventory.transfers,
        &admin(),
        &id("T003"),
        TransferStatus::Completed,
        &march_first(),
    );

    assert_eq!(
        outcome.refusal(),
        Some(Refusal::IllegalTransition {
            from: "Pending",
            to: "Completed",
        })
    );
}

#[test]
fn test_unknown_record_is_reported() {
    let mut inventory: Inventory = seeded();

    let outcome = transition(
        &mut inventory.assignments,
        &admin(),
        &id("ASG999"),
        AssignmentStatus::Returned,
        &march_first(),
    );

    assert_eq!(outcome, TransitionOutcome::Unchanged(Refusal::UnknownRecord));
}

#[test]
fn test_records_outside_scope_cannot_be_touched() {
    let mut inventory: Inventory = seeded();
    let snapshot: Inventory = inventory.clone();

    let outcome = transition(
        &mut inventory.assignments,
        &sign_in("Major Williams"),
        &id("ASG001"),
        AssignmentStatus::Returned,
        &march_first(),
    );

    assert_eq!(outcome, TransitionOutcome::Unchanged(Refusal::UnknownRecord));
    assert_eq!(inventory, snapshot);
}

#[test]
fn test_out_of_scope_record_is_indistinguishable_from_missing() {
    let mut inventory: Inventory = seeded();
    let commander = sign_in("Major Williams");

    let hidden = transition(
        &mut inventory.purchases,
        &commander,
        &id("P004"),
        PurchaseStatus::Cancelled,
        &march_first(),
    );
    let missing = transition(
        &mut inventory.purchases,
        &commander,
        &id("P999"),
        PurchaseStatus::Cancelled,
        &march_first(),
    );

    assert_eq!(hidden, missing);
    assert_eq!(
        serde_json::to_value(hidden.refusal()).unwrap(),
        serde_json::to_value(missing.refusal()).unwrap()
    );
}

#[test]
fn test_denied_unassigned_user_sees_nothing_to_transition() {
    let mut inventory: Inventory = seeded();

    let outcome = transition(
        &mut inventory.purchases,
        &unassigned(UnassignedPolicy::Deny),
        &id("P004"),
        PurchaseStatus::InTransit,
        &march_first(),
    );

    assert_eq!(outcome.refusal(), Some(Refusal::UnknownRecord));
}

#[test]
fn test_terminal_assignment_stays_terminal() {
    let mut inventory: Inventory = seeded();

    for target in [AssignmentStatus::Active, AssignmentStatus::Returned] {
        let outcome = transition(
            &mut inventory.assignments,
            &admin(),
            &id("ASG003"),
            target,
            &march_first(),
        );
        assert!(matches!(
            outcome.refusal(),
            Some(Refusal::IllegalTransition { .. })
        ));
    }
}

#[test]
fn test_logistics_officers_cannot_cancel_purchases() {
    let mut inventory: Inventory = seeded();

    let officer = transition(
        &mut inventory.purchases,
        &sign_in("Lieutenant Brown"),
        &id("P004"),
        PurchaseStatus::Cancelled,
        &march_first(),
    );
    assert!(matches!(
        officer.refusal(),
        Some(Refusal::NotPermitted { .. })
    ));

    let shipped = transition(
        &mut inventory.purchases,
        &sign_in("Lieutenant Brown"),
        &id("P004"),
        PurchaseStatus::InTransit,
        &march_first(),
    );
    assert!(shipped.is_applied());

    let admin_cancel = transition(
        &mut inventory.purchases,
        &admin(),
        &id("P004"),
        PurchaseStatus::Cancelled,
        &march_first(),
    );
    assert!(admin_cancel.is_applied());
}

#[test]
fn test_delivered_purchase_cannot_be_cancelled() {
    let mut inventory: Inventory = seeded();

    let outcome = transition(
        &mut inventory.purchases,
        &admin(),
        &id("P001"),
        PurchaseStatus::Cancelled,
        &march_first(),
    );

    assert_eq!(
        outcome.refusal(),
        Some(Refusal::IllegalTransition {
            from: "Delivered",
            to: "Cancelled",
        })
    );
}

#[test]
fn test_check_transition_does_not_mutate() {
    let inventory: Inventory = seeded();
    let transfer: &Transfer = inventory.transfers.get(&id("T003")).unwrap();

    assert_eq!(
        check_transition(transfer, &admin(), TransferStatus::InTransit),
        Ok(())
    );
    assert_eq!(transfer.status, TransferStatus::Pending);
    assert_eq!(transfer.approved_by, None);
}
