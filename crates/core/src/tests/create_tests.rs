// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    admin, assignment_draft, march_first, purchase_draft, seeded, sign_in, transfer_draft,
    unassigned,
};
use crate::{CoreError, Inventory, create};
use armory_domain::{
    AssignmentStatus, Base, Money, NewPurchase, Purchase, PurchaseStatus, Transfer,
    TransferStatus, UnassignedPolicy,
};

#[test]
fn test_purchase_total_is_quantity_times_unit_cost() {
    let mut inventory: Inventory = seeded();

    let purchase: Purchase =
        create(&mut inventory.purchases, &admin(), purchase_draft(Base::Alpha)).unwrap();

    assert_eq!(purchase.quantity, 50);
    assert_eq!(purchase.unit_cost, Money::from_dollars(1200));
    assert_eq!(purchase.total_cost, Money::from_dollars(60_000));
    assert_eq!(purchase.total_cost.to_string(), "60000.00");
}

#[test]
fn test_created_purchase_gets_defaults_and_is_prepended() {
    let mut inventory: Inventory = seeded();

    let purchase: Purchase = create(
        &mut inventory.purchases,
        &sign_in("Colonel Johnson"),
        purchase_draft(Base::Alpha),
    )
    .unwrap();

    assert_eq!(purchase.id.as_str(), "P005");
    assert_eq!(purchase.status, PurchaseStatus::Ordered);
    assert_eq!(purchase.purchased_by, "Colonel Johnson");
    assert_eq!(purchase.notes, None);
    assert_eq!(inventory.purchases.len(), 5);
    assert_eq!(inventory.purchases.records()[0], purchase);
}

#[test]
fn test_identifiers_keep_counting() {
    let mut inventory: Inventory = seeded();
    let actor = admin();

    let first = create(&mut inventory.purchases, &actor, purchase_draft(Base::Bravo)).unwrap();
    let second = create(&mut inventory.purchases, &actor, purchase_draft(Base::Delta)).unwrap();

    assert_eq!(first.id.as_str(), "P005");
    assert_eq!(second.id.as_str(), "P006");
    let ids: Vec<&str> = inventory
        .purchases
        .records()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["P006", "P005", "P001", "P002", "P003", "P004"]);
}

#[test]
fn test_rejected_form_saves_nothing() {
    let mut inventory: Inventory = seeded();
    let before: Inventory = inventory.clone();
    let draft = NewPurchase {
        asset_name: String::new(),
        quantity: 0,
        ..purchase_draft(Base::Alpha)
    };

    let result = create(&mut inventory.purchases, &admin(), draft);

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.has_field("asset_name"));
    assert!(errors.has_field("quantity"));
    assert_eq!(inventory, before);
}

#[test]
fn test_rejection_does_not_consume_an_identifier() {
    let mut inventory: Inventory = seeded();
    let actor = admin();
    let bad = NewPurchase {
        vendor: String::new(),
        ..purchase_draft(Base::Alpha)
    };

    assert!(create(&mut inventory.purchases, &actor, bad).is_err());
    let created = create(&mut inventory.purchases, &actor, purchase_draft(Base::Alpha)).unwrap();

    assert_eq!(created.id.as_str(), "P005");
}

#[test]
fn test_base_outside_scope_is_a_field_error() {
    let mut inventory: Inventory = seeded();

    let result = create(
        &mut inventory.purchases,
        &sign_in("Major Williams"),
        purchase_draft(Base::Alpha),
    );

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.has_field("base"));
    assert_eq!(inventory.purchases.len(), 4);
}

#[test]
fn test_denied_unassigned_user_cannot_create() {
    let mut inventory: Inventory = seeded();

    let result = create(
        &mut inventory.assignments,
        &unassigned(UnassignedPolicy::Deny),
        assignment_draft(Base::Charlie),
    );

    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_transfer_may_ship_to_any_base_from_own_base() {
    let mut inventory: Inventory = seeded();

    let transfer: Transfer = create(
        &mut inventory.transfers,
        &sign_in("Colonel Johnson"),
        transfer_draft(Base::Alpha, Base::Delta),
    )
    .unwrap();

    assert_eq!(transfer.id.as_str(), "T005");
    assert_eq!(transfer.asset_id.as_str(), "A005");
    assert_eq!(transfer.status, TransferStatus::Pending);
    assert_eq!(transfer.requested_by, "Colonel Johnson");
    assert_eq!(transfer.approved_by, None);
}

#[test]
fn test_transfer_must_ship_from_a_base_in_scope() {
    let mut inventory: Inventory = seeded();

    let result = create(
        &mut inventory.transfers,
        &sign_in("Colonel Johnson"),
        transfer_draft(Base::Delta, Base::Alpha),
    );

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.has_field("from_base"));
}

#[test]
fn test_transfer_legs_must_differ() {
    let mut inventory: Inventory = seeded();

    let result = create(
        &mut inventory.transfers,
        &admin(),
        transfer_draft(Base::Bravo, Base::Bravo),
    );

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.has_field("to_base"));
}

#[test]
fn test_created_assignment_starts_active() {
    let mut inventory: Inventory = seeded();

    let assignment = create(
        &mut inventory.assignments,
        &sign_in("Captain Davis"),
        assignment_draft(Base::Charlie),
    )
    .unwrap();

    assert_eq!(assignment.id.as_str(), "ASG007");
    assert_eq!(assignment.asset_id.as_str(), "A007");
    assert_eq!(assignment.status, AssignmentStatus::Active);
    assert_eq!(assignment.return_date, None);
}
