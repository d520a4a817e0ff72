// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Repository, seed};
use armory_domain::{Money, Purchase, RecordId, Role, Transfer};

#[test]
fn test_sequence_continues_after_seeded_records() {
    let repository: Repository<Purchase> = Repository::new(seed::purchases());
    assert_eq!(repository.peek_sequence(), 5);

    let empty: Repository<Transfer> = Repository::empty();
    assert_eq!(empty.peek_sequence(), 1);
    assert!(empty.is_empty());
}

#[test]
fn test_get_finds_by_identifier() {
    let repository: Repository<Transfer> = Repository::new(seed::transfers());

    let found = repository.get(&RecordId::from("T002")).unwrap();
    assert_eq!(found.asset_name, "Night Vision Goggles PVS-14");
    assert!(repository.get(&RecordId::from("T042")).is_none());
}

#[test]
fn test_seeded_purchases_carry_computed_totals() {
    let totals: Vec<String> = seed::purchases()
        .iter()
        .map(|p| p.total_cost.to_string())
        .collect();

    assert_eq!(
        totals,
        vec!["60000.00", "255000.00", "42500.00", "80000.00"]
    );
    assert_eq!(seed::purchases()[2].unit_cost, Money::from_cents(85));
}

#[test]
fn test_seeded_identifiers_are_sequential() {
    let ids: Vec<String> = seed::assignments()
        .iter()
        .map(|a| a.id.to_string())
        .collect();
    assert_eq!(
        ids,
        vec!["ASG001", "ASG002", "ASG003", "ASG004", "ASG005", "ASG006"]
    );
}

#[test]
fn test_roster_has_one_admin() {
    let roster = seed::roster();

    assert_eq!(roster.len(), 5);
    assert_eq!(roster.iter().filter(|u| u.role == Role::Admin).count(), 1);
    assert!(
        roster
            .iter()
            .filter(|u| u.role != Role::Admin)
            .all(|u| u.assigned_base.is_some())
    );
}
