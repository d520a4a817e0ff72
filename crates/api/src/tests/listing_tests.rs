// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use armory_domain::{FilterCriteria, RecordId};

use crate::{Capability, StatusCount};

use super::helpers::{create_test_service, no_filter, sign_in};

fn ids<R: armory_domain::Record, C>(records: &[crate::RecordEntry<R, C>]) -> Vec<RecordId> {
    let mut ids: Vec<RecordId> = records.iter().map(|e| e.record.id().clone()).collect();
    ids.sort();
    ids
}

#[test]
fn test_bravo_commander_sees_transfers_touching_bravo() {
    let service = create_test_service();
    let session = sign_in(&service, "Major Williams");

    let listing = service.list_transfers(&session, &no_filter()).unwrap();

    assert_eq!(
        ids(&listing.records),
        vec![RecordId::from("T002"), RecordId::from("T004")]
    );
}

#[test]
fn test_status_counts_follow_lifecycle_order() {
    let service = create_test_service();
    let session = sign_in(&service, "1");

    let listing = service.list_transfers(&session, &no_filter()).unwrap();

    assert_eq!(
        listing.counts,
        vec![
            StatusCount {
                status: "Pending",
                count: 1
            },
            StatusCount {
                status: "In Transit",
                count: 1
            },
            StatusCount {
                status: "Completed",
                count: 2
            },
        ]
    );
}

#[test]
fn test_counts_cover_only_matched_records() {
    let service = create_test_service();
    let session = sign_in(&service, "1");
    let criteria = FilterCriteria {
        asset_type: String::from("Ammunition"),
        ..FilterCriteria::default()
    };

    let listing = service.list_purchases(&session, &criteria).unwrap();

    assert_eq!(ids(&listing.records), vec![RecordId::from("P003")]);
    let total: usize = listing.counts.iter().map(|c| c.count).sum();
    assert_eq!(total, 1);
}

#[test]
fn test_search_matches_asset_name_case_insensitively() {
    let service = create_test_service();
    let session = sign_in(&service, "1");
    let criteria = FilterCriteria {
        search: String::from("humvee"),
        ..FilterCriteria::default()
    };

    let listing = service.list_assignments(&session, &criteria).unwrap();

    assert_eq!(ids(&listing.records), vec![RecordId::from("ASG004")]);
}

#[test]
fn test_unknown_status_filter_matches_nothing() {
    let service = create_test_service();
    let session = sign_in(&service, "1");
    let criteria = FilterCriteria {
        status: String::from("Lost"),
        ..FilterCriteria::default()
    };

    let listing = service.list_purchases(&session, &criteria).unwrap();

    assert!(listing.records.is_empty());
}

#[test]
fn test_date_range_filters_purchase_date() {
    let service = create_test_service();
    let session = sign_in(&service, "1");
    let criteria = FilterCriteria {
        date_from: String::from("2024-02-01"),
        date_to: String::from("2024-02-10"),
        ..FilterCriteria::default()
    };

    let listing = service.list_purchases(&session, &criteria).unwrap();

    assert_eq!(
        ids(&listing.records),
        vec![RecordId::from("P003"), RecordId::from("P004")]
    );
}

#[test]
fn test_transfer_capabilities_for_admin_and_receiver() {
    let service = create_test_service();

    let admin = service
        .list_transfers(&sign_in(&service, "1"), &no_filter())
        .unwrap();
    let pending = admin
        .records
        .iter()
        .find(|e| e.record.id == RecordId::from("T003"))
        .unwrap();
    assert_eq!(pending.capabilities.can_approve, Capability::Allowed);
    assert_eq!(pending.capabilities.can_complete, Capability::Denied);

    let receiver = service
        .list_transfers(&sign_in(&service, "Captain Davis"), &no_filter())
        .unwrap();
    let in_transit = receiver
        .records
        .iter()
        .find(|e| e.record.id == RecordId::from("T001"))
        .unwrap();
    assert_eq!(in_transit.capabilities.can_approve, Capability::Denied);
    assert_eq!(in_transit.capabilities.can_complete, Capability::Allowed);
}

#[test]
fn test_logistics_officer_cannot_cancel_purchase() {
    let service = create_test_service();
    let session = sign_in(&service, "Captain Davis");

    let listing = service.list_purchases(&session, &no_filter()).unwrap();

    assert_eq!(listing.records.len(), 1);
    let entry = &listing.records[0];
    assert_eq!(entry.capabilities.can_cancel, Capability::Denied);
    assert_eq!(entry.capabilities.can_mark_delivered, Capability::Denied);
}

#[test]
fn test_listing_serializes_flat_records_with_boolean_capabilities() {
    let service = create_test_service();
    let session = sign_in(&service, "Colonel Johnson");

    let listing = service.list_purchases(&session, &no_filter()).unwrap();
    let json = serde_json::to_value(&listing).unwrap();

    let record = &json["records"][0];
    assert_eq!(record["id"], "P001");
    assert_eq!(record["base"], "Alpha Base");
    assert_eq!(record["total_cost"], "60000.00");
    assert_eq!(record["purchase_date"], "2024-01-15");
    assert_eq!(record["capabilities"]["can_cancel"], false);
    assert_eq!(json["can_create"], true);
    assert_eq!(json["counts"][2]["status"], "Delivered");
    assert_eq!(json["counts"][2]["count"], 1);
}
