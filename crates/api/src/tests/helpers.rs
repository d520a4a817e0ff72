// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use armory::FixedClock;
use armory_domain::{FilterCriteria, UnassignedPolicy};
use time::macros::date;

use crate::{
    CreateAssignmentRequest, CreatePurchaseRequest, CreateTransferRequest, InventoryService,
    Session,
};

/// A service over the sample data whose clock reads 2024-03-01.
pub fn create_test_service() -> InventoryService {
    InventoryService::seeded(
        Box::new(FixedClock(date!(2024 - 03 - 01))),
        UnassignedPolicy::AllBases,
    )
}

pub fn sign_in(service: &InventoryService, identity: &str) -> Session {
    service.sign_in(identity).expect("roster user should sign in")
}

pub fn no_filter() -> FilterCriteria {
    FilterCriteria::default()
}

pub fn create_purchase_request() -> CreatePurchaseRequest {
    CreatePurchaseRequest {
        asset_name: String::from("M4A1 Carbine"),
        asset_type: String::from("Weapon"),
        quantity: String::from("50"),
        unit_cost: String::from("1200"),
        vendor: String::from("Colt Defense LLC"),
        approved_by: String::from("Colonel Johnson"),
        ..CreatePurchaseRequest::default()
    }
}

pub fn create_transfer_request(to_base: &str) -> CreateTransferRequest {
    CreateTransferRequest {
        asset_name: String::from("M240B Machine Gun"),
        asset_type: String::from("Weapon"),
        to_base: to_base.to_string(),
        quantity: String::from("4"),
        ..CreateTransferRequest::default()
    }
}

pub fn create_assignment_request() -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        asset_name: String::from("Body Armor Vest"),
        personnel_name: String::from("Corporal Reyes"),
        personnel_id: String::from("P010"),
        quantity: String::from("1"),
        ..CreateAssignmentRequest::default()
    }
}
