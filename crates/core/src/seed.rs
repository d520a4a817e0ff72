// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sample records and the sign-in roster.

use armory_domain::{
    AssetType, Assignment, AssignmentStatus, Base, Money, Purchase, PurchaseStatus, RecordId,
    Role, Transfer, TransferStatus, User,
};
use time::Date;
use time::macros::date;

/// The users offered at sign-in.
#[must_use]
pub fn roster() -> Vec<User> {
    vec![
        User::new("1", "General Smith", Role::Admin, None),
        User::new(
            "2",
            "Colonel Johnson",
            Role::BaseCommander,
            Some(Base::Alpha),
        ),
        User::new("3", "Major Williams", Role::BaseCommander, Some(Base::Bravo)),
        User::new(
            "4",
            "Captain Davis",
            Role::LogisticsOfficer,
            Some(Base::Charlie),
        ),
        User::new(
            "5",
            "Lieutenant Brown",
            Role::LogisticsOfficer,
            Some(Base::Delta),
        ),
    ]
}

struct PurchaseRow {
    name: &'static str,
    asset_type: AssetType,
    quantity: u32,
    unit_cost: Money,
    vendor: &'static str,
    base: Base,
    ordered: Date,
    delivery: Date,
    status: PurchaseStatus,
    purchased_by: &'static str,
    approved_by: &'static str,
    notes: &'static str,
}

impl PurchaseRow {
    fn into_purchase(self, sequence: u32) -> Purchase {
        Purchase {
            id: RecordId::sequential("P", sequence),
            asset_name: self.name.to_string(),
            asset_type: self.asset_type,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            total_cost: self
                .unit_cost
                .checked_mul(self.quantity)
                .unwrap_or(Money::ZERO),
            vendor: self.vendor.to_string(),
            base: self.base,
            purchase_date: self.ordered,
            delivery_date: Some(self.delivery),
            status: self.status,
            purchased_by: self.purchased_by.to_string(),
            approved_by: self.approved_by.to_string(),
            notes: Some(self.notes.to_string()),
        }
    }
}

/// Four purchase orders, one per base.
#[must_use]
pub fn purchases() -> Vec<Purchase> {
    let rows: [PurchaseRow; 4] = [
        PurchaseRow {
            name: "M4A1 Carbine",
            asset_type: AssetType::Weapon,
            quantity: 50,
            unit_cost: Money::from_dollars(1200),
            vendor: "Colt Defense LLC",
            base: Base::Alpha,
            ordered: date!(2024 - 01 - 15),
            delivery: date!(2024 - 02 - 01),
            status: PurchaseStatus::Delivered,
            purchased_by: "Captain Smith",
            approved_by: "Colonel Johnson",
            notes: "Standard issue rifles for infantry unit",
        },
        PurchaseRow {
            name: "Humvee M1151",
            asset_type: AssetType::Vehicle,
            quantity: 3,
            unit_cost: Money::from_dollars(85_000),
            vendor: "AM General",
            base: Base::Bravo,
            ordered: date!(2024 - 01 - 20),
            delivery: date!(2024 - 03 - 15),
            status: PurchaseStatus::InTransit,
            purchased_by: "Major Wilson",
            approved_by: "Colonel Thompson",
            notes: "Armored personnel carriers for patrol operations",
        },
        PurchaseRow {
            name: "5.56mm NATO Ammunition",
            asset_type: AssetType::Ammunition,
            quantity: 50_000,
            unit_cost: Money::from_cents(85),
            vendor: "Federal Premium",
            base: Base::Charlie,
            ordered: date!(2024 - 02 - 01),
            delivery: date!(2024 - 02 - 15),
            status: PurchaseStatus::Delivered,
            purchased_by: "Lieutenant Davis",
            approved_by: "Major Brown",
            notes: "Training and operational ammunition",
        },
        PurchaseRow {
            name: "Night Vision Goggles",
            asset_type: AssetType::Equipment,
            quantity: 25,
            unit_cost: Money::from_dollars(3200),
            vendor: "L3Harris Technologies",
            base: Base::Delta,
            ordered: date!(2024 - 02 - 10),
            delivery: date!(2024 - 03 - 01),
            status: PurchaseStatus::Ordered,
            purchased_by: "Captain Lee",
            approved_by: "Lieutenant Colonel Garcia",
            notes: "PVS-14 monocular night vision devices",
        },
    ];
    (1..).zip(rows).map(|(seq, row)| row.into_purchase(seq)).collect()
}

#[allow(clippy::too_many_arguments)]
fn transfer(
    sequence: u32,
    name: &str,
    asset_type: AssetType,
    route: (Base, Base),
    quantity: u32,
    on: Date,
    status: TransferStatus,
    requested_by: &str,
    approved_by: Option<&str>,
) -> Transfer {
    Transfer {
        id: RecordId::sequential("T", sequence),
        asset_id: RecordId::sequential("A", sequence),
        asset_name: name.to_string(),
        asset_type,
        from_base: route.0,
        to_base: route.1,
        quantity,
        date: on,
        status,
        requested_by: requested_by.to_string(),
        approved_by: approved_by.map(str::to_string),
    }
}

/// Four transfers; only T003 is still awaiting approval.
#[must_use]
pub fn transfers() -> Vec<Transfer> {
    vec![
        transfer(
            1,
            "Bradley IFV M2A3",
            AssetType::Vehicle,
            (Base::Alpha, Base::Charlie),
            2,
            date!(2024 - 02 - 10),
            TransferStatus::InTransit,
            "Colonel Johnson",
            Some("General Smith"),
        ),
        transfer(
            2,
            "Night Vision Goggles PVS-14",
            AssetType::Equipment,
            (Base::Bravo, Base::Delta),
            75,
            date!(2024 - 02 - 15),
            TransferStatus::Completed,
            "Major Williams",
            Some("Colonel Thompson"),
        ),
        transfer(
            3,
            "M249 SAW",
            AssetType::Weapon,
            (Base::Delta, Base::Alpha),
            10,
            date!(2024 - 02 - 20),
            TransferStatus::Pending,
            "Captain Davis",
            None,
        ),
        transfer(
            4,
            "7.62mm NATO Ammunition",
            AssetType::Ammunition,
            (Base::Charlie, Base::Bravo),
            5000,
            date!(2024 - 02 - 25),
            TransferStatus::Completed,
            "Lieutenant Brown",
            Some("Major Garcia"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn assignment(
    sequence: u32,
    name: &str,
    asset_type: AssetType,
    personnel: &str,
    base: Base,
    quantity: u32,
    on: Date,
    returned: Option<Date>,
    status: AssignmentStatus,
) -> Assignment {
    Assignment {
        id: RecordId::sequential("ASG", sequence),
        asset_id: RecordId::sequential("A", sequence),
        asset_name: name.to_string(),
        asset_type,
        personnel_name: personnel.to_string(),
        personnel_id: RecordId::sequential("P", sequence).to_string(),
        base,
        quantity,
        assigned_date: on,
        return_date: returned,
        status,
    }
}

/// Six assignments across all four bases.
#[must_use]
pub fn assignments() -> Vec<Assignment> {
    vec![
        assignment(
            1,
            "M4A1 Carbine",
            AssetType::Weapon,
            "Sergeant Johnson",
            Base::Alpha,
            1,
            date!(2024 - 01 - 15),
            None,
            AssignmentStatus::Active,
        ),
        assignment(
            2,
            "Night Vision Goggles",
            AssetType::Equipment,
            "Corporal Smith",
            Base::Bravo,
            2,
            date!(2024 - 01 - 20),
            Some(date!(2024 - 02 - 10)),
            AssignmentStatus::Returned,
        ),
        assignment(
            3,
            "5.56mm NATO Ammunition",
            AssetType::Ammunition,
            "Private Williams",
            Base::Charlie,
            210,
            date!(2024 - 02 - 01),
            None,
            AssignmentStatus::Expended,
        ),
        assignment(
            4,
            "Humvee M1151",
            AssetType::Vehicle,
            "Lieutenant Davis",
            Base::Delta,
            1,
            date!(2024 - 02 - 05),
            None,
            AssignmentStatus::Active,
        ),
        assignment(
            5,
            "Body Armor Vest",
            AssetType::Equipment,
            "Sergeant Brown",
            Base::Alpha,
            1,
            date!(2024 - 02 - 08),
            None,
            AssignmentStatus::Active,
        ),
        assignment(
            6,
            "7.62mm NATO Ammunition",
            AssetType::Ammunition,
            "Specialist Garcia",
            Base::Bravo,
            150,
            date!(2024 - 02 - 12),
            None,
            AssignmentStatus::Expended,
        ),
    ]
}
