// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, FixedClock, Inventory, seed};
use armory_domain::{
    AssetType, Base, Money, NewAssignment, NewPurchase, NewTransfer, Role, UnassignedPolicy, User,
};
use time::macros::date;

/// Signs in the roster user with the given name.
pub fn sign_in(name: &str) -> Actor {
    let user: User = seed::roster()
        .into_iter()
        .find(|u| u.name == name)
        .unwrap();
    Actor::new(user, UnassignedPolicy::AllBases)
}

pub fn admin() -> Actor {
    sign_in("General Smith")
}

pub fn unassigned(policy: UnassignedPolicy) -> Actor {
    Actor::new(
        User::new("9", "Sergeant Nobody", Role::LogisticsOfficer, None),
        policy,
    )
}

pub fn march_first() -> FixedClock {
    FixedClock(date!(2024 - 03 - 01))
}

pub fn seeded() -> Inventory {
    Inventory::seeded()
}

pub fn purchase_draft(base: Base) -> NewPurchase {
    NewPurchase {
        asset_name: String::from("M4A1 Carbine"),
        asset_type: AssetType::Weapon,
        quantity: 50,
        unit_cost: Money::from_dollars(1200),
        vendor: String::from("Colt Defense LLC"),
        base,
        purchase_date: date!(2024 - 03 - 01),
        delivery_date: None,
        approved_by: String::from("Colonel Johnson"),
        notes: Some(String::from("  ")),
    }
}

pub fn transfer_draft(from_base: Base, to_base: Base) -> NewTransfer {
    NewTransfer {
        asset_name: String::from("M240B Machine Gun"),
        asset_type: AssetType::Weapon,
        from_base,
        to_base,
        quantity: 4,
        date: date!(2024 - 03 - 01),
    }
}

pub fn assignment_draft(base: Base) -> NewAssignment {
    NewAssignment {
        asset_name: String::from("Body Armor Vest"),
        asset_type: AssetType::Equipment,
        personnel_name: String::from("Corporal Reyes"),
        personnel_id: String::from("P010"),
        base,
        quantity: 1,
        assigned_date: date!(2024 - 03 - 01),
    }
}
