// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Purchase, transfer and assignment records.

use crate::status::{AssignmentStatus, Lifecycle, PurchaseStatus, TransferStatus};
use crate::types::{AssetType, Base, Money, RecordId, iso_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// The bases a record is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footprint {
    /// Purchases and assignments live at one base.
    Single(Base),
    /// Transfers touch both their origin and destination.
    Route {
        /// The sending base.
        from: Base,
        /// The receiving base.
        to: Base,
    },
}

impl Footprint {
    /// Returns true if the record is attached to `base` in any way.
    #[must_use]
    pub fn touches(&self, base: Base) -> bool {
        match self {
            Self::Single(own) => *own == base,
            Self::Route { from, to } => *from == base || *to == base,
        }
    }
}

/// Common read access over every record kind.
///
/// Scope checks and query filtering are written once against this trait.
pub trait Record: Clone {
    /// The status lifecycle of this record kind.
    type Status: Lifecycle;

    /// Prefix of generated identifiers.
    const ID_PREFIX: &'static str;

    /// Human-readable record kind, used in logs and messages.
    const KIND: &'static str;

    fn id(&self) -> &RecordId;
    fn asset_name(&self) -> &str;
    fn asset_type(&self) -> AssetType;
    fn quantity(&self) -> u32;
    fn status(&self) -> Self::Status;

    /// The date that date-range filters compare against.
    fn primary_date(&self) -> Date;

    fn footprint(&self) -> Footprint;

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Replaces the status without any lifecycle check.
    ///
    /// Callers are expected to have validated the transition.
    fn set_status(&mut self, status: Self::Status);
}

/// A procurement order for a single base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub quantity: u32,
    pub unit_cost: Money,
    /// Always `quantity * unit_cost`.
    pub total_cost: Money,
    pub vendor: String,
    pub base: Base,
    #[serde(with = "iso_date")]
    pub purchase_date: Date,
    /// Expected delivery date.
    #[serde(with = "iso_date::option", default)]
    pub delivery_date: Option<Date>,
    pub status: PurchaseStatus,
    pub purchased_by: String,
    pub approved_by: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for Purchase {
    type Status = PurchaseStatus;

    const ID_PREFIX: &'static str = "P";
    const KIND: &'static str = "purchase";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn asset_name(&self) -> &str {
        &self.asset_name
    }

    fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn status(&self) -> PurchaseStatus {
        self.status
    }

    fn primary_date(&self) -> Date {
        self.purchase_date
    }

    fn footprint(&self) -> Footprint {
        Footprint::Single(self.base)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.asset_name.as_str(), self.vendor.as_str()]
    }

    fn set_status(&mut self, status: PurchaseStatus) {
        self.status = status;
    }
}

/// Movement of an asset between two bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: RecordId,
    pub asset_id: RecordId,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub from_base: Base,
    pub to_base: Base,
    pub quantity: u32,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub status: TransferStatus,
    pub requested_by: String,
    /// Set when an admin approves the transfer.
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl Record for Transfer {
    type Status = TransferStatus;

    const ID_PREFIX: &'static str = "T";
    const KIND: &'static str = "transfer";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn asset_name(&self) -> &str {
        &self.asset_name
    }

    fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn status(&self) -> TransferStatus {
        self.status
    }

    fn primary_date(&self) -> Date {
        self.date
    }

    fn footprint(&self) -> Footprint {
        Footprint::Route {
            from: self.from_base,
            to: self.to_base,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.asset_name.as_str(), self.id.as_str()]
    }

    fn set_status(&mut self, status: TransferStatus) {
        self.status = status;
    }
}

/// Equipment issued to a member of personnel at a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: RecordId,
    pub asset_id: RecordId,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub personnel_name: String,
    pub personnel_id: String,
    pub base: Base,
    pub quantity: u32,
    #[serde(with = "iso_date")]
    pub assigned_date: Date,
    /// Stamped when the assignment is returned.
    #[serde(with = "iso_date::option", default)]
    pub return_date: Option<Date>,
    pub status: AssignmentStatus,
}

impl Record for Assignment {
    type Status = AssignmentStatus;

    const ID_PREFIX: &'static str = "ASG";
    const KIND: &'static str = "assignment";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn asset_name(&self) -> &str {
        &self.asset_name
    }

    fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn status(&self) -> AssignmentStatus {
        self.status
    }

    fn primary_date(&self) -> Date {
        self.assigned_date
    }

    fn footprint(&self) -> Footprint {
        Footprint::Single(self.base)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.asset_name.as_str(),
            self.personnel_name.as_str(),
            self.id.as_str(),
        ]
    }

    fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }
}
