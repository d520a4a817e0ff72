// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form data for records that have not been created yet.
//!
//! Drafts carry only what the submitting user enters. Identifiers, initial
//! status and actor-derived fields are filled in at creation time.

use crate::types::{AssetType, Base, Money};
use time::Date;

/// A purchase order as entered on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchase {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub quantity: u32,
    pub unit_cost: Money,
    pub vendor: String,
    pub base: Base,
    pub purchase_date: Date,
    pub delivery_date: Option<Date>,
    pub approved_by: String,
    pub notes: Option<String>,
}

/// A transfer request as entered on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransfer {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub from_base: Base,
    pub to_base: Base,
    pub quantity: u32,
    pub date: Date,
}

/// An equipment assignment as entered on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub personnel_name: String,
    pub personnel_id: String,
    pub base: Base,
    pub quantity: u32,
    pub assigned_date: Date,
}
