// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod draft;
mod error;
mod filter;
mod record;
mod scope;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use draft::{NewAssignment, NewPurchase, NewTransfer};
pub use error::DomainError;
pub use filter::{ALL, DateBound, DateRange, FilterCriteria, QueryFilter, Selection};
pub use record::{Assignment, Footprint, Purchase, Record, Transfer};
pub use scope::{AccessScope, UnassignedPolicy, is_visible, resolve_scope};
pub use status::{AssignmentStatus, Lifecycle, PurchaseStatus, TransferStatus};

// Re-export public types
pub use types::{
    AssetType, Base, DATE_FORMAT, Money, RecordId, Role, User, format_date, iso_date, parse_date,
};
pub use validation::{
    FieldError, ValidationErrors, validate_new_assignment, validate_new_purchase,
    validate_new_transfer,
};
