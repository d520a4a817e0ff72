// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::{NewAssignment, NewPurchase, NewTransfer};
use serde::Serialize;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The form field name.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every field error found in one submission.
///
/// A submission with any field error is rejected as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Records an error for `field` when `failed` holds.
    pub fn check(&mut self, failed: bool, field: &'static str, reason: &str) {
        if failed {
            self.push(FieldError::new(field, reason));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if `field` was rejected.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the fields of a purchase form.
///
/// # Errors
///
/// Returns every rejected field if:
/// - The asset name, vendor or approver is blank
/// - The quantity is zero
/// - The total cost overflows
/// - The expected delivery date precedes the purchase date
pub fn validate_new_purchase(draft: &NewPurchase) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    errors.check(
        is_blank(&draft.asset_name),
        "asset_name",
        "Asset name is required",
    );
    errors.check(
        draft.quantity == 0,
        "quantity",
        "Quantity must be at least 1",
    );
    errors.check(
        draft.unit_cost.checked_mul(draft.quantity).is_none(),
        "unit_cost",
        "Total cost is too large",
    );
    errors.check(is_blank(&draft.vendor), "vendor", "Vendor is required");
    errors.check(
        is_blank(&draft.approved_by),
        "approved_by",
        "Approver is required",
    );
    errors.check(
        draft
            .delivery_date
            .is_some_and(|delivery| delivery < draft.purchase_date),
        "delivery_date",
        "Delivery date cannot precede the purchase date",
    );

    errors.into_result()
}

/// Validates the fields of a transfer form.
///
/// # Errors
///
/// Returns every rejected field if:
/// - The asset name is blank
/// - The quantity is zero
/// - Both legs name the same base
pub fn validate_new_transfer(draft: &NewTransfer) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    errors.check(
        is_blank(&draft.asset_name),
        "asset_name",
        "Asset name is required",
    );
    errors.check(
        draft.quantity == 0,
        "quantity",
        "Quantity must be at least 1",
    );
    errors.check(
        draft.from_base == draft.to_base,
        "to_base",
        "Destination must differ from the origin base",
    );

    errors.into_result()
}

/// Validates the fields of an assignment form.
///
/// # Errors
///
/// Returns every rejected field if:
/// - The asset name, personnel name or personnel id is blank
/// - The quantity is zero
pub fn validate_new_assignment(draft: &NewAssignment) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    errors.check(
        is_blank(&draft.asset_name),
        "asset_name",
        "Asset name is required",
    );
    errors.check(
        is_blank(&draft.personnel_name),
        "personnel_name",
        "Personnel name is required",
    );
    errors.check(
        is_blank(&draft.personnel_id),
        "personnel_id",
        "Personnel id is required",
    );
    errors.check(
        draft.quantity == 0,
        "quantity",
        "Quantity must be at least 1",
    );

    errors.into_result()
}
