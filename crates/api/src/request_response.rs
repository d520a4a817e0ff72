// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw strings exactly as entered. Converting them into
//! domain forms reports every unparsable field at once, in the same
//! `{field, reason}` shape the core uses for validation failures.

use std::str::FromStr;

use armory::{DashboardSummary, TransitionOutcome};
use armory_domain::{
    AssetType, Base, DomainError, FieldError, Money, NewAssignment, NewPurchase, NewTransfer,
    RecordId, User, ValidationErrors, parse_date,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::auth::View;
use crate::capabilities::Capability;

/// Collects parse failures while reading a form.
struct FormReader {
    errors: ValidationErrors,
}

impl FormReader {
    const fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    fn reject(&mut self, field: &'static str, reason: impl Into<String>) {
        self.errors.push(FieldError::new(field, reason));
    }

    /// Parses a closed-set value, substituting `default` when blank.
    fn choice<T>(&mut self, field: &'static str, raw: &str, default: T) -> Option<T>
    where
        T: FromStr<Err = DomainError>,
    {
        if raw.trim().is_empty() {
            return Some(default);
        }
        match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                self.reject(field, err.to_string());
                None
            }
        }
    }

    fn quantity(&mut self, field: &'static str, raw: &str) -> Option<u32> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            self.reject(field, "Quantity is required");
            return None;
        }
        if let Ok(value) = trimmed.parse() {
            Some(value)
        } else {
            self.reject(field, "Quantity must be a whole number");
            None
        }
    }

    fn money(&mut self, field: &'static str, raw: &str) -> Option<Money> {
        if raw.trim().is_empty() {
            self.reject(field, "Amount is required");
            return None;
        }
        match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                self.reject(field, err.to_string());
                None
            }
        }
    }

    /// Parses a date, substituting `default` when blank.
    fn date(&mut self, field: &'static str, raw: &str, default: Date) -> Option<Date> {
        if raw.trim().is_empty() {
            return Some(default);
        }
        self.optional_date(field, raw).map(|d| d.unwrap_or(default))
    }

    /// Parses a date that may be left blank.
    fn optional_date(&mut self, field: &'static str, raw: &str) -> Option<Option<Date>> {
        if raw.trim().is_empty() {
            return Some(None);
        }
        match parse_date(raw) {
            Ok(date) => Some(Some(date)),
            Err(err) => {
                self.reject(field, err.to_string());
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}

/// Defaults applied to blank form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    /// The base preselected in the form.
    pub base: Base,
    /// The date preselected in the form.
    pub today: Date,
}

impl FormDefaults {
    /// The signed-in user's own base, or the first base for users without
    /// one.
    #[must_use]
    pub fn for_user(user: &User, today: Date) -> Self {
        Self {
            base: user.assigned_base.unwrap_or(Base::Alpha),
            today,
        }
    }
}

/// API request to record a purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreatePurchaseRequest {
    pub asset_name: String,
    /// Defaults to `Equipment`.
    pub asset_type: String,
    pub quantity: String,
    /// Decimal amount, e.g. `1200` or `0.85`.
    pub unit_cost: String,
    pub vendor: String,
    /// Defaults to the user's base.
    pub base: String,
    /// Defaults to today.
    pub purchase_date: String,
    pub delivery_date: String,
    pub approved_by: String,
    pub notes: String,
}

impl CreatePurchaseRequest {
    /// Reads the request into a purchase form.
    ///
    /// # Errors
    ///
    /// Returns every field that could not be parsed.
    pub fn into_draft(self, defaults: FormDefaults) -> Result<NewPurchase, ValidationErrors> {
        let mut form: FormReader = FormReader::new();
        let asset_type = form.choice("asset_type", &self.asset_type, AssetType::Equipment);
        let quantity = form.quantity("quantity", &self.quantity);
        let unit_cost = form.money("unit_cost", &self.unit_cost);
        let base = form.choice("base", &self.base, defaults.base);
        let purchase_date = form.date("purchase_date", &self.purchase_date, defaults.today);
        let delivery_date = form.optional_date("delivery_date", &self.delivery_date);

        let draft: Option<NewPurchase> = match (
            asset_type,
            quantity,
            unit_cost,
            base,
            purchase_date,
            delivery_date,
        ) {
            (
                Some(asset_type),
                Some(quantity),
                Some(unit_cost),
                Some(base),
                Some(purchase_date),
                Some(delivery_date),
            ) => Some(NewPurchase {
                asset_name: self.asset_name,
                asset_type,
                quantity,
                unit_cost,
                vendor: self.vendor,
                base,
                purchase_date,
                delivery_date,
                approved_by: self.approved_by,
                notes: Some(self.notes).filter(|n| !n.trim().is_empty()),
            }),
            _ => None,
        };
        form.finish(draft)
    }
}

/// API request to move assets between bases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTransferRequest {
    pub asset_name: String,
    /// Defaults to `Equipment`.
    pub asset_type: String,
    /// Defaults to the user's base.
    pub from_base: String,
    /// Defaults to Alpha Base.
    pub to_base: String,
    pub quantity: String,
    /// Defaults to today.
    pub date: String,
}

impl CreateTransferRequest {
    /// Reads the request into a transfer form.
    ///
    /// # Errors
    ///
    /// Returns every field that could not be parsed.
    pub fn into_draft(self, defaults: FormDefaults) -> Result<NewTransfer, ValidationErrors> {
        let mut form: FormReader = FormReader::new();
        let asset_type = form.choice("asset_type", &self.asset_type, AssetType::Equipment);
        let from_base = form.choice("from_base", &self.from_base, defaults.base);
        let to_base = form.choice("to_base", &self.to_base, Base::Alpha);
        let quantity = form.quantity("quantity", &self.quantity);
        let date = form.date("date", &self.date, defaults.today);

        let draft: Option<NewTransfer> = match (asset_type, from_base, to_base, quantity, date) {
            (Some(asset_type), Some(from_base), Some(to_base), Some(quantity), Some(date)) => {
                Some(NewTransfer {
                    asset_name: self.asset_name,
                    asset_type,
                    from_base,
                    to_base,
                    quantity,
                    date,
                })
            }
            _ => None,
        };
        form.finish(draft)
    }
}

/// API request to issue assets to a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateAssignmentRequest {
    pub asset_name: String,
    /// Defaults to `Equipment`.
    pub asset_type: String,
    pub personnel_name: String,
    pub personnel_id: String,
    /// Defaults to the user's base.
    pub base: String,
    pub quantity: String,
    /// Defaults to today.
    pub assigned_date: String,
}

impl CreateAssignmentRequest {
    /// Reads the request into an assignment form.
    ///
    /// # Errors
    ///
    /// Returns every field that could not be parsed.
    pub fn into_draft(self, defaults: FormDefaults) -> Result<NewAssignment, ValidationErrors> {
        let mut form: FormReader = FormReader::new();
        let asset_type = form.choice("asset_type", &self.asset_type, AssetType::Equipment);
        let base = form.choice("base", &self.base, defaults.base);
        let quantity = form.quantity("quantity", &self.quantity);
        let assigned_date = form.date("assigned_date", &self.assigned_date, defaults.today);

        let draft: Option<NewAssignment> = match (asset_type, base, quantity, assigned_date) {
            (Some(asset_type), Some(base), Some(quantity), Some(assigned_date)) => {
                Some(NewAssignment {
                    asset_name: self.asset_name,
                    asset_type,
                    personnel_name: self.personnel_name,
                    personnel_id: self.personnel_id,
                    base,
                    quantity,
                    assigned_date,
                })
            }
            _ => None,
        };
        form.finish(draft)
    }
}

/// API request to change a record's status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusChangeRequest {
    pub id: String,
    /// The display or kebab form of the target status, e.g. `In Transit`.
    pub status: String,
}

impl StatusChangeRequest {
    #[must_use]
    pub fn record_id(&self) -> RecordId {
        RecordId::from(self.id.as_str())
    }
}

/// API request for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    pub base: String,
    pub asset_type: String,
    pub date_from: String,
    pub date_to: String,
}

/// A record together with what the user may do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEntry<R, C> {
    #[serde(flatten)]
    pub record: R,
    pub capabilities: C,
}

/// The number of listed records in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: &'static str,
    pub count: usize,
}

/// API response for a filtered record listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResponse<R, C> {
    /// Matching records, newest first.
    pub records: Vec<RecordEntry<R, C>>,
    /// Counts per status over `records`, in lifecycle order.
    pub counts: Vec<StatusCount>,
    pub can_create: Capability,
}

/// API response for a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResponse<R> {
    pub record: R,
    pub message: String,
}

/// API response for a status change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChangeResponse<R> {
    pub id: RecordId,
    pub outcome: TransitionOutcome<R>,
    pub message: String,
}

/// API response describing the open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    pub user: User,
    /// Bases the user may see, in enumeration order.
    pub scope: Vec<Base>,
    /// True when the scope came from the unassigned-user fallback.
    pub scope_fallback: bool,
    pub views: Vec<View>,
}

/// API response for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
}
