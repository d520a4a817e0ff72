// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actor::Actor;
use crate::apply::RecordKind;
use crate::error::CoreError;
use armory_domain::{
    Base, DomainError, Money, NewPurchase, Purchase, PurchaseStatus, Record, RecordId, Role,
    ValidationErrors, validate_new_purchase,
};

impl RecordKind for Purchase {
    type Draft = NewPurchase;

    fn validate(draft: &NewPurchase) -> Result<(), ValidationErrors> {
        validate_new_purchase(draft)
    }

    fn scoped_bases(draft: &NewPurchase) -> Vec<(&'static str, Base)> {
        vec![("base", draft.base)]
    }

    fn build(draft: NewPurchase, sequence: u32, actor: &Actor) -> Result<Self, CoreError> {
        let total_cost: Money = draft.unit_cost.checked_mul(draft.quantity).ok_or_else(|| {
            DomainError::InvalidAmount {
                amount: draft.unit_cost.to_string(),
                reason: "total cost overflows",
            }
        })?;
        let notes: Option<String> = draft
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id: RecordId::sequential(Self::ID_PREFIX, sequence),
            asset_name: draft.asset_name.trim().to_string(),
            asset_type: draft.asset_type,
            quantity: draft.quantity,
            unit_cost: draft.unit_cost,
            total_cost,
            vendor: draft.vendor.trim().to_string(),
            base: draft.base,
            purchase_date: draft.purchase_date,
            delivery_date: draft.delivery_date,
            status: PurchaseStatus::Ordered,
            purchased_by: actor.name().to_string(),
            approved_by: draft.approved_by.trim().to_string(),
            notes,
        })
    }

    fn permits_transition(&self, actor: &Actor, target: PurchaseStatus) -> Result<(), &'static str> {
        if target == PurchaseStatus::Cancelled && actor.user().role == Role::LogisticsOfficer {
            return Err("only admins and base commanders may cancel a purchase");
        }
        Ok(())
    }
}
