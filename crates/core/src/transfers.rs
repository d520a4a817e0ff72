// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actor::Actor;
use crate::apply::RecordKind;
use crate::error::CoreError;
use armory_domain::{
    Base, NewTransfer, Record, RecordId, Transfer, TransferStatus, ValidationErrors,
    validate_new_transfer,
};
use time::Date;

/// Prefix of the asset identifiers minted alongside new transfers and
/// assignments.
pub const ASSET_ID_PREFIX: &str = "A";

impl RecordKind for Transfer {
    type Draft = NewTransfer;

    fn validate(draft: &NewTransfer) -> Result<(), ValidationErrors> {
        validate_new_transfer(draft)
    }

    // Only the sending leg must be in scope; any base may receive.
    fn scoped_bases(draft: &NewTransfer) -> Vec<(&'static str, Base)> {
        vec![("from_base", draft.from_base)]
    }

    fn build(draft: NewTransfer, sequence: u32, actor: &Actor) -> Result<Self, CoreError> {
        Ok(Self {
            id: RecordId::sequential(Self::ID_PREFIX, sequence),
            asset_id: RecordId::sequential(ASSET_ID_PREFIX, sequence),
            asset_name: draft.asset_name.trim().to_string(),
            asset_type: draft.asset_type,
            from_base: draft.from_base,
            to_base: draft.to_base,
            quantity: draft.quantity,
            date: draft.date,
            status: TransferStatus::Pending,
            requested_by: actor.name().to_string(),
            approved_by: None,
        })
    }

    fn permits_transition(&self, actor: &Actor, target: TransferStatus) -> Result<(), &'static str> {
        match target {
            TransferStatus::InTransit if !actor.is_admin() => {
                Err("only admins may approve a transfer")
            }
            TransferStatus::Completed
                if !actor.is_admin() && actor.user().assigned_base != Some(self.to_base) =>
            {
                Err("only the receiving base may complete a transfer")
            }
            _ => Ok(()),
        }
    }

    fn stamp_transition(&mut self, actor: &Actor, target: TransferStatus, _today: Date) {
        if target == TransferStatus::InTransit {
            self.approved_by = Some(actor.name().to_string());
        }
    }
}
