// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actor::Actor;
use crate::apply::RecordKind;
use crate::error::CoreError;
use crate::transfers::ASSET_ID_PREFIX;
use armory_domain::{
    Assignment, AssignmentStatus, Base, NewAssignment, Record, RecordId, ValidationErrors,
    validate_new_assignment,
};
use time::Date;

impl RecordKind for Assignment {
    type Draft = NewAssignment;

    fn validate(draft: &NewAssignment) -> Result<(), ValidationErrors> {
        validate_new_assignment(draft)
    }

    fn scoped_bases(draft: &NewAssignment) -> Vec<(&'static str, Base)> {
        vec![("base", draft.base)]
    }

    fn build(draft: NewAssignment, sequence: u32, _actor: &Actor) -> Result<Self, CoreError> {
        Ok(Self {
            id: RecordId::sequential(Self::ID_PREFIX, sequence),
            asset_id: RecordId::sequential(ASSET_ID_PREFIX, sequence),
            asset_name: draft.asset_name.trim().to_string(),
            asset_type: draft.asset_type,
            personnel_name: draft.personnel_name.trim().to_string(),
            personnel_id: draft.personnel_id.trim().to_string(),
            base: draft.base,
            quantity: draft.quantity,
            assigned_date: draft.assigned_date,
            return_date: None,
            status: AssignmentStatus::Active,
        })
    }

    fn permits_transition(&self, _actor: &Actor, _target: AssignmentStatus) -> Result<(), &'static str> {
        Ok(())
    }

    fn stamp_transition(&mut self, _actor: &Actor, target: AssignmentStatus, today: Date) {
        if target == AssignmentStatus::Returned {
            self.return_date = Some(today);
        }
    }
}
