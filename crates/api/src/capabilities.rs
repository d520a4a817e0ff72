// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-record action flags for gating status controls.
//!
//! Capabilities expose which status actions the signed-in user could take on
//! a record. They are advisory only: they are computed from the same guards
//! the transition engine applies, which still checks every request.

use armory::{Actor, RecordKind, check_transition};
use armory_domain::{
    Assignment, AssignmentStatus, Purchase, PurchaseStatus, Transfer, TransferStatus,
};
use serde::Serialize;

/// A single permission flag, serialized as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

fn allowed<R: RecordKind>(record: &R, actor: &Actor, target: R::Status) -> Capability {
    Capability::from_bool(check_transition(record, actor, target).is_ok())
}

/// Per-record capabilities for a record kind.
pub trait WithCapabilities: RecordKind {
    type Capabilities: Serialize;

    /// Computes what `actor` may do with this record.
    fn capabilities(&self, actor: &Actor) -> Self::Capabilities;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseCapabilities {
    pub can_mark_in_transit: Capability,
    pub can_mark_delivered: Capability,
    pub can_cancel: Capability,
}

impl WithCapabilities for Purchase {
    type Capabilities = PurchaseCapabilities;

    fn capabilities(&self, actor: &Actor) -> PurchaseCapabilities {
        PurchaseCapabilities {
            can_mark_in_transit: allowed(self, actor, PurchaseStatus::InTransit),
            can_mark_delivered: allowed(self, actor, PurchaseStatus::Delivered),
            can_cancel: allowed(self, actor, PurchaseStatus::Cancelled),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferCapabilities {
    pub can_approve: Capability,
    pub can_complete: Capability,
}

impl WithCapabilities for Transfer {
    type Capabilities = TransferCapabilities;

    fn capabilities(&self, actor: &Actor) -> TransferCapabilities {
        TransferCapabilities {
            can_approve: allowed(self, actor, TransferStatus::InTransit),
            can_complete: allowed(self, actor, TransferStatus::Completed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentCapabilities {
    pub can_return: Capability,
    pub can_expend: Capability,
}

impl WithCapabilities for Assignment {
    type Capabilities = AssignmentCapabilities;

    fn capabilities(&self, actor: &Actor) -> AssignmentCapabilities {
        AssignmentCapabilities {
            can_return: allowed(self, actor, AssignmentStatus::Returned),
            can_expend: allowed(self, actor, AssignmentStatus::Expended),
        }
    }
}

/// Whether the actor may submit a creation form at all.
///
/// False only when the scope is empty.
#[must_use]
pub fn can_create(actor: &Actor) -> Capability {
    Capability::from_bool(!actor.scope().bases().is_empty())
}
