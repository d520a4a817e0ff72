// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record status lifecycles.
//!
//! Every record kind has a closed set of states and a one-directional
//! transition relation: no record ever re-enters an earlier state.

use crate::error::DomainError;
use crate::types::normalize_token;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Behaviour shared by the status enumerations of every record kind.
pub trait Lifecycle:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = DomainError> + 'static
{
    /// Every state, in lifecycle order.
    const ALL: &'static [Self];

    /// The state newly created records start in.
    fn initial() -> Self;

    /// Returns the display form of the state.
    fn as_str(&self) -> &'static str;

    /// Returns true if the lifecycle permits moving from `self` to `target`.
    fn can_transition_to(&self, target: Self) -> bool;

    /// Returns true if no transition leaves this state.
    fn is_terminal(&self) -> bool {
        Self::ALL.iter().all(|next| !self.can_transition_to(*next))
    }
}

fn parse_status<S: Lifecycle>(kind: &'static str, raw: &str) -> Result<S, DomainError> {
    let token: String = normalize_token(raw);
    S::ALL
        .iter()
        .copied()
        .find(|status| normalize_token(status.as_str()) == token)
        .ok_or_else(|| DomainError::InvalidStatus {
            kind,
            status: raw.to_string(),
        })
}

/// Purchase order states.
///
/// Ordered -> In Transit -> Delivered, with cancellation possible until
/// delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Ordered,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

impl Lifecycle for PurchaseStatus {
    const ALL: &'static [Self] = &[
        Self::Ordered,
        Self::InTransit,
        Self::Delivered,
        Self::Cancelled,
    ];

    fn initial() -> Self {
        Self::Ordered
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ordered => "Ordered",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Ordered, Self::InTransit | Self::Cancelled)
                | (Self::InTransit, Self::Delivered | Self::Cancelled)
        )
    }
}

/// Transfer states. Leaving `Pending` is the approval step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferStatus {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Completed,
}

impl Lifecycle for TransferStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::InTransit, Self::Completed];

    fn initial() -> Self {
        Self::Pending
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
        }
    }

    fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InTransit) | (Self::InTransit, Self::Completed)
        )
    }
}

/// Assignment states. Both exits from `Active` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Active,
    Returned,
    Expended,
}

impl Lifecycle for AssignmentStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Returned, Self::Expended];

    fn initial() -> Self {
        Self::Active
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Returned => "Returned",
            Self::Expended => "Expended",
        }
    }

    fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Returned | Self::Expended)
        )
    }
}

macro_rules! status_text_impls {
    ($status:ty, $kind:literal) => {
        impl FromStr for $status {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_status($kind, s)
            }
        }

        impl Display for $status {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_text_impls!(PurchaseStatus, "purchase");
status_text_impls!(TransferStatus, "transfer");
status_text_impls!(AssignmentStatus, "assignment");
