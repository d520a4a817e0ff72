// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-base asset movement summary.
//!
//! Only records visible to the actor contribute. Purchases and assignments
//! count toward their own base; a transfer counts out of its origin and into
//! its destination.

use armory_domain::{
    AccessScope, AssetType, Assignment, AssignmentStatus, Base, DateRange, Money,
    Purchase, PurchaseStatus, QueryFilter, Record, Selection, Transfer, TransferStatus,
};
use serde::Serialize;

/// Narrowing applied to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardCriteria {
    pub base: Selection<Base>,
    pub asset_type: Selection<AssetType>,
    pub dates: DateRange,
}

/// Movement figures for one base, or totals across several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Movement {
    /// Quantity received from delivered purchases.
    pub purchased: u64,
    /// Quantity received from completed transfers.
    pub transferred_in: u64,
    /// Quantity shipped by in-transit or completed transfers.
    pub transferred_out: u64,
    /// `purchased + transferred_in - transferred_out`.
    pub net_movement: i64,
    /// Quantity held by active assignments.
    pub assigned: u64,
    /// Quantity consumed by expended assignments.
    pub expended: u64,
    /// Total cost of purchases that were not cancelled.
    pub spend: Money,
}

impl Movement {
    fn settle(mut self) -> Self {
        let inbound: i128 = i128::from(self.purchased) + i128::from(self.transferred_in);
        let net: i128 = inbound - i128::from(self.transferred_out);
        self.net_movement = i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX });
        self
    }

    fn absorb(mut self, other: &Self) -> Self {
        self.purchased = self.purchased.saturating_add(other.purchased);
        self.transferred_in = self.transferred_in.saturating_add(other.transferred_in);
        self.transferred_out = self.transferred_out.saturating_add(other.transferred_out);
        self.assigned = self.assigned.saturating_add(other.assigned);
        self.expended = self.expended.saturating_add(other.expended);
        self.spend = self.spend.saturating_add(other.spend);
        self.settle()
    }
}

/// Figures for a single base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseSummary {
    pub base: Base,
    pub movement: Movement,
}

/// Number of visible transfers in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TransferCounts {
    pub pending: usize,
    pub in_transit: usize,
    pub completed: usize,
}

/// The dashboard for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// One entry per summarized base, in enumeration order.
    pub bases: Vec<BaseSummary>,
    /// Sums over `bases`.
    pub totals: Movement,
    pub transfers: TransferCounts,
}

fn total_quantity<'a, R: Record + 'a>(records: impl Iterator<Item = &'a R>) -> u64 {
    records.map(|r| u64::from(r.quantity())).sum()
}

/// Summarizes asset movement over the bases in `scope`, narrowed by the
/// criteria's base selection.
#[must_use]
pub fn summarize(
    scope: &AccessScope,
    criteria: &DashboardCriteria,
    purchases: &[Purchase],
    transfers: &[Transfer],
    assignments: &[Assignment],
) -> DashboardSummary {
    let bases: Vec<Base> = scope
        .bases()
        .into_iter()
        .filter(|base| criteria.base.admits(base))
        .collect();

    let purchases: Vec<&Purchase> = narrow(criteria, purchases);
    let transfers: Vec<&Transfer> = narrow(criteria, transfers);
    let assignments: Vec<&Assignment> = narrow(criteria, assignments);

    let summaries: Vec<BaseSummary> = bases
        .iter()
        .map(|&base| BaseSummary {
            base,
            movement: base_movement(base, &purchases, &transfers, &assignments),
        })
        .collect();

    let totals: Movement = summaries
        .iter()
        .fold(Movement::default(), |acc, summary| acc.absorb(&summary.movement));

    let mut counts: TransferCounts = TransferCounts::default();
    for transfer in transfers
        .iter()
        .filter(|t| bases.iter().any(|&base| t.footprint().touches(base)))
    {
        match transfer.status {
            TransferStatus::Pending => counts.pending += 1,
            TransferStatus::InTransit => counts.in_transit += 1,
            TransferStatus::Completed => counts.completed += 1,
        }
    }

    DashboardSummary {
        bases: summaries,
        totals,
        transfers: counts,
    }
}

fn narrow<'a, R: Record>(criteria: &DashboardCriteria, records: &'a [R]) -> Vec<&'a R> {
    QueryFilter::<R::Status>::new()
        .with_asset_type(criteria.asset_type)
        .with_dates(criteria.dates)
        .apply(records)
}

fn base_movement(
    base: Base,
    purchases: &[&Purchase],
    transfers: &[&Transfer],
    assignments: &[&Assignment],
) -> Movement {
    let here: Vec<&Purchase> = purchases.iter().copied().filter(|p| p.base == base).collect();
    let spend: Money = here
        .iter()
        .filter(|p| p.status != PurchaseStatus::Cancelled)
        .fold(Money::ZERO, |acc, p| acc.saturating_add(p.total_cost));

    let assigned_here = || assignments.iter().copied().filter(|a| a.base == base);

    Movement {
        purchased: total_quantity(
            here.iter()
                .copied()
                .filter(|p| p.status == PurchaseStatus::Delivered),
        ),
        transferred_in: total_quantity(
            transfers
                .iter()
                .copied()
                .filter(|t| t.to_base == base && t.status == TransferStatus::Completed),
        ),
        transferred_out: total_quantity(transfers.iter().copied().filter(|t| {
            t.from_base == base
                && matches!(t.status, TransferStatus::InTransit | TransferStatus::Completed)
        })),
        net_movement: 0,
        assigned: total_quantity(
            assigned_here().filter(|a| a.status == AssignmentStatus::Active),
        ),
        expended: total_quantity(
            assigned_here().filter(|a| a.status == AssignmentStatus::Expended),
        ),
        spend,
    }
    .settle()
}

