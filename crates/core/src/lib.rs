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

mod actor;
mod apply;
mod assignments;
mod clock;
mod dashboard;
mod error;
mod inventory;
mod purchases;
mod repository;
pub mod seed;
mod transfers;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use actor::Actor;
pub use apply::{RecordKind, Refusal, TransitionOutcome, check_transition, create, transition};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{BaseSummary, DashboardCriteria, DashboardSummary, Movement, TransferCounts, summarize};
pub use error::CoreError;
pub use inventory::Inventory;
pub use repository::Repository;
pub use transfers::ASSET_ID_PREFIX;
