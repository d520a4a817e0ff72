// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dashboard::{DashboardCriteria, DashboardSummary, summarize};
use crate::repository::Repository;
use crate::seed;
use armory_domain::{AccessScope, Assignment, Purchase, Transfer};

/// The three record repositories of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub purchases: Repository<Purchase>,
    pub transfers: Repository<Transfer>,
    pub assignments: Repository<Assignment>,
}

impl Inventory {
    /// An inventory loaded with the sample records.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            purchases: Repository::new(seed::purchases()),
            transfers: Repository::new(seed::transfers()),
            assignments: Repository::new(seed::assignments()),
        }
    }

    /// Summarizes the records visible within `scope`.
    #[must_use]
    pub fn dashboard(&self, scope: &AccessScope, criteria: &DashboardCriteria) -> DashboardSummary {
        summarize(
            scope,
            criteria,
            self.purchases.records(),
            self.transfers.records(),
            self.assignments.records(),
        )
    }
}
