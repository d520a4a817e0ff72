// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query filtering over already-scoped record collections.
//!
//! Criteria arrive as raw strings from the presentation layer. Unrecognized
//! values never raise errors; they simply match nothing.

use crate::record::Record;
use crate::status::Lifecycle;
use crate::types::{AssetType, Base, parse_date};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The selector value that disables an exact-match criterion.
pub const ALL: &str = "all";

/// Raw, user-entered filter values.
///
/// Empty strings and `"all"` leave a criterion unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub status: String,
    pub asset_type: String,
    pub base: String,
    pub date_from: String,
    pub date_to: String,
}

/// An exact-match criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// No constraint.
    Any,
    /// Only this value.
    Only(T),
    /// The raw value named nothing; no record matches.
    Unmatched,
}

impl<T: FromStr + PartialEq> Selection<T> {
    /// Interprets a raw selector value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Self::Any;
        }
        trimmed.parse().map_or(Self::Unmatched, Self::Only)
    }

    /// Returns true if `value` satisfies the criterion.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == value,
            Self::Unmatched => false,
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

/// One end of a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBound {
    /// Unconstrained.
    #[default]
    Open,
    /// Inclusive bound.
    On(Date),
    /// The raw value was not a `YYYY-MM-DD` date; no record matches.
    Malformed,
}

impl DateBound {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Open;
        }
        parse_date(raw).map_or(Self::Malformed, Self::On)
    }
}

/// An inclusive date range over a record's primary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: DateBound,
    pub to: DateBound,
}

impl DateRange {
    /// Parses both bounds from raw strings.
    #[must_use]
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: DateBound::parse(from),
            to: DateBound::parse(to),
        }
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn on(date: Date) -> Self {
        Self {
            from: DateBound::On(date),
            to: DateBound::On(date),
        }
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        let after_start: bool = match self.from {
            DateBound::Open => true,
            DateBound::On(from) => date >= from,
            DateBound::Malformed => false,
        };
        let before_end: bool = match self.to {
            DateBound::Open => true,
            DateBound::On(to) => date <= to,
            DateBound::Malformed => false,
        };
        after_start && before_end
    }
}

/// A conjunction of search, status, asset type, base and date criteria.
///
/// Filtering is a pure function of the input sequence and the criteria:
/// it never mutates the source and keeps its order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter<S> {
    /// Lowercased search needle; empty matches everything.
    search: String,
    status: Selection<S>,
    asset_type: Selection<AssetType>,
    base: Selection<Base>,
    dates: DateRange,
}

impl<S: Lifecycle> Default for QueryFilter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Lifecycle> QueryFilter<S> {
    /// A filter that matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: String::new(),
            status: Selection::Any,
            asset_type: Selection::Any,
            base: Selection::Any,
            dates: DateRange::default(),
        }
    }

    /// Builds a filter from raw criteria.
    #[must_use]
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self::new()
            .with_search(&criteria.search)
            .with_status(Selection::parse(&criteria.status))
            .with_asset_type(Selection::parse(&criteria.asset_type))
            .with_base(Selection::parse(&criteria.base))
            .with_dates(DateRange::parse(&criteria.date_from, &criteria.date_to))
    }

    /// Matches the term as typed; only an empty term matches everything.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_lowercase();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Selection<S>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_asset_type(mut self, asset_type: Selection<AssetType>) -> Self {
        self.asset_type = asset_type;
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: Selection<Base>) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Returns true if `record` satisfies every criterion.
    pub fn matches<R: Record<Status = S>>(&self, record: &R) -> bool {
        self.matches_search(record)
            && self.status.admits(&record.status())
            && self.asset_type.admits(&record.asset_type())
            && self.matches_base(record)
            && self.dates.contains(record.primary_date())
    }

    /// Returns the matching records in their original order.
    pub fn apply<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: Record<Status = S> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(*record))
            .collect()
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        self.search.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search))
    }

    fn matches_base<R: Record>(&self, record: &R) -> bool {
        match self.base {
            Selection::Any => true,
            Selection::Only(base) => record.footprint().touches(base),
            Selection::Unmatched => false,
        }
    }
}
