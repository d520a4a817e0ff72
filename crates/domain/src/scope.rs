// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access scope resolution and record visibility.
//!
//! Scope is derived from a user's role and assigned base. Every read and
//! write path consults it before applying user-entered criteria, so no
//! filter value can widen what a user sees.

use crate::record::Record;
use crate::types::{Base, User};

/// How to treat a non-admin user who has no assigned base.
///
/// Such a user should not exist; this only matters for malformed upstream
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnassignedPolicy {
    /// Grant every base. This is the historical behaviour.
    #[default]
    AllBases,
    /// Grant nothing.
    Deny,
}

/// The set of bases a user may view and act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Admins see every base and every record.
    Global,
    /// A non-admin sees records touching their assigned base.
    Assigned(Base),
    /// A non-admin without an assigned base, granted every base by
    /// `UnassignedPolicy::AllBases`.
    UnassignedFallback,
    /// A non-admin without an assigned base under `UnassignedPolicy::Deny`.
    Empty,
}

impl AccessScope {
    /// Resolves the scope of a user.
    ///
    /// # Arguments
    ///
    /// * `user` - The signed-in user
    /// * `policy` - Treatment of non-admins with no assigned base
    #[must_use]
    pub const fn resolve(user: &User, policy: UnassignedPolicy) -> Self {
        if user.role.is_admin() {
            return Self::Global;
        }
        match (user.assigned_base, policy) {
            (Some(base), _) => Self::Assigned(base),
            (None, UnassignedPolicy::AllBases) => Self::UnassignedFallback,
            (None, UnassignedPolicy::Deny) => Self::Empty,
        }
    }

    /// Returns the visible bases in enumeration order.
    #[must_use]
    pub fn bases(&self) -> Vec<Base> {
        match self {
            Self::Global | Self::UnassignedFallback => Base::ALL.to_vec(),
            Self::Assigned(base) => vec![*base],
            Self::Empty => Vec::new(),
        }
    }

    /// Returns true if `base` is within the scope.
    #[must_use]
    pub fn contains(&self, base: Base) -> bool {
        match self {
            Self::Global | Self::UnassignedFallback => true,
            Self::Assigned(own) => *own == base,
            Self::Empty => false,
        }
    }

    /// Returns true if the scope came from the unassigned-user fallback.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::UnassignedFallback)
    }

    /// The record visibility predicate.
    ///
    /// Single-base records are visible when their base is in scope; transfers
    /// are visible when either leg is.
    #[must_use]
    pub fn permits<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Global | Self::UnassignedFallback => true,
            Self::Assigned(base) => record.footprint().touches(*base),
            Self::Empty => false,
        }
    }
}

/// Returns the ordered bases visible to `user`.
///
/// Admins get all four bases; other roles get their assigned base, or all
/// four if they have none.
#[must_use]
pub fn resolve_scope(user: &User) -> Vec<Base> {
    AccessScope::resolve(user, UnassignedPolicy::default()).bases()
}

/// Returns true if `user` may see `record`.
#[must_use]
pub fn is_visible<R: Record>(user: &User, record: &R) -> bool {
    AccessScope::resolve(user, UnassignedPolicy::default()).permits(record)
}
