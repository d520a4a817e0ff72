// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use armory_domain::{AccessScope, UnassignedPolicy, User};

/// The signed-in user together with their resolved access scope.
///
/// The scope is resolved once, when the actor is created, and every
/// mutation consults the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    user: User,
    scope: AccessScope,
}

impl Actor {
    /// Creates an actor, resolving the user's scope under `policy`.
    #[must_use]
    pub const fn new(user: User, policy: UnassignedPolicy) -> Self {
        let scope: AccessScope = AccessScope::resolve(&user, policy);
        Self { user, scope }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn scope(&self) -> &AccessScope {
        &self.scope
    }

    /// The display name stamped onto records.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.user.name
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}
