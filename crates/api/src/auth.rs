// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-in and view authorization.
//!
//! There are no credentials: a session is opened by picking a roster entry.
//! Authorization here only decides which views a role may open; record
//! level access is the scope check in the core.

use armory::Actor;
use armory_domain::{Role, UnassignedPolicy, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AuthError;

/// A top-level screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Purchases,
    Transfers,
    Assignments,
}

impl View {
    pub const ALL: [Self; 4] = [
        Self::Dashboard,
        Self::Purchases,
        Self::Transfers,
        Self::Assignments,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Purchases => "purchases",
            Self::Transfers => "transfers",
            Self::Assignments => "assignments",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    actor: Actor,
}

impl Session {
    /// Opens a session for the roster entry whose id or name matches
    /// `identity` (names compare case-insensitively).
    ///
    /// # Arguments
    ///
    /// * `roster` - The users offered at sign-in
    /// * `identity` - A roster id such as `"3"` or a name such as `"Major Williams"`
    /// * `policy` - Treatment of non-admins with no assigned base
    ///
    /// # Errors
    ///
    /// Returns an error if no roster entry matches.
    pub fn sign_in(
        roster: &[User],
        identity: &str,
        policy: UnassignedPolicy,
    ) -> Result<Self, AuthError> {
        let wanted: &str = identity.trim();
        let user: &User = roster
            .iter()
            .find(|u| u.id == wanted || u.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AuthError::UnknownIdentity {
                identity: identity.to_string(),
            })?;

        let actor: Actor = Actor::new(user.clone(), policy);
        if actor.scope().is_fallback() {
            warn!(
                user = %user.name,
                role = user.role.as_str(),
                "User has no assigned base; granting every base"
            );
        }
        info!(user = %user.name, role = user.role.as_str(), "Signed in");

        Ok(Self { actor })
    }

    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        self.actor.user()
    }
}

/// Authorization service for view access.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Returns true if `role` may open `view`.
    #[must_use]
    pub const fn can_open(role: Role, view: View) -> bool {
        match view {
            View::Dashboard | View::Purchases | View::Transfers => true,
            View::Assignments => matches!(role, Role::Admin | Role::BaseCommander),
        }
    }

    /// The views `role` may open, in menu order.
    #[must_use]
    pub fn views_for(role: Role) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|view| Self::can_open(role, *view))
            .collect()
    }

    /// Checks that the session may open `view`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session's role does not grant the view.
    pub fn authorize_view(session: &Session, view: View) -> Result<(), AuthError> {
        if Self::can_open(session.user().role, view) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: format!("open {view}"),
            required_role: String::from("admin or base-commander"),
        })
    }
}
