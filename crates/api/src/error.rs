// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use armory::CoreError;
use armory_domain::{DomainError, FieldError, ValidationErrors};
use thiserror::Error;

/// Sign-in and view authorization errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No roster entry matches the requested identity.
    #[error("No user named or numbered '{identity}' is on the roster")]
    UnknownIdentity { identity: String },

    /// The actor's role does not grant the action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        action: String,
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No roster entry matches the requested identity.
    #[error("No user named or numbered '{identity}' is on the roster")]
    UnknownIdentity { identity: String },

    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        action: String,
        required_role: String,
    },

    /// A form or request was rejected; every offending field is listed.
    #[error("Invalid request: {0}")]
    Validation(ValidationErrors),

    /// A domain rule was violated.
    #[error("Domain rule violation: {0}")]
    Domain(DomainError),
}

impl ApiError {
    /// An error for a single rejected request field.
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        let mut errors: ValidationErrors = ValidationErrors::new();
        errors.push(FieldError::new(field, reason));
        Self::Validation(errors)
    }

    /// The field errors carried by a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors.errors(),
            _ => &[],
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UnknownIdentity { identity } => Self::UnknownIdentity { identity },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => Self::Validation(errors),
            CoreError::DomainViolation(domain) => Self::Domain(domain),
        }
    }
}
