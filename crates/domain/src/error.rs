// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while interpreting raw values as domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The value does not name one of the fixed bases.
    InvalidBase(String),
    /// The value does not name a known role.
    InvalidRole(String),
    /// The value does not name a known asset type.
    InvalidAssetType(String),
    /// The value is not a status of the given record kind.
    InvalidStatus {
        /// The record kind whose lifecycle was consulted.
        kind: &'static str,
        /// The rejected value.
        status: String,
    },
    /// Failed to parse a `YYYY-MM-DD` date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a monetary amount.
    InvalidAmount {
        /// The invalid amount string.
        amount: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBase(value) => write!(f, "Unknown base '{value}'"),
            Self::InvalidRole(value) => write!(f, "Unknown role '{value}'"),
            Self::InvalidAssetType(value) => write!(f, "Unknown asset type '{value}'"),
            Self::InvalidStatus { kind, status } => {
                write!(f, "'{status}' is not a valid {kind} status")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidAmount { amount, reason } => {
                write!(f, "Invalid amount '{amount}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
