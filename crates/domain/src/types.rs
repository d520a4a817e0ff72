// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;

/// Calendar dates are exchanged as fixed-width `YYYY-MM-DD`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// zero-padded calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    // The format only contains components every Date has.
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Lowercases and folds `-`/`_` to spaces so "In Transit", "in-transit" and
/// "IN_TRANSIT" compare equal.
pub(crate) fn normalize_token(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', '_'], " ")
}

/// One of the four operational bases.
///
/// The set is closed; variants are declared in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    #[serde(rename = "Alpha Base")]
    Alpha,
    #[serde(rename = "Bravo Base")]
    Bravo,
    #[serde(rename = "Charlie Base")]
    Charlie,
    #[serde(rename = "Delta Base")]
    Delta,
}

impl Base {
    /// Every base, in enumeration order.
    pub const ALL: [Self; 4] = [Self::Alpha, Self::Bravo, Self::Charlie, Self::Delta];

    /// Returns the display name of the base.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "Alpha Base",
            Self::Bravo => "Bravo Base",
            Self::Charlie => "Charlie Base",
            Self::Delta => "Delta Base",
        }
    }
}

impl FromStr for Base {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = normalize_token(s);
        let short: &str = token.strip_suffix(" base").unwrap_or(&token);
        match short {
            "alpha" => Ok(Self::Alpha),
            "bravo" => Ok(Self::Bravo),
            "charlie" => Ok(Self::Charlie),
            "delta" => Ok(Self::Delta),
            _ => Err(DomainError::InvalidBase(s.to_string())),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role a user acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Sees and acts on every base; the only role that approves transfers.
    Admin,
    /// Commands a single base.
    BaseCommander,
    /// Handles procurement and movement for a single base.
    LogisticsOfficer,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::BaseCommander => "base-commander",
            Self::LogisticsOfficer => "logistics-officer",
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "admin" => Ok(Self::Admin),
            "base commander" => Ok(Self::BaseCommander),
            "logistics officer" => Ok(Self::LogisticsOfficer),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in user.
///
/// Users are supplied by the identity provider and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Roster identifier.
    pub id: String,
    /// Display name, stamped onto records the user creates or approves.
    pub name: String,
    /// The role the user acts under.
    pub role: Role,
    /// The base a non-admin user is responsible for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_base: Option<Base>,
}

impl User {
    /// Creates a new `User`.
    ///
    /// # Arguments
    ///
    /// * `id` - The roster identifier
    /// * `name` - The display name
    /// * `role` - The role the user acts under
    /// * `assigned_base` - The base a non-admin user is responsible for
    #[must_use]
    pub fn new(id: &str, name: &str, role: Role, assigned_base: Option<Base>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            assigned_base,
        }
    }
}

/// Classification of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Vehicle,
    Weapon,
    Ammunition,
    Equipment,
}

impl AssetType {
    pub const ALL: [Self; 4] = [
        Self::Vehicle,
        Self::Weapon,
        Self::Ammunition,
        Self::Equipment,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Weapon => "Weapon",
            Self::Ammunition => "Ammunition",
            Self::Equipment => "Equipment",
        }
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "vehicle" => Ok(Self::Vehicle),
            "weapon" => Ok(Self::Weapon),
            "ammunition" => Ok(Self::Ammunition),
            "equipment" => Ok(Self::Equipment),
            _ => Err(DomainError::InvalidAssetType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary amount held in whole cents.
///
/// Serialized as a decimal string (`"42500.00"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Self = Self { cents: 0 };

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.cents
            .checked_mul(u64::from(quantity))
            .map(Self::from_cents)
    }

    /// Adds two amounts, saturating at the maximum representable value.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            cents: self.cents.saturating_add(other.cents),
        }
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Accepts `1200`, `1200.5`, `0.85`, `$1,200.00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| DomainError::InvalidAmount {
            amount: s.to_string(),
            reason,
        };

        let cleaned: String = s
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if cleaned.is_empty() {
            return Err(invalid("amount is empty"));
        }

        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("amount has no digits"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("only digits and a decimal point are allowed"));
        }

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let fraction_value: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad fraction"))?,
        };

        whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_value))
            .map(Self::from_cents)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A record identifier such as `P005`, `T003` or `ASG001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from a prefix and a sequence number, zero-padded
    /// to three digits.
    #[must_use]
    pub fn sequential(prefix: &str, sequence: u32) -> Self {
        Self(format!("{prefix}{sequence:03}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
