// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering of API responses to stdout.
//!
//! JSON is the response exactly as the API serializes it. CSV writes one
//! flat row per record; capabilities and status counts are JSON only.

use std::io::Write;

use armory::{BaseSummary, Movement, TransitionOutcome};
use armory_api::{
    CreateResponse, DashboardResponse, ListResponse, SessionResponse, StatusChangeResponse, View,
};
use armory_domain::{Base, Money, User};
use color_eyre::Result;
use serde::Serialize;

use crate::cli::Format;

/// A response that can be written as CSV rows.
pub trait Render: Serialize {
    /// Writes the response's rows, header first.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be serialized or written.
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()>;
}

/// Writes `value` to `out` in the chosen format.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn render<T: Render, W: Write>(value: &T, format: Format, mut out: W) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            value.write_rows(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct UserRow<'a> {
    id: &'a str,
    name: &'a str,
    role: &'static str,
    assigned_base: &'static str,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: &user.id,
            name: &user.name,
            role: user.role.as_str(),
            assigned_base: user.assigned_base.map_or("", |b| b.as_str()),
        }
    }
}

impl Render for Vec<User> {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        for user in self {
            writer.serialize(UserRow::from(user))?;
        }
        Ok(())
    }
}

const SESSION_HEADER: [&str; 7] = [
    "id",
    "name",
    "role",
    "assigned_base",
    "scope",
    "scope_fallback",
    "views",
];

impl Render for SessionResponse {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        let user: UserRow<'_> = UserRow::from(&self.user);
        let scope: String = self
            .scope
            .iter()
            .map(Base::as_str)
            .collect::<Vec<_>>()
            .join(";");
        let views: String = self
            .views
            .iter()
            .map(View::as_str)
            .collect::<Vec<_>>()
            .join(";");
        let fallback: &str = if self.scope_fallback { "true" } else { "false" };

        writer.write_record(SESSION_HEADER)?;
        writer.write_record([
            user.id,
            user.name,
            user.role,
            user.assigned_base,
            scope.as_str(),
            fallback,
            views.as_str(),
        ])?;
        Ok(())
    }
}

impl<R: Serialize, C: Serialize> Render for ListResponse<R, C> {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        for entry in &self.records {
            writer.serialize(&entry.record)?;
        }
        Ok(())
    }
}

impl<R: Serialize> Render for CreateResponse<R> {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        writer.serialize(&self.record)?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    id: &'a str,
    outcome: &'static str,
    message: &'a str,
}

impl<R: Serialize> Render for StatusChangeResponse<R> {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        let outcome: &'static str = match self.outcome {
            TransitionOutcome::Applied(_) => "applied",
            TransitionOutcome::Unchanged(_) => "unchanged",
        };
        writer.serialize(OutcomeRow {
            id: self.id.as_str(),
            outcome,
            message: &self.message,
        })?;
        Ok(())
    }
}

/// One dashboard line; the totals line is labelled `Total`.
#[derive(Debug, Serialize)]
struct MovementRow {
    base: &'static str,
    purchased: u64,
    transferred_in: u64,
    transferred_out: u64,
    net_movement: i64,
    assigned: u64,
    expended: u64,
    spend: Money,
}

impl MovementRow {
    const fn new(base: &'static str, movement: Movement) -> Self {
        Self {
            base,
            purchased: movement.purchased,
            transferred_in: movement.transferred_in,
            transferred_out: movement.transferred_out,
            net_movement: movement.net_movement,
            assigned: movement.assigned,
            expended: movement.expended,
            spend: movement.spend,
        }
    }
}

impl From<&BaseSummary> for MovementRow {
    fn from(summary: &BaseSummary) -> Self {
        Self::new(summary.base.as_str(), summary.movement)
    }
}

impl Render for DashboardResponse {
    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        for base in &self.summary.bases {
            writer.serialize(MovementRow::from(base))?;
        }
        writer.serialize(MovementRow::new("Total", self.summary.totals))?;
        Ok(())
    }
}
