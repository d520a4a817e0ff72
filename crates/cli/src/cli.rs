// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use armory_api::{
    CreateAssignmentRequest, CreatePurchaseRequest, CreateTransferRequest, DashboardRequest,
    StatusChangeRequest,
};
use armory_domain::{FilterCriteria, UnassignedPolicy, parse_date};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Armory - military asset inventory across four bases
///
/// Every invocation starts from the sample records, so changes last for a
/// single command.
#[derive(Debug, Parser)]
#[command(name = "armory", author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Roster id or name to sign in as, e.g. `3` or "Major Williams"
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Pin today's date (YYYY-MM-DD) instead of reading the system clock
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<Date>,

    /// Give non-admins without an assigned base no access instead of every base
    #[arg(long, global = true)]
    pub strict_scope: bool,

    /// Output format written to stdout
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    pub const fn policy(&self) -> UnassignedPolicy {
        if self.strict_scope {
            UnassignedPolicy::Deny
        } else {
            UnassignedPolicy::AllBases
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the users offered at sign-in
    Roster,

    /// Show the signed-in user, the bases they see and the views they may open
    Whoami,

    /// Summarize asset movement per base
    #[command(visible_alias = "dash")]
    Dashboard(DashboardArgs),

    /// Work with purchase orders
    #[command(subcommand, visible_alias = "p")]
    Purchases(PurchaseCommand),

    /// Work with inter-base transfers
    #[command(subcommand, visible_alias = "t")]
    Transfers(TransferCommand),

    /// Work with personnel assignments
    #[command(subcommand, visible_alias = "a")]
    Assignments(AssignmentCommand),
}

#[derive(Debug, Subcommand)]
pub enum PurchaseCommand {
    /// List visible purchases
    List(FilterArgs),
    /// Record a purchase order
    Create(PurchaseForm),
    /// Move a purchase to another status
    Status(StatusArgs),
}

#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    /// List visible transfers
    List(FilterArgs),
    /// Request a transfer
    Create(TransferForm),
    /// Move a transfer to another status
    Status(StatusArgs),
    /// Approve a pending transfer
    Approve(RecordArg),
    /// Confirm receipt of an in-transit transfer
    Complete(RecordArg),
}

#[derive(Debug, Subcommand)]
pub enum AssignmentCommand {
    /// List visible assignments
    List(FilterArgs),
    /// Issue assets to a person
    Create(AssignmentForm),
    /// Move an assignment to another status
    Status(StatusArgs),
    /// Mark an assignment returned
    Return(RecordArg),
    /// Mark an assignment expended
    Expend(RecordArg),
}

/// Listing criteria. Blank values and `all` leave a criterion open.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct FilterArgs {
    /// Case-insensitive text matched against names and people
    #[arg(short, long, default_value_t)]
    pub search: String,
    #[arg(long, default_value_t)]
    pub status: String,
    #[arg(long, default_value_t)]
    pub asset_type: String,
    #[arg(long, default_value_t)]
    pub base: String,
    /// Earliest record date, inclusive
    #[arg(long, default_value_t)]
    pub from: String,
    /// Latest record date, inclusive
    #[arg(long, default_value_t)]
    pub to: String,
}

impl FilterArgs {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search,
            status: self.status,
            asset_type: self.asset_type,
            base: self.base,
            date_from: self.from,
            date_to: self.to,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DashboardArgs {
    #[arg(long, default_value = "all")]
    pub base: String,
    #[arg(long, default_value = "all")]
    pub asset_type: String,
    #[arg(long, default_value = "2024-01-01")]
    pub from: String,
    #[arg(long, default_value = "2024-12-31")]
    pub to: String,
}

impl DashboardArgs {
    pub fn into_request(self) -> DashboardRequest {
        DashboardRequest {
            base: self.base,
            asset_type: self.asset_type,
            date_from: self.from,
            date_to: self.to,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StatusArgs {
    /// Record id, e.g. P004
    pub id: String,
    /// Target status, e.g. "In Transit" or in-transit
    pub status: String,
}

impl StatusArgs {
    pub fn into_request(self) -> StatusChangeRequest {
        StatusChangeRequest {
            id: self.id,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecordArg {
    /// Record id, e.g. T003
    pub id: String,
}

/// Purchase order form. Blank fields take the form defaults.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct PurchaseForm {
    #[arg(long, default_value_t)]
    pub asset_name: String,
    /// Weapon, Vehicle, Ammunition or Equipment (default)
    #[arg(long, default_value_t)]
    pub asset_type: String,
    #[arg(long, default_value_t)]
    pub quantity: String,
    /// Decimal amount, e.g. 1200 or 0.85
    #[arg(long, default_value_t)]
    pub unit_cost: String,
    #[arg(long, default_value_t)]
    pub vendor: String,
    /// Defaults to your own base
    #[arg(long, default_value_t)]
    pub base: String,
    /// Defaults to today
    #[arg(long, default_value_t)]
    pub purchase_date: String,
    #[arg(long, default_value_t)]
    pub delivery_date: String,
    #[arg(long, default_value_t)]
    pub approved_by: String,
    #[arg(long, default_value_t)]
    pub notes: String,
}

impl PurchaseForm {
    pub fn into_request(self) -> CreatePurchaseRequest {
        CreatePurchaseRequest {
            asset_name: self.asset_name,
            asset_type: self.asset_type,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            vendor: self.vendor,
            base: self.base,
            purchase_date: self.purchase_date,
            delivery_date: self.delivery_date,
            approved_by: self.approved_by,
            notes: self.notes,
        }
    }
}

/// Transfer request form. Blank fields take the form defaults.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct TransferForm {
    #[arg(long, default_value_t)]
    pub asset_name: String,
    #[arg(long, default_value_t)]
    pub asset_type: String,
    /// Defaults to your own base
    #[arg(long, default_value_t)]
    pub from_base: String,
    /// Defaults to Alpha Base
    #[arg(long, default_value_t)]
    pub to_base: String,
    #[arg(long, default_value_t)]
    pub quantity: String,
    /// Defaults to today
    #[arg(long, default_value_t)]
    pub date: String,
}

impl TransferForm {
    pub fn into_request(self) -> CreateTransferRequest {
        CreateTransferRequest {
            asset_name: self.asset_name,
            asset_type: self.asset_type,
            from_base: self.from_base,
            to_base: self.to_base,
            quantity: self.quantity,
            date: self.date,
        }
    }
}

/// Assignment form. Blank fields take the form defaults.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct AssignmentForm {
    #[arg(long, default_value_t)]
    pub asset_name: String,
    #[arg(long, default_value_t)]
    pub asset_type: String,
    #[arg(long, default_value_t)]
    pub personnel_name: String,
    #[arg(long, default_value_t)]
    pub personnel_id: String,
    /// Defaults to your own base
    #[arg(long, default_value_t)]
    pub base: String,
    #[arg(long, default_value_t)]
    pub quantity: String,
    /// Defaults to today
    #[arg(long, default_value_t)]
    pub assigned_date: String,
}

impl AssignmentForm {
    pub fn into_request(self) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            asset_name: self.asset_name,
            asset_type: self.asset_type,
            personnel_name: self.personnel_name,
            personnel_id: self.personnel_id,
            base: self.base,
            quantity: self.quantity,
            assigned_date: self.assigned_date,
        }
    }
}
