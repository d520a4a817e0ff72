// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use armory::{Clock, FixedClock, SystemClock};
use armory_api::{InventoryService, Session, describe_session};
use color_eyre::{Result, eyre::eyre};
use tracing::debug;

use crate::cli::{Args, AssignmentCommand, Command, Format, PurchaseCommand, TransferCommand};
use crate::output::render;

impl Args {
    /// Runs the chosen command against a freshly seeded service, writing the
    /// response to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if sign-in fails, the API rejects the request, or the
    /// response cannot be written.
    pub fn run<W: Write>(self, out: W) -> Result<()> {
        let clock: Box<dyn Clock> = match self.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        };
        let mut service: InventoryService = InventoryService::seeded(clock, self.policy());
        let format: Format = self.format;
        let user: Option<&str> = self.user.as_deref();
        debug!(command = ?self.command, ?format, "Running command");

        match self.command {
            Command::Roster => render(&service.roster().to_vec(), format, out),
            Command::Whoami => {
                let session: Session = open_session(&service, user)?;
                render(&describe_session(&session), format, out)
            }
            Command::Dashboard(args) => {
                let session: Session = open_session(&service, user)?;
                render(&service.dashboard(&session, &args.into_request())?, format, out)
            }
            Command::Purchases(command) => {
                let session: Session = open_session(&service, user)?;
                run_purchases(&mut service, &session, command, format, out)
            }
            Command::Transfers(command) => {
                let session: Session = open_session(&service, user)?;
                run_transfers(&mut service, &session, command, format, out)
            }
            Command::Assignments(command) => {
                let session: Session = open_session(&service, user)?;
                run_assignments(&mut service, &session, command, format, out)
            }
        }
    }
}

fn open_session(service: &InventoryService, user: Option<&str>) -> Result<Session> {
    let identity: &str =
        user.ok_or_else(|| eyre!("sign in with --user <ID or NAME>; see `armory roster`"))?;
    Ok(service.sign_in(identity)?)
}

fn run_purchases<W: Write>(
    service: &mut InventoryService,
    session: &Session,
    command: PurchaseCommand,
    format: Format,
    out: W,
) -> Result<()> {
    match command {
        PurchaseCommand::List(filter) => render(
            &service.list_purchases(session, &filter.into_criteria())?,
            format,
            out,
        ),
        PurchaseCommand::Create(form) => render(
            &service.create_purchase(session, form.into_request())?,
            format,
            out,
        ),
        PurchaseCommand::Status(args) => render(
            &service.set_purchase_status(session, &args.into_request())?,
            format,
            out,
        ),
    }
}

fn run_transfers<W: Write>(
    service: &mut InventoryService,
    session: &Session,
    command: TransferCommand,
    format: Format,
    out: W,
) -> Result<()> {
    match command {
        TransferCommand::List(filter) => render(
            &service.list_transfers(session, &filter.into_criteria())?,
            format,
            out,
        ),
        TransferCommand::Create(form) => render(
            &service.create_transfer(session, form.into_request())?,
            format,
            out,
        ),
        TransferCommand::Status(args) => render(
            &service.set_transfer_status(session, &args.into_request())?,
            format,
            out,
        ),
        TransferCommand::Approve(record) => render(
            &service.approve_transfer(session, &record.id)?,
            format,
            out,
        ),
        TransferCommand::Complete(record) => render(
            &service.complete_transfer(session, &record.id)?,
            format,
            out,
        ),
    }
}

fn run_assignments<W: Write>(
    service: &mut InventoryService,
    session: &Session,
    command: AssignmentCommand,
    format: Format,
    out: W,
) -> Result<()> {
    match command {
        AssignmentCommand::List(filter) => render(
            &service.list_assignments(session, &filter.into_criteria())?,
            format,
            out,
        ),
        AssignmentCommand::Create(form) => render(
            &service.create_assignment(session, form.into_request())?,
            format,
            out,
        ),
        AssignmentCommand::Status(args) => render(
            &service.set_assignment_status(session, &args.into_request())?,
            format,
            out,
        ),
        AssignmentCommand::Return(record) => render(
            &service.return_assignment(session, &record.id)?,
            format,
            out,
        ),
        AssignmentCommand::Expend(record) => render(
            &service.expend_assignment(session, &record.id)?,
            format,
            out,
        ),
    }
}
