// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

use armory::{Clock, Inventory, seed};
use armory_domain::{
    Assignment, AssignmentStatus, FilterCriteria, Lifecycle, Purchase, Transfer, TransferStatus,
    UnassignedPolicy, User,
};

pub use auth::{AuthorizationService, Session, View};
pub use capabilities::{
    AssignmentCapabilities, Capability, PurchaseCapabilities, TransferCapabilities,
    WithCapabilities, can_create,
};
pub use error::{ApiError, AuthError};
pub use handlers::{change_status, create_record, dashboard, describe_session, list_records};
pub use request_response::{
    CreateAssignmentRequest, CreatePurchaseRequest, CreateResponse, CreateTransferRequest,
    DashboardRequest, DashboardResponse, FormDefaults, ListResponse, RecordEntry,
    SessionResponse, StatusChangeRequest, StatusChangeResponse, StatusCount,
};

/// One session's worth of inventory state behind the API contract.
///
/// The service owns the repositories, the sign-in roster and the clock.
/// Every operation takes the signed-in [`Session`] and enforces view access
/// and record scope before touching data.
pub struct InventoryService {
    inventory: Inventory,
    roster: Vec<User>,
    clock: Box<dyn Clock>,
    policy: UnassignedPolicy,
}

impl InventoryService {
    /// Creates a service over the given state.
    ///
    /// # Arguments
    ///
    /// * `inventory` - The record repositories
    /// * `roster` - The users offered at sign-in
    /// * `clock` - Source of today's date
    /// * `policy` - Treatment of non-admins with no assigned base
    #[must_use]
    pub const fn new(
        inventory: Inventory,
        roster: Vec<User>,
        clock: Box<dyn Clock>,
        policy: UnassignedPolicy,
    ) -> Self {
        Self {
            inventory,
            roster,
            clock,
            policy,
        }
    }

    /// Creates a service over the sample records and roster.
    #[must_use]
    pub fn seeded(clock: Box<dyn Clock>, policy: UnassignedPolicy) -> Self {
        Self::new(Inventory::seeded(), seed::roster(), clock, policy)
    }

    #[must_use]
    pub fn roster(&self) -> &[User] {
        &self.roster
    }

    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Opens a session for a roster id or name.
    ///
    /// # Errors
    ///
    /// Returns an error if no roster entry matches.
    pub fn sign_in(&self, identity: &str) -> Result<Session, ApiError> {
        Ok(Session::sign_in(&self.roster, identity, self.policy)?)
    }

    /// Lists purchases.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the purchases view.
    pub fn list_purchases(
        &self,
        session: &Session,
        criteria: &FilterCriteria,
    ) -> Result<ListResponse<Purchase, PurchaseCapabilities>, ApiError> {
        list_records(&self.inventory.purchases, session, View::Purchases, criteria)
    }

    /// Lists transfers.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the transfers view.
    pub fn list_transfers(
        &self,
        session: &Session,
        criteria: &FilterCriteria,
    ) -> Result<ListResponse<Transfer, TransferCapabilities>, ApiError> {
        list_records(&self.inventory.transfers, session, View::Transfers, criteria)
    }

    /// Lists assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the assignments view.
    pub fn list_assignments(
        &self,
        session: &Session,
        criteria: &FilterCriteria,
    ) -> Result<ListResponse<Assignment, AssignmentCapabilities>, ApiError> {
        list_records(
            &self.inventory.assignments,
            session,
            View::Assignments,
            criteria,
        )
    }

    /// Records a purchase order.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the form is rejected.
    pub fn create_purchase(
        &mut self,
        session: &Session,
        request: CreatePurchaseRequest,
    ) -> Result<CreateResponse<Purchase>, ApiError> {
        create_record(
            &mut self.inventory.purchases,
            session,
            View::Purchases,
            |defaults| request.into_draft(defaults),
            self.clock.as_ref(),
        )
    }

    /// Requests a transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the form is rejected.
    pub fn create_transfer(
        &mut self,
        session: &Session,
        request: CreateTransferRequest,
    ) -> Result<CreateResponse<Transfer>, ApiError> {
        create_record(
            &mut self.inventory.transfers,
            session,
            View::Transfers,
            |defaults| request.into_draft(defaults),
            self.clock.as_ref(),
        )
    }

    /// Issues an assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the form is rejected.
    pub fn create_assignment(
        &mut self,
        session: &Session,
        request: CreateAssignmentRequest,
    ) -> Result<CreateResponse<Assignment>, ApiError> {
        create_record(
            &mut self.inventory.assignments,
            session,
            View::Assignments,
            |defaults| request.into_draft(defaults),
            self.clock.as_ref(),
        )
    }

    /// Moves a purchase to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the status is unknown.
    pub fn set_purchase_status(
        &mut self,
        session: &Session,
        request: &StatusChangeRequest,
    ) -> Result<StatusChangeResponse<Purchase>, ApiError> {
        change_status(
            &mut self.inventory.purchases,
            session,
            View::Purchases,
            request,
            self.clock.as_ref(),
        )
    }

    /// Moves a transfer to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the status is unknown.
    pub fn set_transfer_status(
        &mut self,
        session: &Session,
        request: &StatusChangeRequest,
    ) -> Result<StatusChangeResponse<Transfer>, ApiError> {
        change_status(
            &mut self.inventory.transfers,
            session,
            View::Transfers,
            request,
            self.clock.as_ref(),
        )
    }

    /// Moves an assignment to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is not granted or the status is unknown.
    pub fn set_assignment_status(
        &mut self,
        session: &Session,
        request: &StatusChangeRequest,
    ) -> Result<StatusChangeResponse<Assignment>, ApiError> {
        change_status(
            &mut self.inventory.assignments,
            session,
            View::Assignments,
            request,
            self.clock.as_ref(),
        )
    }

    /// Approves a pending transfer, stamping the approver.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the transfers view.
    pub fn approve_transfer(
        &mut self,
        session: &Session,
        id: &str,
    ) -> Result<StatusChangeResponse<Transfer>, ApiError> {
        self.set_transfer_status(session, &status_change(id, TransferStatus::InTransit))
    }

    /// Confirms receipt of an in-transit transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the transfers view.
    pub fn complete_transfer(
        &mut self,
        session: &Session,
        id: &str,
    ) -> Result<StatusChangeResponse<Transfer>, ApiError> {
        self.set_transfer_status(session, &status_change(id, TransferStatus::Completed))
    }

    /// Marks an assignment returned, stamping today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the assignments view.
    pub fn return_assignment(
        &mut self,
        session: &Session,
        id: &str,
    ) -> Result<StatusChangeResponse<Assignment>, ApiError> {
        self.set_assignment_status(session, &status_change(id, AssignmentStatus::Returned))
    }

    /// Marks an assignment expended.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the assignments view.
    pub fn expend_assignment(
        &mut self,
        session: &Session,
        id: &str,
    ) -> Result<StatusChangeResponse<Assignment>, ApiError> {
        self.set_assignment_status(session, &status_change(id, AssignmentStatus::Expended))
    }

    /// Builds the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the session may not open the dashboard.
    pub fn dashboard(
        &self,
        session: &Session,
        request: &DashboardRequest,
    ) -> Result<DashboardResponse, ApiError> {
        dashboard(&self.inventory, session, request)
    }
}

fn status_change<S: Lifecycle>(id: &str, status: S) -> StatusChangeRequest {
    StatusChangeRequest {
        id: id.to_string(),
        status: status.as_str().to_string(),
    }
}
