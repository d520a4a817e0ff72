// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Every handler authorizes the view first, then translates the raw request
//! into domain types, then calls into the core.

use armory::{Clock, DashboardCriteria, Inventory, Repository, TransitionOutcome, create, transition};
use armory_domain::{
    DateRange, DomainError, FilterCriteria, Lifecycle, QueryFilter, Record, Selection,
    ValidationErrors,
};
use tracing::{debug, info};

use crate::auth::{AuthorizationService, Session, View};
use crate::capabilities::{WithCapabilities, can_create};
use crate::error::ApiError;
use crate::request_response::{
    CreateResponse, DashboardRequest, DashboardResponse, FormDefaults, ListResponse, RecordEntry,
    SessionResponse, StatusChangeRequest, StatusChangeResponse, StatusCount,
};

/// Describes the open session: who is signed in, what they can see and
/// which views they may open.
#[must_use]
pub fn describe_session(session: &Session) -> SessionResponse {
    let scope = session.actor().scope();
    SessionResponse {
        user: session.user().clone(),
        scope: scope.bases(),
        scope_fallback: scope.is_fallback(),
        views: AuthorizationService::views_for(session.user().role),
    }
}

/// Lists the records of one view visible to the session, narrowed by the
/// request's criteria.
///
/// # Errors
///
/// Returns an error if the session may not open `view`.
pub fn list_records<R: WithCapabilities>(
    repository: &Repository<R>,
    session: &Session,
    view: View,
    criteria: &FilterCriteria,
) -> Result<ListResponse<R, R::Capabilities>, ApiError> {
    AuthorizationService::authorize_view(session, view)?;

    let actor = session.actor();
    let visible = repository
        .records()
        .iter()
        .filter(|record| actor.scope().permits(*record));
    let matched: Vec<&R> = QueryFilter::<R::Status>::from_criteria(criteria).apply(visible);

    let counts: Vec<StatusCount> = <R::Status as Lifecycle>::ALL
        .iter()
        .map(|status| StatusCount {
            status: status.as_str(),
            count: matched.iter().filter(|r| r.status() == *status).count(),
        })
        .collect();

    debug!(
        view = %view,
        user = %session.user().name,
        total = repository.len(),
        matched = matched.len(),
        "Listed records"
    );

    Ok(ListResponse {
        records: matched
            .into_iter()
            .map(|record| RecordEntry {
                record: record.clone(),
                capabilities: record.capabilities(actor),
            })
            .collect(),
        counts,
        can_create: can_create(actor),
    })
}

/// Submits a creation form.
///
/// # Arguments
///
/// * `repository` - The collection the record is added to
/// * `session` - The signed-in user
/// * `view` - The view the form belongs to
/// * `read` - Turns the raw request into a domain form, given defaults
/// * `clock` - Source of the default dates
///
/// # Errors
///
/// Returns an error if:
/// - The session may not open `view`
/// - Any field cannot be parsed or fails validation
/// - A base named by the form lies outside the session's scope
pub fn create_record<R, F>(
    repository: &mut Repository<R>,
    session: &Session,
    view: View,
    read: F,
    clock: &dyn Clock,
) -> Result<CreateResponse<R>, ApiError>
where
    R: WithCapabilities,
    F: FnOnce(FormDefaults) -> Result<R::Draft, ValidationErrors>,
{
    AuthorizationService::authorize_view(session, view)?;

    let defaults: FormDefaults = FormDefaults::for_user(session.user(), clock.today());
    let draft: R::Draft = read(defaults)?;
    let record: R = create(repository, session.actor(), draft)?;

    info!(view = %view, id = %record.id(), "Handled create request");
    let message: String = format!("Created {} {}", R::KIND, record.id());
    Ok(CreateResponse { record, message })
}

/// Requests a status change.
///
/// An illegal or unauthorized change is not an error: the response reports
/// that the record was left unchanged, and why.
///
/// # Errors
///
/// Returns an error if the session may not open `view` or the requested
/// status is not a status of this record kind.
pub fn change_status<R: WithCapabilities>(
    repository: &mut Repository<R>,
    session: &Session,
    view: View,
    request: &StatusChangeRequest,
    clock: &dyn Clock,
) -> Result<StatusChangeResponse<R>, ApiError> {
    AuthorizationService::authorize_view(session, view)?;

    let target: R::Status = request
        .status
        .parse()
        .map_err(|err: DomainError| ApiError::invalid_field("status", err.to_string()))?;
    let id = request.record_id();

    let outcome: TransitionOutcome<R> = transition(repository, session.actor(), &id, target, clock);
    let message: String = match &outcome {
        TransitionOutcome::Applied(_) => format!("{} {id} is now {}", R::KIND, target.as_str()),
        TransitionOutcome::Unchanged(refusal) => format!("{} {id} unchanged: {refusal}", R::KIND),
    };

    Ok(StatusChangeResponse {
        id,
        outcome,
        message,
    })
}

/// Builds the dashboard for the session.
///
/// # Errors
///
/// Returns an error if the session may not open the dashboard.
pub fn dashboard(
    inventory: &Inventory,
    session: &Session,
    request: &DashboardRequest,
) -> Result<DashboardResponse, ApiError> {
    AuthorizationService::authorize_view(session, View::Dashboard)?;

    let criteria: DashboardCriteria = DashboardCriteria {
        base: Selection::parse(&request.base),
        asset_type: Selection::parse(&request.asset_type),
        dates: DateRange::parse(&request.date_from, &request.date_to),
    };
    let summary = inventory.dashboard(session.actor().scope(), &criteria);

    debug!(
        user = %session.user().name,
        bases = summary.bases.len(),
        "Built dashboard"
    );
    Ok(DashboardResponse { summary })
}

