// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The create and transition engine shared by every record kind.

use crate::actor::Actor;
use crate::clock::Clock;
use crate::error::CoreError;
use crate::repository::Repository;
use armory_domain::{Base, Lifecycle, Record, RecordId, ValidationErrors};
use serde::Serialize;
use time::Date;
use tracing::{debug, info};

/// Record-specific hooks the engine calls into.
///
/// Each record kind supplies validation, construction and any extra rules
/// around its status transitions. Visibility and lifecycle checks are shared.
pub trait RecordKind: Record {
    /// The creation form.
    type Draft;

    /// Validates the form's own fields.
    ///
    /// # Errors
    ///
    /// Returns every rejected field.
    fn validate(draft: &Self::Draft) -> Result<(), ValidationErrors>;

    /// The bases named by the form that must lie within the actor's scope,
    /// keyed by form field.
    fn scoped_bases(draft: &Self::Draft) -> Vec<(&'static str, Base)>;

    /// Builds the record from a validated form.
    ///
    /// # Errors
    ///
    /// Returns an error if a derived field cannot be computed.
    fn build(draft: Self::Draft, sequence: u32, actor: &Actor) -> Result<Self, CoreError>;

    /// Rules beyond the lifecycle, such as who may approve.
    ///
    /// # Errors
    ///
    /// Returns the rule that forbids the transition.
    fn permits_transition(&self, actor: &Actor, target: Self::Status) -> Result<(), &'static str>;

    /// Fields stamped alongside a status change.
    fn stamp_transition(&mut self, _actor: &Actor, _target: Self::Status, _today: Date) {}
}

/// Why a transition left the record untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Refusal {
    /// No record with the requested identifier is visible to the actor.
    UnknownRecord,
    /// The lifecycle does not allow the move.
    IllegalTransition {
        from: &'static str,
        to: &'static str,
    },
    /// The actor's role or base does not allow the move.
    NotPermitted { rule: &'static str },
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRecord => write!(f, "no such record"),
            Self::IllegalTransition { from, to } => {
                write!(f, "cannot move from '{from}' to '{to}'")
            }
            Self::NotPermitted { rule } => write!(f, "{rule}"),
        }
    }
}

/// The result of a transition request. Transitions never fail; a request
/// that cannot be honoured is reported as `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum TransitionOutcome<R> {
    /// The record was updated; carries its new value.
    Applied(R),
    /// Nothing changed.
    Unchanged(Refusal),
}

impl<R> TransitionOutcome<R> {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the refusal, if nothing changed.
    #[must_use]
    pub const fn refusal(&self) -> Option<Refusal> {
        match self {
            Self::Applied(_) => None,
            Self::Unchanged(refusal) => Some(*refusal),
        }
    }
}

/// Validates a creation form and prepends the new record.
///
/// # Errors
///
/// Returns `CoreError::Validation` listing every rejected field, including
/// bases outside the actor's scope. Nothing is saved on failure.
pub fn create<R: RecordKind>(
    repository: &mut Repository<R>,
    actor: &Actor,
    draft: R::Draft,
) -> Result<R, CoreError> {
    let mut errors: ValidationErrors = R::validate(&draft).err().unwrap_or_default();
    for (field, base) in R::scoped_bases(&draft) {
        errors.check(
            !actor.scope().contains(base),
            field,
            &format!("{base} is outside your access scope"),
        );
    }
    if !errors.is_empty() {
        debug!(kind = R::KIND, user = actor.name(), errors = %errors, "Rejected creation form");
        return Err(CoreError::Validation(errors));
    }

    let record: R = R::build(draft, repository.peek_sequence(), actor)?;
    repository.allocate();
    repository.prepend(record.clone());

    info!(
        kind = R::KIND,
        id = %record.id(),
        user = actor.name(),
        "Created record"
    );
    Ok(record)
}

/// Checks whether `actor` may move `record` to `target`, without changing
/// anything.
///
/// # Errors
///
/// Returns the first guard that refuses the move.
pub fn check_transition<R: RecordKind>(
    record: &R,
    actor: &Actor,
    target: R::Status,
) -> Result<(), Refusal> {
    if !actor.scope().permits(record) {
        return Err(Refusal::UnknownRecord);
    }
    let current: R::Status = record.status();
    if !current.can_transition_to(target) {
        return Err(Refusal::IllegalTransition {
            from: current.as_str(),
            to: target.as_str(),
        });
    }
    record
        .permits_transition(actor, target)
        .map_err(|rule| Refusal::NotPermitted { rule })
}

/// Moves a record to `target` in place, stamping any dependent fields.
pub fn transition<R: RecordKind>(
    repository: &mut Repository<R>,
    actor: &Actor,
    id: &RecordId,
    target: R::Status,
    clock: &dyn Clock,
) -> TransitionOutcome<R> {
    let outcome: TransitionOutcome<R> = match repository.get_mut(id) {
        None => TransitionOutcome::Unchanged(Refusal::UnknownRecord),
        Some(record) => match check_transition(record, actor, target) {
            Err(refusal) => TransitionOutcome::Unchanged(refusal),
            Ok(()) => {
                record.set_status(target);
                record.stamp_transition(actor, target, clock.today());
                TransitionOutcome::Applied(record.clone())
            }
        },
    };

    match &outcome {
        TransitionOutcome::Applied(_) => info!(
            kind = R::KIND,
            id = %id,
            status = target.as_str(),
            user = actor.name(),
            "Transitioned record"
        ),
        TransitionOutcome::Unchanged(refusal) => debug!(
            kind = R::KIND,
            id = %id,
            status = target.as_str(),
            user = actor.name(),
            reason = %refusal,
            "Transition left record unchanged"
        ),
    }

    outcome
}
