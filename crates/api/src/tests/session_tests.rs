// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use armory::{FixedClock, Inventory, seed};
use armory_domain::{Base, Role, UnassignedPolicy, User};
use time::macros::date;

use crate::{
    ApiError, AuthorizationService, InventoryService, SessionResponse, View, describe_session,
};

use super::helpers::{create_test_service, no_filter, sign_in};

#[test]
fn test_sign_in_by_roster_id() {
    let service = create_test_service();
    let session = sign_in(&service, "3");

    assert_eq!(session.user().name, "Major Williams");
    assert_eq!(session.user().assigned_base, Some(Base::Bravo));
}

#[test]
fn test_sign_in_by_name_ignores_case_and_padding() {
    let service = create_test_service();
    let session = sign_in(&service, "  general smith ");

    assert_eq!(session.user().id, "1");
    assert!(session.actor().is_admin());
}

#[test]
fn test_sign_in_unknown_identity() {
    let service = create_test_service();
    let result = service.sign_in("Private Nobody");

    assert_eq!(
        result,
        Err(ApiError::UnknownIdentity {
            identity: String::from("Private Nobody"),
        })
    );
}

#[test]
fn test_describe_session_lists_scope_and_views() {
    let service = create_test_service();
    let session = sign_in(&service, "Captain Davis");

    let info: SessionResponse = describe_session(&session);

    assert_eq!(info.scope, vec![Base::Charlie]);
    assert!(!info.scope_fallback);
    assert_eq!(
        info.views,
        vec![View::Dashboard, View::Purchases, View::Transfers]
    );
}

#[test]
fn test_admin_session_sees_every_base_and_view() {
    let service = create_test_service();
    let info: SessionResponse = describe_session(&sign_in(&service, "1"));

    assert_eq!(info.scope, Base::ALL.to_vec());
    assert_eq!(info.views, View::ALL.to_vec());
}

#[test]
fn test_describe_session_serializes_views_in_kebab_case() {
    let service = create_test_service();
    let info: SessionResponse = describe_session(&sign_in(&service, "2"));

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["views"][3], "assignments");
    assert_eq!(json["user"]["role"], "base-commander");
    assert_eq!(json["scope"][0], "Alpha Base");
}

#[test]
fn test_logistics_officer_cannot_open_assignments() {
    let service = create_test_service();
    let session = sign_in(&service, "Lieutenant Brown");

    let result = service.list_assignments(&session, &no_filter());

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_can_open_matrix() {
    for view in [View::Dashboard, View::Purchases, View::Transfers] {
        assert!(AuthorizationService::can_open(Role::LogisticsOfficer, view));
    }
    assert!(AuthorizationService::can_open(
        Role::BaseCommander,
        View::Assignments
    ));
    assert!(AuthorizationService::can_open(Role::Admin, View::Assignments));
    assert!(!AuthorizationService::can_open(
        Role::LogisticsOfficer,
        View::Assignments
    ));
}

fn unassigned_service(policy: UnassignedPolicy) -> InventoryService {
    let mut roster: Vec<User> = seed::roster();
    roster.push(User::new(
        "9",
        "Sergeant Nobody",
        Role::LogisticsOfficer,
        None,
    ));
    InventoryService::new(
        Inventory::seeded(),
        roster,
        Box::new(FixedClock(date!(2024 - 03 - 01))),
        policy,
    )
}

#[test]
fn test_unassigned_user_falls_back_to_every_base() {
    let service = unassigned_service(UnassignedPolicy::AllBases);
    let session = sign_in(&service, "9");

    let info = describe_session(&session);
    assert!(info.scope_fallback);
    assert_eq!(info.scope.len(), 4);

    let listing = service.list_purchases(&session, &no_filter()).unwrap();
    assert_eq!(listing.records.len(), 4);
}

#[test]
fn test_unassigned_user_under_strict_policy_sees_nothing() {
    let service = unassigned_service(UnassignedPolicy::Deny);
    let session = sign_in(&service, "9");

    let listing = service.list_transfers(&session, &no_filter()).unwrap();

    assert!(listing.records.is_empty());
    assert!(!listing.can_create.is_allowed());
    assert!(describe_session(&session).scope.is_empty());
}
