use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::testing::FakeTransport;

fn asoc() -> Uuid {
    Uuid::from_u128(10)
}

fn user() -> Uuid {
    Uuid::from_u128(20)
}

fn filled_draft() -> EditorState {
    let mut state = EditorState::blank(Some(asoc()), Some(user()));
    state.activity.name = "  Torneo ".to_owned();
    state.activity.initial_date = "2024-03-01T18:00".to_owned();
    state
}

fn full_activity_json() -> serde_json::Value {
    serde_json::json!({
        "activity": {
            "id": 4,
            "name": "Torneo",
            "description": "",
            "room": "A-12",
            "initial_date": "2024-03-01T18:00:00",
            "duration": 120,
            "is_multi_session": false,
            "is_creditable": false,
            "is_external": false,
            "is_accepted": true,
            "is_room_accepted": true,
            "is_media_accepted": true,
            "is_registration_needed": true,
            "access": "Members",
            "additional_info": {}
        },
        "organizers": [],
        "people_in_charge": []
    })
}

// =============================================================
// Targets and drafts
// =============================================================

#[test]
fn edit_target_parses_new_and_ids() {
    assert_eq!(EditTarget::parse("new"), Some(EditTarget::New));
    assert_eq!(EditTarget::parse("42"), Some(EditTarget::Existing(42)));
    assert_eq!(EditTarget::parse("abc"), None);
}

#[test]
fn blank_draft_pairs_asociation_with_user() {
    let state = EditorState::blank(Some(asoc()), Some(user()));
    assert_eq!(state.organizers, vec![asoc()]);
    assert_eq!(state.people_in_charge, vec![user()]);
    assert!(!state.activity.is_registration_needed);
}

#[test]
fn loaded_draft_uses_input_date_format() {
    let full: FullActivity = serde_json::from_value(full_activity_json()).unwrap();
    let state = EditorState::from_full(&full);
    assert_eq!(state.activity.initial_date, "2024-03-01T18:00");
    assert!(state.activity.is_registration_needed);
}

#[test]
fn request_trims_name_and_restores_seconds() {
    let body = filled_draft().to_request().unwrap();
    assert_eq!(body.activity.name, "Torneo");
    assert_eq!(body.activity.initial_date, "2024-03-01T18:00:00");
}

#[test]
fn request_rejects_incomplete_drafts() {
    let mut no_name = filled_draft();
    no_name.activity.name = " ".to_owned();
    assert!(no_name.to_request().is_err());

    let mut no_date = filled_draft();
    no_date.activity.initial_date.clear();
    assert!(no_date.to_request().is_err());

    let mut no_organizer = filled_draft();
    no_organizer.organizers.clear();
    assert!(no_organizer.to_request().is_err());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn new_activity_is_posted() {
    let fake = FakeTransport::new().ok("{}");
    block_on(submit_activity(&fake.client(), Some("tok"), EditTarget::New, &filled_draft())).unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/api/activities");
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["organizers"], serde_json::json!([asoc().to_string()]));
    assert_eq!(body["activity"]["initial_date"], "2024-03-01T18:00:00");
}

#[test]
fn existing_activity_is_put() {
    let fake = FakeTransport::new().ok("");
    block_on(submit_activity(&fake.client(), Some("tok"), EditTarget::Existing(4), &filled_draft())).unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].path, "/api/activities/4");
}

#[test]
fn invalid_draft_sends_nothing() {
    let fake = FakeTransport::new();
    let mut draft = filled_draft();
    draft.activity.initial_date = "mañana".to_owned();
    let err = block_on(submit_activity(&fake.client(), Some("tok"), EditTarget::New, &draft)).unwrap_err();

    assert_eq!(err, ApiError::Validation("Fecha no válida.".to_owned()));
    assert!(fake.requests().is_empty());
}
