use std::sync::Mutex;

use proptest::prelude::*;

use super::*;

fn session(name: &str) -> Session {
    Session {
        user_id: Some(Uuid::from_u128(7)),
        username: Some(name.to_owned()),
        token: Some(format!("tok-{name}")),
    }
}

fn any_session() -> impl Strategy<Value = Session> {
    (
        proptest::option::of(any::<u128>()),
        proptest::option::of("[a-z]{0,12}"),
        proptest::option::of("[A-Za-z0-9]{0,24}"),
    )
        .prop_map(|(id, username, token)| Session {
            user_id: id.map(Uuid::from_u128),
            username,
            token,
        })
}

// =============================================================
// Session
// =============================================================

#[test]
fn anonymous_has_no_identity() {
    let s = Session::anonymous();
    assert!(!s.is_authenticated());
    assert_eq!(s.token(), None);
    assert_eq!(s.user_id, None);
}

#[test]
fn from_login_response_copies_identity_and_token() {
    let resp = LoginResponse {
        id: Uuid::from_u128(42),
        username: "ana".to_owned(),
        token: "tok".to_owned(),
        expires_at: 0,
        manager_of: Vec::new(),
        chair_of: Vec::new(),
        board_of: Vec::new(),
        member_of: Vec::new(),
    };
    let s = Session::from(&resp);
    assert!(s.is_authenticated());
    assert_eq!(s.user_id, Some(Uuid::from_u128(42)));
    assert_eq!(s.token(), Some("tok"));
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn logout_from_anonymous_is_noop() {
    assert_eq!(reduce(&Session::anonymous(), SessionAction::Logout), Session::anonymous());
}

proptest! {
    #[test]
    fn login_then_logout_ends_anonymous(s in any_session(), start in any_session()) {
        let after_login = reduce(&start, SessionAction::Login(s));
        let after_logout = reduce(&after_login, SessionAction::Logout);
        prop_assert_eq!(after_logout, Session::anonymous());
    }

    #[test]
    fn last_login_wins(s1 in any_session(), s2 in any_session()) {
        let store = SessionStore::new();
        store.dispatch(SessionAction::Login(s1));
        store.dispatch(SessionAction::Login(s2.clone()));
        prop_assert_eq!(store.read(), s2);
    }
}

// =============================================================
// Store
// =============================================================

#[test]
fn store_starts_anonymous() {
    assert_eq!(SessionStore::new().read(), Session::anonymous());
}

#[test]
fn clones_share_state() {
    let store = SessionStore::new();
    let other = store.clone();
    store.dispatch(SessionAction::Login(session("ana")));
    assert_eq!(other.read().username.as_deref(), Some("ana"));
}

#[test]
fn subscribers_see_each_transition() {
    let store = SessionStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().unwrap().push(s.username.clone()));

    store.dispatch(SessionAction::Login(session("ana")));
    store.dispatch(SessionAction::Logout);

    assert_eq!(*seen.lock().unwrap(), vec![Some("ana".to_owned()), None]);
}

#[test]
fn unsubscribed_callback_is_not_called() {
    let store = SessionStore::new();
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(SessionAction::Logout);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn subscriber_may_read_store() {
    let store = SessionStore::new();
    let reader = store.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    store.subscribe(move |_| *sink.lock().unwrap() = reader.read().username);

    store.dispatch(SessionAction::Login(session("ana")));
    assert_eq!(seen.lock().unwrap().as_deref(), Some("ana"));
}
