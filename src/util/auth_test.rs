use std::rc::Rc;

use super::*;
use crate::net::testing::FakeTransport;
use crate::state::fetch::use_fetch;
use crate::state::testing::{run_reactive, settle};

fn logged_in() -> Session {
    Session {
        user_id: None,
        username: Some("ana".to_owned()),
        token: Some("valid-token".to_owned()),
    }
}

#[test]
fn should_redirect_when_anonymous() {
    assert!(should_redirect_unauth(&Session::anonymous()));
}

#[test]
fn should_redirect_with_token_but_no_username() {
    let session = Session {
        token: Some("tok".to_owned()),
        ..Session::default()
    };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_logged_in() {
    let session = Session {
        user_id: None,
        username: Some("ana".to_owned()),
        token: Some("tok".to_owned()),
    };
    assert!(!should_redirect_unauth(&session));
}

// =============================================================
// require_token
// =============================================================

#[test]
fn require_token_returns_token_of_logged_in_session() {
    assert_eq!(require_token(&logged_in()), Ok("valid-token".to_owned()));
}

#[test]
fn require_token_fails_locally_when_anonymous() {
    assert!(matches!(require_token(&Session::anonymous()), Err(ApiError::Validation(_))));
    let token_only = Session {
        token: Some("tok".to_owned()),
        ..Session::default()
    };
    assert!(matches!(require_token(&token_only), Err(ApiError::Validation(_))));
}

#[test]
fn anonymous_token_only_read_never_reaches_the_server() {
    let fake = Rc::new(FakeTransport::new().ok("[]"));
    run_reactive(|| {
        let token = require_token(&Session::anonymous());
        let transport = Rc::clone(&fake);
        let data = use_fetch("board_of", move || {
            let fake = Rc::clone(&transport);
            let token = token.clone();
            async move {
                match token {
                    Ok(token) => fake.client().board_of(Some(&token)).await,
                    Err(e) => Err(e),
                }
            }
        });
        settle();
        assert!(matches!(data.get(), FetchState::Error(ApiError::Validation(_))));
    });
    assert!(fake.requests().is_empty());
}

// =============================================================
// logout_on_unauthorized
// =============================================================

/// Session left after a token-carrying read fails with `error`.
fn session_after_failed_read(error: ApiError) -> Session {
    let store = SessionStore::new();
    store.dispatch(SessionAction::Login(logged_in()));
    run_reactive(|| {
        let data = use_fetch("members", move || {
            let error = error.clone();
            async move { Err::<Vec<u32>, _>(error) }
        });
        logout_on_unauthorized(data, store.clone());
        settle();
    });
    store.read()
}

fn http(status: u16) -> ApiError {
    ApiError::Http {
        status,
        reason: String::new(),
    }
}

#[test]
fn rejected_token_logs_out() {
    assert_eq!(session_after_failed_read(http(401)), Session::anonymous());
}

#[test]
fn missing_board_rank_keeps_session() {
    let forbidden = ApiError::Http {
        status: 403,
        reason: "Insufficient permissions".to_owned(),
    };
    assert_eq!(session_after_failed_read(forbidden), logged_in());
}

#[test]
fn other_failures_keep_session() {
    for error in [http(404), http(500), ApiError::Network("down".to_owned())] {
        assert_eq!(session_after_failed_read(error.clone()), logged_in(), "{error}");
    }
}

#[test]
fn successful_read_keeps_session() {
    let store = SessionStore::new();
    store.dispatch(SessionAction::Login(logged_in()));
    run_reactive(|| {
        let data = use_fetch("members", || async { Ok::<_, ApiError>(vec![1_u32]) });
        logout_on_unauthorized(data, store.clone());
        settle();
    });
    assert_eq!(store.read(), logged_in());
}
