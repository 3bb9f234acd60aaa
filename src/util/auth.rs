//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::fetch::{FetchState, RemoteData};
use crate::state::session::{Session, SessionAction, SessionStore};

pub const LOGIN_ROUTE: &str = "/login";

/// Whether a guarded route should bounce this session to the login page.
#[must_use]
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Token for a read the server only serves to logged-in users.
///
/// # Errors
///
/// [`ApiError::Validation`] for an anonymous session, so the view fails
/// locally and no request goes out without `X-API-Key`.
pub fn require_token(session: &Session) -> Result<String, ApiError> {
    session
        .token()
        .filter(|_| session.is_authenticated())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Validation("not logged in".to_owned()))
}

/// Redirect to `/login` whenever the session is anonymous.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Drop the session when `data` failed because the server rejected its token.
///
/// Only a 401 counts; a 403 stays the view's own error. Combined with
/// [`install_unauth_redirect`] this sends the user back to login.
pub fn logout_on_unauthorized<T: Send + Sync + 'static>(data: RemoteData<T>, store: SessionStore) {
    Effect::new(move || {
        let rejected = data.with(|state| matches!(state, FetchState::Error(e) if e.is_unauthorized()));
        if rejected {
            leptos::logging::warn!("session token rejected; logging out");
            store.dispatch(SessionAction::Logout);
        }
    });
}
