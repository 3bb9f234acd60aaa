//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root component and shared through
//! Leptos context. Views read the current [`Session`] for identity and the
//! bearer token, and the login/navbar flows dispatch the two transitions.
//!
//! DESIGN
//! ======
//! Transitions are a pure [`reduce`] over `(Session, SessionAction)`; the
//! store applies them under a lock and then notifies subscribers outside
//! it, so a subscriber may read or dispatch without deadlocking. Nothing is
//! persisted: a reload starts anonymous again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::net::types::LoginResponse;

/// Identity and credential of the current user. All `None` means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<Uuid>,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Token to attach as `X-API-Key`, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl From<&LoginResponse> for Session {
    fn from(resp: &LoginResponse) -> Self {
        Self {
            user_id: Some(resp.id),
            username: Some(resp.username.clone()),
            token: Some(resp.token.clone()),
        }
    }
}

/// The only two transitions a session goes through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Replace the current session. The caller is trusted; no validation.
    Login(Session),
    /// Back to anonymous. A no-op when already anonymous.
    Logout,
}

/// Next session after `action`.
#[must_use]
pub fn reduce(_current: &Session, action: SessionAction) -> Session {
    match action {
        SessionAction::Login(session) => session,
        SessionAction::Logout => Session::anonymous(),
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Session,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// Shared, observable session state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.read()).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A store starting anonymous.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session. Never fails.
    #[must_use]
    pub fn read(&self) -> Session {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).session.clone()
    }

    /// Apply `action` and notify every subscriber with the new value.
    pub fn dispatch(&self, action: SessionAction) {
        let (next, subscribers) = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            log_action(&action);
            let next = reduce(&inner.session, action);
            inner.session = next.clone();
            let subscribers: Vec<Subscriber> = inner.subscribers.iter().map(|(_, f)| Arc::clone(f)).collect();
            (next, subscribers)
        };
        for subscriber in subscribers {
            subscriber(&next);
        }
    }

    /// Call `f` after every dispatch until unsubscribed.
    pub fn subscribe(&self, f: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(f)));
        id
    }

    /// Returns whether `id` was still subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }
}

fn log_action(action: &SessionAction) {
    match action {
        SessionAction::Login(session) => leptos::logging::log!(
            "session: login as {}",
            session.username.as_deref().unwrap_or("<none>")
        ),
        SessionAction::Logout => leptos::logging::log!("session: logout"),
    }
}
