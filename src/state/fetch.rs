//! One-request-per-view fetch lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list and detail page loads its data through [`use_fetch`], so they
//! all behave the same under slow, failing, or successful responses: a
//! loading placeholder first, then exactly one of the payload or an error.
//!
//! DESIGN
//! ======
//! [`FetchLifecycle`] is the plain state machine. It hands out a [`Ticket`]
//! the first time it is asked to begin and refuses again until
//! [`FetchLifecycle::reset`]; this is the "not yet requested" guard that
//! keeps re-renders from re-issuing the request. A reset also bumps the
//! generation so a response from before the reset is dropped instead of
//! overwriting the newer request's state.
//!
//! [`use_fetch`] wraps the machine in a signal and drives it from one
//! `Effect` + `spawn_local` task. No cancellation: if the view unmounts
//! first, the late result is discarded when the signal is gone.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Status of one remote read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Error(ApiError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => Self::Loaded(payload),
            Err(e) => Self::Error(e),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The payload, only once loaded.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Loaded(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Proof that a request was started for a given generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchLifecycle<T> {
    state: FetchState<T>,
    requested: bool,
    generation: u64,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            state: FetchState::default(),
            requested: false,
            generation: 0,
        }
    }
}

impl<T> FetchLifecycle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Start the request if it has not been started yet.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.requested {
            return None;
        }
        self.requested = true;
        self.state = FetchState::Loading;
        Some(Ticket(self.generation))
    }

    /// Record the outcome for `ticket`. Returns `false` and leaves the state
    /// alone when the ticket is stale or the request already settled.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            return false;
        }
        self.state = FetchState::from_result(result);
        true
    }

    /// Back to loading; the next [`begin`](Self::begin) issues a new request.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.requested = false;
        self.state = FetchState::Loading;
    }
}

/// Reactive handle to a view's fetch lifecycle.
pub struct RemoteData<T: Send + Sync + 'static> {
    lifecycle: RwSignal<FetchLifecycle<T>>,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: Send + Sync + 'static> RemoteData<T> {
    /// Read the current state, tracking it.
    pub fn with<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.lifecycle.with(|l| f(l.state()))
    }

    /// Re-enter loading and issue the request again.
    pub fn reset(&self) {
        self.lifecycle.update(FetchLifecycle::reset);
    }
}

impl<T: Clone + Send + Sync + 'static> RemoteData<T> {
    #[must_use]
    pub fn get(&self) -> FetchState<T> {
        self.with(Clone::clone)
    }
}

/// Issue `request()` once for this view and track its outcome.
///
/// `request` is called again only after [`RemoteData::reset`].
pub fn use_fetch<T, F, Fut>(label: &'static str, request: F) -> RemoteData<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let lifecycle = RwSignal::new(FetchLifecycle::new());

    Effect::new(move || {
        if lifecycle.with(FetchLifecycle::is_requested) {
            return;
        }
        let Some(ticket) = lifecycle.try_update(FetchLifecycle::begin).flatten() else {
            return;
        };
        let pending = request();
        leptos::task::spawn_local(async move {
            let result = pending.await;
            if let Err(e) = &result {
                leptos::logging::warn!("{label}: {e}");
            }
            let _ = lifecycle.try_update(|l| l.settle(ticket, result));
        });
    });

    RemoteData { lifecycle }
}
