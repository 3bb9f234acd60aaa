//! Route parameter parsing.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use uuid::Uuid;

use crate::net::error::ApiError;
use crate::state::fetch::RemoteData;

/// Parse a UUID route parameter; a missing or malformed one is a validation error.
///
/// # Errors
///
/// [`ApiError::Validation`] naming `name`.
pub fn uuid_param(name: &str, raw: Option<&str>) -> Result<Uuid, ApiError> {
    raw.and_then(|r| r.parse().ok())
        .ok_or_else(|| ApiError::Validation(format!("invalid {name} id")))
}

/// Raw value of path parameter `name` for the current route.
///
/// Read untracked. The router keeps a view mounted when only its parameters
/// change, so a view that must follow such a change also calls
/// [`reset_on_param_change`] and reads the parameter inside its request.
#[must_use]
pub fn path_param(name: &str) -> Option<String> {
    use_params_map().with_untracked(|p| p.get(name))
}

/// Raw value of query parameter `name` for the current route.
#[must_use]
pub fn query_param(name: &str) -> Option<String> {
    use_query_map().with_untracked(|q| q.get(name))
}

/// Re-issue `data`'s request whenever path parameter `name` changes while the
/// route stays mounted.
pub fn reset_on_param_change<T: Send + Sync + 'static>(name: &'static str, data: RemoteData<T>) {
    let params = use_params_map();
    reset_on_change(move || params.with(|p| p.get(name)), data);
}

/// Reset `data` each time `read` yields a value different from the last one.
pub(crate) fn reset_on_change<T, V>(read: impl Fn() -> V + 'static, data: RemoteData<T>)
where
    T: Send + Sync + 'static,
    V: PartialEq + 'static,
{
    Effect::new(move |previous: Option<V>| {
        let current = read();
        if previous.is_some_and(|p| p != current) {
            data.reset();
        }
        current
    });
}
