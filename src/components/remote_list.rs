//! List body shared by every remote-backed list view.
//!
//! DESIGN
//! ======
//! A list renders a fixed placeholder while loading, another on error, and
//! one keyed row per item in response order once loaded. [`list_view`] is
//! the pure decision; [`remote_list`] renders it.

#[cfg(test)]
#[path = "remote_list_test.rs"]
mod remote_list_test;

use std::fmt::Display;

use leptos::prelude::*;

use crate::net::types::{Asociation, FullActivity, Member};
use crate::state::fetch::{FetchState, RemoteData};

/// Items with a stable identifier used as their row key.
pub trait Keyed {
    type Key: Display;

    fn key(&self) -> Self::Key;
}

impl Keyed for Asociation {
    type Key = uuid::Uuid;

    fn key(&self) -> Self::Key {
        self.id
    }
}

impl Keyed for FullActivity {
    type Key = i64;

    fn key(&self) -> Self::Key {
        self.activity.id
    }
}

impl Keyed for Member {
    type Key = i64;

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// What a list view shows for a given fetch state.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Placeholder(&'static str),
    Items(Vec<T>),
}

#[must_use]
pub fn list_view<T: Clone>(state: &FetchState<Vec<T>>, loading: &'static str, error: &'static str) -> ListView<T> {
    match state {
        FetchState::Loading => ListView::Placeholder(loading),
        FetchState::Error(_) => ListView::Placeholder(error),
        FetchState::Loaded(items) => ListView::Items(items.clone()),
    }
}

/// Reactive list body for `data`, one `render(item)` per row.
pub fn remote_list<T, F, V>(
    data: RemoteData<Vec<T>>,
    loading: &'static str,
    error: &'static str,
    render: F,
) -> impl IntoView
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match data.with(|state| list_view(state, loading, error)) {
        ListView::Placeholder(text) => view! { <span class="placeholder">{text}</span> }.into_any(),
        ListView::Items(items) => items
            .into_iter()
            .map(|item| {
                let key = item.key().to_string();
                view! { <div class="listitem" data-key=key>{render(item)}</div> }
            })
            .collect::<Vec<_>>()
            .into_any(),
    }
}
