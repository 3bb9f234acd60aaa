//! Association detail page with the join control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors see a login hint. Logged-in users get a join button
//! that sends one membership request and then shows "awaiting approval".
//! Whether that indicator needs a 2xx is decided by
//! [`ClientConfig::join_policy`](crate::config::ClientConfig).

#[cfg(test)]
#[path = "asociation_test.rs"]
mod asociation_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::config::{ClientConfig, WritePolicy};
use crate::net::api::{ApiClient, Transport};
use crate::state::fetch::{FetchState, use_fetch};
use crate::state::session::Session;
use crate::util::logo::short_name_to_logo_path;
use crate::util::route::{path_param, reset_on_param_change, uuid_param};

/// Request membership of `asociation` for the session's user.
///
/// Returns whether the "awaiting approval" indicator should be shown. No
/// request is sent for a session without a user id.
pub async fn submit_join<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    asociation: Uuid,
    policy: WritePolicy,
) -> bool {
    let Some(user_id) = session.user_id.filter(|_| session.is_authenticated()) else {
        leptos::logging::warn!("join {asociation}: no logged-in user");
        return false;
    };
    let result = client.request_membership(session.token(), asociation, user_id).await;
    if let Err(e) = &result {
        leptos::logging::warn!("join {asociation}: {e}");
    }
    policy.marks_done(result.is_ok())
}

#[component]
pub fn AsociationPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let asociation = use_fetch("asociation", move || {
        let client = client.clone();
        let id = uuid_param("asociation", path_param("id").as_deref());
        async move {
            match id {
                Ok(id) => client.get_asociation(id).await,
                Err(e) => Err(e),
            }
        }
    });
    reset_on_param_change("id", asociation);

    view! {
        <main id="asociation-backdrop">
            {move || match asociation.get() {
                FetchState::Loading => view! { <span>"Loading asociation..."</span> }.into_any(),
                FetchState::Error(_) => view! { <span>"Error loading asociation."</span> }.into_any(),
                FetchState::Loaded(asoc) => {
                    let links = asoc
                        .links()
                        .into_iter()
                        .map(|(name, url)| {
                            view! {
                                <div>
                                    <span class="asociation-link-name">{name}": "</span>
                                    <span class="asociation-link">{url}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>();
                    let logo = short_name_to_logo_path(&asoc.short_name);
                    view! {
                        <div id="asociation">
                            <div id="asociation-logo">
                                <img src=logo alt="No Media"/>
                                <JoinButton asociation=asoc.id/>
                            </div>
                            <div id="asociation-info">
                                <span id="asociation-name">{asoc.short_name}</span>
                                <span id="asociation-lname">{asoc.long_name}</span>
                                <span id="asociation-desc">{asoc.description}</span>
                                <span id="asociation-link">"Links"</span>
                                {links}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}

#[component]
fn JoinButton(asociation: Uuid) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<ApiClient>();
    let policy = expect_context::<ClientConfig>().join_policy;
    let joined = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let current = session.get_untracked();
        leptos::task::spawn_local(async move {
            let done = submit_join(&client, &current, asociation, policy).await;
            let _ = joined.try_set(done);
            let _ = busy.try_set(false);
        });
    };

    move || {
        if !session.with(Session::is_authenticated) {
            return view! { <span class="button">"Logeate para apuntarte"</span> }.into_any();
        }
        if joined.get() {
            return view! { <span class="button">"Esperando aprobación"</span> }.into_any();
        }
        let on_click = on_click.clone();
        view! {
            <button disabled=move || busy.get() on:click=on_click>
                "Apúntate"
            </button>
        }
        .into_any()
    }
}
