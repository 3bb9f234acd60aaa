//! Dashboard tab: pending membership requests with accept and deny.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each row sends one PUT (accept) or DELETE (deny) and then hides itself.
//! As with joining, [`ClientConfig::review_policy`](crate::config::ClientConfig)
//! decides whether a failed request still hides the row.

#[cfg(test)]
#[path = "dashboard_requests_test.rs"]
mod dashboard_requests_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::components::dashboard_nav::{DashboardNav, DashboardTab};
use crate::components::remote_list::remote_list;
use crate::config::{ClientConfig, WritePolicy};
use crate::net::api::{ApiClient, Transport};
use crate::net::types::Member;
use crate::state::fetch::use_fetch;
use crate::state::session::{Session, SessionStore};
use crate::util::auth::{install_unauth_redirect, logout_on_unauthorized, require_token};
use crate::util::route::{path_param, uuid_param};

/// Decision on a membership request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Review {
    Accept,
    Deny,
}

/// Send `review` for `user`'s request to join `asociation`.
///
/// Returns whether the row should be hidden.
pub async fn submit_review<T: Transport>(
    client: &ApiClient<T>,
    token: Option<&str>,
    asociation: Uuid,
    user: Uuid,
    review: Review,
    policy: WritePolicy,
) -> bool {
    let result = match review {
        Review::Accept => client.accept_membership(token, asociation, user).await,
        Review::Deny => client.deny_membership(token, asociation, user).await,
    };
    if let Err(e) = &result {
        leptos::logging::warn!("{review:?} request of {user} to {asociation}: {e}");
    }
    policy.marks_done(result.is_ok())
}

#[component]
pub fn DashboardRequestsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let client = expect_context::<ApiClient>();
    install_unauth_redirect(session, use_navigate());

    let raw_id = path_param("asociation").unwrap_or_default();
    let asociation = uuid_param("asociation", Some(&raw_id));
    let target = asociation
        .and_then(|id| require_token(&session.get_untracked()).map(|token| (id, token)));
    let requests = use_fetch("membership requests", move || {
        let client = client.clone();
        let target = target.clone();
        async move {
            match target {
                Ok((id, token)) => client.list_membership_requests(Some(&token), id).await,
                Err(e) => Err(e),
            }
        }
    });
    logout_on_unauthorized(requests, store);

    view! {
        <main id="dashboard">
            <DashboardNav asociation=raw_id active=DashboardTab::Requests/>
            <div id="dashboard-content">
                <div id="dashboard-list">
                    {remote_list(
                        requests,
                        "Cargando...",
                        "Error cargando las peticiones de membresía.",
                        |member| view! { <RequestRow member=member/> },
                    )}
                </div>
            </div>
        </main>
    }
}

#[component]
fn RequestRow(member: Member) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<ApiClient>();
    let policy = expect_context::<ClientConfig>().review_policy;
    let active = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let asociation = member.asociation;
    let user = member.user.id;

    let review = move |decision: Review| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let token = session.get_untracked().token;
        leptos::task::spawn_local(async move {
            let hide = submit_review(&client, token.as_deref(), asociation, user, decision, policy).await;
            if hide {
                let _ = active.try_set(false);
            }
            let _ = busy.try_set(false);
        });
    };
    let on_deny = {
        let review = review.clone();
        move |_| review(Review::Deny)
    };
    let on_accept = move |_| review(Review::Accept);

    let name = member.user.full_name();
    view! {
        <Show when=move || active.get()>
            <div class="membership-req">
                <span class="listitem-name">{name.clone()}</span>
                <span class="listitem-desc">{member.user.username.clone()}</span>
                <button id="deny-button" disabled=move || busy.get() on:click=on_deny.clone()>
                    "Rechazar"
                </button>
                <button id="accept-button" disabled=move || busy.get() on:click=on_accept.clone()>
                    "Aceptar"
                </button>
            </div>
        </Show>
    }
}
