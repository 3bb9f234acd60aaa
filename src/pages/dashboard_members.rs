//! Dashboard tab: accepted members of one association.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::{DashboardNav, DashboardTab};
use crate::components::remote_list::remote_list;
use crate::net::api::ApiClient;
use crate::state::fetch::use_fetch;
use crate::state::session::{Session, SessionStore};
use crate::util::auth::{install_unauth_redirect, logout_on_unauthorized, require_token};
use crate::util::route::{path_param, uuid_param};

#[component]
pub fn DashboardMembersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let client = expect_context::<ApiClient>();
    install_unauth_redirect(session, use_navigate());

    let raw_id = path_param("asociation").unwrap_or_default();
    let asociation = uuid_param("asociation", Some(&raw_id));
    let target = asociation
        .and_then(|id| require_token(&session.get_untracked()).map(|token| (id, token)));
    let members = use_fetch("members", move || {
        let client = client.clone();
        let target = target.clone();
        async move {
            match target {
                Ok((id, token)) => client.list_members(Some(&token), id).await,
                Err(e) => Err(e),
            }
        }
    });
    logout_on_unauthorized(members, store);

    view! {
        <main id="dashboard">
            <DashboardNav asociation=raw_id active=DashboardTab::Members/>
            <div id="dashboard-content">
                <div id="dashboard-list">
                    {remote_list(
                        members,
                        "Cargando...",
                        "Error cargando tus miembros.",
                        |member| {
                            let name = member.user.full_name();
                            let since = member.accepted_date.unwrap_or_else(|| "-".to_owned());
                            view! {
                                <span class="listitem-name">{name}</span>
                                <span class="listitem-desc">{member.user.username}</span>
                                <span class="listitem-date">"Desde "{since}</span>
                            }
                        },
                    )}
                </div>
            </div>
        </main>
    }
}
