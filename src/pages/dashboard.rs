//! Dashboard landing: the associations the user sits on the board of.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Anonymous sessions are redirected to `/login`, and a
//! token the server rejects ends the session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::remote_list::remote_list;
use crate::net::api::ApiClient;
use crate::state::fetch::use_fetch;
use crate::state::session::{Session, SessionStore};
use crate::util::auth::{install_unauth_redirect, logout_on_unauthorized, require_token};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <main id="dashboard">
            <AsociationSidepanel/>
            <div id="dashboard-content">
                <span>"Elige una asociación en el panel de la izquierda."</span>
            </div>
        </main>
    }
}

#[component]
fn AsociationSidepanel() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let client = expect_context::<ApiClient>();
    let token = require_token(&session.get_untracked());

    let asociations = use_fetch("board_of", move || {
        let client = client.clone();
        let token = token.clone();
        async move {
            match token {
                Ok(token) => client.board_of(Some(&token)).await,
                Err(e) => Err(e),
            }
        }
    });
    logout_on_unauthorized(asociations, store);

    view! {
        <div id="dashboard-nav">
            {remote_list(
                asociations,
                "Cargando...",
                "Error cargando tus asociaciones.",
                |asoc| {
                    let href = format!("/dashboard/{}/activities", asoc.id);
                    view! {
                        <a href=href>
                            <span>{asoc.short_name}</span>
                        </a>
                    }
                },
            )}
        </div>
    }
}
