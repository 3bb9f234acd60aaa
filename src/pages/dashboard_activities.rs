//! Dashboard tab: activities organized by one association.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::{DashboardNav, DashboardTab};
use crate::components::remote_list::remote_list;
use crate::net::api::ApiClient;
use crate::state::fetch::use_fetch;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;
use crate::util::route::{path_param, uuid_param};

#[component]
pub fn DashboardActivitiesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<ApiClient>();
    install_unauth_redirect(session, use_navigate());

    let raw_id = path_param("asociation").unwrap_or_default();
    let new_href = format!("/activities/new/edit?asociation={raw_id}");
    let filter = uuid_param("asociation", Some(&raw_id));
    let activities = use_fetch("asociation activities", move || {
        let client = client.clone();
        let filter = filter.clone();
        async move {
            match filter {
                Ok(id) => client.list_public_activities(Some(id)).await,
                Err(e) => Err(e),
            }
        }
    });

    view! {
        <main id="dashboard">
            <DashboardNav asociation=raw_id active=DashboardTab::Activities/>
            <div id="dashboard-content">
                <div id="dashboard-list">
                    {remote_list(
                        activities,
                        "Cargando...",
                        "Error cargando las actividades.",
                        |full| {
                            let act = full.activity;
                            let href = format!("/activities/{}/edit", act.id);
                            view! {
                                <a href=href>
                                    <span class="listitem-name">{act.name}</span>
                                    <span class="listitem-desc">{act.description}</span>
                                    <span class="listitem-date">{act.initial_date}</span>
                                    <span class="listitem-room">{act.room}</span>
                                </a>
                            }
                        },
                    )}
                </div>
                <a id="dashboard-new" href=new_href>
                    <span>"Nueva actividad"</span>
                </a>
            </div>
        </main>
    }
}
