//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creates the single [`SessionStore`] for the tab and mirrors it into an
//! `RwSignal<Session>` through a subscription, so views re-render on login
//! and logout. The resolved [`ClientConfig`] and an [`ApiClient`] built from
//! it are provided alongside.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    activities::ActivitiesPage, activity_edit::ActivityEditPage, asociation::AsociationPage,
    asociations::AsociationsPage, dashboard::DashboardPage, dashboard_activities::DashboardActivitiesPage,
    dashboard_members::DashboardMembersPage, dashboard_requests::DashboardRequestsPage, home::HomePage,
    login::LoginPage, signup::SignupPage,
};
use crate::state::session::SessionStore;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let client = ApiClient::from_config(&config);

    let store = SessionStore::new();
    let session = RwSignal::new(store.read());
    let subscription = store.subscribe(move |next| {
        let _ = session.try_set(next.clone());
    });
    on_cleanup({
        let store = store.clone();
        move || {
            store.unsubscribe(subscription);
        }
    });

    provide_context(config);
    provide_context(client);
    provide_context(store);
    provide_context(session);

    view! {
        <Title text="Danubit"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("asociations") view=AsociationsPage/>
                <Route path=(StaticSegment("asociations"), ParamSegment("id")) view=AsociationPage/>
                <Route path=StaticSegment("activities") view=ActivitiesPage/>
                <Route
                    path=(StaticSegment("activities"), ParamSegment("activity"), StaticSegment("edit"))
                    view=ActivityEditPage
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), ParamSegment("asociation"), StaticSegment("activities"))
                    view=DashboardActivitiesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), ParamSegment("asociation"), StaticSegment("members"))
                    view=DashboardMembersPage
                />
                <Route
                    path=(StaticSegment("dashboard"), ParamSegment("asociation"), StaticSegment("membershipRequests"))
                    view=DashboardRequestsPage
                />
            </Routes>
        </Router>
    }
}
