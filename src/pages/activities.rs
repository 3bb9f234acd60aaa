//! Public list of activities.
//!
//! Activities that need registration get a register toggle. The toggle is
//! local to the page; nothing is sent to the server.

use leptos::prelude::*;

use crate::components::remote_list::remote_list;
use crate::net::api::ApiClient;
use crate::net::types::Activity;
use crate::state::fetch::use_fetch;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let activities = use_fetch("public activities", move || {
        let client = client.clone();
        async move { client.list_public_activities(None).await }
    });

    view! {
        <main id="activities-backdrop">
            <div id="activities">
                {remote_list(
                    activities,
                    "Loading activities...",
                    "Error loading activities.",
                    |full| {
                        let act = full.activity;
                        let date = activity_date_label(&act);
                        let register = act.is_registration_needed.then(|| view! { <RegisterButton/> });
                        view! {
                            <span class="activity-name">{act.name}</span>
                            <span class="activity-desc">{act.description}</span>
                            <span class="activity-room">{act.room}</span>
                            <span class="activity-date">{date}</span>
                            {register}
                        }
                    },
                )}
            </div>
        </main>
    }
}

fn activity_date_label(act: &Activity) -> String {
    act.initial_date.replacen('T', " ", 1)
}

#[component]
fn RegisterButton() -> impl IntoView {
    let registered = RwSignal::new(false);
    view! {
        <button on:click=move |_| registered.set(true)>
            {move || if registered.get() { "Apuntado/a" } else { "Apuntarse" }}
        </button>
    }
}
