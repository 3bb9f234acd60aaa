//! Public list of associations.

use leptos::prelude::*;

use crate::components::remote_list::remote_list;
use crate::net::api::ApiClient;
use crate::state::fetch::use_fetch;
use crate::util::logo::short_name_to_logo_path;

#[component]
pub fn AsociationsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let asociations = use_fetch("asociations", move || {
        let client = client.clone();
        async move { client.list_asociations().await }
    });

    view! {
        <main id="asociations-backdrop">
            <div id="asociations">
                {remote_list(
                    asociations,
                    "Loading asociations...",
                    "Error loading asociations.",
                    |asoc| {
                        let href = format!("/asociations/{}", asoc.id);
                        let logo = short_name_to_logo_path(&asoc.short_name);
                        view! {
                            <a href=href>
                                <div>
                                    <img src=logo alt="No Media"/>
                                </div>
                                <span>{asoc.short_name}</span>
                            </a>
                        }
                    },
                )}
            </div>
        </main>
    }
}
