//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main id="home">
            <h1>"Danubit"</h1>
            <p>"Asociaciones y actividades de la escuela en un solo sitio."</p>
            <div id="home-links">
                <a class="button" href="/asociations">"Ver asociaciones"</a>
                <a class="button" href="/activities">"Ver actividades"</a>
            </div>
        </main>
    }
}
