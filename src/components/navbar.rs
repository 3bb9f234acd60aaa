//! Top navigation bar.
//!
//! Shows the site links on the left and, on the right, either the login and
//! signup links or the current username with a logout button.

use leptos::prelude::*;

use crate::state::session::{Session, SessionAction, SessionStore};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();

    let user_header = move || match session.get().username {
        Some(username) => {
            let store = store.clone();
            view! {
                <div>
                    <a id="bar-accountbutton" class="button" href="/dashboard">
                        {username}
                    </a>
                    <button
                        id="bar-logout-bt"
                        class="button"
                        on:click=move |_| store.dispatch(SessionAction::Logout)
                    >
                        "Salir"
                    </button>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div>
                <a id="bar-login-bt" class="button" href="/login">"Login"</a>
                <a id="bar-signup-bt" class="button" href="/signup">"Regístrate"</a>
            </div>
        }
        .into_any(),
    };

    view! {
        <header id="bar">
            <div id="bar-left">
                <a id="bar-logo" href="/">
                    <img src="/logo.svg" alt="Danubit Logo"/>
                </a>
                <ul id="bar-nav">
                    <li><a href="/asociations">"Asociaciones"</a></li>
                    <li><a href="/activities">"Actividades"</a></li>
                </ul>
            </div>
            <div id="bar-right">{user_header}</div>
        </header>
    }
}
