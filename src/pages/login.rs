//! Login page: email + password against `/auth/login`.
//!
//! A successful login replaces the session and navigates home. Any failure
//! leaves the session untouched and shows a short message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::{Session, SessionAction, SessionStore};

const MISSING_FIELDS: &str = "Introduce tu correo y tu contraseña.";

/// Trim and check the login form.
///
/// # Errors
///
/// [`ApiError::Validation`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(MISSING_FIELDS.to_owned()));
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate, log in, and on success store the new session.
///
/// # Errors
///
/// Validation failures (nothing sent) and any login request failure; the
/// session store is only touched on success.
pub async fn submit_login<T: Transport>(
    client: &ApiClient<T>,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let body = validate_login(email, password)?;
    let resp = client.login(&body).await?;
    store.dispatch(SessionAction::Login(Session::from(&resp)));
    Ok(())
}

/// Text shown under the form for a failed attempt.
#[must_use]
pub fn login_error_message(err: &ApiError) -> &str {
    match err {
        ApiError::Validation(msg) if msg == MISSING_FIELDS => msg.as_str(),
        e if e.is_unauthorized() => "Correo o contraseña incorrectos.",
        ApiError::Network(_) => "No hay conexión con el servidor.",
        _ => "No se pudo iniciar sesión.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let client = client.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        leptos::task::spawn_local(async move {
            match submit_login(&client, &store, &email_value, &password_value).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    let _ = info.try_set(login_error_message(&e).to_owned());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <main id="login-backdrop">
            <form id="login-box" on:submit=on_submit>
                <span>"Correo"</span>
                <input
                    name="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <span>"Contraseña"</span>
                <input
                    name="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Login"</button>
                <span class="form-info">{move || info.get()}</span>
            </form>
        </main>
    }
}
