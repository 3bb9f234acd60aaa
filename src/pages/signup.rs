//! Signup page.
//!
//! The form is checked locally first; a blank required field or a password
//! that does not match its confirmation never reaches the server. A
//! successful signup navigates home without logging in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::SignupRequest;

const MISSING_FIELDS: &str = "Rellena usuario, correo y contraseña.";
const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden.";

/// Raw signup form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

/// Check the form and build the request body.
///
/// # Errors
///
/// [`ApiError::Validation`] for a blank username, email, or password, or a
/// confirmation that does not match.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ApiError> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(ApiError::Validation(MISSING_FIELDS.to_owned()));
    }
    if form.password != form.repeat_password {
        return Err(ApiError::Validation(PASSWORD_MISMATCH.to_owned()));
    }
    Ok(SignupRequest {
        username: username.to_owned(),
        name: form.name.trim().to_owned(),
        surname: form.surname.trim().to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate and send the signup request.
///
/// # Errors
///
/// Validation failures (nothing sent) and any request failure.
pub async fn submit_signup<T: Transport>(client: &ApiClient<T>, form: &SignupForm) -> Result<(), ApiError> {
    let body = validate_signup(form)?;
    client.signup(&body).await
}

#[must_use]
pub fn signup_error_message(err: &ApiError) -> &str {
    match err {
        ApiError::Validation(msg) if msg == MISSING_FIELDS || msg == PASSWORD_MISMATCH => msg.as_str(),
        ApiError::Http { status: 409, .. } => "Ese usuario o correo ya existe.",
        ApiError::Network(_) => "No hay conexión con el servidor.",
        _ => "No se pudo completar el registro.",
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
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
        let navigate = navigate.clone();
        let form = SignupForm {
            username: username.get_untracked(),
            name: name.get_untracked(),
            surname: surname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match submit_signup(&client, &form).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    let _ = info.try_set(signup_error_message(&e).to_owned());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <main id="signup-backdrop">
            <form id="signup-box" on:submit=on_submit>
                <FormField label="Nombre de usuario" value=username/>
                <FormField label="Nombre" value=name/>
                <FormField label="Apellidos" value=surname/>
                <FormField label="Correo" kind="email" value=email/>
                <FormField label="Contraseña" kind="password" value=password/>
                <FormField label="Repite la contraseña" kind="password" value=repeat_password/>
                <button type="submit" disabled=move || busy.get()>"Registrarse"</button>
                <span class="form-info">{move || info.get()}</span>
            </form>
        </main>
    }
}

#[component]
fn FormField(label: &'static str, #[prop(default = "text")] kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <span>{label}</span>
        <input
            type=kind
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
