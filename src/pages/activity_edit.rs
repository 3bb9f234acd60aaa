//! Activity editor at `/activities/{id|new}/edit`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `new` starts from a blank draft organized by the association in the
//! `asociation` query parameter, with the current user in charge. Any other
//! segment is an activity id whose current values are loaded once. Saving
//! POSTs or PUTs a `NewFullActivity` and navigates home.

#[cfg(test)]
#[path = "activity_edit_test.rs"]
mod activity_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::{FullActivity, NaiveActivity, NewFullActivity};
use crate::state::fetch::{FetchState, use_fetch};
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::{input_to_server, server_to_input};
use crate::util::route::{path_param, query_param};

const NEW_SEGMENT: &str = "new";

/// Which activity the editor works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(i64),
}

impl EditTarget {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == NEW_SEGMENT {
            return Some(Self::New);
        }
        raw.parse().ok().map(Self::Existing)
    }
}

/// Editable form state.
///
/// `activity.initial_date` holds the `datetime-local` input value while
/// editing and is converted back on submit.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub activity: NaiveActivity,
    pub organizers: Vec<Uuid>,
    pub people_in_charge: Vec<Uuid>,
}

impl EditorState {
    /// Blank draft for a new activity.
    #[must_use]
    pub fn blank(asociation: Option<Uuid>, user: Option<Uuid>) -> Self {
        Self {
            activity: NaiveActivity::default(),
            organizers: asociation.into_iter().collect(),
            people_in_charge: user.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn from_full(full: &FullActivity) -> Self {
        let mut activity = NaiveActivity::from(&full.activity);
        activity.initial_date = server_to_input(&activity.initial_date);
        Self {
            activity,
            organizers: full.organizers.iter().map(|a| a.id).collect(),
            people_in_charge: full.people_in_charge.iter().map(|u| u.id).collect(),
        }
    }

    /// Request body for the current form values.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for a blank name, an unparseable date, or a
    /// draft with no organizer or no person in charge.
    pub fn to_request(&self) -> Result<NewFullActivity, ApiError> {
        let name = self.activity.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("El nombre es obligatorio.".to_owned()));
        }
        let initial_date = input_to_server(&self.activity.initial_date)
            .ok_or_else(|| ApiError::Validation("Fecha no válida.".to_owned()))?;
        if self.organizers.is_empty() || self.people_in_charge.is_empty() {
            return Err(ApiError::Validation("Falta la asociación o el responsable.".to_owned()));
        }
        Ok(NewFullActivity {
            activity: NaiveActivity {
                name: name.to_owned(),
                initial_date,
                ..self.activity.clone()
            },
            organizers: self.organizers.clone(),
            people_in_charge: self.people_in_charge.clone(),
        })
    }
}

/// Validate `state` and create or update the activity.
///
/// # Errors
///
/// Validation failures (nothing sent) and any request failure.
pub async fn submit_activity<T: Transport>(
    client: &ApiClient<T>,
    token: Option<&str>,
    target: EditTarget,
    state: &EditorState,
) -> Result<(), ApiError> {
    let body = state.to_request()?;
    match target {
        EditTarget::New => client.create_activity(token, &body).await,
        EditTarget::Existing(id) => client.update_activity(token, id, &body).await,
    }
}

#[component]
pub fn ActivityEditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<ApiClient>();
    install_unauth_redirect(session, use_navigate());

    let target = path_param("activity").as_deref().and_then(EditTarget::parse);
    let asociation = query_param("asociation").and_then(|raw| raw.parse::<Uuid>().ok());
    let user = session.get_untracked().user_id;

    let draft = use_fetch("activity editor", move || {
        let client = client.clone();
        async move {
            match target {
                Some(EditTarget::New) => Ok(EditorState::blank(asociation, user)),
                Some(EditTarget::Existing(id)) => client.get_activity(id).await.map(|full| EditorState::from_full(&full)),
                None => Err(ApiError::Validation("invalid activity id".to_owned())),
            }
        }
    });

    view! {
        <main id="activity-edit">
            {move || match (draft.get(), target) {
                (FetchState::Loaded(state), Some(target)) => {
                    view! { <ActivityForm initial=state target=target/> }.into_any()
                }
                (FetchState::Error(_), _) | (_, None) => {
                    view! { <span>"Error cargando la actividad."</span> }.into_any()
                }
                (FetchState::Loading, _) => view! { <span>"Loading..."</span> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn ActivityForm(initial: EditorState, target: EditTarget) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let form = RwSignal::new(initial);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        let token = session.get_untracked().token;
        let state = form.get_untracked();
        leptos::task::spawn_local(async move {
            match submit_activity(&client, token.as_deref(), target, &state).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("saving activity failed: {e}");
                    let message = match e {
                        ApiError::Validation(msg) => msg,
                        _ => "No se pudo guardar la actividad.".to_owned(),
                    };
                    let _ = info.try_set(message);
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let submit_label = match target {
        EditTarget::New => "Crear",
        EditTarget::Existing(_) => "Guardar",
    };

    view! {
        <form id="activity-form" on:submit=on_submit>
            <div>
                <span>"Nombre: "</span>
                <input
                    type="text"
                    prop:value=move || form.with(|s| s.activity.name.clone())
                    on:input=move |ev| form.update(|s| s.activity.name = event_target_value(&ev))
                />
            </div>
            <div>
                <span>"Descripción: "</span>
                <input
                    type="text"
                    prop:value=move || form.with(|s| s.activity.description.clone())
                    on:input=move |ev| form.update(|s| s.activity.description = event_target_value(&ev))
                />
            </div>
            <div>
                <span>"Sala: "</span>
                <input
                    type="text"
                    prop:value=move || form.with(|s| s.activity.room.clone())
                    on:input=move |ev| form.update(|s| s.activity.room = event_target_value(&ev))
                />
            </div>
            <div>
                <span>"Fecha: "</span>
                <input
                    type="datetime-local"
                    prop:value=move || form.with(|s| s.activity.initial_date.clone())
                    on:input=move |ev| form.update(|s| s.activity.initial_date = event_target_value(&ev))
                />
            </div>
            <div>
                <span>"Necesita registro: "</span>
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|s| s.activity.is_registration_needed)
                    on:change=move |ev| form.update(|s| s.activity.is_registration_needed = event_target_checked(&ev))
                />
            </div>
            <button type="submit" disabled=move || busy.get()>{submit_label}</button>
            <span class="form-info">{move || info.get()}</span>
        </form>
    }
}
