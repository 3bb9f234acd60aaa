//! Wire DTOs for the Danubit REST API.
//!
//! DESIGN
//! ======
//! Each resource has an explicit struct mirroring the server's JSON. Every
//! inbound type denies unknown fields so a schema drift surfaces as a
//! validation error at the decode boundary instead of a silently empty view.
//! Enum variants keep the server's PascalCase names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Who may see an activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAccess {
    #[default]
    Public,
    Members,
    Board,
}

/// A member's rank on an association's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Plain member, not on the board.
    False,
    Board,
    ViceChair,
    Chair,
}

/// A registered platform user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub activated: bool,
    pub password_hash: Option<String>,
    pub additional_info: Value,
}

impl User {
    /// `"Name Surname"`, trimmed when either part is blank.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_owned()
    }
}

/// A student association.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Asociation {
    pub id: Uuid,
    pub short_name: String,
    pub long_name: String,
    pub email: String,
    pub description: String,
    pub is_public_joinable: bool,
    /// Free-form metadata; `links` is an object of `name -> url`.
    pub info: Value,
    pub manager: Option<i64>,
    pub logo: Option<i64>,
}

impl Asociation {
    /// Named links from `info.links`, sorted by name.
    ///
    /// Missing, null, or non-object `links` yield an empty list. Non-string
    /// values are rendered as their JSON text.
    #[must_use]
    pub fn links(&self) -> Vec<(String, String)> {
        let Some(links) = self.info.get("links").and_then(Value::as_object) else {
            return Vec::new();
        };
        let mut out: Vec<(String, String)> = links
            .iter()
            .map(|(name, url)| {
                let url = url.as_str().map_or_else(|| url.to_string(), str::to_owned);
                (name.clone(), url)
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// An event hosted by one or more associations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub room: String,
    /// Local date-time as sent by the server (`YYYY-MM-DDTHH:MM:SS`).
    pub initial_date: String,
    pub duration: i32,
    pub is_multi_session: bool,
    pub is_creditable: bool,
    pub is_external: bool,
    pub is_accepted: bool,
    pub is_room_accepted: bool,
    pub is_media_accepted: bool,
    pub is_registration_needed: bool,
    pub access: ActivityAccess,
    pub additional_info: Value,
}

/// An activity together with its organizers and the people in charge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullActivity {
    pub activity: Activity,
    pub organizers: Vec<Asociation>,
    pub people_in_charge: Vec<User>,
}

/// Activity fields accepted by create/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NaiveActivity {
    pub name: String,
    pub description: String,
    pub room: String,
    pub initial_date: String,
    pub is_multi_session: bool,
    pub is_creditable: bool,
    pub is_external: bool,
    pub is_accepted: bool,
    pub is_room_accepted: bool,
    pub is_media_accepted: bool,
    pub is_registration_needed: bool,
    pub access: ActivityAccess,
    pub additional_info: Option<Value>,
}

impl Default for NaiveActivity {
    /// Blank draft used by the "new activity" editor.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            room: String::new(),
            initial_date: String::new(),
            is_multi_session: false,
            is_creditable: false,
            is_external: true,
            is_accepted: true,
            is_room_accepted: true,
            is_media_accepted: true,
            is_registration_needed: false,
            access: ActivityAccess::Public,
            additional_info: None,
        }
    }
}

impl From<&Activity> for NaiveActivity {
    fn from(a: &Activity) -> Self {
        Self {
            name: a.name.clone(),
            description: a.description.clone(),
            room: a.room.clone(),
            initial_date: a.initial_date.clone(),
            is_multi_session: a.is_multi_session,
            is_creditable: a.is_creditable,
            is_external: a.is_external,
            is_accepted: a.is_accepted,
            is_room_accepted: a.is_room_accepted,
            is_media_accepted: a.is_media_accepted,
            is_registration_needed: a.is_registration_needed,
            access: a.access,
            additional_info: Some(a.additional_info.clone()),
        }
    }
}

/// Body of `POST /api/activities` and `PUT /api/activities/{id}`.
///
/// `organizers[i]` is paired with `people_in_charge[i]` by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewFullActivity {
    pub activity: NaiveActivity,
    pub organizers: Vec<Uuid>,
    pub people_in_charge: Vec<Uuid>,
}

/// A membership row joined with its user, as listed for members and requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    pub id: i64,
    pub user: User,
    pub asociation: Uuid,
    pub is_accepted: bool,
    pub accepted_date: Option<String>,
    pub expiry_date: Option<String>,
    pub label: Option<String>,
    pub board_status: BoardStatus,
}

/// Body of `POST /api/asociations/{id}/membershipRequests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRequest {
    pub user_id: Uuid,
    pub asociation: Uuid,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    /// Bearer credential sent back as `X-API-Key`.
    pub token: String,
    /// Expiry as seconds since the Unix epoch. Informational only.
    pub expires_at: u64,
    pub manager_of: Vec<Uuid>,
    pub chair_of: Vec<Uuid>,
    pub board_of: Vec<Uuid>,
    pub member_of: Vec<Uuid>,
}
