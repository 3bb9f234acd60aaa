//! REST API helpers for communicating with the Danubit server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): the browser transport is a stub returning
//! [`ApiError::Unavailable`]; tests plug in their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `Result<_, ApiError>`. Status checks happen in the
//! transport, body decoding happens here, so a 2xx with a malformed body and
//! a 500 both come back as errors the views can render the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::{ApiError, decode_body};
use super::types::{
    Asociation, FullActivity, LoginRequest, LoginResponse, Member, MembershipRequest,
    NewFullActivity, SignupRequest,
};
use crate::config::ClientConfig;

/// Header carrying the session token on authenticated requests.
pub const API_KEY_HEADER: &str = "X-API-Key";

const ASOCIATIONS_PATH: &str = "/api/asociations";
const ACTIVITIES_PATH: &str = "/api/activities";
const BOARD_OF_PATH: &str = "/api/session/board_of";
const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";

fn public_activities_path(asociation_filter: Option<Uuid>) -> String {
    match asociation_filter {
        Some(id) => format!("/api/publicActivities?asociation_filter={id}"),
        None => "/api/publicActivities".to_owned(),
    }
}

fn activity_path(activity_id: i64) -> String {
    format!("{ACTIVITIES_PATH}/{activity_id}")
}

fn asociation_path(asociation_id: Uuid) -> String {
    format!("{ASOCIATIONS_PATH}/{asociation_id}")
}

fn members_path(asociation_id: Uuid) -> String {
    format!("{ASOCIATIONS_PATH}/{asociation_id}/members")
}

fn membership_requests_path(asociation_id: Uuid) -> String {
    format!("{ASOCIATIONS_PATH}/{asociation_id}/membershipRequests")
}

fn membership_request_path(asociation_id: Uuid, user_id: Uuid) -> String {
    format!("{ASOCIATIONS_PATH}/{asociation_id}/membershipRequests/{user_id}")
}

/// The `X-API-Key` header pair for `token`, if there is a usable one.
pub(crate) fn auth_header(token: Option<&str>) -> Option<(&'static str, &str)> {
    token
        .filter(|t| !t.trim().is_empty())
        .map(|t| (API_KEY_HEADER, t))
}

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared request, independent of how it is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus query, starting with `/`.
    pub path: String,
    pub token: Option<String>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, token: Option<&str>) -> Self {
        Self {
            method,
            path: path.into(),
            token: token.map(str::to_owned),
            body: None,
        }
    }

    fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Validation(e.to_string()))?;
        self.body = Some(json);
        Ok(self)
    }
}

/// Sends an [`ApiRequest`] and yields the body of a 2xx response.
///
/// Implementations must map non-2xx statuses to [`ApiError::Http`] and
/// transport failures to [`ApiError::Network`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError>;
}

/// `gloo-net` transport rooted at the configured API host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Transport for BrowserTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Accept", "application/json");
            if let Some((name, value)) = auth_header(request.token.as_deref()) {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(json) => builder
                    .header("Content-Type", "application/json")
                    .body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = outgoing
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ApiError::from_status(resp.status(), &resp.status_text())?;
            resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// Typed client for every endpoint the views use.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Browser client for the configured API host.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(BrowserTransport::new(config.base_url()))
    }
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.transport.execute(request).await?;
        decode_body(&body)
    }

    async fn write(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.transport.execute(request).await.map(|_| ())
    }

    /// `GET /api/publicActivities`, optionally filtered to one organizer.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn list_public_activities(
        &self,
        asociation_filter: Option<Uuid>,
    ) -> Result<Vec<FullActivity>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, public_activities_path(asociation_filter), None))
            .await
    }

    /// `GET /api/activities/{id}`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn get_activity(&self, activity_id: i64) -> Result<FullActivity, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, activity_path(activity_id), None))
            .await
    }

    /// `POST /api/activities`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn create_activity(&self, token: Option<&str>, body: &NewFullActivity) -> Result<(), ApiError> {
        self.write(ApiRequest::new(Method::Post, ACTIVITIES_PATH, token).with_json(body)?)
            .await
    }

    /// `PUT /api/activities/{id}`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn update_activity(
        &self,
        token: Option<&str>,
        activity_id: i64,
        body: &NewFullActivity,
    ) -> Result<(), ApiError> {
        self.write(ApiRequest::new(Method::Put, activity_path(activity_id), token).with_json(body)?)
            .await
    }

    /// `GET /api/asociations`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn list_asociations(&self) -> Result<Vec<Asociation>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, ASOCIATIONS_PATH, None)).await
    }

    /// `GET /api/asociations/{id}`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn get_asociation(&self, asociation_id: Uuid) -> Result<Asociation, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, asociation_path(asociation_id), None))
            .await
    }

    /// `POST /api/asociations/{id}/membershipRequests` with `{user_id, asociation}`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn request_membership(
        &self,
        token: Option<&str>,
        asociation_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        let body = MembershipRequest {
            user_id,
            asociation: asociation_id,
        };
        self.write(
            ApiRequest::new(Method::Post, membership_requests_path(asociation_id), token).with_json(&body)?,
        )
        .await
    }

    /// `GET /api/asociations/{id}/members`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn list_members(&self, token: Option<&str>, asociation_id: Uuid) -> Result<Vec<Member>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, members_path(asociation_id), token))
            .await
    }

    /// `GET /api/asociations/{id}/membershipRequests`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn list_membership_requests(
        &self,
        token: Option<&str>,
        asociation_id: Uuid,
    ) -> Result<Vec<Member>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, membership_requests_path(asociation_id), token))
            .await
    }

    /// `PUT /api/asociations/{id}/membershipRequests/{user_id}`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn accept_membership(&self, token: Option<&str>, asociation_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        self.write(ApiRequest::new(
            Method::Put,
            membership_request_path(asociation_id, user_id),
            token,
        ))
        .await
    }

    /// `DELETE /api/asociations/{id}/membershipRequests/{user_id}`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn deny_membership(&self, token: Option<&str>, asociation_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        self.write(ApiRequest::new(
            Method::Delete,
            membership_request_path(asociation_id, user_id),
            token,
        ))
        .await
    }

    /// `GET /api/session/board_of`: associations the token's user sits on the board of.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure.
    pub async fn board_of(&self, token: Option<&str>) -> Result<Vec<Asociation>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, BOARD_OF_PATH, token)).await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure. Wrong credentials come back
    /// as [`ApiError::Http`].
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.fetch(ApiRequest::new(Method::Post, LOGIN_PATH, None).with_json(body)?)
            .await
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn signup(&self, body: &SignupRequest) -> Result<(), ApiError> {
        self.write(ApiRequest::new(Method::Post, SIGNUP_PATH, None).with_json(body)?)
            .await
    }
}
