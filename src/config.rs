//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so settings are captured with
//! `option_env!` when the crate is built. The resolved [`ClientConfig`] is
//! provided to views through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API host; matches the address the Danubit API server binds.
pub const DEFAULT_API_HOST: &str = "localhost:2345";

/// Default log level for the browser console logger.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How a write flow treats its local "done" indicator when the server answers.
///
/// Applies to the join button and the accept/deny buttons of the requests view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Flip the indicator once the request settles, whatever the status.
    #[default]
    Optimistic,
    /// Flip the indicator only on a 2xx response.
    ConfirmOnSuccess,
}

impl WritePolicy {
    /// Parse a policy name. Accepts `optimistic` and `confirm`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Some(Self::Optimistic),
            "confirm" | "confirm_on_success" => Some(Self::ConfirmOnSuccess),
            _ => None,
        }
    }

    /// Whether the indicator should flip after a request settled with `succeeded`.
    #[must_use]
    pub fn marks_done(self, succeeded: bool) -> bool {
        match self {
            Self::Optimistic => true,
            Self::ConfirmOnSuccess => succeeded,
        }
    }
}

/// Client settings resolved at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host[:port]` of the Danubit API, without scheme.
    pub api_host: String,
    /// Policy for the association join button.
    pub join_policy: WritePolicy,
    /// Policy for accept/deny buttons in the membership-request review list.
    pub review_policy: WritePolicy,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_owned(),
            join_policy: WritePolicy::default(),
            review_policy: WritePolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from variables captured at compile time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DANUBIT_API_HOST"),
            option_env!("DANUBIT_JOIN_POLICY"),
            option_env!("DANUBIT_REVIEW_POLICY"),
            option_env!("DANUBIT_LOG_LEVEL"),
        )
    }

    /// Build a configuration from optional raw values, falling back to defaults
    /// for anything missing, blank, or unparseable.
    #[must_use]
    pub fn from_values(
        api_host: Option<&str>,
        join_policy: Option<&str>,
        review_policy: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_host: non_blank(api_host)
                .map(|h| h.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_host),
            join_policy: join_policy
                .and_then(WritePolicy::parse)
                .unwrap_or(defaults.join_policy),
            review_policy: review_policy
                .and_then(WritePolicy::parse)
                .unwrap_or(defaults.review_policy),
            log_level: non_blank(log_level)
                .map(str::to_ascii_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Base URL of the API, e.g. `http://localhost:2345`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.api_host)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
