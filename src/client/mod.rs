//! Blocking HTTP client for the pomo-server API
//!
//! The CLI is a short-lived synchronous process, so this uses
//! `reqwest::blocking` rather than an async runtime.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};

use crate::api::ApiError;
use crate::config::ClientConfig;
use crate::models::{CreateSessionInput, Session, SessionData};

/// Errors surfaced to the CLI
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid server URL '{0}'")]
    InvalidUrl(String),

    /// The server could not be reached at all
    #[error("Failed to reach pomo-server: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected by server: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Failed to decode server response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Failed to send desktop notification: {0}")]
    Notification(String),
}

/// Optional date bounds forwarded verbatim as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateFilter {
    pub fn new(start_date: Option<String>, end_date: Option<String>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

pub struct PomoClient {
    http: Client,
    base_url: Url,
}

impl PomoClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| ClientError::InvalidUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("pomo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Connection)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL under the base, one path segment per element.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `/session[/{name}]` with only the non-empty date bounds attached.
    pub fn sessions_url(&self, name: Option<&str>, filter: &DateFilter) -> Url {
        let mut url = match name {
            Some(name) => self.endpoint(&["session", name]),
            None => self.endpoint(&["session"]),
        };

        let params = [
            ("start-date", filter.start_date.as_deref()),
            ("end-date", filter.end_date.as_deref()),
        ];
        let present: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| match value {
                Some(v) if !v.is_empty() => Some((*key, *v)),
                _ => None,
            })
            .collect();

        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        url
    }

    /// List sessions in range, optionally only those named `name`.
    pub fn list_sessions(
        &self,
        name: Option<&str>,
        filter: &DateFilter,
    ) -> Result<SessionData, ClientError> {
        let url = self.sessions_url(name, filter);
        tracing::debug!(%url, "listing sessions");

        let response = self.http.get(url).send().map_err(ClientError::Connection)?;
        check_status(response)?
            .json()
            .map_err(ClientError::Decode)
    }

    pub fn list_names(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["name"]);
        let response = self.http.get(url).send().map_err(ClientError::Connection)?;
        check_status(response)?
            .json()
            .map_err(ClientError::Decode)
    }

    /// Persist a finished session.
    pub fn record(&self, name: &str, duration_in_minutes: i32) -> Result<Session, ClientError> {
        let url = self.endpoint(&["session"]);
        let body = CreateSessionInput::new(name, duration_in_minutes);
        tracing::debug!(%url, name, duration_in_minutes, "recording session");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .map_err(ClientError::Connection)?;
        check_status(response)?
            .json()
            .map_err(ClientError::Decode)
    }

    pub fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = self.endpoint(&["session", &id.to_string()]);
        let response = self
            .http
            .delete(url)
            .send()
            .map_err(ClientError::Connection)?;
        check_status(response)?;
        Ok(())
    }
}

/// Turn non-2xx responses into typed errors, keeping the server's message.
fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ApiError>()
        .map(|body| body.error.message)
        .unwrap_or_else(|_| status.to_string());

    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> PomoClient {
        PomoClient::new(&ClientConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 1,
        })
        .expect("client should build")
    }

    #[test]
    fn test_sessions_url_without_dates() {
        let url = client("http://localhost:8080").sessions_url(None, &DateFilter::default());
        assert_eq!(url.as_str(), "http://localhost:8080/session");
    }

    #[test]
    fn test_sessions_url_with_name_and_both_dates() {
        let filter = DateFilter::new(
            Some("2023-Jan-01".to_string()),
            Some("2023-Jan-31".to_string()),
        );
        let url = client("http://localhost:8080").sessions_url(Some("deep-work"), &filter);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/session/deep-work?start-date=2023-Jan-01&end-date=2023-Jan-31"
        );
    }

    #[test]
    fn test_sessions_url_skips_empty_bounds() {
        let filter = DateFilter::new(Some(String::new()), Some("2023-Jan-31".to_string()));
        let url = client("http://localhost:8080").sessions_url(None, &filter);
        assert_eq!(url.as_str(), "http://localhost:8080/session?end-date=2023-Jan-31");
    }

    #[test]
    fn test_name_segment_is_encoded() {
        let url = client("http://localhost:8080").sessions_url(Some("a b/c"), &DateFilter::default());
        assert_eq!(url.as_str(), "http://localhost:8080/session/a%20b%2Fc");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let url = client("http://example.com/pomo/").sessions_url(None, &DateFilter::default());
        assert_eq!(url.as_str(), "http://example.com/pomo/session");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = PomoClient::new(&ClientConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: 1,
        });
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_unreachable_server_is_connection_error() {
        // Port 9 (discard) is closed on test hosts.
        let result = client("http://127.0.0.1:9").list_names();
        assert!(matches!(result, Err(ClientError::Connection(_))));
    }
}
