//! Generic fetch abstraction.
//!
//! One request per call, JSON content type and the CSRF credential pair on
//! every request. Credentials live behind a shared handle supplied by the
//! caller's session context and are read at call time, so a rotated pair is
//! always honored. No retry, no timeout, no cancellation, no caching.

use std::sync::{Arc, RwLock};

use derive_more::{Display, Error};
use serde_json::Value;

use crate::consts;

#[derive(Debug, Clone, Display, Error)]
#[display("{message}")]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The CSRF pair issued by `GET /api/v1/session/token`.
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct CsrfCredentials {
    pub token: String,
    pub cookie: String,
}

pub type SharedCredentials = Arc<RwLock<CsrfCredentials>>;

#[derive(Debug, Default, Clone)]
pub struct RequestConfig {
    pub method: reqwest::Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: reqwest::Method::POST,
            body: Some(body),
            headers: vec![],
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            method: reqwest::Method::PUT,
            body: Some(body),
            headers: vec![],
        }
    }

    pub fn delete() -> Self {
        Self {
            method: reqwest::Method::DELETE,
            body: None,
            headers: vec![],
        }
    }
}

/// Mines the `errors` array out of a failure body, falling back to the
/// status-code message when there is no such array (or no body at all).
fn error_from_response(status: reqwest::StatusCode, body: Option<Value>) -> ClientError {
    if let Some(errors) = body
        .as_ref()
        .and_then(|body| body.get("errors"))
        .and_then(|errors| errors.as_array())
    {
        let messages = errors
            .iter()
            .filter_map(|message| message.as_str().map(str::to_string))
            .collect::<Vec<String>>();

        if !messages.is_empty() {
            return ClientError::new(messages.join(", "));
        }
    }

    ClientError::new(format!("request failed with status {}", status.as_u16()))
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: SharedCredentials,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: SharedCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    fn current_credentials(&self) -> Result<CsrfCredentials, ClientError> {
        Ok(self
            .credentials
            .read()
            .map_err(|_| ClientError::new("csrf credentials lock poisoned"))?
            .clone())
    }

    /// Performs exactly one request. `None` means HTTP 204 (no body to
    /// parse); any other success returns the parsed JSON body.
    pub async fn fetch(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> Result<Option<Value>, ClientError> {
        let credentials = self.current_credentials()?;

        let mut request = self
            .http
            .request(config.method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .header(consts::CSRF_TOKEN_HEADER_NAME, credentials.token)
            .header(consts::CSRF_COOKIE_HEADER_NAME, credentials.cookie);

        for (name, value) in config.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &config.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::new(format!("request could not be completed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // a non-JSON or absent failure body still yields a usable error
            return Err(error_from_response(status, response.json().await.ok()));
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json().await.map_err(|e| {
            ClientError::new(format!("response body could not be parsed: {e}"))
        })?))
    }

    /// Pulls a fresh credential pair from the session endpoint into the
    /// shared handle.
    pub async fn refresh_credentials(&self) -> Result<(), ClientError> {
        let body = self
            .fetch(
                &format!("{}/session/token", consts::API_VERSION_PREFIX),
                RequestConfig::get(),
            )
            .await?
            .ok_or_else(|| ClientError::new("session token response was empty"))?;

        let fresh: CsrfCredentials = serde_json::from_value(body)
            .map_err(|e| ClientError::new(format!("session token could not be decoded: {e}")))?;

        *self
            .credentials
            .write()
            .map_err(|_| ClientError::new("csrf credentials lock poisoned"))? = fresh;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_from_response_joins_errors_array() {
        let body = json!({"errors": ["name is required", "interval_days must be a positive integer"]});
        let err = error_from_response(reqwest::StatusCode::UNPROCESSABLE_ENTITY, Some(body));

        assert_eq!(
            err.to_string(),
            "name is required, interval_days must be a positive integer"
        );
    }

    #[test]
    fn test_error_from_response_falls_back_to_status() {
        let err = error_from_response(reqwest::StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), "request failed with status 500");
    }

    #[test]
    fn test_error_from_response_ignores_non_array_errors_field() {
        let err = error_from_response(
            reqwest::StatusCode::BAD_REQUEST,
            Some(json!({"errors": "not an array"})),
        );
        assert_eq!(err.to_string(), "request failed with status 400");
    }

    #[test]
    fn test_error_from_response_ignores_empty_errors_array() {
        let err =
            error_from_response(reqwest::StatusCode::NOT_FOUND, Some(json!({"errors": []})));
        assert_eq!(err.to_string(), "request failed with status 404");
    }
}
