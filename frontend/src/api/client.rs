use reqwest::Client;

use super::types::{ApiError, Credentials, LoginOutcome};
use crate::config;

/// Thin wrapper around `reqwest::Client` bound to the login endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    login_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            login_url: None,
        }
    }

    pub fn new_with_login_url(login_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            login_url: Some(login_url.into()),
        }
    }

    async fn resolved_login_url(&self) -> String {
        if let Some(url) = &self.login_url {
            url.clone()
        } else {
            config::await_login_url().await
        }
    }

    /// POSTs the credentials and inspects the response body. The endpoint
    /// signals the outcome in the body rather than the HTTP status, so the
    /// body is parsed regardless of status.
    pub async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
        let url = self.resolved_login_url().await;
        let response = self
            .client
            .post(&url)
            .json(&credentials)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let outcome: LoginOutcome = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if outcome.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    fn valid_credentials() -> Credentials {
        Credentials {
            email: "abcd@ef.com".into(),
            password: "Hello1234".into(),
        }
    }

    #[tokio::test]
    async fn login_succeeds_on_success_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/login")
                .json_body(serde_json::json!({
                    "email": "abcd@ef.com",
                    "password": "Hello1234"
                }));
            then.status(200)
                .json_body(serde_json::json!({ "result": "success" }));
        });

        let client = ApiClient::new_with_login_url(server.url("/api/login"));
        client.login(valid_credentials()).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn login_is_rejected_on_any_other_result() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200)
                .json_body(serde_json::json!({ "result": "failure" }));
        });

        let client = ApiClient::new_with_login_url(server.url("/api/login"));
        let error = client.login(valid_credentials()).await.unwrap_err();
        assert_eq!(error, ApiError::Rejected);
    }

    #[tokio::test]
    async fn success_body_wins_even_on_error_status() {
        // fetch in the original client never looked at the status line.
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(500)
                .json_body(serde_json::json!({ "result": "success" }));
        });

        let client = ApiClient::new_with_login_url(server.url("/api/login"));
        assert!(client.login(valid_credentials()).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_body_is_an_invalid_response() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).body("not json");
        });

        let client = ApiClient::new_with_login_url(server.url("/api/login"));
        let error = client.login(valid_credentials()).await.unwrap_err();
        assert!(matches!(error, ApiError::InvalidResponse(_)));
    }
}
