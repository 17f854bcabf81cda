//
//  readthedocs-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Read the Docs API
//!
//! This module provides the core HTTP client for interacting with the
//! Read the Docs REST API v3. It handles authentication, the fixed request
//! timeout, JSON request/response serialization, and mapping of non-success
//! statuses to [`ApiError`].
//!
//! ## Features
//!
//! - Token authentication (`Authorization: Token <value>`) on every request
//! - JSON `Content-Type`/`Accept` headers on every request
//! - Fixed one-minute request timeout bounding any single call
//! - Structured error extraction from the API's `detail` error bodies
//!
//! ## Deployments
//!
//! The client defaults to the community deployment at `readthedocs.org`.
//! Pass an alternate base URL to [`ReadTheDocsClient::with_base_url`] to
//! target a different deployment of the same API contract, such as
//! Read the Docs for Business at `readthedocs.com`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::common::ApiError;
use crate::auth::ApiToken;

/// Base URL of the public (community) deployment's API v3.
pub const DEFAULT_BASE_URL: &str = "https://readthedocs.org/api/v3";

/// Base URL of the Read the Docs for Business deployment's API v3.
pub const BUSINESS_BASE_URL: &str = "https://readthedocs.com/api/v3";

/// Fixed timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Media type carried in the `Content-Type` and `Accept` headers.
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Parses a Read the Docs API error response and extracts its message.
///
/// The API v3 reports errors as a single-field JSON object:
/// ```json
/// {"detail": "Not found."}
/// ```
///
/// This is the only error-body shape the client understands; when the body
/// does not parse as that shape (HTML error pages, empty bodies, proxies),
/// the message falls back to `unknown error, status N` so the caller always
/// sees the numeric status. A 404 is mapped to the dedicated
/// [`ApiError::NotFound`] variant; every other non-success status becomes
/// [`ApiError::Remote`].
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("unknown error, status {}", status.as_u16()));

    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound(message)
    } else {
        ApiError::Remote {
            status: status.as_u16(),
            message,
        }
    }
}

/// The main HTTP client for the Read the Docs API v3.
///
/// The client holds only immutable configuration fixed at construction (base
/// URL, token, transport handle), so a single value can be shared freely
/// across sequential or concurrent calls without additional synchronization.
/// Each operation is one awaited round trip; dropping the future cancels the
/// in-flight request.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use readthedocs_cli::api::client::{ReadTheDocsClient, BUSINESS_BASE_URL};
/// use readthedocs_cli::auth::ApiToken;
///
/// let token = ApiToken::new("f71eb4f1...")?;
///
/// // Community deployment (readthedocs.org)
/// let client = ReadTheDocsClient::new(token.clone())?;
///
/// // Read the Docs for Business, or any alternate deployment
/// let business = ReadTheDocsClient::with_base_url(token, BUSINESS_BASE_URL)?;
/// # Ok::<(), readthedocs_cli::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReadTheDocsClient {
    /// The underlying HTTP client, configured once with timeout and headers.
    http: Client,
    /// API root without a trailing slash; request paths are appended as-is.
    base_url: String,
    /// Token applied to every outgoing request.
    token: ApiToken,
}

impl ReadTheDocsClient {
    /// Creates a client for the community deployment at `readthedocs.org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport could not be constructed.
    pub fn new(token: ApiToken) -> Result<Self, ApiError> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Creates a client targeting an alternate deployment of the same API
    /// contract.
    ///
    /// # Parameters
    ///
    /// * `token` - The API token for the target deployment
    /// * `base_url` - The deployment's API root, e.g.
    ///   `https://readthedocs.com/api/v3`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BaseUrl`] when `base_url` is not a valid URL, or
    /// [`ApiError::Network`] if the HTTP transport could not be constructed.
    pub fn with_base_url(token: ApiToken, base_url: &str) -> Result<Self, ApiError> {
        // Reject malformed overrides up front; the original string is kept
        // (minus any trailing slash) since request paths are '/'-prefixed.
        Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_UTF8));

        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Returns the API root this client targets, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an HTTP GET request to the specified path.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails, the response status is
    /// not a success, or the body cannot be deserialized to `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.token.apply_to_request(self.http.get(&url));

        let response = request.send().await?;
        let status = response.status();

        if !success_status(status) {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Makes an HTTP POST request to the specified path with a JSON body.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    /// * `B` - The type of the request body (must implement `Serialize`)
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the network
    /// request fails, the response status is not a success, or the response
    /// body cannot be deserialized to `T`.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let payload = serde_json::to_string(body)?;
        let request = self.token.apply_to_request(self.http.post(&url).body(payload));

        let response = request.send().await?;
        let status = response.status();

        if !success_status(status) {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Makes an HTTP PATCH request to the specified path with a JSON body.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    /// * `B` - The type of the request body (must implement `Serialize`)
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, the network
    /// request fails, the response status is not a success, or the response
    /// body cannot be deserialized to `T`.
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let payload = serde_json::to_string(body)?;
        let request = self
            .token
            .apply_to_request(self.http.patch(&url).body(payload));

        let response = request.send().await?;
        let status = response.status();

        if !success_status(status) {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Makes an HTTP DELETE request to the specified path.
    ///
    /// The API does not guarantee a response body for deletes, so the body
    /// is never decoded; only success or failure is reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response status
    /// is not a success.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.token.apply_to_request(self.http.delete(&url));

        let response = request.send().await?;
        let status = response.status();

        if !success_status(status) {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        Ok(())
    }
}

/// Success is any status in `[200, 400)`.
fn success_status(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> ReadTheDocsClient {
        let token = ApiToken::new("test-token").unwrap();
        ReadTheDocsClient::with_base_url(token, &server.url()).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let token = ApiToken::new("test-token").unwrap();
        let client =
            ReadTheDocsClient::with_base_url(token, "https://readthedocs.com/api/v3/").unwrap();
        assert_eq!(client.base_url(), "https://readthedocs.com/api/v3");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let token = ApiToken::new("test-token").unwrap();
        let err = ReadTheDocsClient::with_base_url(token, "not a url").unwrap_err();
        assert!(matches!(err, ApiError::BaseUrl(_)));
    }

    #[tokio::test]
    async fn test_every_request_carries_the_mandated_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping/")
            .match_header("authorization", "Token test-token")
            .match_header("content-type", "application/json; charset=utf-8")
            .match_header("accept", "application/json; charset=utf-8")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let value: serde_json::Value = client.get("/ping/").await.unwrap();

        mock.assert_async().await;
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_404_with_detail_body_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/projects/missing/")
            .with_status(404)
            .with_body(r#"{"detail": "Not found."}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get::<serde_json::Value>("/projects/missing/")
            .await
            .unwrap_err();

        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Not found."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_500_with_non_json_body_falls_back_to_status_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/projects/")
            .with_status(500)
            .with_body("<html>Internal Server Error</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get::<serde_json::Value>("/projects/")
            .await
            .unwrap_err();

        match err {
            ApiError::Remote { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "unknown error, status 500");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_400_with_detail_body_carries_remote_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/projects/")
            .with_status(400)
            .with_body(r#"{"detail": "Repository type invalid."}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get::<serde_json::Value>("/projects/")
            .await
            .unwrap_err();

        match err {
            ApiError::Remote { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Repository type invalid.");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_skips_body_decoding() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/projects/pip/")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        client.delete("/projects/pip/").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_a_serialization_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Typed {
            #[allow(dead_code)]
            slug: String,
        }

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/projects/pip/")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get::<Typed>("/projects/pip/").await.unwrap_err();

        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
