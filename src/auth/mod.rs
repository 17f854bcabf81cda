//
//  readthedocs-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! The Read the Docs API v3 authenticates with a static bearer token carried
//! on every request as `Authorization: Token <value>`. Tokens are created in
//! the Read the Docs web UI under account settings and supplied to this CLI
//! through the `READTHEDOCS_TOKEN` environment variable.
//!
//! There is no OAuth flow, no refresh, and no credential storage: the token
//! is read once at process start and held for the lifetime of the client.
//!
//! ## Example
//!
//! ```rust,no_run
//! use readthedocs_cli::auth::ApiToken;
//!
//! // From the environment (the normal CLI path)
//! let token = ApiToken::from_env()?;
//!
//! // Or directly, e.g. in tests
//! let token = ApiToken::new("f71eb4f1...")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fmt;

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

use crate::api::common::ApiError;

/// Name of the environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "READTHEDOCS_TOKEN";

/// Validates the format of a token string.
///
/// Performs basic validation to ensure the token meets minimum requirements:
/// - Token must not be empty
/// - Token must not contain whitespace characters
///
/// This function does NOT verify the token against the remote service; an
/// accepted token can still be rejected with a 401 at request time.
///
/// # Example
///
/// ```rust
/// use readthedocs_cli::auth::validate_token;
///
/// assert!(validate_token("f71eb4f1b8f8d4d2f1f7e3c4"));
///
/// assert!(!validate_token(""));           // Empty token
/// assert!(!validate_token("has space"));  // Contains whitespace
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// A validated Read the Docs API token.
///
/// Wraps the raw token string and knows how to attach itself to an outgoing
/// request. The `Debug` implementation redacts the value so the token cannot
/// leak through logs or error output.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a token from a raw string, rejecting malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidToken`] if the value is empty or contains
    /// whitespace.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        if !validate_token(token) {
            return Err(ApiError::InvalidToken);
        }
        Ok(Self(token.to_string()))
    }

    /// Reads the token from the `READTHEDOCS_TOKEN` environment variable.
    ///
    /// Surrounding whitespace is trimmed before validation, so tokens pasted
    /// with a trailing newline still work.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or its value is malformed.
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(TOKEN_ENV_VAR).with_context(|| {
            format!(
                "{} is not set. Create a token at https://readthedocs.org/accounts/tokens/ \
                 and export it first.",
                TOKEN_ENV_VAR
            )
        })?;

        Ok(Self::new(value.trim())?)
    }

    /// Attaches the token to an outgoing request.
    ///
    /// The Read the Docs API uses the `Token` authorization scheme rather
    /// than `Bearer`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {}", self.0))
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("has space"));
        assert!(!validate_token("has\ttab"));
        assert!(!validate_token("has\nnewline"));
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert!(ApiToken::new("abc123").is_ok());
        assert!(matches!(ApiToken::new(""), Err(ApiError::InvalidToken)));
        assert!(matches!(
            ApiToken::new("a b"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_debug_redacts_value() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
