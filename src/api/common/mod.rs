//
//  readthedocs-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Read the Docs Client
//!
//! This module provides the shared foundation for the API layer: the unified
//! error type returned by every client operation, and the pagination envelope
//! used by list endpoints.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Page`] - Paged list envelope (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use readthedocs_cli::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::NotFound(msg)) => println!("No such project: {}", msg),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - All types implement `Debug` for easy inspection
//! - Errors are propagated to the caller unchanged; the client performs no
//!   retries, no local recovery, and no logging

use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Read the Docs API operations.
///
/// `ApiError` covers the failure scenarios a caller of the client can
/// observe. It implements the standard `Error` trait via `thiserror` for
/// ergonomic handling with the `?` operator.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `NotFound` | The remote returned 404 for the addressed project |
/// | `Remote` | Any other non-success HTTP status |
/// | `Network` | Transport failure (DNS, connect, timeout, cancelled) |
/// | `Serialization` | Request encoding or response decoding failed |
/// | `PartialCreate` | A project was created but its settings PATCH failed |
/// | `InvalidToken` | The API token is empty or contains whitespace |
/// | `BaseUrl` | The base-URL override could not be parsed |
///
/// # Example
///
/// ```rust
/// use readthedocs_cli::api::common::ApiError;
///
/// fn fetch_project() -> Result<(), ApiError> {
///     Err(ApiError::NotFound("Not found.".to_string()))
/// }
///
/// match fetch_project() {
///     Ok(_) => println!("Project fetched"),
///     Err(ApiError::NotFound(msg)) => eprintln!("Missing: {}", msg),
///     Err(e) => eprintln!("Unexpected error: {}", e),
/// }
/// ```
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - A `Serialization` error on a success response indicates a contract
///   mismatch between this client and the deployed API version, not a
///   remote failure
#[derive(Error, Debug)]
pub enum ApiError {
    /// The addressed project does not exist.
    ///
    /// Produced when the remote returns HTTP 404. Carries the remote's
    /// `detail` message when one was present, or the synthesized fallback.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The remote rejected the request with a non-success status.
    ///
    /// Covers every status outside `[200, 400)` other than 404. The message
    /// is the remote's `detail` field when the body parsed as the documented
    /// error shape, or `unknown error, status N` otherwise.
    #[error("remote error ({status}): {message}")]
    Remote {
        /// The HTTP status code returned by the remote.
        status: u16,
        /// The remote's detail message or the synthesized fallback.
        message: String,
    },

    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, DNS resolution errors, and the fixed
    /// one-minute request timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded, or a response body could not be
    /// decoded into the expected type.
    ///
    /// Kept distinct from [`Remote`](Self::Remote) because it indicates a
    /// contract mismatch rather than a remote failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A project was created but applying its full settings failed.
    ///
    /// The creation endpoint accepts only a minimal field set, so the client
    /// follows every successful create with a settings PATCH. When that
    /// PATCH fails the project already exists remotely in a partially
    /// configured state. No rollback is attempted; callers needing atomicity
    /// can use the carried `slug` to delete the project themselves.
    #[error("project '{slug}' was created but configuring it failed: {source}")]
    PartialCreate {
        /// Slug assigned to the project by the successful create.
        slug: String,
        /// The error returned by the settings PATCH.
        source: Box<ApiError>,
    },

    /// The API token is malformed.
    ///
    /// Tokens must be non-empty and free of whitespace. This is a format
    /// check only; a revoked or unauthorized token still produces a
    /// [`Remote`](Self::Remote) error with status 401 at request time.
    #[error("API token must be non-empty and contain no whitespace")]
    InvalidToken,

    /// The base-URL override is not a valid URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
