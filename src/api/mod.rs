//
//  readthedocs-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Read the Docs REST API v3.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication, the fixed request
//!   timeout, and error mapping
//! - [`projects`]: Project resource types and the five project operations
//!   (list, get, create, update, delete)
//! - [`common`]: Shared types ([`ApiError`], the [`common::Page`] envelope)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use readthedocs_cli::api::ReadTheDocsClient;
//! use readthedocs_cli::auth::ApiToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ReadTheDocsClient::new(ApiToken::from_env()?)?;
//!
//! for project in client.list_projects().await? {
//!     println!("{}\t{}", project.slug, project.repository.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]; see its documentation for the full
//! taxonomy. Errors propagate to the caller unchanged — the client performs
//! no retries and no logging.

/// Core HTTP client wrapper for the Read the Docs API.
pub mod client;

/// Shared API types: the error taxonomy and pagination envelope.
pub mod common;

/// Project resource types and operations.
pub mod projects;

/// Re-export of the main API client.
pub use client::ReadTheDocsClient;

/// Re-export of the unified API error type.
pub use common::ApiError;
