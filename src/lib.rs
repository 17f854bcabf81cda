//
//  readthedocs-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Read the Docs CLI Library
//!
//! A command-line interface library for the Read the Docs documentation
//! hosting platform.
//!
//! ## Overview
//!
//! This library provides the core functionality for the `rtd` CLI tool: a
//! typed client for the Read the Docs REST API v3 project endpoints, and the
//! command, output, and prompt layers built on top of it. The client works
//! against both the community deployment at `readthedocs.org` and
//! Read the Docs for Business at `readthedocs.com` — the two run the same
//! API contract under different base URLs.
//!
//! ## Features
//!
//! - **Project Management**: List, view, create, edit, and delete projects
//! - **Two-Phase Create**: Transparently applies the full project settings
//!   that the creation endpoint itself does not accept
//! - **Token Authentication**: Static API token from the environment
//! - **Interactive & Scriptable**: Table output for humans, JSON for
//!   automation
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: HTTP client for the Read the Docs API v3
//! - [`auth`]: API token handling
//! - [`output`]: Output formatting (Table, JSON)
//! - [`interactive`]: Interactive prompts
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use readthedocs_cli::api::ReadTheDocsClient;
//! use readthedocs_cli::auth::ApiToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ReadTheDocsClient::new(ApiToken::from_env()?)?;
//! let project = client.get_project("pip").await?;
//! println!("{} -> {}", project.slug, project.urls.documentation);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// API client for the Read the Docs REST API v3.
///
/// Handles authentication, the fixed request timeout, JSON
/// request/response handling, and error mapping.
pub mod api;

/// Authentication handling.
///
/// A static API token sourced from the `READTHEDOCS_TOKEN` environment
/// variable and applied to every request in the `Token` scheme.
pub mod auth;

/// Output formatting for different modes.
///
/// Table format for interactive use and JSON for scripting.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Utility functions shared by the display layer.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the API client.
pub use api::ReadTheDocsClient;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes.
pub const APP_NAME: &str = "rtd";

/// Application version constant.
///
/// Automatically derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts to
/// programmatically detect the outcome of CLI operations. Argument parsing
/// failures exit with clap's own code (2).
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error: any failed API operation or configuration problem.
    pub const ERROR: i32 = 1;
}
