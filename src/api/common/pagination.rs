//
//  readthedocs-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Envelope for Read the Docs API Responses
//!
//! List endpoints on the Read the Docs API v3 wrap their results in a page
//! envelope carrying the total count and URL-based `next`/`previous` cursors.
//! [`Page`] models a single page of that envelope.
//!
//! # Example
//!
//! ```rust
//! use readthedocs_cli::api::common::Page;
//! use serde::Deserialize;
//!
//! #[derive(Clone, Deserialize)]
//! struct Item {
//!     slug: String,
//! }
//!
//! let json = r#"{
//!     "count": 25,
//!     "next": "https://readthedocs.org/api/v3/projects/?limit=10&offset=10",
//!     "previous": null,
//!     "results": [{"slug": "pip"}]
//! }"#;
//!
//! let page: Page<Item> = serde_json::from_str(json).unwrap();
//! assert_eq!(page.count, 25);
//! assert!(page.has_next());
//! ```
//!
//! # Notes
//!
//! - `next` and `previous` are complete URLs, usable as-is for a follow-up
//!   request
//! - [`ReadTheDocsClient::list_projects`](crate::api::ReadTheDocsClient::list_projects)
//!   deliberately fetches a single large page and does not follow `next`

use serde::Deserialize;

/// A single page of results from a Read the Docs list endpoint.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `results` array
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `count` | `u64` | Total number of items across all pages |
/// | `next` | `Option<String>` | URL of the next page, `None` on the last page |
/// | `previous` | `Option<String>` | URL of the previous page, `None` on the first page |
/// | `results` | `Vec<T>` | Items in the current page |
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items matching the query, across all pages.
    #[serde(default)]
    pub count: u64,

    /// URL to fetch the next page of results.
    ///
    /// `None` when this is the last page.
    #[serde(default)]
    pub next: Option<String>,

    /// URL to fetch the previous page of results.
    ///
    /// `None` when this is the first page.
    #[serde(default)]
    pub previous: Option<String>,

    /// Items in the current page. May be empty.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Checks whether the remote reported more pages after this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the URL of the next page, if any.
    ///
    /// Borrowed to avoid cloning when only reading is required.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}
