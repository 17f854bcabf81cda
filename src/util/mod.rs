//
//  readthedocs-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Utility helpers shared by the display layer.

use chrono::{DateTime, Utc};

/// Truncates a string to at most `max` characters, appending `...` when
/// anything was cut.
///
/// # Example
///
/// ```rust
/// use readthedocs_cli::util::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// ```
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Formats a timestamp for table display, e.g. `2026-01-12 09:30`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
