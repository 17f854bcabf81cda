//
//  readthedocs-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Serialization helpers for the `--json` output mode, designed for
//! scripting and automation where machine-readable output is required.
//!
//! JSON output pairs well with `jq`:
//!
//! ```text
//! rtd project list --json | jq -r '.[].slug'
//! ```

use serde::Serialize;
use std::io::{self, Write};

/// Writes a value as pretty-printed JSON to stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

/// Writes a value as pretty-printed JSON to a custom writer.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json_to<T: Serialize, W: Write>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        slug: String,
        active: bool,
    }

    #[test]
    fn test_write_json_to_pretty_prints() {
        let sample = Sample {
            slug: "demo".to_string(),
            active: true,
        };

        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &sample).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"slug\": \"demo\""));
        assert!(text.contains("\"active\": true"));
    }

    #[test]
    fn test_write_json_to_emits_trailing_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &serde_json::json!({"k": 1})).unwrap();
        assert!(buffer.ends_with(b"\n"));
    }
}
