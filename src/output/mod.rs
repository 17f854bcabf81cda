//
//  readthedocs-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the CLI, in two flavors:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable output for scripting and automation
//!
//! ## Architecture
//!
//! - [`table`]: Table construction utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//! - [`OutputFormat`] / [`OutputWriter`] / [`TableOutput`]: the format
//!   selector, the unified writer, and the trait rendered types implement
//!
//! ## Example
//!
//! ```rust,ignore
//! use readthedocs_cli::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&my_data)?;
//! writer.write_success("Project created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats for CLI output.
///
/// # Variants
///
/// * `Table` - Human-readable output, best for interactive terminal sessions
/// * `Json` - Machine-readable output, ideal for piping to `jq` and scripts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// Human-readable output with optional color support.
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl Default for OutputFormat {
    /// Returns [`OutputFormat::Table`], the best default for interactive
    /// terminal use.
    fn default() -> Self {
        Self::Table
    }
}

/// A unified output writer that handles both output formats.
///
/// `OutputWriter` abstracts the rendering details so command handlers can
/// produce output without branching on the selected format. Color support is
/// detected at construction and disabled automatically when output is piped
/// or `NO_COLOR` is set.
///
/// # Example
///
/// ```rust,ignore
/// use readthedocs_cli::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Table);
/// writer.write(&project_detail)?;
/// writer.write_success("Project updated");
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a new output writer with the specified format.
    ///
    /// Color support is detected from the terminal at construction.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Writes a value to stdout using the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    /// Writes a success message to stdout, prefixed with a green checkmark
    /// when color output is enabled.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// A trait for types that can be rendered as human-readable output.
///
/// Types implementing this trait can be written through an [`OutputWriter`].
/// For JSON output the type must also implement [`Serialize`].
pub trait TableOutput {
    /// Renders the type as a table row or detail section on stdout.
    ///
    /// `color` indicates whether ANSI styling should be applied.
    fn print_table(&self, color: bool);
}
