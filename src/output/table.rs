//
//  readthedocs-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Thin wrapper around `comfy_table` for rendering project lists. Tables use
//! UTF-8 box-drawing characters and adapt column widths to the terminal.
//!
//! ## Example
//!
//! ```rust,ignore
//! use readthedocs_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["SLUG", "NAME"])
//!     .row(["pip", "pip: package installer"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a table with the CLI's default styling applied.
///
/// - UTF-8 full border preset
/// - Dynamic content arrangement adapting to terminal width
///
/// For most use cases prefer [`TableBuilder`], which wraps this.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for the CLI's tables.
///
/// Wraps [`create_table`] with a small fluent API: set headers once, append
/// rows, print. Header cells are colored cyan when color output is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use readthedocs_cli::output::TableBuilder;
///
/// TableBuilder::new()
///     .color(false)
///     .headers(["SLUG", "DEFAULT VERSION"])
///     .rows(projects.iter().map(|p| [p.slug.clone(), p.default_version.clone()]))
///     .print();
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    /// Creates a new builder with default styling and detected color
    /// support.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.color {
            let cells: Vec<Cell> = headers
                .into_iter()
                .map(|h| Cell::new(h.into()).fg(Color::Cyan))
                .collect();
            self.table.set_header(cells);
        } else {
            let cells: Vec<String> = headers.into_iter().map(Into::into).collect();
            self.table.set_header(cells);
        }
        self
    }

    /// Appends a single row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(cells);
        self
    }

    /// Appends every row from an iterator.
    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.table);
    }

    /// Consumes the builder and returns the underlying table.
    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
