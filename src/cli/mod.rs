//
//  readthedocs-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod project;

pub use completion::CompletionCommand;
pub use project::ProjectCommand;

use clap::{Parser, Subcommand};

use crate::api::client::DEFAULT_BASE_URL;

/// Read the Docs CLI - Work with Read the Docs from the command line
#[derive(Parser, Debug)]
#[command(
    name = "rtd",
    version,
    about = "Work with Read the Docs from the command line",
    long_about = "rtd is a CLI for the Read the Docs documentation hosting platform.\n\n\
                  It brings project management for readthedocs.org and Read the Docs \
                  for Business to your terminal.",
    propagate_version = true,
    after_help = "Use 'rtd <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOptions {
    /// API root to target. Point at https://readthedocs.com/api/v3 for
    /// Read the Docs for Business
    #[arg(long, global = true, env = "READTHEDOCS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage documentation projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
