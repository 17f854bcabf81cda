//
//  readthedocs-cli
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project commands
//!
//! Covers the five project operations of the Read the Docs API v3: list,
//! view, create, edit, and delete. Create and edit share one settings
//! surface because the API's update endpoint always takes the full settings
//! payload; create additionally performs the two-phase create-then-configure
//! sequence inside the client.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::client::ReadTheDocsClient;
use crate::api::projects::{CreateProjectRequest, Project, Repository, UpdateProjectRequest};
use crate::auth::ApiToken;
use crate::interactive::prompt_confirm_with_default;
use crate::output::{write_json, OutputFormat, OutputWriter, TableBuilder, TableOutput};
use crate::util::{format_timestamp, truncate};

use super::GlobalOptions;

/// Manage documentation projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List,

    /// View project details
    View(ViewArgs),

    /// Create a project
    Create(CreateArgs),

    /// Replace a project's settings
    Edit(EditArgs),

    /// Delete a project
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project slug
    pub project: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Project slug
    pub project: String,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project slug
    pub project: String,

    /// Skip confirmation
    #[arg(long)]
    pub confirm: bool,
}

/// Project settings shared by create and edit.
///
/// The update endpoint always receives the full payload, so name and
/// repository are required even when editing.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Project name
    #[arg(long, short = 'n')]
    pub name: String,

    /// URL of the source repository
    #[arg(long, short = 'r')]
    pub repository: String,

    /// Repository type
    #[arg(long, default_value = "git")]
    pub repository_type: String,

    /// Project home page URL
    #[arg(long)]
    pub homepage: Option<String>,

    /// Natural language code of the documentation (e.g. en)
    #[arg(long)]
    pub language: Option<String>,

    /// Programming language code of the documented code (e.g. py)
    #[arg(long)]
    pub programming_language: Option<String>,

    /// Organization slug to file the project under (Business)
    #[arg(long)]
    pub organization: Option<String>,

    /// Team slug granted access to the project (Business)
    #[arg(long)]
    pub teams: Option<String>,

    /// Version served when none is named in a URL (e.g. latest)
    #[arg(long)]
    pub default_version: Option<String>,

    /// Branch the default version builds from
    #[arg(long)]
    pub default_branch: Option<String>,

    /// Google Analytics tracking code
    #[arg(long)]
    pub analytics_code: Option<String>,

    /// Disable analytics collection
    #[arg(long)]
    pub analytics_disabled: bool,

    /// Show a banner on documentation built from old versions
    #[arg(long)]
    pub show_version_warning: bool,

    /// Serve the project as a single version without a selector
    #[arg(long)]
    pub single_version: bool,

    /// Build pull/merge requests from the connected repository
    #[arg(long)]
    pub external_builds_enabled: bool,
}

impl SettingsArgs {
    fn to_request(&self) -> UpdateProjectRequest {
        UpdateProjectRequest {
            project: CreateProjectRequest {
                name: self.name.clone(),
                repository: Repository {
                    url: self.repository.clone(),
                    repo_type: self.repository_type.clone(),
                },
                homepage: self.homepage.clone(),
                language: self.language.clone(),
                programming_language: self.programming_language.clone(),
                organization: self.organization.clone(),
                teams: self.teams.clone(),
            },
            default_version: self.default_version.clone(),
            default_branch: self.default_branch.clone(),
            analytics_code: self.analytics_code.clone(),
            analytics_disabled: self.analytics_disabled,
            show_version_warning: self.show_version_warning,
            single_version: self.single_version,
            external_builds_enabled: self.external_builds_enabled,
        }
    }
}

// Display Types

#[derive(Debug, Serialize)]
struct ProjectListItem {
    slug: String,
    name: String,
    repository: String,
    default_version: String,
}

impl From<Project> for ProjectListItem {
    fn from(project: Project) -> Self {
        Self {
            slug: project.slug,
            name: project.name,
            repository: project.repository.url,
            default_version: project.default_version,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectDetail {
    id: u64,
    slug: String,
    name: String,
    repository: String,
    repository_type: String,
    language: String,
    programming_language: String,
    default_version: String,
    default_branch: Option<String>,
    documentation_url: String,
    home_url: String,
    tags: Vec<String>,
    users: Vec<String>,
    created: String,
    modified: String,
}

impl From<Project> for ProjectDetail {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            slug: project.slug,
            name: project.name,
            repository: project.repository.url,
            repository_type: project.repository.repo_type,
            language: project.language.code,
            programming_language: project.programming_language.code,
            default_version: project.default_version,
            default_branch: project.default_branch,
            documentation_url: project.urls.documentation,
            home_url: project.urls.home,
            tags: project.tags,
            users: project.users.into_iter().map(|u| u.username).collect(),
            created: format_timestamp(&project.created),
            modified: format_timestamp(&project.modified),
        }
    }
}

impl TableOutput for ProjectDetail {
    fn print_table(&self, color: bool) {
        let title = if color {
            style(&self.name).bold().to_string()
        } else {
            self.name.clone()
        };

        println!("{}", title);
        println!();
        println!("  Slug:             {}", self.slug);
        println!("  Id:               {}", self.id);
        println!(
            "  Repository:       {} ({})",
            self.repository, self.repository_type
        );
        println!("  Default version:  {}", self.default_version);

        if let Some(branch) = &self.default_branch {
            println!("  Default branch:   {}", branch);
        }

        if !self.language.is_empty() {
            println!("  Language:         {}", self.language);
        }

        if !self.programming_language.is_empty() {
            println!("  Code language:    {}", self.programming_language);
        }

        if !self.tags.is_empty() {
            println!("  Tags:             {}", self.tags.join(", "));
        }

        if !self.users.is_empty() {
            println!("  Maintainers:      {}", self.users.join(", "));
        }

        println!("  Created:          {}", self.created);
        println!("  Modified:         {}", self.modified);

        if !self.documentation_url.is_empty() {
            println!();
            println!("  Docs: {}", self.documentation_url);
        }
    }
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List => self.list(global).await,
            ProjectSubcommand::View(args) => self.view(args, global).await,
            ProjectSubcommand::Create(args) => self.create(args, global).await,
            ProjectSubcommand::Edit(args) => self.edit(args, global).await,
            ProjectSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    fn get_format(&self, global: &GlobalOptions) -> OutputFormat {
        if global.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    fn get_client(&self, global: &GlobalOptions) -> Result<ReadTheDocsClient> {
        let token = ApiToken::from_env()?;
        let client = ReadTheDocsClient::with_base_url(token, &global.base_url)?;
        Ok(client)
    }

    /// List projects
    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = self.get_client(global)?;

        let projects = client.list_projects().await?;
        tracing::debug!("Fetched {} project(s) from {}", projects.len(), client.base_url());

        let items: Vec<ProjectListItem> = projects.into_iter().map(Into::into).collect();

        if global.json {
            return write_json(&items);
        }

        if items.is_empty() {
            println!("No projects found.");
            return Ok(());
        }

        TableBuilder::new()
            .headers(["SLUG", "NAME", "REPOSITORY", "DEFAULT VERSION"])
            .rows(items.iter().map(|item| {
                [
                    item.slug.clone(),
                    truncate(&item.name, 30),
                    truncate(&item.repository, 50),
                    item.default_version.clone(),
                ]
            }))
            .print();

        println!("Showing {} project(s)", items.len());

        Ok(())
    }

    /// View project details
    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = self.get_client(global)?;

        let project = client.get_project(&args.project).await?;

        let writer = OutputWriter::new(self.get_format(global));
        writer.write(&ProjectDetail::from(project))
    }

    /// Create a project (create, then configure its settings)
    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = self.get_client(global)?;

        let request = args.settings.to_request();
        let project = client.create_project(&request).await?;
        tracing::debug!("Created project '{}'", project.slug);

        let writer = OutputWriter::new(self.get_format(global));

        if global.json {
            return writer.write(&ProjectDetail::from(project));
        }

        writer.write_success(&format!(
            "Created project {}",
            style(&project.slug).cyan().bold()
        ));
        println!();
        writer.write(&ProjectDetail::from(project))
    }

    /// Replace a project's settings
    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let client = self.get_client(global)?;

        let request = args.settings.to_request();
        let project = client.update_project(&args.project, &request).await?;
        tracing::debug!("Updated project '{}'", project.slug);

        let writer = OutputWriter::new(self.get_format(global));

        if global.json {
            return writer.write(&ProjectDetail::from(project));
        }

        writer.write_success(&format!(
            "Updated project {}",
            style(&project.slug).cyan().bold()
        ));
        println!();
        writer.write(&ProjectDetail::from(project))
    }

    /// Delete a project
    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.confirm {
            println!(
                "You are about to delete project '{}' and its hosted documentation.",
                args.project
            );
            println!();

            if !prompt_confirm_with_default("Are you sure you want to delete this project?", false)?
            {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let client = self.get_client(global)?;
        client.delete_project(&args.project).await?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "deleted": args.project,
            });
            return write_json(&result);
        }

        println!();
        println!(
            "{} Deleted project {}",
            style("✓").green(),
            style(&args.project).red()
        );

        Ok(())
    }
}
