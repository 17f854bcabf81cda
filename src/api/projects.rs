//
//  readthedocs-cli
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Project API
//!
//! Types and operations for the `/projects/` endpoints of the Read the Docs
//! API v3. Projects are the unit of documentation hosting: each one wraps a
//! source repository and carries the build and display settings for its
//! documentation.
//!
//! ## Identity
//!
//! Every project has a numeric `id` and a URL-safe `slug`. The slug is
//! assigned by the service at creation time, is immutable afterwards, and is
//! the identifier all subsequent calls address the project by.
//!
//! ## API Endpoints
//!
//! ```text
//! GET    /projects/?limit=1000
//! POST   /projects/
//! GET    /projects/{slug}/
//! PATCH  /projects/{slug}/
//! DELETE /projects/{slug}/
//! ```
//!
//! ## Two-phase create
//!
//! The creation endpoint accepts only a minimal field set
//! ([`CreateProjectRequest`]); the remaining settings are only writable
//! through the update endpoint. [`ReadTheDocsClient::create_project`]
//! therefore creates the project first and then unconditionally applies the
//! full settings payload with a PATCH against the assigned slug. See the
//! method documentation for the failure semantics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::ReadTheDocsClient;
use crate::api::common::{ApiError, Page};

/// Page size requested by [`ReadTheDocsClient::list_projects`].
pub const PROJECT_PAGE_LIMIT: u32 = 1000;

/// A documentation project hosted on Read the Docs.
///
/// Projects are owned and authoritative on the remote service; this client
/// never caches them beyond a single call's response, and they are read-only
/// from the client's perspective except through the explicit update calls.
///
/// # Fields
///
/// * `id` - Unique numeric identifier assigned by the service
/// * `slug` - URL-safe identifier assigned at creation, immutable afterwards
/// * `name` - Human-readable project name
/// * `created` / `modified` - Resource timestamps
/// * `language` - Natural language of the documentation
/// * `programming_language` - Primary language of the source code
/// * `repository` - Source repository reference (URL + type)
/// * `default_version` / `default_branch` - Version served by default and
///   the branch it builds from
/// * `subproject_of` / `translation_of` - Optional parent relations
/// * `urls` - Hosted documentation and project home URLs
/// * `tags` - Free-form tags
/// * `users` - Usernames of the project's maintainers
/// * `active_versions` - Mapping from version name to its status
///
/// # Example
///
/// ```rust,ignore
/// let project = client.get_project("pip").await?;
/// println!("{} builds {} from {}", project.slug,
///          project.default_version, project.repository.url);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique numeric identifier assigned by the service.
    pub id: u64,

    /// Human-readable project name.
    pub name: String,

    /// URL-safe identifier assigned by the service at creation time.
    /// Immutable; all project-addressing calls use it.
    pub slug: String,

    /// When the project was created.
    pub created: DateTime<Utc>,

    /// When the project was last modified.
    pub modified: DateTime<Utc>,

    /// Natural language the documentation is written in.
    #[serde(default)]
    pub language: Language,

    /// Primary programming language of the documented code.
    #[serde(default)]
    pub programming_language: Language,

    /// Source repository the documentation builds from.
    pub repository: Repository,

    /// Version served when none is named in a documentation URL.
    #[serde(default)]
    pub default_version: String,

    /// Branch the default version builds from. `None` means the
    /// repository's own default branch.
    #[serde(default)]
    pub default_branch: Option<String>,

    /// Slug of the parent project when this one is a subproject.
    #[serde(default)]
    pub subproject_of: Option<String>,

    /// Slug of the project this one translates.
    #[serde(default)]
    pub translation_of: Option<String>,

    /// Hosted URLs for the project.
    #[serde(default)]
    pub urls: ProjectUrls,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Maintainers of the project.
    #[serde(default)]
    pub users: Vec<ProjectUser>,

    /// Mapping from version name to that version's status.
    #[serde(default)]
    pub active_versions: HashMap<String, String>,
}

/// A language reference, used for both natural and programming languages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    /// Short language code, e.g. `en` or `py`.
    pub code: String,

    /// Human-readable language name.
    pub name: String,
}

/// A source repository reference embedded in a project.
///
/// The same shape is used when reading a project and when submitting one
/// for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Clone URL of the repository.
    pub url: String,

    /// Repository type, e.g. `git`.
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Hosted URLs for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUrls {
    /// URL of the hosted documentation.
    #[serde(default)]
    pub documentation: String,

    /// URL of the project's home page.
    #[serde(default)]
    pub home: String,
}

/// A maintainer reference embedded in a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUser {
    /// The maintainer's username.
    pub username: String,
}

/// Request body accepted by the project creation endpoint.
///
/// Creation accepts only this minimal field set; every other setting must be
/// applied afterwards through the update endpoint (see
/// [`ReadTheDocsClient::create_project`]).
///
/// Optional fields are omitted from the wire payload entirely when unset,
/// which the API treats differently from an explicit empty string.
///
/// # Example
///
/// ```rust
/// use readthedocs_cli::api::projects::{CreateProjectRequest, Repository};
///
/// let request = CreateProjectRequest {
///     name: "Demo".to_string(),
///     repository: Repository {
///         url: "https://github.com/example/demo".to_string(),
///         repo_type: "git".to_string(),
///     },
///     homepage: None,
///     language: None,
///     programming_language: None,
///     organization: None,
///     teams: None,
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    /// Human-readable project name. The service derives the slug from it.
    pub name: String,

    /// Source repository to build documentation from.
    pub repository: Repository,

    /// Project home page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Natural language code of the documentation, e.g. `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Programming language code of the documented code, e.g. `py`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,

    /// Organization slug to create the project under (Business deployments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Team slug granted access to the project (Business deployments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<String>,
}

/// Full settings payload for the project update endpoint.
///
/// Composes the minimal creation fields with every configurable setting.
/// Serialization flattens both parts into a single JSON object, so the wire
/// payload looks no different from a flat request.
///
/// The four boolean flags are ALWAYS serialized: `false` is a meaningful
/// explicit value for the update endpoint, distinct from leaving a setting
/// untouched. The optional string settings are omitted when unset, like the
/// creation fields.
///
/// # Example
///
/// ```rust
/// use readthedocs_cli::api::projects::{
///     CreateProjectRequest, Repository, UpdateProjectRequest,
/// };
///
/// let request = UpdateProjectRequest {
///     project: CreateProjectRequest {
///         name: "Demo".to_string(),
///         repository: Repository {
///             url: "https://github.com/example/demo".to_string(),
///             repo_type: "git".to_string(),
///         },
///         homepage: None,
///         language: None,
///         programming_language: None,
///         organization: None,
///         teams: None,
///     },
///     default_version: Some("latest".to_string()),
///     default_branch: Some("main".to_string()),
///     analytics_code: None,
///     analytics_disabled: false,
///     show_version_warning: true,
///     single_version: false,
///     external_builds_enabled: false,
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectRequest {
    /// The minimal creation fields; flattened into the same JSON object.
    #[serde(flatten)]
    pub project: CreateProjectRequest,

    /// Version served when none is named in a documentation URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,

    /// Branch the default version builds from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Google Analytics tracking code for the hosted documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_code: Option<String>,

    /// Disable analytics collection entirely.
    pub analytics_disabled: bool,

    /// Show a banner on documentation built from old versions.
    pub show_version_warning: bool,

    /// Serve the project as a single version without a version selector.
    pub single_version: bool,

    /// Build pull/merge requests from the connected repository.
    pub external_builds_enabled: bool,
}

impl ReadTheDocsClient {
    /// Lists the caller's projects.
    ///
    /// Issues a single page fetch bounded at [`PROJECT_PAGE_LIMIT`] results
    /// and returns that page's results. When the account has more projects
    /// the remainder is NOT fetched; the remote's `next` link is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable response body.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        // TODO: follow the page envelope's `next` links past the first 1000
        let page: Page<Project> = self
            .get(&format!("/projects/?limit={}", PROJECT_PAGE_LIMIT))
            .await?;
        Ok(page.results)
    }

    /// Fetches a single project by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no project exists under `slug`,
    /// or the usual transport/decoding errors.
    pub async fn get_project(&self, slug: &str) -> Result<Project, ApiError> {
        self.get(&format!("/projects/{}/", slug)).await
    }

    /// Creates a project and applies its full settings.
    ///
    /// The creation endpoint accepts only the minimal
    /// [`CreateProjectRequest`] subset, so this is a two-phase operation:
    ///
    /// 1. `POST /projects/` with the minimal fields, obtaining the slug the
    ///    service assigned;
    /// 2. `PATCH /projects/{slug}/` with the complete settings payload.
    ///
    /// Phase 2 always runs after a successful phase 1. When the PATCH fails
    /// the project already exists remotely in a partially configured state
    /// and is NOT rolled back; the returned
    /// [`ApiError::PartialCreate`] carries the assigned slug so callers
    /// needing atomicity can delete it themselves. Cancelling between the
    /// two phases leaves the same created-but-unconfigured state.
    ///
    /// Returns the resource state produced by the settings PATCH.
    ///
    /// # Errors
    ///
    /// Phase-1 failures surface as the usual transport/remote errors;
    /// phase-2 failures surface as [`ApiError::PartialCreate`].
    pub async fn create_project(
        &self,
        request: &UpdateProjectRequest,
    ) -> Result<Project, ApiError> {
        let created: Project = self.post("/projects/", &request.project).await?;

        match self.update_project(&created.slug, request).await {
            Ok(updated) => Ok(updated),
            Err(source) => Err(ApiError::PartialCreate {
                slug: created.slug,
                source: Box::new(source),
            }),
        }
    }

    /// Applies the full settings payload to an existing project.
    ///
    /// Returns the resulting resource state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no project exists under `slug`,
    /// or the usual transport/decoding errors.
    pub async fn update_project(
        &self,
        slug: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, ApiError> {
        self.patch(&format!("/projects/{}/", slug), request).await
    }

    /// Deletes a project by slug.
    ///
    /// The API does not guarantee a response body for deletes, so none is
    /// decoded; only success or failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no project exists under `slug`,
    /// or the usual transport errors.
    pub async fn delete_project(&self, slug: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{}/", slug)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiToken;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ReadTheDocsClient {
        let token = ApiToken::new("test-token").unwrap();
        ReadTheDocsClient::with_base_url(token, &server.url()).unwrap()
    }

    fn project_json(slug: &str, default_version: &str) -> String {
        format!(
            r#"{{
                "id": 12345,
                "name": "Demo",
                "slug": "{slug}",
                "created": "2026-01-12T09:30:00Z",
                "modified": "2026-02-01T10:00:00Z",
                "language": {{"code": "en", "name": "English"}},
                "programming_language": {{"code": "py", "name": "Python"}},
                "repository": {{"url": "https://github.com/example/demo", "type": "git"}},
                "default_version": "{default_version}",
                "default_branch": "main",
                "subproject_of": null,
                "translation_of": null,
                "urls": {{
                    "documentation": "https://{slug}.readthedocs.io/en/latest/",
                    "home": "https://example.com"
                }},
                "tags": ["docs"],
                "users": [{{"username": "ngoni"}}],
                "active_versions": {{"latest": "active"}}
            }}"#
        )
    }

    fn sample_request() -> UpdateProjectRequest {
        UpdateProjectRequest {
            project: CreateProjectRequest {
                name: "Demo".to_string(),
                repository: Repository {
                    url: "https://github.com/example/demo".to_string(),
                    repo_type: "git".to_string(),
                },
                homepage: None,
                language: None,
                programming_language: None,
                organization: None,
                teams: None,
            },
            default_version: Some("latest".to_string()),
            default_branch: None,
            analytics_code: None,
            analytics_disabled: false,
            show_version_warning: true,
            single_version: false,
            external_builds_enabled: false,
        }
    }

    #[tokio::test]
    async fn test_get_project_decodes_the_resource() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/demo/")
            .with_status(200)
            .with_body(project_json("demo", "latest"))
            .create_async()
            .await;

        let client = client_for(&server);
        let project = client.get_project("demo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(project.id, 12345);
        assert_eq!(project.slug, "demo");
        assert_eq!(project.repository.repo_type, "git");
        assert_eq!(project.language.code, "en");
        assert_eq!(project.default_branch.as_deref(), Some("main"));
        assert_eq!(project.created.to_rfc3339(), "2026-01-12T09:30:00+00:00");
        assert_eq!(
            project.active_versions.get("latest").map(String::as_str),
            Some("active")
        );
    }

    #[tokio::test]
    async fn test_list_projects_returns_first_page_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/")
            .match_query(Matcher::UrlEncoded("limit".into(), "1000".into()))
            .with_status(200)
            .with_body(format!(
                r#"{{
                    "count": 2000,
                    "next": "{}/projects/?limit=1000&offset=1000",
                    "previous": null,
                    "results": [{}]
                }}"#,
                server.url(),
                project_json("demo", "latest")
            ))
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let projects = client.list_projects().await.unwrap();

        // A backend reporting 2000 results still yields just the fetched
        // page; the `next` link is never followed.
        mock.assert_async().await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].slug, "demo");
    }

    #[tokio::test]
    async fn test_create_issues_post_then_patch_to_assigned_slug() {
        let mut server = mockito::Server::new_async().await;

        // Phase 1 must carry ONLY the minimal creation fields.
        let post_mock = server
            .mock("POST", "/projects/")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Demo",
                "repository": {
                    "url": "https://github.com/example/demo",
                    "type": "git"
                }
            })))
            .with_status(201)
            .with_body(project_json("demo", ""))
            .expect(1)
            .create_async()
            .await;

        // Phase 2 targets the slug assigned by phase 1 and carries the full
        // settings payload, booleans included.
        let patch_mock = server
            .mock("PATCH", "/projects/demo/")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Demo",
                "repository": {
                    "url": "https://github.com/example/demo",
                    "type": "git"
                },
                "default_version": "latest",
                "analytics_disabled": false,
                "show_version_warning": true,
                "single_version": false,
                "external_builds_enabled": false
            })))
            .with_status(200)
            .with_body(project_json("demo", "latest"))
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let project = client.create_project(&sample_request()).await.unwrap();

        post_mock.assert_async().await;
        patch_mock.assert_async().await;

        // The returned resource is the PATCH's result, not the POST's.
        assert_eq!(project.slug, "demo");
        assert_eq!(project.default_version, "latest");
    }

    #[tokio::test]
    async fn test_failed_patch_reports_partial_create_without_rollback() {
        let mut server = mockito::Server::new_async().await;

        let _post_mock = server
            .mock("POST", "/projects/")
            .with_status(201)
            .with_body(project_json("demo", ""))
            .create_async()
            .await;

        let _patch_mock = server
            .mock("PATCH", "/projects/demo/")
            .with_status(400)
            .with_body(r#"{"detail": "Default version does not exist."}"#)
            .create_async()
            .await;

        // No compensating delete may be issued.
        let delete_mock = server
            .mock("DELETE", "/projects/demo/")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.create_project(&sample_request()).await.unwrap_err();

        match err {
            ApiError::PartialCreate { slug, source } => {
                assert_eq!(slug, "demo");
                match *source {
                    ApiError::Remote { status, ref message } => {
                        assert_eq!(status, 400);
                        assert_eq!(message, "Default version does not exist.");
                    }
                    ref other => panic!("expected Remote source, got {other:?}"),
                }
            }
            other => panic!("expected PartialCreate, got {other:?}"),
        }

        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_returns_the_resulting_resource() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/projects/demo/")
            .with_status(200)
            .with_body(project_json("demo", "stable"))
            .create_async()
            .await;

        let client = client_for(&server);
        let project = client
            .update_project("demo", &sample_request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(project.default_version, "stable");
    }

    #[tokio::test]
    async fn test_delete_project_succeeds_without_a_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/projects/demo/")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        client.delete_project("demo").await.unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn test_boolean_flags_serialize_even_when_false() {
        let mut request = sample_request();
        request.show_version_warning = false;

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        // "false" is an explicit value for the update endpoint, never an
        // omission.
        assert_eq!(object["analytics_disabled"], false);
        assert_eq!(object["show_version_warning"], false);
        assert_eq!(object["single_version"], false);
        assert_eq!(object["external_builds_enabled"], false);
    }

    #[test]
    fn test_unset_optional_fields_are_omitted_from_the_payload() {
        let request = sample_request();
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("homepage"));
        assert!(!object.contains_key("organization"));
        assert!(!object.contains_key("teams"));
        assert!(!object.contains_key("default_branch"));
        assert!(!object.contains_key("analytics_code"));

        // The flattened creation fields sit at the top level.
        assert_eq!(object["name"], "Demo");
        assert_eq!(object["repository"]["type"], "git");
        assert_eq!(object["default_version"], "latest");
    }

    #[test]
    fn test_set_optional_fields_are_present_in_the_payload() {
        let mut request = sample_request();
        request.project.homepage = Some("https://example.com".to_string());
        request.project.organization = Some("acme".to_string());

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["homepage"], "https://example.com");
        assert_eq!(object["organization"], "acme");
    }
}
