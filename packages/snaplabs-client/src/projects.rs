//! Project operations: the community listing, metadata, engagement
//! counters, visibility, thumbnails, creation, and remixing.
//!
//! Path shapes mirror the backend exactly, warts included: views live under
//! `/api/{id}/views/...` with no `projects` segment, and share/unshare are
//! verbs in the path rather than a field on the meta document.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::types::{
    CreateProjectRequest, CreatedProject, Project, ProjectList, ProjectMetaUpdate, RemixRequest,
    UploadResult,
};
use crate::SnapLabsClient;

impl SnapLabsClient {
    /// Fetch the community project listing.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let token = self.session_token().await;
        let list: ProjectList = self
            .execute_json(self.http.get(self.url("/api/projects")), token)
            .await?;
        Ok(list.projects)
    }

    /// Fetch one project's metadata as seen by `viewer`. Anonymous viewers
    /// are recorded as `guest`.
    pub async fn project_meta(&self, project_id: u64, viewer: Option<&str>) -> Result<Project> {
        let token = self.session_token().await;
        let path = format!(
            "/api/projects/{}/meta/{}",
            project_id,
            viewer.unwrap_or("guest")
        );
        self.execute_json(self.http.get(self.url(&path)), token)
            .await
    }

    /// Update a project's title and description. The server enforces that
    /// the caller is the author.
    pub async fn update_project_meta(
        &self,
        project_id: u64,
        changes: &ProjectMetaUpdate,
    ) -> Result<Value> {
        let token = self.require_session("update_project_meta").await?;
        let path = format!("/api/projects/{}/meta", project_id);
        self.execute_json(self.http.put(self.url(&path)).json(changes), Some(token))
            .await
    }

    /// Record one view of a project. Anonymous viewers count as `guest`.
    pub async fn record_view(&self, project_id: u64, viewer: Option<&str>) -> Result<Value> {
        let token = self.session_token().await;
        let path = format!("/api/{}/views/{}", project_id, viewer.unwrap_or("guest"));
        self.execute_json(self.http.post(self.url(&path)), token)
            .await
    }

    /// Love a project as `username`.
    pub async fn love_project(&self, project_id: u64, username: &str) -> Result<Value> {
        let token = self.require_session("love_project").await?;
        let path = format!("/api/projects/{}/love/{}", project_id, username);
        self.execute_json(self.http.post(self.url(&path)), Some(token))
            .await
    }

    /// Favourite a project as `username`.
    pub async fn favourite_project(&self, project_id: u64, username: &str) -> Result<Value> {
        let token = self.require_session("favourite_project").await?;
        let path = format!("/api/projects/{}/favourite/{}", project_id, username);
        self.execute_json(self.http.post(self.url(&path)), Some(token))
            .await
    }

    /// Make a project visible in the community listing.
    pub async fn share_project(&self, project_id: u64) -> Result<Value> {
        let token = self.require_session("share_project").await?;
        let path = format!("/api/share/{}", project_id);
        self.execute_json(self.http.put(self.url(&path)), Some(token))
            .await
    }

    /// Remove a project from the community listing.
    pub async fn unshare_project(&self, project_id: u64) -> Result<Value> {
        let token = self.require_session("unshare_project").await?;
        let path = format!("/api/unshare/{}", project_id);
        self.execute_json(self.http.put(self.url(&path)), Some(token))
            .await
    }

    /// Upload a project thumbnail. The body is the raw image bytes and the
    /// request's `Content-Type` is the image's own MIME type, not JSON.
    pub async fn upload_thumbnail(
        &self,
        project_id: u64,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadResult> {
        let token = self.require_session("upload_thumbnail").await?;
        debug!(project_id, size = bytes.len(), content_type, "uploading thumbnail");
        let path = format!("/api/upload/{}", project_id);
        let request = self
            .http
            .post(self.url(&path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);
        self.execute_json(request, Some(token)).await
    }

    /// Create an empty project owned by `username`; returns the new id.
    pub async fn create_project(&self, username: &str) -> Result<CreatedProject> {
        let token = self.require_session("create_project").await?;
        let body = CreateProjectRequest {
            username: username.to_string(),
        };
        self.execute_json(self.http.post(self.url("/")).json(&body), Some(token))
            .await
    }

    /// Copy an existing project into a fresh one owned by `username`;
    /// returns the copy's id.
    pub async fn remix_project(&self, remix_id: u64, username: &str) -> Result<CreatedProject> {
        let token = self.require_session("remix_project").await?;
        debug!(remix_id, username, "remixing project");
        let body = RemixRequest {
            remix_id,
            username: username.to_string(),
        };
        let path = format!("/remix/{}", remix_id);
        self.execute_json(self.http.post(self.url(&path)).json(&body), Some(token))
            .await
    }
}
