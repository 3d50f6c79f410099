//! Comment-tree operations.
//!
//! Comment routes are mounted at the API root with no `/api` prefix; the
//! backend grew them before the prefix convention existed.

use serde_json::Value;

use crate::error::Result;
use crate::types::{Comment, NewComment};
use crate::SnapLabsClient;

impl SnapLabsClient {
    /// Fetch the full comment tree for a project.
    pub async fn comments(&self, project_id: u64) -> Result<Vec<Comment>> {
        let token = self.session_token().await;
        let path = format!("/{}/comments", project_id);
        self.execute_json(self.http.get(self.url(&path)), token)
            .await
    }

    /// Post a top-level comment as `username`.
    pub async fn post_comment(
        &self,
        project_id: u64,
        text: &str,
        username: &str,
    ) -> Result<Value> {
        let token = self.require_session("post_comment").await?;
        let path = format!("/{}/comments", project_id);
        let body = NewComment::new(text, username);
        self.execute_json(self.http.post(self.url(&path)).json(&body), Some(token))
            .await
    }

    /// Reply to an existing comment as `username`.
    pub async fn post_reply(
        &self,
        project_id: u64,
        comment_id: &str,
        text: &str,
        username: &str,
    ) -> Result<Value> {
        let token = self.require_session("post_reply").await?;
        let path = format!("/{}/comments/{}/reply", project_id, comment_id);
        let body = NewComment::new(text, username);
        self.execute_json(self.http.post(self.url(&path)).json(&body), Some(token))
            .await
    }

    /// Delete a comment. The server checks that the caller is the comment's
    /// author or an admin.
    pub async fn delete_comment(&self, project_id: u64, comment_id: &str) -> Result<Value> {
        let token = self.require_session("delete_comment").await?;
        let path = format!("/{}/comments/{}", project_id, comment_id);
        self.execute_json(self.http.delete(self.url(&path)), Some(token))
            .await
    }
}
