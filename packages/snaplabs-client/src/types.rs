//! SnapLabs API request and response types.
//!
//! Shapes follow what the backend actually emits, inconsistencies included:
//! the listing calls a project's title `name` while the meta endpoint calls
//! it `title`, and comment authors arrive as `{"username": ...}` objects,
//! bare strings, or nothing at all. Normalization lives here so operations
//! hand back uniform types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Projects
// ============================================================================

/// Envelope for the project listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProjectList {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A project as returned by the listing and meta endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u64,

    /// The listing emits this as `name`, the meta endpoint as `title`.
    #[serde(alias = "name", default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub author: ProjectAuthor,

    #[serde(default)]
    pub stats: ProjectStats,

    #[serde(default)]
    pub visibility: Visibility,

    /// Thumbnail URL, once one has been uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Author display name; older records have none.
    pub fn author_name(&self) -> &str {
        if self.author.username.is_empty() {
            "Unknown"
        } else {
            &self.author.username
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectAuthor {
    #[serde(default)]
    pub username: String,
}

/// Engagement counters. All monotonic; the server owns the increments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub loves: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub remixes: u64,
}

/// Whether a project appears in the community listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Unshared,
}

/// Body for the project-meta update; the editor always sends both fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMetaUpdate {
    pub title: String,
    pub description: String,
}

impl ProjectMetaUpdate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Response from project creation and remixing: the new project's id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProject {
    pub id: u64,
}

/// Body for the remix endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemixRequest {
    pub remix_id: u64,
    pub username: String,
}

/// Body for the create-project endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateProjectRequest {
    pub username: String,
}

/// Result of a thumbnail upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Comments
// ============================================================================

/// A project comment. Replies nest without a depth bound.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "de_comment_id")]
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    user: CommentAuthor,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Author display name, normalized across the shapes the backend emits.
    pub fn author(&self) -> &str {
        match &self.user {
            CommentAuthor::Named { username } => username,
            CommentAuthor::Bare(username) => username,
            CommentAuthor::Absent => "Anonymous",
        }
    }
}

/// Comment authors arrive as `{"username": ...}`, a bare string, or null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
enum CommentAuthor {
    Named {
        username: String,
    },
    Bare(String),
    #[default]
    Absent,
}

/// Comment ids are strings in current records but numbers in old ones;
/// normalize to a string for URL building.
fn de_comment_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(u64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}

/// Body both comment posts send: `{"text": ..., "user": {"username": ...}}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewComment {
    pub text: String,
    pub user: NewCommentAuthor,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewCommentAuthor {
    pub username: String,
}

impl NewComment {
    pub fn new(text: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: NewCommentAuthor {
                username: username.into(),
            },
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Envelope for the inbox listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageList {
    #[serde(default)]
    pub messages: Vec<UserMessage>,
}

/// One inbox message for the signed-in user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read: bool,
}

/// Envelope for the unread-count endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageCount {
    #[serde(default)]
    pub count: u64,
}

/// Body for marking a single message read.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarkMessage {
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_item_accepts_name_for_title() {
        let project: Project =
            serde_json::from_str(r#"{"id": 7, "name": "Maze Runner"}"#).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.title, "Maze Runner");
        assert_eq!(project.stats, ProjectStats::default());
        assert_eq!(project.visibility, Visibility::Visible);
    }

    #[test]
    fn meta_fields_parse_with_partial_stats() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Hi",
                "description": "demo",
                "author": {"username": "alice"},
                "stats": {"views": 3},
                "visibility": "unshared"
            }"#,
        )
        .unwrap();
        assert_eq!(project.title, "Hi");
        assert_eq!(project.author_name(), "alice");
        assert_eq!(project.stats.views, 3);
        assert_eq!(project.stats.loves, 0);
        assert_eq!(project.visibility, Visibility::Unshared);
    }

    #[test]
    fn missing_author_displays_unknown() {
        let project: Project = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(project.author_name(), "Unknown");
    }

    #[test]
    fn comment_author_shapes_normalize() {
        let named: Comment =
            serde_json::from_str(r#"{"id": "c1", "text": "hi", "user": {"username": "bob"}}"#)
                .unwrap();
        assert_eq!(named.author(), "bob");

        let bare: Comment =
            serde_json::from_str(r#"{"id": "c2", "text": "hi", "user": "carol"}"#).unwrap();
        assert_eq!(bare.author(), "carol");

        let absent: Comment = serde_json::from_str(r#"{"id": "c3", "text": "hi"}"#).unwrap();
        assert_eq!(absent.author(), "Anonymous");

        let null: Comment =
            serde_json::from_str(r#"{"id": "c4", "text": "hi", "user": null}"#).unwrap();
        assert_eq!(null.author(), "Anonymous");
    }

    #[test]
    fn comment_ids_accept_numbers() {
        let comment: Comment = serde_json::from_str(r#"{"id": 1718000000, "text": "old"}"#).unwrap();
        assert_eq!(comment.id, "1718000000");
    }

    #[test]
    fn replies_nest_recursively() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "c1",
                "text": "root",
                "replies": [
                    {"id": "c2", "text": "child", "replies": [
                        {"id": "c3", "text": "grandchild"}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(comment.replies.len(), 1);
        assert_eq!(comment.replies[0].replies[0].text, "grandchild");
    }

    #[test]
    fn comment_timestamps_are_lenient() {
        let dated: Comment = serde_json::from_str(
            r#"{"id": "c1", "text": "hi", "createdAt": "2025-06-10T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(dated.created_at.is_some());

        let undated: Comment = serde_json::from_str(r#"{"id": "c2", "text": "hi"}"#).unwrap();
        assert!(undated.created_at.is_none());
    }

    #[test]
    fn new_comment_serializes_nested_user() {
        let body = serde_json::to_value(NewComment::new("nice one", "alice")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"text": "nice one", "user": {"username": "alice"}})
        );
    }

    #[test]
    fn remix_request_uses_camel_case() {
        let body = serde_json::to_value(RemixRequest {
            remix_id: 9,
            username: "alice".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"remixId": 9, "username": "alice"}));
    }

    #[test]
    fn message_defaults_fill_missing_fields() {
        let message: UserMessage = serde_json::from_str(r#"{"sender": "snaplabs"}"#).unwrap();
        assert_eq!(message.sender, "snaplabs");
        assert!(!message.read);
        assert!(message.timestamp.is_none());
    }
}
