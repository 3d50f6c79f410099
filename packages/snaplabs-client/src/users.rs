//! Signed-in user operations: the inbox and the profile image.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::types::{MarkMessage, MessageCount, MessageList, UserMessage};
use crate::SnapLabsClient;

impl SnapLabsClient {
    /// Fetch the signed-in user's inbox, in the order the server keeps it.
    pub async fn messages(&self) -> Result<Vec<UserMessage>> {
        let token = self.require_session("messages").await?;
        let list: MessageList = self
            .execute_json(self.http.get(self.url("/users/me/messages")), Some(token))
            .await?;
        Ok(list.messages)
    }

    /// Number of unread inbox messages.
    pub async fn message_count(&self) -> Result<u64> {
        let token = self.require_session("message_count").await?;
        let count: MessageCount = self
            .execute_json(
                self.http.get(self.url("/users/me/messages/count")),
                Some(token),
            )
            .await?;
        Ok(count.count)
    }

    /// Mark the whole inbox read.
    pub async fn reset_message_count(&self) -> Result<Value> {
        let token = self.require_session("reset_message_count").await?;
        self.execute_json(
            self.http.post(self.url("/users/me/messages/reset")),
            Some(token),
        )
        .await
    }

    /// Mark a single message read by its inbox index.
    pub async fn mark_message_read(&self, index: usize) -> Result<Value> {
        let token = self.require_session("mark_message_read").await?;
        let body = MarkMessage { index };
        self.execute_json(
            self.http.post(self.url("/users/me/messages/mark")).json(&body),
            Some(token),
        )
        .await
    }

    /// Replace `username`'s profile picture. Sent as multipart form data
    /// under the `image` field, matching what the backend's form parser
    /// expects.
    pub async fn upload_profile_image(
        &self,
        username: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Value> {
        let token = self.require_session("upload_profile_image").await?;
        debug!(username, size = bytes.len(), "uploading profile image");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("image")
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let path = format!("/users/{}/image", username);
        self.execute_json(self.http.post(self.url(&path)).multipart(form), Some(token))
            .await
    }
}
