//! Comment subcommands.

use anyhow::Result;
use clap::Subcommand;
use snaplabs_client::SnapLabsClient;

use crate::output;

#[derive(Subcommand)]
pub enum CommentsCommand {
    /// Show a project's comment tree
    List { project: u64 },

    /// Post a top-level comment
    Post {
        project: u64,
        text: String,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },

    /// Reply to an existing comment
    Reply {
        project: u64,
        comment: String,
        text: String,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },

    /// Delete a comment (author or admin)
    Delete { project: u64, comment: String },
}

pub async fn run(client: &SnapLabsClient, command: CommentsCommand) -> Result<()> {
    match command {
        CommentsCommand::List { project } => {
            let comments = client.comments(project).await?;
            output::comment_tree(&comments)?;
        }
        CommentsCommand::Post {
            project,
            text,
            user,
        } => {
            let ack = client.post_comment(project, &text, &user).await?;
            output::ack("comment posted", &ack)?;
        }
        CommentsCommand::Reply {
            project,
            comment,
            text,
            user,
        } => {
            let ack = client.post_reply(project, &comment, &text, &user).await?;
            output::ack("reply posted", &ack)?;
        }
        CommentsCommand::Delete { project, comment } => {
            let ack = client.delete_comment(project, &comment).await?;
            output::ack("comment deleted", &ack)?;
        }
    }
    Ok(())
}
