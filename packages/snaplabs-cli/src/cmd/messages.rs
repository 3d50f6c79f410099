//! Inbox subcommands. All of these require a signed-in session.

use anyhow::Result;
use clap::Subcommand;
use snaplabs_client::SnapLabsClient;

use crate::output;

#[derive(Subcommand)]
pub enum MessagesCommand {
    /// List inbox messages
    List,

    /// Show the unread count
    Count,

    /// Mark the whole inbox read
    Reset,

    /// Mark one message read by its index
    Mark { index: usize },
}

pub async fn run(client: &SnapLabsClient, command: MessagesCommand) -> Result<()> {
    match command {
        MessagesCommand::List => {
            let messages = client.messages().await?;
            output::message_list(&messages)?;
        }
        MessagesCommand::Count => {
            let count = client.message_count().await?;
            output::unread_count(count)?;
        }
        MessagesCommand::Reset => {
            let ack = client.reset_message_count().await?;
            output::ack("inbox marked read", &ack)?;
        }
        MessagesCommand::Mark { index } => {
            let ack = client.mark_message_read(index).await?;
            output::ack("message marked read", &ack)?;
        }
    }
    Ok(())
}
