//! Project subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use snaplabs_client::{ProjectMetaUpdate, SnapLabsClient};

use crate::output;

#[derive(Subcommand)]
pub enum ProjectsCommand {
    /// List the community projects
    List,

    /// Show one project's metadata
    Show {
        id: u64,
        /// View as this username (affects per-user flags server side)
        #[arg(long, env = "SNAPLABS_USERNAME")]
        viewer: Option<String>,
    },

    /// Update a project's title and description
    SetMeta {
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },

    /// Record a view of a project
    View {
        id: u64,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        viewer: Option<String>,
    },

    /// Love a project
    Love {
        id: u64,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },

    /// Favourite a project
    Favourite {
        id: u64,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },

    /// Make a project visible in the community listing
    Share { id: u64 },

    /// Remove a project from the community listing
    Unshare { id: u64 },

    /// Upload a thumbnail image for a project
    Thumbnail {
        id: u64,
        /// Path to the image file
        file: PathBuf,
    },

    /// Create an empty project
    Create {
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },

    /// Remix an existing project into a fresh copy
    Remix {
        id: u64,
        #[arg(long, env = "SNAPLABS_USERNAME")]
        user: String,
    },
}

pub async fn run(client: &SnapLabsClient, command: ProjectsCommand) -> Result<()> {
    match command {
        ProjectsCommand::List => {
            let projects = client.projects().await?;
            output::project_table(&projects)?;
        }
        ProjectsCommand::Show { id, viewer } => {
            let project = client.project_meta(id, viewer.as_deref()).await?;
            output::project_detail(&project)?;
        }
        ProjectsCommand::SetMeta {
            id,
            title,
            description,
        } => {
            let ack = client
                .update_project_meta(id, &ProjectMetaUpdate::new(title, description))
                .await?;
            output::ack("metadata updated", &ack)?;
        }
        ProjectsCommand::View { id, viewer } => {
            let ack = client.record_view(id, viewer.as_deref()).await?;
            output::ack("view recorded", &ack)?;
        }
        ProjectsCommand::Love { id, user } => {
            let ack = client.love_project(id, &user).await?;
            output::ack("loved", &ack)?;
        }
        ProjectsCommand::Favourite { id, user } => {
            let ack = client.favourite_project(id, &user).await?;
            output::ack("favourited", &ack)?;
        }
        ProjectsCommand::Share { id } => {
            let ack = client.share_project(id).await?;
            output::ack("shared", &ack)?;
        }
        ProjectsCommand::Unshare { id } => {
            let ack = client.unshare_project(id).await?;
            output::ack("unshared", &ack)?;
        }
        ProjectsCommand::Thumbnail { id, file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let result = client.upload_thumbnail(id, bytes, mime_for(&file)).await?;
            output::upload_result(&result)?;
        }
        ProjectsCommand::Create { user } => {
            let created = client.create_project(&user).await?;
            output::created("created project", created.id)?;
        }
        ProjectsCommand::Remix { id, user } => {
            let created = client.remix_project(id, &user).await?;
            output::created("remixed into project", created.id)?;
        }
    }
    Ok(())
}

/// MIME type from the file extension; the API stores whatever we claim.
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
