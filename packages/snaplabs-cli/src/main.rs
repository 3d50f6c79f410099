//! SnapLabs command-line client.
//!
//! Drives the SnapLabs API from the terminal: browse and manage projects,
//! work the comment tree, and read the signed-in user's inbox. Signed-in
//! operations take a bearer token via `--token` or `SNAPLABS_TOKEN`;
//! `--user`/`--viewer` flags default to `SNAPLABS_USERNAME`; the API host
//! can be overridden with `SNAPLABS_API_URL`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod output;

#[derive(Parser)]
#[command(name = "snaplabs")]
#[command(about = "SnapLabs project-sharing platform CLI")]
struct Cli {
    /// Bearer token for signed-in operations (or set SNAPLABS_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage projects
    #[command(subcommand)]
    Projects(cmd::projects::ProjectsCommand),

    /// Read and write project comments
    #[command(subcommand)]
    Comments(cmd::comments::CommentsCommand),

    /// The signed-in user's inbox
    #[command(subcommand)]
    Messages(cmd::messages::MessagesCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,snaplabs_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = cmd::build_client(cli.token)?;

    match cli.command {
        Commands::Projects(command) => cmd::projects::run(&client, command).await,
        Commands::Comments(command) => cmd::comments::run(&client, command).await,
        Commands::Messages(command) => cmd::messages::run(&client, command).await,
    }
}
