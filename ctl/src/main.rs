use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;

mod client;
mod commands;

#[derive(Parser)]
#[command(name = "fleetctl")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the cluster-registration service
    #[arg(
        long,
        global = true,
        env = "FLEET_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = "FLEET_API_TOKEN")]
    token: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage the clusters known to the registration service
    #[command(subcommand)]
    Clusters(ClustersCommand),
}

#[derive(Subcommand)]
pub enum ClustersCommand {
    /// Register a cluster from a JSON document
    Register {
        /// Path to the registration document, or "-" to read standard input
        file: String,
    },

    /// List registered clusters
    List,

    /// Remove a cluster from the registration service
    Deregister {
        /// Name the cluster was registered under
        name: String,

        /// Deregister even if the cluster still hosts workloads
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or("fleetctl=info".into()))
        .init();

    let args = Args::parse();
    let client = ApiClient::new(args.api_url, args.token)?;

    // Ctrl-C aborts whatever call is in flight; every command races its
    // request against this token.
    let shutdown = CancellationToken::new();
    let interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    match args.command {
        Command::Clusters(command) => match command {
            ClustersCommand::Register { file } => {
                commands::register::register(&client, shutdown, &file).await
            }
            ClustersCommand::List => commands::list::list(&client, shutdown).await,
            ClustersCommand::Deregister { name, force } => {
                commands::deregister::deregister(&client, shutdown, &name, force).await
            }
        },
    }
}
