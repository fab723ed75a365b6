mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::EventId;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::store::HttpEventStore;
use tracing_subscriber::EnvFilter;

use crate::commands::form::EventFields;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Browse, create and edit events in an eventdesk store")]
struct Cli {
    /// Collection endpoint of the store (overrides config and EVENTDESK_STORE_URL)
    #[arg(long, global = true)]
    store_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: list, select, edit, delete
    Browse,
    /// List events sorted by company
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single event
    Show {
        id: EventId,

        #[arg(long)]
        json: bool,
    },
    /// Create an event
    New {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Change fields of an existing event
    Edit {
        id: EventId,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        id: EventId,

        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the colors an event can have
    Colors,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let store_url = cli.store_url.as_deref();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => commands::browse::run(&connect(store_url)?).await,
        Commands::List { json } => commands::list::run(&connect(store_url)?, json).await,
        Commands::Show { id, json } => commands::show::run(&connect(store_url)?, id, json).await,
        Commands::New { fields } => commands::new::run(&connect(store_url)?, fields).await,
        Commands::Edit { id, fields } => commands::edit::run(&connect(store_url)?, id, fields).await,
        Commands::Delete { id, force } => {
            commands::delete::run(&connect(store_url)?, id, force).await
        }
        Commands::Colors => {
            commands::colors::run();
            Ok(())
        }
    }
}

/// Build the store client. The flag wins over config file and environment.
fn connect(store_url: Option<&str>) -> Result<HttpEventStore> {
    let store_url = match store_url {
        Some(url) => url.to_string(),
        None => EventDeskConfig::load()?.store_url,
    };
    tracing::debug!(%store_url, "using store");

    Ok(HttpEventStore::new(&store_url))
}
