//! Dictionary server CLI - serve the dictionary table over HTTP

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use dictionary_server::config::{self, ServerConfig};
use dictionary_server::server;
use dictionary_server::storage::SqliteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dictionary-server")]
#[command(version)]
#[command(about = "Serve a local SQLite dictionary as JSON over HTTP")]
#[command(long_about = r#"
Serves every row of the dictionaryData table at GET /gatherDictionaryData.
The database file and table are created on first start.

Example usage:
  dictionary-server
  dictionary-server serve --port 8080 --database ./words.db
  dictionary-server stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on [default: 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind [default: 127.0.0.1]
        #[arg(long)]
        host: Option<IpAddr>,

        /// Path to the database file [default: ./dictionaryDatabase.db]
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show statistics about the dictionary database
    Stats {
        /// Path to the database file [default: ./dictionaryDatabase.db]
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
        database: None,
    });

    match command {
        Commands::Serve { port, host, database } => {
            let server_config = ServerConfig::resolve(file_config.as_ref(), database, host, port);
            server::start_server(server_config).await?;
        }

        Commands::Stats { database } => {
            let server_config = ServerConfig::resolve(file_config.as_ref(), database, None, None);
            let store = SqliteStore::open(&server_config.database)?;
            println!("{}", store.stats()?);
        }
    }

    Ok(())
}
