pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::PortalClient;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "pronote")]
#[command(about = "Pronote portal CLI - talks to a running portal API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Portal base URL (defaults to PORTAL_URL or http://127.0.0.1:3000)")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open a Pronote session on the portal")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Grades, homework and timetable")]
    Data {
        #[command(subcommand)]
        cmd: commands::data::DataCommands,
    },

    #[command(about = "Portal information and health")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn server_url(cli: &Cli) -> String {
    cli.server
        .clone()
        .or_else(|| std::env::var("PORTAL_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = PortalClient::new(&server_url(&cli))?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &client, output_format).await,
        Commands::Data { cmd } => commands::data::handle(cmd, &client, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
    }
}
