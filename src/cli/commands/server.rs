use clap::Subcommand;

use crate::cli::client::PortalClient;
use crate::cli::utils::output_envelope;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Show server information from API root endpoint")]
    Info,

    #[command(about = "Check server health status from API /health endpoint")]
    Health,
}

pub async fn handle(cmd: ServerCommands, client: &PortalClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Info => {
            let envelope = client.get("/", &[]).await?;
            output_envelope(&output_format, "Portal information", "data", envelope)
        }
        ServerCommands::Health => {
            let envelope = client.get("/health", &[]).await?;
            output_envelope(&output_format, "Portal is healthy", "data", envelope)
        }
    }
}
