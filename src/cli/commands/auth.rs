use clap::Subcommand;

use crate::cli::client::PortalClient;
use crate::cli::utils::output_envelope;
use crate::cli::OutputFormat;
use crate::pronote::Credentials;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log the portal into a Pronote instance")]
    Login {
        #[arg(help = "Pronote instance URL")]
        url: String,
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (falls back to PRONOTE_PASSWORD)")]
        password: Option<String>,
        #[arg(long, help = "ENT/CAS name, when the instance uses one")]
        cas: Option<String>,
    },
}

pub async fn handle(cmd: AuthCommands, client: &PortalClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { url, username, password, cas } => {
            let password = match password.or_else(|| std::env::var("PRONOTE_PASSWORD").ok()) {
                Some(p) => p,
                None => anyhow::bail!("no password given; pass --password or set PRONOTE_PASSWORD"),
            };

            let credentials = Credentials { url, username, password, cas };
            let envelope = client.login(&credentials).await?;
            output_envelope(&output_format, "Logged in", "user", envelope)
        }
    }
}
