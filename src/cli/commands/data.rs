use clap::Subcommand;

use crate::cli::client::PortalClient;
use crate::cli::utils::output_envelope;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum DataCommands {
    #[command(about = "Show grades")]
    Grades {
        #[arg(long, help = "Period name (e.g. 'Trimestre 1'); current period when omitted")]
        period: Option<String>,
    },

    #[command(about = "Show homework, optionally bounded by due date")]
    Homework {
        #[arg(long, help = "First due date (YYYY-MM-DD)")]
        from: Option<String>,
        #[arg(long, help = "Last due date (YYYY-MM-DD)")]
        to: Option<String>,
    },

    #[command(about = "Show lessons between two dates")]
    Timetable {
        #[arg(long, help = "First day (YYYY-MM-DD)")]
        from: String,
        #[arg(long, help = "Last day (YYYY-MM-DD)")]
        to: String,
    },
}

pub async fn handle(cmd: DataCommands, client: &PortalClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DataCommands::Grades { period } => {
            let query: Vec<(&str, String)> = period.into_iter().map(|p| ("period", p)).collect();
            let envelope = client.get("/api/grades", &query).await?;
            output_envelope(&output_format, "Grades", "grades", envelope)
        }
        DataCommands::Homework { from, to } => {
            let mut query = Vec::new();
            if let Some(from) = from {
                query.push(("from", from));
            }
            if let Some(to) = to {
                query.push(("to", to));
            }
            let envelope = client.get("/api/homework", &query).await?;
            output_envelope(&output_format, "Homework", "homework", envelope)
        }
        DataCommands::Timetable { from, to } => {
            let query = [("from", from), ("to", to)];
            let envelope = client.get("/api/timetable", &query).await?;
            output_envelope(&output_format, "Timetable", "timetable", envelope)
        }
    }
}
