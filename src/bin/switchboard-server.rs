use agent_switchboard::config::ServerConfig;
use agent_switchboard::orchestrator::SupervisorWorkflow;
use agent_switchboard::server::{self, AppState};
use agent_switchboard::{init_tracing, LogFormat, OpenRouterClient};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::sync::Arc;

/// Command line arguments for the chat API server
#[derive(Parser)]
#[clap(
    name = "switchboard-server",
    about = "Multi-agent chat API: a supervisor routes each message to one specialist"
)]
struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Override the chat model for every node
    #[arg(long)]
    model: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogOutput::Pretty)]
    log_format: LogOutput,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogOutput {
    Pretty,
    Json,
}

impl From<LogOutput> for LogFormat {
    fn from(output: LogOutput) -> Self {
        match output {
            LogOutput::Pretty => LogFormat::Pretty,
            LogOutput::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_tracing(args.log_format.into())?;

    let client = OpenRouterClient::from_env().context("failed to configure the OpenRouter client")?;
    let mut model = client.config().default_model_config();
    if let Some(name) = args.model {
        model.model = name;
    }
    tracing::info!(model = %model.model, "Starting multi-agent chat API");

    let workflow = SupervisorWorkflow::new(Arc::new(client), model);
    let config = ServerConfig::new(args.host, args.port);
    server::serve(&config, AppState::new(workflow)).await?;

    Ok(())
}
