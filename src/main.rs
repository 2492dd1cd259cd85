use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surveymars_mcp::client::SurveyClient;
use surveymars_mcp::config::{Credentials, ACCOUNT_ID_VAR, BASE_URL_VAR, SECRET_KEY_VAR};
use surveymars_mcp::mcp;

#[derive(Parser)]
#[command(name = "surveymars-mcp")]
#[command(version, about = "SurveyMars MCP Server")]
struct Cli {
    /// Account ID
    #[arg(long)]
    account_id: Option<String>,

    /// Account Secret Key
    #[arg(long)]
    secret_key: Option<String>,

    /// SurveyMars API host
    #[arg(long)]
    base_url: Option<String>,

    /// Path to .env file
    #[arg(long)]
    env_file: Option<PathBuf>,
}

/// Initialize tracing on stderr; stdout carries the protocol.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "surveymars_mcp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve credentials from flags, then the environment (including `.env`).
fn load_credentials(cli: &Cli) -> anyhow::Result<Credentials> {
    match &cli.env_file {
        Some(path) => {
            tracing::info!("Loading environment from file: {}", path.display());
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Loaded environment from default .env file");
            }
        }
    }

    let credentials = Credentials::from_lookup(|name| {
        let flag = match name {
            ACCOUNT_ID_VAR => cli.account_id.clone(),
            SECRET_KEY_VAR => cli.secret_key.clone(),
            BASE_URL_VAR => cli.base_url.clone(),
            _ => None,
        };
        flag.or_else(|| std::env::var(name).ok())
    })?;

    Ok(credentials)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let credentials = load_credentials(&cli)?;

    tracing::info!("Starting SurveyMars MCP Server");
    tracing::info!("Base URL: {}", credentials.base_url);
    tracing::info!("Account ID: {}", credentials.account_id);

    let client = SurveyClient::new(credentials);
    mcp::run_stdio_server(client).await?;

    Ok(())
}
