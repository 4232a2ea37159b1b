use anyhow::Result;
use clap::Parser;
use project_tracker::{config, server};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long)]
    log_level: Option<String>,
    /// Overrides the PORT environment variable
    #[clap(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(args.log_level.as_deref());

    // Load configuration
    let mut config = config::init()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    info!("Initializing project tracker...");

    server::start_server(&config).await?;

    Ok(())
}

fn setup_logging(log_level: Option<&str>) {
    let log_level = match log_level.unwrap_or("info").to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .init();
}
