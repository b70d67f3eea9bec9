use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use formsmith::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Generate HTML forms from free-text prompts", long_about = None)]
struct Cli {
    /// Path to the TOML config file (defaults to ./formsmith.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Address to listen on, overriding the config file
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = formsmith::configure(cli.config.as_deref(), cli.bind)?;
    formsmith::serve(config).await
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already carry the key.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formsmith=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
