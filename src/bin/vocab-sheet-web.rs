use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vocab_sheet::constants::DEFAULT_WEB_TEMPLATE;
use vocab_sheet::web::{AppState, app};

/// Serve the vocabulary PDF upload form.
#[derive(Parser)]
#[command(name = "vocab-sheet-web", version, about)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8501")]
    bind: SocketAddr,

    /// Background template image used for every request
    #[arg(short, long, default_value = DEFAULT_WEB_TEMPLATE)]
    template: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocab_sheet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if !args.template.exists() {
        tracing::warn!(
            "Template {} does not exist yet; requests will fail until it does",
            args.template.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!("Vocabulary PDF generator listening on http://{}", args.bind);

    axum::serve(listener, app(AppState::new(args.template))).await?;
    Ok(())
}
