use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use veritrack::config::Config;
use veritrack::handlers;
use veritrack::store::{AppState, DeviceStore};

#[derive(Parser)]
#[command(name = "veritrack", version, about = "Measurement-device verification tracker")]
struct Cli {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("veritrack=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let mut store = DeviceStore::new();
    if config.dev_mode {
        store.seed_demo();
        tracing::info!(devices = store.len(), "dev mode: seeded demo catalog");
    }

    let app = handlers::app(AppState::with_store(store));

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
