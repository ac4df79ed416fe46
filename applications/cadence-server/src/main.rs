/// Cadence Server - HTTP front for the playback controller
use cadence_client::MediaApiClient;
use cadence_server::{config::ServerConfig, create_router, state::AppState};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Cadence music player server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run one search against the media API and print the results
    Search {
        /// Search query
        query: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_server=info,cadence_playback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Search { query, config } => {
            search(&query, config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Search API: {}", config.api.search_url);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let preload = config
        .player
        .preload
        .then(|| config.player.default_search.clone());

    // Build application state
    let app_state = AppState::from_config(config)?;

    // Fill the playlist before the first visitor arrives
    if let Some(query) = preload {
        let controller = app_state.controller.clone();
        tokio::spawn(async move {
            let tracks = controller.search(&query).await;
            tracing::info!(query = %query, tracks = tracks.len(), "Startup search finished");
        });
    }

    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn search(query: &str, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let client = MediaApiClient::new(config.api)?;

    let tracks = client.search_tracks(query).await?;

    println!("Results for {:?}:", query);
    for (index, track) in tracks.iter().enumerate() {
        println!(
            "  {:>2}. {} - {} [{}]",
            index,
            track.artist(),
            track.title(),
            track.duration_label()
        );
    }

    Ok(())
}
