//! Hassio Frontend
//!
//! Serves the server-rendered home and chat pages, the global stylesheet, and
//! a chat-completions proxy in front of Cloudflare Workers AI. The `chat`
//! subcommand is a terminal client for the proxy.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assets;
mod chat;
mod config;
mod conversation;
mod providers;
mod render;
mod routes;

use assets::{AssetStore, DirAssetStore};
use chat::{ChatSession, HttpCompletionsClient};
use config::Config;
use providers::Inference;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub inference: Arc<dyn Inference>,
    pub assets: Option<Arc<dyn AssetStore>>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let inference = providers::from_config(&config).unwrap_or_else(|e| {
            tracing::warn!("Inference unavailable: {}", e);
            Arc::new(providers::Unavailable::new(e.to_string())) as Arc<dyn Inference>
        });

        let assets = config.assets_dir.as_ref().map(|dir| {
            tracing::info!("Serving assets from {}", dir.display());
            Arc::new(DirAssetStore::new(dir)) as Arc<dyn AssetStore>
        });

        Self {
            config,
            inference,
            assets,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hassio-frontend", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Chat with a running server from the terminal
    Chat {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:8787")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hassio_frontend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(Config::from_env()?).await,
        Command::Chat { url } => chat_repl(&url).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!(provider = %config.provider, model = %config.model, "Using inference backend");

    let state = AppState::from_config(config);

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Hassio Frontend running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Line-oriented chat against a running server. `/clear` resets the
/// transcript, `/quit` or end of input exits.
async fn chat_repl(url: &str) -> anyhow::Result<()> {
    let client = HttpCompletionsClient::new(url);
    let mut session = ChatSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(b"Start a conversation. /clear resets, /quit exits.\n> ")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/clear" => {
                session.clear();
                stdout.write_all(b"(cleared)\n").await?;
            }
            _ => {
                if session.send(&line, &client).await {
                    if let Some(reply) = session.messages().last() {
                        stdout.write_all(reply.content.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                    }
                }
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
