//! Scholar Profile - Entry Point
//!
//! Fetches the configured author's profile and either dumps the first page
//! (`--once`) or starts the interactive shell with hourly auto-refresh.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_profile::observe::{EventSink, TracingSink};
use scholar_profile::render::{self, HIGHLIGHT_MARKERS, Highlighter, TermSurface};
use scholar_profile::{Config, DataProvider, PublicationView, ScholarClient, config::api, shell};

#[derive(Parser, Debug)]
#[command(name = "scholar-profile")]
#[command(about = "Academic portfolio presenter for Semantic Scholar author profiles")]
#[command(version)]
struct Cli {
    /// Semantic Scholar author identifier to present
    #[arg(long, default_value = api::DEFAULT_AUTHOR_ID, env = "SCHOLAR_AUTHOR_ID")]
    author_id: String,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Fetch once, render the first page, and exit
    #[arg(long)]
    once: bool,

    /// With --once, dump the normalized snapshot as JSON instead
    #[arg(long, requires = "once")]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author_id = %cli.author_id,
        "Starting scholar-profile"
    );

    let config = Config::new(cli.author_id, cli.api_key);
    let client = ScholarClient::new(&config)?;
    let sink = Arc::new(TracingSink);
    let provider = Arc::new(DataProvider::new(client, config.clone(), sink.clone()));

    if cli.once {
        render_once(&provider, &config, sink, cli.json).await?;
        return Ok(());
    }

    shell::run(provider, &config, sink).await
}

/// Fetch and render the first page, staying silent on failure per the
/// stay-stale policy (the failure is logged, the placeholder view renders).
async fn render_once(
    provider: &DataProvider,
    config: &Config,
    sink: Arc<TracingSink>,
    json: bool,
) -> anyhow::Result<()> {
    let mut surface = TermSurface::new(std::io::stdout());
    let mut view = PublicationView::new();
    let mut highlighter = Highlighter::with_markers(
        &config.fallback.name,
        HIGHLIGHT_MARKERS.0,
        HIGHLIGHT_MARKERS.1,
    );

    match provider.fetch_profile().await {
        Ok(snapshot) => {
            if json {
                println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
                return Ok(());
            }
            highlighter = Highlighter::with_markers(
                &snapshot.name,
                HIGHLIGHT_MARKERS.0,
                HIGHLIGHT_MARKERS.1,
            );
            view.load(snapshot.publications.iter().cloned());
            render::render_profile(&mut surface, &snapshot, sink.as_ref());
        }
        Err(error) => {
            sink.refresh_failed(provider.author_id(), &error);
        }
    }

    render::render_view(&mut surface, &view.derive(), &highlighter, sink.as_ref());
    Ok(())
}
