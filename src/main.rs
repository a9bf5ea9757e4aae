use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod config;
mod dispatch;
mod errors;
mod models;

use api::AppState;
use dispatch::forwarder::Forwarder;
use dispatch::processor::BatchProcessor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "relay=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Serve { port }) => run_server(cfg, port).await,
        Some(cli::Commands::Process { file }) => process_file(cfg, &file).await,
        None => {
            let port = cfg.port;
            run_server(cfg, port).await
        }
    };

    if let Err(ref e) = result {
        eprintln!("Error: {:?}", e);
    }
    result
}

async fn run_server(cfg: config::Config, port: u16) -> anyhow::Result<()> {
    let forwarder = Forwarder::from_config(&cfg);
    let state = Arc::new(AppState {
        processor: BatchProcessor::new(forwarder),
    });

    let app = api::router(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("approval relay listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Replay a saved batch envelope once and print the summary. Exits 0
/// regardless of per-message outcomes, mirroring the batch contract.
async fn process_file(cfg: config::Config, path: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let batch: models::queue::QueueBatch =
        serde_json::from_slice(&raw).context("batch envelope is not valid JSON")?;

    let processor = BatchProcessor::new(Forwarder::from_config(&cfg));
    let summary = processor.process(&batch).await;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Middleware: injects a unique X-Request-Id into every response so batch
/// deliveries can be correlated with relay logs.
async fn request_id_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let req_id = uuid::Uuid::new_v4().to_string();
    let mut resp = next.run(req).await;
    if let Ok(val) = axum::http::HeaderValue::from_str(&req_id) {
        resp.headers_mut().insert("x-request-id", val);
    }
    resp
}
