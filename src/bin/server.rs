//! Taskpulse service binary.
//!
//! Trains the priority model, then serves the task API over HTTP. Training
//! completes before the listener is bound, so no request ever observes an
//! untrained model.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskpulse::{
    build_router, default_training_set, AppState, Config, IntentClassifier, MemoryStorage,
    PriorityResolver, TaskService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("taskpulse=info".parse()?))
        .init();

    info!("Starting taskpulse service...");

    let config = Config::default();

    // Train the priority model before accepting traffic
    let classifier = Arc::new(IntentClassifier::new());
    let examples = default_training_set();
    classifier
        .train(&examples)
        .context("Failed to train priority model")?;
    info!(examples = examples.len(), "Priority model trained");

    let storage = Arc::new(MemoryStorage::new());
    let service = Arc::new(TaskService::new(storage, PriorityResolver::new(classifier)));

    let app = build_router(AppState { service });

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
