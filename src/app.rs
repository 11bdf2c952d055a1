use std::sync::Arc;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use crate::config::{Args, Config};
use crate::fetcher::Fetcher;
use crate::http::server;
use crate::scheduler::Scheduler;
use crate::upstream::youtube::YouTubeClient;
use crate::utils;

pub async fn run() {
    let args = Args::parse();

    if let Err(e) = utils::init_tracing(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        return;
    }

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.channel_id.is_empty() {
        tracing::warn!("CHANNEL_ID is empty, snapshots will fall back to none");
    }
    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is empty, snapshots will fall back to none");
    }
    tracing::info!("Watching channel: {}", config.channel_id);

    let shutdown = CancellationToken::new();
    let fetcher = Arc::new(Fetcher::new(
        YouTubeClient::from_config(&config),
        config.channel_id.clone(),
    ));

    // first snapshot exists before the listener accepts anything
    let (store, refresh_task) = Scheduler::start(fetcher, config.refresh_interval(), shutdown.clone()).await;

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            tracing::info!("Shutting down");
            shutdown.cancel();
        }
    });

    let served = server::start(&config.listen_addr, store, shutdown.clone().cancelled_owned()).await;
    shutdown.cancel();
    if let Err(e) = refresh_task.await {
        tracing::error!("Refresh task failed: {}", e);
    }

    if let Err(e) = served {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }
}
