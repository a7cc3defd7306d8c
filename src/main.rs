//! driftwatch entry point
//!
//! 1. Loads configuration and installs the metrics exporter
//! 2. Health-checks the market-data API (fatal if unreachable)
//! 3. Logs a one-shot report: ranked symbols, notional depth, spreads
//! 4. Runs the spread-delta monitor until Ctrl+C

use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

use driftwatch::adapters::{BinanceClient, MarketData};
use driftwatch::config;
use driftwatch::config::AppConfig;
use driftwatch::core::{
    DeltaMonitor, NotionalAggregator, RankField, SpreadSampler, SymbolRanker,
};
use driftwatch::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    config::logging::init_logging();

    info!("driftwatch starting");

    let config_path = config::constants::config_path();
    let config = match config::load_config(&config_path) {
        Ok(cfg) => {
            info!(
                path = %config_path.display(),
                quote_asset = %cfg.watch.quote_asset,
                rank_field = %cfg.watch.rank_field,
                top_k = cfg.watch.top_k,
                "configuration loaded"
            );
            cfg
        }
        Err(e) => {
            error!("Configuration failed: {}", e);
            std::process::exit(1);
        }
    };
    let field = config.watch.field()?;

    telemetry::init_metrics(config.metrics.port)?;

    let client = Arc::new(BinanceClient::new());

    // The liveness probe gates everything else; an unreachable API
    // aborts before any sampling begins.
    if let Err(e) = client.ping().await {
        error!("Health check failed: {}", e);
        std::process::exit(1);
    }
    info!("market data API reachable");

    startup_report(&client, &config, field).await?;

    let monitor = DeltaMonitor::new(Arc::clone(&client), config.watch.quote_asset.clone(), field)
        .with_top_k(config.watch.top_k)
        .with_interval(Duration::from_secs(config.watch.sample_interval_secs));

    // Broadcast shutdown from a Ctrl+C task; the monitor races every
    // cycle against it, so shutdown also interrupts the sampling wait.
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown requested");
                let _ = shutdown_tx.send(());
            }
            Err(err) => {
                eprintln!("Failed to listen for Ctrl+C signal: {}", err);
            }
        }
    });

    monitor.run(shutdown_rx).await?;

    info!("clean exit");
    Ok(())
}

/// One-shot report of the derivations for the configured watch: the
/// ranked symbols with their field values, each book's notional sums,
/// and a first spread snapshot.
async fn startup_report(
    client: &Arc<BinanceClient>,
    config: &AppConfig,
    field: RankField,
) -> anyhow::Result<()> {
    let ranker = SymbolRanker::new(Arc::clone(client));
    let ranked = ranker
        .rank(&config.watch.quote_asset, field, config.watch.top_k)
        .await?;
    info!(
        count = ranked.len(),
        quote_asset = %config.watch.quote_asset,
        field = %field,
        "top symbols ranked"
    );
    for entry in &ranked {
        info!(symbol = %entry.symbol, value = entry.value, "ranked symbol");
    }

    let aggregator = NotionalAggregator::with_limits(
        Arc::clone(client),
        config.watch.depth_limit,
        config.watch.retain,
    );
    let notional = aggregator.aggregate(&ranked).await?;
    for (book, value) in &notional {
        info!(book = %book, notional = value, "order-book notional");
    }

    let sampler = SpreadSampler::new(Arc::clone(client));
    let snapshot = sampler.sample(&ranked).await?;
    for (symbol, spread) in &snapshot.spreads {
        info!(symbol = %symbol, spread = spread, "price spread");
    }

    Ok(())
}
