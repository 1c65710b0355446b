//! Shop entry point.

use app::config::Config;
use app::error::AppResult;
use app::telemetry::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> AppResult<()> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config)?;

    // 2. Install Prometheus metrics recorder
    let metrics_handle = init_metrics()?;

    // 3. Open the database and wire the services
    let (shop, pool) = app::bootstrap(&config, app::default_dispatcher()).await?;
    tracing::debug!(dispatcher = ?shop.dispatcher(), "handlers registered");

    // 4. Run the sample flow
    let report = app::demo::run(&shop).await?;
    tracing::info!(
        customer_id = %report.customer_id,
        reward_points = report.reward_points,
        order_total = %report.order_total,
        "shop demo complete"
    );

    // 5. Report metrics and shut down
    tracing::debug!(metrics = %metrics_handle.render(), "metrics snapshot");
    pool.close().await;

    tracing::info!("shop shut down");
    Ok(())
}
