//! Development server for UI development.
//!
//! Runs the mock community API on a local port and seeds it with demo
//! data so the frontend has something to render.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = test_helpers::telemetry::get_subscriber("info".into());
    test_helpers::telemetry::init_subscriber(subscriber);

    let app = test_helpers::spawn_app().await;
    info!("API server running on http://127.0.0.1:{}", app.port);

    test_helpers::mock::seed_demo_communities(&app).await?;
    info!(
        "Seeded {} demo communities",
        test_helpers::mock::DEMO_COMMUNITIES.len()
    );

    info!(
        "UI: cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}
