use tracing::{info, warn};

use chat_widget_host::config::HostConfig;
use chat_widget_host::routes::create_router;
use chat_widget_host::service::stub_service::StubService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_widget_host=debug,tower_http=debug".into()),
        )
        .init();

    let config = HostConfig::from_env()?;

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; build the widget with `trunk build` in frontend/",
            config.static_dir.display()
        );
    }

    let app = create_router(StubService::new(config.stub_mode), &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(stub_mode = %config.stub_mode, "Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
