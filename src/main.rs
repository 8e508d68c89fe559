use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = magazine_setup::Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_path = %cfg.storage.database_path.display(),
        upload_dir = %cfg.storage.upload_dir.display(),
        login_url = %cfg.site.login_url,
        loglevel = %cfg.basic.loglevel
    );

    let addr = cfg.basic.listen_addr.clone();
    let state = magazine_setup::SetupState::new(cfg);
    if magazine_setup::setup::is_setup_complete(state.service.database_path()).await {
        warn!("an administrator already exists; this service only shows a notice and should be stopped");
    }

    let app = magazine_setup::setup_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("setup wizard listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("setup wizard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
