use log::{error, info};
use std::sync::{Arc, Mutex};
use study_tracker::api::{self, AppState};
use study_tracker::cli::Args;
use study_tracker::database_factory::{DatabaseConfig, DatabaseFactory};
use study_tracker::seed;
use study_tracker::statistics_service::StatisticsService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse_args();
    let config = DatabaseConfig::from_args(&args)?;
    let db = DatabaseFactory::create(config)?;

    for path in &args.seed {
        let group = seed::load_file(path).inspect_err(|e| {
            error!("Failed to load seed file {}: {}", path.display(), e);
        })?;
        db.import_seed(&group)?;
    }

    let statistics = StatisticsService::new(Arc::new(Mutex::new(db)));
    let app = api::router(AppState::new(statistics));

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
