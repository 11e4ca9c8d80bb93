use std::{net::SocketAddr, sync::Arc};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{
    notification::LoggingNotificationSender,
    runtime,
    service_order::repository::SeaOrmServiceOrderRepository,
};

/// Restrict CORS to the configured origins; permissive when none are configured.
pub fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if allowed.is_empty() {
        return CorsLayer::very_permissive();
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: connect the database, build the app and run the HTTP server
/// until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let config_path = configs::config_path();
    runtime::ensure_env(&config_path).await?;
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    }

    let state = ServerState::new(
        Arc::new(SeaOrmServiceOrderRepository::new(db)),
        Arc::new(LoggingNotificationSender),
    );

    let cors = build_cors(&cfg.server.cors_origins);
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting service order server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
