use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use incometax::app::{self, AppState};
use incometax::config::{AppConfig, Config, DatabaseConfig, LogFormat};
use incometax::middleware::{AdminCredentials, RateLimiter, RequestId};

fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(app.log_filter()));
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    init_tracing(&config.app);

    tracing::info!("Starting income tax service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    DatabaseConfig::run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let credentials = AdminCredentials::new(&config.admin.username, &config.admin.password)
        .context("Failed to prepare admin credentials")?;
    let state = AppState::from_pool(db_pool, credentials);

    // One limiter shared by every worker
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)
        .context("Failed to create rate limiter")?;
    let development = config.is_development();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = if development {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(rate_limiter.clone())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(app::configure(state.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
