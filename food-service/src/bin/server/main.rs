use std::sync::Arc;

use food_service::config::Config;
use food_service::domain::account::service::AccountService;
use food_service::domain::admin::service::AdminService;
use food_service::domain::catalog::service::CatalogService;
use food_service::inbound::http::router::create_router;
use food_service::outbound::repositories::PostgresAccountRepository;
use food_service::outbound::repositories::PostgresAdminRepository;
use food_service::outbound::repositories::PostgresCatalogRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "food-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        body_limit_bytes = config.server.body_limit_bytes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let catalog_repository = Arc::new(PostgresCatalogRepository::new(pg_pool.clone()));
    let admin_repository = Arc::new(PostgresAdminRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(account_repository));
    let catalog_service = Arc::new(CatalogService::new(catalog_repository));
    let admin_service = Arc::new(AdminService::new(admin_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        catalog_service,
        admin_service,
        config.server.body_limit_bytes,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
