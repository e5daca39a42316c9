use std::sync::Arc;

use auth::Authenticator;
use kitten_service::config::Config;
use kitten_service::domain::kitten::ports::KittenServicePort;
use kitten_service::domain::kitten::service::KittenService;
use kitten_service::domain::user::ports::UserServicePort;
use kitten_service::domain::user::service::UserService;
use kitten_service::inbound::http::router::create_router;
use kitten_service::outbound::repositories::InMemoryKittenRepository;
use kitten_service::outbound::repositories::InMemoryUserRepository;
use kitten_service::outbound::repositories::PostgresKittenRepository;
use kitten_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kitten_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "kitten-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        persistent = config.database.url.is_some(),
        jwt_expiration_hours = ?config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let (user_service, kitten_service): (Arc<dyn UserServicePort>, Arc<dyn KittenServicePort>) =
        match &config.database.url {
            Some(url) => {
                let pg_pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(url)
                    .await?;
                tracing::info!(
                    max_connections = config.database.max_connections,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                    Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                    Arc::clone(&authenticator),
                ));
                let kitten_service: Arc<dyn KittenServicePort> = Arc::new(KittenService::new(
                    Arc::new(PostgresKittenRepository::new(pg_pool)),
                ));
                (user_service, kitten_service)
            }
            None => {
                tracing::warn!("No database url configured, records are kept in memory");
                let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::clone(&authenticator),
                ));
                let kitten_service: Arc<dyn KittenServicePort> =
                    Arc::new(KittenService::new(Arc::new(InMemoryKittenRepository::new())));
                (user_service, kitten_service)
            }
        };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        kitten_service,
        authenticator,
        config.jwt.expiration_hours,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
