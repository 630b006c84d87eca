// src/main.rs
use anyhow::Result;
use identity_core::application::ports::{
    identity::IdentityStore, security::PasswordHasher, token_store::TokenStore,
};
use identity_core::application::services::ApplicationServices;
use identity_core::config::AppConfig;
use identity_core::infrastructure::{
    database,
    repositories::PostgresIdentityStore,
    security::{BcryptPasswordHasher, RedisTokenStore},
};
use identity_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    // One store per token namespace: service API tokens, access tokens,
    // refresh tokens, OAuth codes. Four consecutive logical databases.
    let service_token_store = token_store(&config, 0).await?;
    let access_token_store = token_store(&config, 1).await?;
    let refresh_token_store = token_store(&config, 2).await?;
    let oauth_code_store = token_store(&config, 3).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::default());
    let identity: Arc<dyn IdentityStore> = Arc::new(PostgresIdentityStore::new(
        pool.clone(),
        Arc::clone(&password_hasher),
    ));

    let services = Arc::new(ApplicationServices::new(
        identity,
        config.known_apps().clone(),
        service_token_store,
        access_token_store,
        refresh_token_store,
        oauth_code_store,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Connect one token namespace and fail fast if Redis is unreachable.
async fn token_store(config: &AppConfig, offset: u32) -> Result<Arc<dyn TokenStore>> {
    let store = RedisTokenStore::from_url(&config.redis_url(offset))?;
    store.ping().await?;
    Ok(Arc::new(store))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
