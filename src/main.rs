use anyhow::Result;
use pressroom::application::auth::AuthService;
use pressroom::application::ports::{
    directory::UserDirectory,
    mailer::OtpMailer,
    otp::OtpChallengeStore,
    security::{SessionStore, TokenIssuer, TokenVerifier},
    time::Clock,
    util::IdGenerator,
};
use pressroom::config::{AppConfig, StorageBackend};
use pressroom::domain::article::ArticleRepository;
use pressroom::infrastructure::{
    database,
    directory::InMemoryUserDirectory,
    mailer::TracingOtpMailer,
    repositories::{InMemoryArticleRepository, PostgresArticleRepository},
    security::{HmacTokenManager, InMemoryOtpChallengeStore, InMemorySessionStore},
    time::SystemClock,
    util::UuidGenerator,
};
use pressroom::presentation::http::{
    routes::build_router,
    state::{HttpState, Repositories},
};
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

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    let articles: Arc<dyn ArticleRepository> = match config.storage_backend() {
        StorageBackend::Memory => {
            tracing::info!("using in-memory article store");
            Arc::new(InMemoryArticleRepository::new(
                Arc::clone(&ids),
                Arc::clone(&clock),
            ))
        }
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url()).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres article store");
            Arc::new(PostgresArticleRepository::new(pool))
        }
    };

    let token_manager = Arc::new(HmacTokenManager::new(
        config.token_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);
    let issuer: Arc<dyn TokenIssuer> = token_manager.clone();
    let verifier: Arc<dyn TokenVerifier> = token_manager;

    let sessions: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(Arc::clone(&clock)));
    let challenges: Arc<dyn OtpChallengeStore> = Arc::new(InMemoryOtpChallengeStore::new());
    let directory: Arc<dyn UserDirectory> =
        Arc::new(InMemoryUserDirectory::new(Arc::clone(&ids)));
    let mailer: Arc<dyn OtpMailer> = Arc::new(TracingOtpMailer);

    let auth = Arc::new(AuthService::new(
        challenges,
        directory,
        Arc::clone(&sessions),
        issuer,
        mailer,
        Arc::clone(&clock),
        ids,
        config.auth_policy(),
    ));

    let state = HttpState {
        repositories: Repositories { articles },
        auth,
        tokens: verifier,
        sessions,
        cookie: config.cookie_config(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
