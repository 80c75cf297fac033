use altum_legal::application::{
    ports::{
        identity::IdentityProvider,
        storage::BlobStorage,
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceDependencies},
};
use altum_legal::config::AppConfig;
use altum_legal::infrastructure::{
    database,
    repositories::{
        MongoAttorneyRepository, MongoBlogPostRepository, MongoCategoryRepository,
        MongoLegalContentRepository, MongoServiceRepository,
    },
    security::ClerkIdentityProvider,
    storage::HttpBlobStorage,
    time::SystemClock,
    util::{DefaultSlugGenerator, ObjectIdGenerator},
};
use altum_legal::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use anyhow::Result;
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

    let db = database::connect(config.mongodb_uri(), config.mongodb_db()).await?;
    database::ensure_indexes(&db).await?;

    let identity: Arc<dyn IdentityProvider> =
        Arc::new(ClerkIdentityProvider::new(config.clerk().clone())?);
    let storage: Option<Arc<dyn BlobStorage>> = match config.blob_token() {
        Some(token) => Some(Arc::new(HttpBlobStorage::new(
            config.blob_api_url(),
            token,
        )?)),
        None => {
            tracing::warn!("BLOB_READ_WRITE_TOKEN not set, uploads are disabled");
            None
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let ids: Arc<dyn IdGenerator> = Arc::new(ObjectIdGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        attorneys: Arc::new(MongoAttorneyRepository::new(&db)),
        posts: Arc::new(MongoBlogPostRepository::new(&db)),
        categories: Arc::new(MongoCategoryRepository::new(&db)),
        services: Arc::new(MongoServiceRepository::new(&db)),
        legal: Arc::new(MongoLegalContentRepository::new(&db)),
        identity,
        storage,
        clock,
        slugger,
        ids,
    }));

    let state = HttpState { services };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,mongodb=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
