//! Nutrition Tracker server - customer BMI history and nutrition comparison.
//!
//! This binary serves the JSON API on port 3000 by default.
//!
//! # Architecture
//!
//! - Axum web framework
//! - A single pretty-printed JSON document as the only persistence
//! - Read-only food/product catalog held in application state
//! - Static browser client served from the public directory, if present

#![cfg_attr(not(test), forbid(unsafe_code))]

use nutrition_tracker_server::{
    build_router, catalog::Catalog, config::ServerConfig, state::AppState, store::DocumentStore,
};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(config: &ServerConfig) {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nutrition_tracker_server=info,tower_http=debug".into());

    let json_layer = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!config.log_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn load_catalog(config: &ServerConfig) -> Catalog {
    let Some(path) = &config.catalog_file else {
        return Catalog::builtin();
    };

    let catalog = Catalog::from_file(path).expect("Failed to load catalog");
    tracing::info!(
        path = %path.display(),
        foods = catalog.foods().len(),
        products = catalog.products().len(),
        "Catalog loaded"
    );
    catalog
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing(&config);

    // A corrupt document is fatal at startup; it is never silently replaced.
    let store = DocumentStore::open(&config.data_file)
        .await
        .expect("Failed to open document store");

    let catalog = load_catalog(&config);
    let state = AppState::new(store, catalog);

    let public_dir = config.public_dir.is_dir().then_some(config.public_dir.as_path());
    if public_dir.is_none() {
        tracing::info!(
            path = %config.public_dir.display(),
            "Public directory not found, static client disabled"
        );
    }

    let app = build_router(state, public_dir)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("nutrition tracker listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
