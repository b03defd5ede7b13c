//! Recipe API Server
//!
//! Thin REST layer over the hosted recipe store:
//! - `config`: environment-driven settings
//! - `store`: `RecipeStore` trait plus the hosted row-API client
//! - `routes`: the five CRUD handlers and the health probe
//! - `error`: API error type and response mapping
//!
//! The server owns no recipe state; every request is delegated to the
//! store and the result mapped back onto the HTTP surface.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use config::Config;
use routes::{
    create_recipe_handler, delete_recipe_handler, get_recipe_handler, health_handler,
    list_recipes_handler, update_recipe_handler,
};
use state::AppState;
use store::HostedStore;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    let store =
        HostedStore::new(&config.store_url, &config.store_key).context("Building store client")?;

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .context("Invalid CORS origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let address = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config, Arc::new(store));

    let app = Router::new()
        .route("/", get(health_handler))
        .route(
            "/recipes",
            get(list_recipes_handler).post(create_recipe_handler),
        )
        .route(
            "/recipes/:id",
            get(get_recipe_handler)
                .put(update_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .layer(cors)
        .with_state(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .context("Binding listener")?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Serving")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
