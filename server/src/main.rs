mod backend;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::backend::{BackendClient, BackendConfig};

#[tokio::main]
async fn main() {
    // .env is optional.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Exit before serving anything when credentials are unusable.
    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "backend configuration invalid");
            std::process::exit(1);
        }
    };
    let backend: BackendClient = match BackendClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "backend client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(url = backend.url(), schema = backend.schema(), "backend client initialized");

    let state = state::AppState::new(backend);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "propulse listening");
    axum::serve(listener, app).await.expect("server failed");
}
