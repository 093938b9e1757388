use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{error_handling::HandleErrorLayer, response::IntoResponse, BoxError};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tracing_subscriber::EnvFilter;

use imagegen_proxy::{
    app::{envy::Envy, errors::DefaultApiError, util},
    AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.credential().is_none() {
        tracing::warn!("API_KEY is not set, generation requests will fail");
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let rate_limit_per_second = match envy.throttle_rate() {
        Ok(rate) => rate,
        Err(e) => panic!("{}", e),
    };

    let client = match util::reqwest::build_client() {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {}", e),
    };

    let state = AppState {
        envy: Arc::new(envy),
        client,
    };

    // app
    let app = imagegen_proxy::router(state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_throttle_error))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(
                rate_limit_per_second,
                Duration::from_secs(1),
            )),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, %app_env, "listening");

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server stopped");
    }
}

async fn handle_throttle_error(err: BoxError) -> impl IntoResponse {
    tracing::error!(%err, "throttle layer failed");

    DefaultApiError::InternalServerError.value()
}
