mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let upstream = proxy::Upstream::new(&config).expect("faq backend client init failed");
    let state = state::AppState::new(upstream);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "faq-host listening");
    axum::serve(listener, app).await.expect("server failed");
}
