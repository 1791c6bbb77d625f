mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new(&config).expect("failed to build upstream http client");

    let app = routes::leptos_app(state).expect("failed to build application router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.upstream_api, "showroom listening");
    axum::serve(listener, app).await.expect("server failed");
}
