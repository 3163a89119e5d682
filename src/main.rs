mod mocks;
mod model;
mod repository;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let state = state::AppState::new();

    // Seed from the upstream board endpoint when configured; otherwise
    // fall back to the built-in mock board set.
    match std::env::var("BOARDS_URL") {
        Ok(url) => {
            let timeouts = repository::RepositoryTimeouts::from_env();
            let repo = repository::BoardRepository::new(url, timeouts).expect("HTTP client build failed");
            let _load = services::boards::spawn_load_task(state.clone(), repo);
        }
        Err(_) => {
            tracing::warn!("BOARDS_URL not set — seeding mock boards");
            services::boards::seed_boards(&state, mocks::sample_boards()).await;
        }
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dragboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
