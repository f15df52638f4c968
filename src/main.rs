use std::sync::Arc;

use cinematch_api::{
    api::{create_router, AppState},
    config::Config,
    data,
    services::{providers::TmdbProvider, Recommender},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinematch_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Refuse to serve anything if the artifacts are missing or inconsistent
    let model = data::shared_model(&config.catalog_path, &config.similarity_path)?;

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.poster_timeout(),
    )?;

    let recommender = Recommender::new(
        model,
        Arc::new(provider),
        config.poster_settings(),
        config.recommendation_count,
    );

    let app = create_router(AppState::new(recommender));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
