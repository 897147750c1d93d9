use axum::Router;
use bento_stats::{config, routes, state};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bento_stats=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let state = state::AppState::new(config.clone());

    let eviction_state = state.clone();
    let eviction_ttl = config.cache_ttl;
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(tokio::time::Duration::from_secs(300)).await;
            eviction_state.evict_expired(eviction_ttl);
        }
    });

    if config.intervals.api_key.is_none() || config.intervals.athlete_id.is_none() {
        tracing::warn!("Intervals.icu credentials missing; /api/intervals/sync will reject requests");
    }

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::activities::router())
        .merge(routes::stats::router())
        .merge(routes::intervals::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::extract::DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("bento-stats listening on {}", addr);
    tracing::info!("Ingest: POST http://{}/api/activities", addr);
    tracing::info!("Stats: GET http://{}/api/stats/:batch_id", addr);
    tracing::info!("Sync: POST http://{}/api/intervals/sync", addr);

    axum::serve(listener, app).await
}
