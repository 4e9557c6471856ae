mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config, error::AppError, service::slot::SlotService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let jwt = startup::setup_jwt_service(&config);

    // Seeded once per process start
    SlotService::new(&db, config.slot_offset)
        .seed_daily_slots(&config.slot_window)
        .await?;

    let (router, api) = server::router::router().split_for_parts();
    let app = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(AppState::new(db, jwt, config.slot_offset))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
