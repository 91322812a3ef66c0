use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;

use adapters::{PgCallRepository, PgInvolvedUnitRepository};
use application::{CallService, InvolvedUnitService};

/// Type aliases for application services with concrete repository implementations
pub type AppCallService = CallService<PgCallRepository>;
pub type AppInvolvedUnitService = InvolvedUnitService<PgInvolvedUnitRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub call_service: Arc<AppCallService>,
    pub involved_unit_service: Arc<AppInvolvedUnitService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Beacon API initializing");

    if let Ok(api_key) = std::env::var("BEACON_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No BEACON_API_KEY set - authentication disabled");
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to connect to the database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize application services
    let call_repo = Arc::new(PgCallRepository::new(pool.clone()));
    let involved_unit_repo = Arc::new(PgInvolvedUnitRepository::new(pool));
    let state = AppState {
        call_service: Arc::new(CallService::new(call_repo)),
        involved_unit_service: Arc::new(InvolvedUnitService::new(involved_unit_repo)),
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::call::router())
        .merge(routes::involved_unit::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("Beacon API listening on {bind_addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
