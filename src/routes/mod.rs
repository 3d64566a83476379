//! Routers de la API
//!
//! Este módulo arma el router principal de Axum con las rutas de
//! cotización, catálogo y health check.

pub mod catalog_routes;
pub mod quote_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/quote", quote_routes::create_quote_router())
        .nest("/api/catalog", catalog_routes::create_catalog_router())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "carshare-pricing",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
