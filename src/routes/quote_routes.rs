use axum::{
    extract::State,
    routing::post,
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::catalog_dto::ApiResponse;
use crate::dto::quote_dto::{CompareRequest, CompareResponse, QuoteRequest, QuoteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(quote_car))
        .route("/compare", post(compare_catalog))
}

async fn quote_car(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(state.catalog.clone());
    let response = controller.quote(request)?;
    Ok(Json(response))
}

async fn compare_catalog(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let controller = QuoteController::new(state.catalog.clone());
    let response = controller.compare(request)?;
    Ok(Json(response))
}
