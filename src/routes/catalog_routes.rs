use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::{
    CarListResponse, CarResponse, CompanyListResponse, CompanyResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/cars/:id", get(get_car))
        .route("/companies", get(list_companies))
        .route("/companies/:id", get(get_company))
        .route("/companies/:id/cars", get(list_cars_by_company))
}

async fn list_cars(State(state): State<AppState>) -> Json<CarListResponse> {
    let controller = CatalogController::new(state.catalog.clone());
    Json(controller.list_cars())
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CatalogController::new(state.catalog.clone());
    let response = controller.get_car(&id)?;
    Ok(Json(response))
}

async fn list_companies(State(state): State<AppState>) -> Json<CompanyListResponse> {
    let controller = CatalogController::new(state.catalog.clone());
    Json(controller.list_companies())
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CatalogController::new(state.catalog.clone());
    let response = controller.get_company(&id)?;
    Ok(Json(response))
}

async fn list_cars_by_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarListResponse>, AppError> {
    let controller = CatalogController::new(state.catalog.clone());
    let response = controller.list_cars_by_company(&id)?;
    Ok(Json(response))
}
