//! Controller de cotizaciones
//!
//! Orquesta una request de cotización: valida la entrada, resuelve el car
//! y su company en el catálogo, invoca el motor de pricing y arma el DTO.

use std::sync::Arc;

use validator::Validate;

use crate::catalog::CatalogStore;
use crate::dto::catalog_dto::ApiResponse;
use crate::dto::quote_dto::{CompareRequest, CompareResponse, QuoteRequest, QuoteResponse};
use crate::models::car::Car;
use crate::models::company::Company;
use crate::services::quote_service;
use crate::utils::errors::AppError;

pub struct QuoteController {
    catalog: Arc<CatalogStore>,
}

impl QuoteController {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Cotizar un car específico
    pub fn quote(&self, request: QuoteRequest) -> Result<ApiResponse<QuoteResponse>, AppError> {
        request.validate()?;

        let car = self
            .catalog
            .car(&request.car_id)
            .ok_or_else(|| AppError::NotFound(format!("Car '{}' not found", request.car_id)))?;

        let company = self.catalog.company_for(car).ok_or_else(|| {
            AppError::Internal(format!(
                "Car '{}' references missing company '{}'",
                car.id, car.company
            ))
        })?;

        let response =
            self.build_quote(car, company, request.duration_hours, request.distance_km)?;

        Ok(ApiResponse::success(response))
    }

    /// Cotizar todos los cars del catálogo que pasen los filtros,
    /// ordenados por precio total ascendente (empates en orden de catálogo)
    pub fn compare(&self, request: CompareRequest) -> Result<CompareResponse, AppError> {
        request.validate()?;

        let mut results = Vec::new();
        for car in self.catalog.cars() {
            if !matches_filters(car, &request) {
                continue;
            }

            let company = self.catalog.company_for(car).ok_or_else(|| {
                AppError::Internal(format!(
                    "Car '{}' references missing company '{}'",
                    car.id, car.company
                ))
            })?;

            results.push(self.build_quote(
                car,
                company,
                request.duration_hours,
                request.distance_km,
            )?);
        }

        // sort estable: los empates conservan el orden del catálogo
        results.sort_by(|a, b| a.breakdown.total_price.cmp(&b.breakdown.total_price));

        Ok(CompareResponse {
            total: results.len(),
            results,
            duration_hours: request.duration_hours,
            distance_km: request.distance_km,
        })
    }

    fn build_quote(
        &self,
        car: &Car,
        company: &Company,
        duration_hours: f64,
        distance_km: f64,
    ) -> Result<QuoteResponse, AppError> {
        let breakdown = quote_service::assemble_quote(car, company, duration_hours, distance_km)?;

        Ok(QuoteResponse {
            car_id: car.id.clone(),
            car_name: car.name.clone(),
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            breakdown,
            minimum_applied: duration_hours < 1.0,
        })
    }
}

fn matches_filters(car: &Car, request: &CompareRequest) -> bool {
    if let Some(body_type) = request.body_type {
        if car.body_type != body_type {
            return false;
        }
    }
    if let Some(transmission) = request.transmission {
        if car.transmission != transmission {
            return false;
        }
    }
    if let Some(fuel_type) = request.fuel_type {
        if car.fuel_type != fuel_type {
            return false;
        }
    }
    if let Some(company) = &request.company {
        if &car.company != company {
            return false;
        }
    }
    true
}
