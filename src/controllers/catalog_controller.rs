//! Controller del catálogo
//!
//! Lecturas de los datos de referencia: cars y companies.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::dto::catalog_dto::{
    CarListResponse, CarResponse, CompanyListResponse, CompanyResponse,
};
use crate::utils::errors::{not_found_error, AppError};

pub struct CatalogController {
    catalog: Arc<CatalogStore>,
}

impl CatalogController {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn list_cars(&self) -> CarListResponse {
        let cars: Vec<CarResponse> = self.catalog.cars().iter().map(CarResponse::from).collect();
        CarListResponse {
            total: cars.len(),
            cars,
        }
    }

    pub fn get_car(&self, id: &str) -> Result<CarResponse, AppError> {
        self.catalog
            .car(id)
            .map(CarResponse::from)
            .ok_or_else(|| not_found_error("Car", id))
    }

    pub fn list_companies(&self) -> CompanyListResponse {
        let companies: Vec<CompanyResponse> = self
            .catalog
            .companies()
            .iter()
            .map(CompanyResponse::from)
            .collect();
        CompanyListResponse {
            total: companies.len(),
            companies,
        }
    }

    pub fn get_company(&self, id: &str) -> Result<CompanyResponse, AppError> {
        self.catalog
            .company(id)
            .map(CompanyResponse::from)
            .ok_or_else(|| not_found_error("Company", id))
    }

    /// Cars de una company específica
    pub fn list_cars_by_company(&self, company_id: &str) -> Result<CarListResponse, AppError> {
        if self.catalog.company(company_id).is_none() {
            return Err(not_found_error("Company", company_id));
        }

        let cars: Vec<CarResponse> = self
            .catalog
            .cars_by_company(company_id)
            .into_iter()
            .map(CarResponse::from)
            .collect();

        Ok(CarListResponse {
            total: cars.len(),
            cars,
        })
    }
}
