//! Store inmutable del catálogo
//!
//! Este módulo contiene el catálogo de cars y companies en memoria.
//! Se construye una sola vez al arranque, se valida, y queda de solo
//! lectura durante toda la vida del proceso.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::models::car::Car;
use crate::models::company::Company;

use super::CatalogError;

/// Documento de catálogo tal como viene del archivo de datos
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub companies: Vec<Company>,
    pub cars: Vec<Car>,
}

/// Catálogo validado con índices por id
#[derive(Debug)]
pub struct CatalogStore {
    companies: Vec<Company>,
    cars: Vec<Car>,
    company_index: HashMap<String, usize>,
    car_index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Construir el store validando el documento: ids únicos, foreign keys
    /// resolubles y tarifas hour/day positivas
    pub fn new(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut company_index = HashMap::with_capacity(document.companies.len());
        for (position, company) in document.companies.iter().enumerate() {
            if company_index.insert(company.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCompany(company.id.clone()));
            }
            if company.free_km_policy.is_empty() {
                warn!(
                    "⚠️ Company '{}' sin política de km gratis: sus cars no acumulan km sin override",
                    company.id
                );
            }
        }

        let mut car_index = HashMap::with_capacity(document.cars.len());
        for (position, car) in document.cars.iter().enumerate() {
            if car_index.insert(car.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCar(car.id.clone()));
            }
            if !company_index.contains_key(&car.company) {
                return Err(CatalogError::UnknownCompany {
                    car: car.id.clone(),
                    company: car.company.clone(),
                });
            }
            if car.pricing.hour <= Decimal::ZERO {
                return Err(CatalogError::InvalidRate {
                    car: car.id.clone(),
                    field: "hour",
                });
            }
            if car.pricing.day <= Decimal::ZERO {
                return Err(CatalogError::InvalidRate {
                    car: car.id.clone(),
                    field: "day",
                });
            }
        }

        Ok(Self {
            companies: document.companies,
            cars: document.cars,
            company_index,
            car_index,
        })
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.company_index.get(id).map(|&i| &self.companies[i])
    }

    pub fn car(&self, id: &str) -> Option<&Car> {
        self.car_index.get(id).map(|&i| &self.cars[i])
    }

    /// Company de un car; el constructor garantiza que la FK resuelve
    pub fn company_for(&self, car: &Car) -> Option<&Company> {
        self.company(&car.company)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn cars_by_company(&self, company_id: &str) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| car.company == company_id)
            .collect()
    }
}
