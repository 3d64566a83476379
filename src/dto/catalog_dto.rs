//! DTOs del catálogo
//!
//! Este módulo contiene las responses de la API para cars y companies
//! y el wrapper genérico ApiResponse.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::car::{BodyType, Car, FuelType, RateSchedule, Transmission};
use crate::models::company::Company;
use crate::models::policy::FreeKmPolicy;

/// Wrapper genérico de respuesta de la API
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Response de car para la API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub pricing: RateSchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_km_policy: Option<FreeKmPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_extra_km: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Car> for CarResponse {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.clone(),
            name: car.name.clone(),
            company: car.company.clone(),
            body_type: car.body_type,
            transmission: car.transmission,
            fuel_type: car.fuel_type,
            pricing: car.pricing.clone(),
            free_km_policy: car.free_km_policy.clone(),
            price_per_extra_km: car.price_per_extra_km,
            notes: car.notes.clone(),
        }
    }
}

/// Response de cars para listados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListResponse {
    pub cars: Vec<CarResponse>,
    pub total: usize,
}

/// Response de company para la API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub name: String,
    pub default_price_per_extra_km: Decimal,
    pub free_km_policy: FreeKmPolicy,
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company.name.clone(),
            default_price_per_extra_km: company.default_price_per_extra_km,
            free_km_policy: company.free_km_policy.clone(),
        }
    }
}

/// Response de companies para listados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyResponse>,
    pub total: usize,
}
