//! DTOs de cotización
//!
//! Este módulo contiene las requests y responses de la API de quotes.
//! La validación de rangos replica los límites del formulario original:
//! máximo 31 días de reserva y distancias no negativas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::{BodyType, FuelType, Transmission};
use crate::models::quote::PriceBreakdown;

/// Máximo de horas de reserva (31 días)
pub const MAX_DURATION_HOURS: f64 = 744.0;

/// Request para cotizar un car específico
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub car_id: String,

    #[validate(
        range(min = 0.0, max = 744.0),
        custom = "crate::utils::validation::validate_finite_non_negative"
    )]
    pub duration_hours: f64,

    #[validate(
        range(min = 0.0, max = 100000.0),
        custom = "crate::utils::validation::validate_finite_non_negative"
    )]
    pub distance_km: f64,
}

/// Request para cotizar todo el catálogo con filtros opcionales
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[validate(
        range(min = 0.0, max = 744.0),
        custom = "crate::utils::validation::validate_finite_non_negative"
    )]
    pub duration_hours: f64,

    #[validate(
        range(min = 0.0, max = 100000.0),
        custom = "crate::utils::validation::validate_finite_non_negative"
    )]
    pub distance_km: f64,

    pub body_type: Option<BodyType>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub company: Option<String>,
}

/// Response de una cotización individual
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub car_id: String,
    pub car_name: String,
    pub company_id: String,
    pub company_name: String,

    #[serde(flatten)]
    pub breakdown: PriceBreakdown,

    /// true si la duración pedida quedó por debajo del mínimo de 1 hora
    pub minimum_applied: bool,
}

/// Response de comparación de todo el catálogo, ordenada por precio total
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub results: Vec<QuoteResponse>,
    pub total: usize,
    pub duration_hours: f64,
    pub distance_km: f64,
}
