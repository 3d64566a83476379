//! Modelo de Car
//!
//! Este módulo contiene el struct Car del catálogo con su tarifario
//! (RateSchedule) y los overrides opcionales por vehículo.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::FreeKmPolicy;

/// Tipo de carrocería del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Small,
    Economy,
    Compact,
    Standard,
    Premium,
    Van,
}

/// Tipo de transmisión
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Tipo de combustible
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelType {
    #[serde(rename = "petrol-diesel")]
    PetrolDiesel,
    #[serde(rename = "electric")]
    Electric,
}

/// Tarifario por niveles de un vehículo.
/// La tarifa de cuarto de hora es siempre hour / 4; la semanal es opcional
/// (si falta, el nivel semanal nunca se selecciona).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateSchedule {
    pub hour: Decimal,
    pub day: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<Decimal>,
}

impl RateSchedule {
    /// Tarifa por bloque de 15 minutos
    pub fn quarter_hour(&self) -> Decimal {
        self.hour / Decimal::from(4)
    }
}

/// Car principal del catálogo - referencia estática, inmutable en runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub name: String,

    /// Foreign key al id de la Company
    pub company: String,

    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub fuel_type: FuelType,

    pub pricing: RateSchedule,

    /// Override por vehículo de la política de km gratis de la company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_km_policy: Option<FreeKmPolicy>,

    /// Override por vehículo del precio por km extra
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_extra_km: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
