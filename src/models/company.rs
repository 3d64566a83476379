//! Modelo de Company
//!
//! Este módulo contiene el struct Company del catálogo con su tarifa
//! por km extra por defecto y su política base de km gratis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::FreeKmPolicy;

/// Company principal del catálogo - referencia estática, inmutable en runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,

    /// Precio por km extra cuando el car no define override
    pub default_price_per_extra_km: Decimal,

    /// Política base de km gratis, antes de overrides por vehículo
    pub free_km_policy: FreeKmPolicy,
}
