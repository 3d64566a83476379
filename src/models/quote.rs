//! Tipos de resultado de cotización
//!
//! Este módulo contiene los structs transitorios que produce el motor de
//! pricing: descomposición de tiempo, costo de tiempo y desglose final.

use rust_decimal::Decimal;
use serde::Serialize;

/// Descomposición de una duración en unidades de facturación.
/// Es la misma descomposición que alimenta el cálculo de km gratis,
/// de modo que ambos resultados son siempre consistentes entre sí.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBreakdown {
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    /// Bloques de 15 minutos del resto sub-hora (0..=3)
    pub quarter_hours: u32,
}

impl TimeBreakdown {
    /// Verificar si la descomposición no consume ninguna unidad
    pub fn is_empty(&self) -> bool {
        self.weeks == 0 && self.days == 0 && self.hours == 0 && self.quarter_hours == 0
    }
}

/// Resultado del Time-Cost Resolver
#[derive(Debug, Clone, PartialEq)]
pub struct TimeCost {
    pub cost: Decimal,
    /// Etiqueta legible del nivel de facturación elegido, ej. "1 week + 2 days"
    pub tier: String,
    pub breakdown: TimeBreakdown,
}

/// Desglose de precio final de una cotización - transitorio, uno por request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub time_cost: Decimal,
    pub distance_cost: Decimal,
    pub total_price: Decimal,
    pub free_km: i64,
    /// Kilómetros facturados por encima del allowance gratis
    pub paid_km: Decimal,
    pub price_per_extra_km: Decimal,
    pub pricing_tier: String,
}
