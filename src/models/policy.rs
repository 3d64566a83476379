//! Política de kilómetros gratis
//!
//! Este módulo define los tipos de política (standard, hourly, daily,
//! weekly, quarterHours) y la estructura FreeKmPolicy con la resolución
//! de overrides por vehículo.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tipo de política de km gratis - enum cerrado con matching exhaustivo
/// para evitar typos silenciosos en nombres de política
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PolicyKind {
    Standard,
    Hourly,
    Daily,
    Weekly,
    QuarterHours,
}

impl PolicyKind {
    /// Todos los tipos de política, en el orden de agregación del resolver
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Weekly,
        PolicyKind::Daily,
        PolicyKind::Hourly,
        PolicyKind::QuarterHours,
        PolicyKind::Standard,
    ];
}

/// Política de kilómetros gratis de una company (o override de un car).
/// Solo los tipos relevantes al modelo de la company están poblados.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreeKmPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter_hours: Option<Decimal>,
}

impl FreeKmPolicy {
    /// Obtener el allowance (km por unidad) para un tipo de política
    pub fn allowance(&self, kind: PolicyKind) -> Option<Decimal> {
        match kind {
            PolicyKind::Standard => self.standard,
            PolicyKind::Hourly => self.hourly,
            PolicyKind::Daily => self.daily,
            PolicyKind::Weekly => self.weekly,
            PolicyKind::QuarterHours => self.quarter_hours,
        }
    }

    /// Resolver la política efectiva: por cada tipo, el valor del car
    /// (override) gana sobre el de la company si está presente
    pub fn overridden_by(&self, car_policy: Option<&FreeKmPolicy>) -> FreeKmPolicy {
        let Some(car_policy) = car_policy else {
            return self.clone();
        };

        FreeKmPolicy {
            standard: car_policy.standard.or(self.standard),
            hourly: car_policy.hourly.or(self.hourly),
            daily: car_policy.daily.or(self.daily),
            weekly: car_policy.weekly.or(self.weekly),
            quarter_hours: car_policy.quarter_hours.or(self.quarter_hours),
        }
    }

    /// Verificar si la política no define ningún tipo
    pub fn is_empty(&self) -> bool {
        PolicyKind::ALL.iter().all(|kind| self.allowance(*kind).is_none())
    }
}
