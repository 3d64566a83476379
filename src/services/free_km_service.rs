//! Free-Distance Resolver
//!
//! Este módulo calcula los kilómetros gratis de una reserva a partir de la
//! MISMA descomposición de tiempo que produjo el Time-Cost Resolver, para
//! que facturación y allowance sean siempre consistentes entre sí.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::policy::{FreeKmPolicy, PolicyKind};
use crate::models::quote::TimeBreakdown;

/// Calcular los km gratis para una política efectiva (ya resuelta con los
/// overrides del car) y una descomposición de tiempo.
///
/// Orden fijo de agregación: weekly, daily, hourly, quarterHours; standard
/// es el fallback plano cuando ningún tipo aplicó, no es aditivo.
pub fn resolve_free_distance(policy: &FreeKmPolicy, breakdown: &TimeBreakdown) -> i64 {
    let mut total = Decimal::ZERO;

    if breakdown.weeks > 0 {
        if let Some(weekly) = policy.allowance(PolicyKind::Weekly) {
            total += weekly * Decimal::from(breakdown.weeks);
        }
    }

    if let Some(daily) = policy.allowance(PolicyKind::Daily) {
        total += daily * Decimal::from(daily_units(policy, breakdown));
    }

    if breakdown.hours > 0 {
        if let Some(hourly) = policy.allowance(PolicyKind::Hourly) {
            total += hourly * Decimal::from(breakdown.hours);
        }
    }

    if breakdown.quarter_hours > 0 {
        if let Some(quarterly) = policy.allowance(PolicyKind::QuarterHours) {
            total += quarterly * Decimal::from(breakdown.quarter_hours);
        }
    }

    // Fallback plano: solo cuando ningún tipo por duración aportó km
    if total == Decimal::ZERO {
        if let Some(standard) = policy.allowance(PolicyKind::Standard) {
            total = standard;
        }
    }

    total
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Días a multiplicar por el allowance diario.
///
/// Caso especial de política puramente diaria (sin hourly, quarterHours ni
/// standard): el resto sub-día cuenta como un día entero, y toda reserva
/// no vacía gana al menos un día de km gratis.
fn daily_units(policy: &FreeKmPolicy, breakdown: &TimeBreakdown) -> u32 {
    let mut units = breakdown.days;

    let daily_is_only_granular = policy.allowance(PolicyKind::Hourly).is_none()
        && policy.allowance(PolicyKind::QuarterHours).is_none()
        && policy.allowance(PolicyKind::Standard).is_none();

    if daily_is_only_granular {
        if breakdown.hours > 0 || breakdown.quarter_hours > 0 {
            units += 1;
        }
        if units == 0 && !breakdown.is_empty() {
            units = 1;
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn breakdown(weeks: u32, days: u32, hours: u32, quarter_hours: u32) -> TimeBreakdown {
        TimeBreakdown {
            weeks,
            days,
            hours,
            quarter_hours,
        }
    }

    #[test]
    fn test_standard_es_fallback_plano() {
        let policy = FreeKmPolicy {
            standard: Some(dec!(50)),
            ..Default::default()
        };

        // Independiente de la duración
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 1, 0)), 50);
        assert_eq!(resolve_free_distance(&policy, &breakdown(1, 3, 7, 2)), 50);
    }

    #[test]
    fn test_horaria_escala_con_horas() {
        let policy = FreeKmPolicy {
            hourly: Some(dec!(15)),
            ..Default::default()
        };

        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 6, 0)), 90);
    }

    #[test]
    fn test_horaria_no_activa_standard() {
        // standard no es aditivo: si hourly ya aportó, no se suma
        let policy = FreeKmPolicy {
            standard: Some(dec!(50)),
            hourly: Some(dec!(15)),
            ..Default::default()
        };

        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 2, 0)), 30);
    }

    #[test]
    fn test_diaria_pura_resto_cuenta_como_dia() {
        let policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            ..Default::default()
        };

        // 1 día + 5 horas = 2 días de allowance bajo política diaria pura
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 1, 5, 0)), 100);
    }

    #[test]
    fn test_diaria_pura_minimo_un_dia() {
        let policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            ..Default::default()
        };

        // Reserva de 1 hora: gana igual el allowance de un día
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 1, 0)), 50);
    }

    #[test]
    fn test_diaria_con_hourly_no_aplica_caso_especial() {
        let policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            hourly: Some(dec!(10)),
            ..Default::default()
        };

        // 1 día + 5 horas: 50 + 5 * 10, sin redondeo de día extra
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 1, 5, 0)), 100);
    }

    #[test]
    fn test_semanal_mas_diaria() {
        let policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            weekly: Some(dec!(300)),
            ..Default::default()
        };

        // 2 semanas + 3 días
        assert_eq!(resolve_free_distance(&policy, &breakdown(2, 3, 0, 0)), 750);
    }

    #[test]
    fn test_sin_tipo_aplicable_devuelve_cero() {
        let policy = FreeKmPolicy::default();
        assert_eq!(resolve_free_distance(&policy, &breakdown(1, 2, 3, 1)), 0);
    }

    #[test]
    fn test_depende_solo_de_la_descomposicion() {
        // Dos invocaciones con la misma descomposición dan el mismo resultado
        let policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            weekly: Some(dec!(300)),
            ..Default::default()
        };
        let b = breakdown(1, 2, 0, 0);

        let first = resolve_free_distance(&policy, &b);
        let second = resolve_free_distance(&policy, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_redondeo_al_km_mas_cercano() {
        let policy = FreeKmPolicy {
            hourly: Some(dec!(12.5)),
            ..Default::default()
        };

        // 1 hora: 12.5 redondea a 13 (mitad se aleja de cero)
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 1, 0)), 13);
        // 3 horas: 37.5 redondea a 38
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 3, 0)), 38);
    }

    #[test]
    fn test_cuartos_de_hora() {
        let policy = FreeKmPolicy {
            hourly: Some(dec!(20)),
            quarter_hours: Some(dec!(5)),
            ..Default::default()
        };

        // 2 horas + 3 cuartos: 40 + 15
        assert_eq!(resolve_free_distance(&policy, &breakdown(0, 0, 2, 3)), 55);
    }
}
