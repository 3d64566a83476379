//! Quote Assembler
//!
//! Este módulo combina el costo de tiempo, los km gratis y la tarifa por
//! km extra aplicable en el desglose de precio final de una cotización.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::models::car::Car;
use crate::models::company::Company;
use crate::models::quote::PriceBreakdown;
use crate::services::{free_km_service, pricing_service};
use crate::utils::errors::{AppError, AppResult};

/// Armar la cotización completa para un car de una company.
///
/// La duración se clampea a la reserva mínima de 1 hora; avisar al usuario
/// de ese mínimo es responsabilidad de la capa de presentación. Entradas
/// negativas o no finitas se rechazan en vez de producir precios negativos.
pub fn assemble_quote(
    car: &Car,
    company: &Company,
    duration_hours: f64,
    distance_km: f64,
) -> AppResult<PriceBreakdown> {
    if !duration_hours.is_finite() || duration_hours < 0.0 {
        return Err(AppError::BadRequest(format!(
            "Invalid duration: {}",
            duration_hours
        )));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::BadRequest(format!(
            "Invalid distance: {}",
            distance_km
        )));
    }

    // Reserva mínima de 1 hora
    let effective_duration = duration_hours.max(1.0);

    let time = pricing_service::resolve_time_cost(&car.pricing, effective_duration);

    // Los km gratis se derivan de la MISMA descomposición que la facturación
    let effective_policy = company
        .free_km_policy
        .overridden_by(car.free_km_policy.as_ref());
    let free_km = free_km_service::resolve_free_distance(&effective_policy, &time.breakdown);

    // El override por vehículo gana sobre el default de la company
    let price_per_extra_km = car
        .price_per_extra_km
        .unwrap_or(company.default_price_per_extra_km);

    let paid_km_raw = (distance_km - free_km as f64).max(0.0);
    let paid_km = Decimal::from_f64(paid_km_raw).ok_or_else(|| {
        AppError::Internal(format!("Distance out of range: {}", paid_km_raw))
    })?;

    let distance_cost = paid_km * price_per_extra_km;
    let total_price = time.cost + distance_cost;

    Ok(PriceBreakdown {
        time_cost: time.cost,
        distance_cost,
        total_price,
        free_km,
        paid_km,
        price_per_extra_km,
        pricing_tier: time.tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::{BodyType, FuelType, RateSchedule, Transmission};
    use crate::models::policy::FreeKmPolicy;
    use rust_decimal_macros::dec;

    fn test_company() -> Company {
        Company {
            id: "gocar".to_string(),
            name: "GoCar".to_string(),
            default_price_per_extra_km: dec!(0.25),
            free_km_policy: FreeKmPolicy {
                standard: Some(dec!(50)),
                ..Default::default()
            },
        }
    }

    fn test_car() -> Car {
        Car {
            id: "economy-test".to_string(),
            name: "EconoTest".to_string(),
            company: "gocar".to_string(),
            body_type: BodyType::Economy,
            transmission: Transmission::Manual,
            fuel_type: FuelType::PetrolDiesel,
            pricing: RateSchedule {
                hour: dec!(8),
                day: dec!(45),
                week: Some(dec!(270)),
            },
            free_km_policy: None,
            price_per_extra_km: None,
            notes: None,
        }
    }

    #[test]
    fn test_una_hora_dentro_de_los_km_gratis() {
        let quote = assemble_quote(&test_car(), &test_company(), 1.0, 30.0).unwrap();

        assert_eq!(quote.time_cost, dec!(8));
        assert_eq!(quote.distance_cost, dec!(0));
        assert_eq!(quote.total_price, dec!(8));
        assert_eq!(quote.free_km, 50);
        assert_eq!(quote.paid_km, dec!(0));
        assert_eq!(quote.pricing_tier, "1 hour (minimum)");
    }

    #[test]
    fn test_una_hora_con_km_extra() {
        let quote = assemble_quote(&test_car(), &test_company(), 1.0, 70.0).unwrap();

        assert_eq!(quote.free_km, 50);
        assert_eq!(quote.paid_km, dec!(20));
        assert_eq!(quote.distance_cost, dec!(5)); // 20 * 0.25
        assert_eq!(quote.total_price, dec!(13));
    }

    #[test]
    fn test_duracion_sub_hora_clampea_al_minimo() {
        let quote = assemble_quote(&test_car(), &test_company(), 0.5, 0.0).unwrap();

        assert_eq!(quote.time_cost, dec!(8));
        assert_eq!(quote.pricing_tier, "1 hour (minimum)");
    }

    #[test]
    fn test_override_de_precio_por_km_del_car() {
        let mut car = test_car();
        car.price_per_extra_km = Some(dec!(0.15));

        let quote = assemble_quote(&car, &test_company(), 1.0, 70.0).unwrap();

        assert_eq!(quote.price_per_extra_km, dec!(0.15));
        assert_eq!(quote.distance_cost, dec!(3.00)); // 20 * 0.15
    }

    #[test]
    fn test_override_de_politica_del_car() {
        let mut car = test_car();
        car.free_km_policy = Some(FreeKmPolicy {
            standard: Some(dec!(75)),
            ..Default::default()
        });

        let quote = assemble_quote(&car, &test_company(), 1.0, 70.0).unwrap();

        assert_eq!(quote.free_km, 75);
        assert_eq!(quote.distance_cost, dec!(0));
    }

    #[test]
    fn test_duracion_invalida_falla_rapido() {
        let car = test_car();
        let company = test_company();

        assert!(assemble_quote(&car, &company, -1.0, 10.0).is_err());
        assert!(assemble_quote(&car, &company, f64::NAN, 10.0).is_err());
        assert!(assemble_quote(&car, &company, 5.0, f64::INFINITY).is_err());
        assert!(assemble_quote(&car, &company, 5.0, -10.0).is_err());
    }

    #[test]
    fn test_colapso_a_dia_se_refleja_en_km_gratis() {
        // Política diaria pura: el colapso de 6h -> 1 día también cambia
        // la base del allowance (1 día, sin día extra por resto)
        let mut company = test_company();
        company.free_km_policy = FreeKmPolicy {
            daily: Some(dec!(50)),
            ..Default::default()
        };
        let mut car = test_car();
        car.pricing = RateSchedule {
            hour: dec!(8),
            day: dec!(45),
            week: None,
        };

        let quote = assemble_quote(&car, &company, 6.0, 0.0).unwrap();

        assert_eq!(quote.pricing_tier, "1 day");
        assert_eq!(quote.free_km, 50);
    }
}
