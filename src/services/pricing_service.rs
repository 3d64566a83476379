//! Time-Cost Resolver
//!
//! Este módulo calcula el costo de tiempo de una reserva: descompone la
//! duración en niveles de facturación (week/day/hour/quarter-hour), aplica
//! el colapso de niveles cuando una unidad mayor sale más barata o igual,
//! y construye la etiqueta legible del nivel elegido.

use rust_decimal::Decimal;

use crate::models::car::RateSchedule;
use crate::models::quote::{TimeBreakdown, TimeCost};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const HOURS_PER_WEEK: f64 = 168.0;

/// Calcular el costo de tiempo mínimo para una duración en horas.
///
/// La duración ya viene clampeada a mínimo 1.0 por el assembler; si llega
/// menor igual se factura como 1 hora exacta a tarifa horaria.
pub fn resolve_time_cost(schedule: &RateSchedule, duration_hours: f64) -> TimeCost {
    // Viaje corto: mínimo de una hora a tarifa horaria plana
    if duration_hours <= 1.0 {
        return TimeCost {
            cost: schedule.hour,
            tier: "1 hour (minimum)".to_string(),
            breakdown: TimeBreakdown {
                weeks: 0,
                days: 0,
                hours: 1,
                quarter_hours: 0,
            },
        };
    }

    // Sin tarifa semanal y 7+ días: fallback a facturación puramente diaria
    if schedule.week.is_none() && duration_hours >= HOURS_PER_WEEK {
        let total_days = (duration_hours / HOURS_PER_DAY).ceil() as u32;
        return TimeCost {
            cost: schedule.day * Decimal::from(total_days),
            tier: format!("{} (no weekly rate)", pluralize(total_days, "day")),
            breakdown: TimeBreakdown {
                weeks: 0,
                days: total_days,
                hours: 0,
                quarter_hours: 0,
            },
        };
    }

    let breakdown = collapse_tiers(schedule, decompose(schedule, duration_hours));

    TimeCost {
        cost: breakdown_cost(schedule, &breakdown),
        tier: tier_label(&breakdown),
        breakdown,
    }
}

/// Costo total de una descomposición contra el tarifario
pub fn breakdown_cost(schedule: &RateSchedule, breakdown: &TimeBreakdown) -> Decimal {
    let weeks_cost = match schedule.week {
        Some(week) => week * Decimal::from(breakdown.weeks),
        None => Decimal::ZERO,
    };

    weeks_cost
        + schedule.day * Decimal::from(breakdown.days)
        + schedule.hour * Decimal::from(breakdown.hours)
        + schedule.quarter_hour() * Decimal::from(breakdown.quarter_hours)
}

/// Descomposición top-down de la duración en semanas, días, horas y
/// cuartos de hora. El resto fraccionario se redondea hacia arriba al
/// cuarto de hora ANTES de tarificar; nunca se redondea el costo.
fn decompose(schedule: &RateSchedule, duration_hours: f64) -> TimeBreakdown {
    let mut remainder = duration_hours;

    // Solo se consumen semanas si existe tarifa semanal
    let mut weeks = 0u32;
    if schedule.week.is_some() {
        weeks = (remainder / HOURS_PER_WEEK).floor() as u32;
        remainder -= f64::from(weeks) * HOURS_PER_WEEK;
    }

    let mut days = (remainder / HOURS_PER_DAY).floor() as u32;
    remainder -= f64::from(days) * HOURS_PER_DAY;

    // El redondeo puede completar un día entero (resto mayor a 23.75h);
    // las horas de la descomposición son siempre sub-día
    let quartered = (remainder * 4.0).ceil() / 4.0;
    let (hours, quarter_hours) = if quartered >= HOURS_PER_DAY {
        days += 1;
        (0, 0)
    } else {
        let hours = quartered.floor() as u32;
        let quarter_hours = ((quartered - quartered.floor()) * 4.0).round() as u32;
        (hours, quarter_hours)
    };

    TimeBreakdown {
        weeks,
        days,
        hours,
        quarter_hours,
    }
}

/// Colapso de niveles, de abajo hacia arriba. En empate exacto gana
/// siempre la unidad mayor (comparaciones <= / >=).
fn collapse_tiers(schedule: &RateSchedule, mut breakdown: TimeBreakdown) -> TimeBreakdown {
    // Porción sub-día: si horas + cuartos cuestan al menos un día,
    // se reemplazan por un día adicional
    if breakdown.hours > 0 || breakdown.quarter_hours > 0 {
        let sub_day_cost = schedule.hour * Decimal::from(breakdown.hours)
            + schedule.quarter_hour() * Decimal::from(breakdown.quarter_hours);

        if schedule.day <= sub_day_cost {
            breakdown.days += 1;
            breakdown.hours = 0;
            breakdown.quarter_hours = 0;
        }
    }

    // Porción sub-semana: si días + horas + cuartos cuestan al menos una
    // semana, se reemplazan por una semana adicional
    if let Some(week_rate) = schedule.week {
        if breakdown.days > 0 || breakdown.hours > 0 || breakdown.quarter_hours > 0 {
            let sub_week_cost = schedule.day * Decimal::from(breakdown.days)
                + schedule.hour * Decimal::from(breakdown.hours)
                + schedule.quarter_hour() * Decimal::from(breakdown.quarter_hours);

            if sub_week_cost >= week_rate {
                breakdown.weeks += 1;
                breakdown.days = 0;
                breakdown.hours = 0;
                breakdown.quarter_hours = 0;
            }
        }
    }

    breakdown
}

/// Construir la etiqueta del nivel concatenando los componentes no-cero
fn tier_label(breakdown: &TimeBreakdown) -> String {
    let mut parts: Vec<String> = Vec::new();

    if breakdown.weeks > 0 {
        parts.push(pluralize(breakdown.weeks, "week"));
    }
    if breakdown.days > 0 {
        parts.push(pluralize(breakdown.days, "day"));
    }
    if breakdown.hours > 0 || breakdown.quarter_hours > 0 {
        parts.push(format_hour_component(breakdown.hours, breakdown.quarter_hours));
    }

    parts.join(" + ")
}

/// Formatear el componente de horas: "N mins" para restos sub-hora,
/// "N hours" para horas enteras, "N.NN hours" para fraccionarias
fn format_hour_component(hours: u32, quarter_hours: u32) -> String {
    if hours == 0 {
        let mins = quarter_hours * 15;
        pluralize(mins, "min")
    } else if quarter_hours == 0 {
        pluralize(hours, "hour")
    } else {
        let fractional = f64::from(hours) + f64::from(quarter_hours) / 4.0;
        format!("{} hours", fractional)
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
