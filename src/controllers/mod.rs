//! Controllers de la API
//!
//! Este módulo contiene la orquestación de requests: validación de
//! entrada, lookups de catálogo y llamadas al motor de pricing.

pub mod catalog_controller;
pub mod quote_controller;
