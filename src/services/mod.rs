//! Services module
//!
//! Este módulo contiene el motor de pricing: funciones puras y síncronas
//! sobre datos inmutables. Cada cotización es una llamada independiente
//! e idempotente, sin estado compartido ni I/O.

pub mod free_km_service;
pub mod pricing_service;
pub mod quote_service;

pub use free_km_service::resolve_free_distance;
pub use pricing_service::resolve_time_cost;
pub use quote_service::assemble_quote;
