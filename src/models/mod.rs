//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del catálogo (cars, companies,
//! políticas de kilómetros gratis) y los tipos de resultado de cotización.

pub mod car;
pub mod company;
pub mod policy;
pub mod quote;
