//! Catálogo de referencia
//!
//! Este módulo contiene el store de solo lectura de cars y companies y
//! su loader desde archivo JSON. Los datos son referencia estática:
//! se cargan una vez al arranque y no mutan durante la operación.

pub mod loader;
pub mod store;

pub use loader::load_catalog;
pub use store::{CatalogDocument, CatalogStore};

use thiserror::Error;

/// Errores de carga y validación del catálogo
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate company id '{0}'")]
    DuplicateCompany(String),

    #[error("Duplicate car id '{0}'")]
    DuplicateCar(String),

    #[error("Car '{car}' references unknown company '{company}'")]
    UnknownCompany { car: String, company: String },

    #[error("Car '{car}' has a non-positive {field} rate")]
    InvalidRate { car: String, field: &'static str },
}
