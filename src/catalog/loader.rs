//! Loader del catálogo
//!
//! Este módulo carga el catálogo desde un archivo JSON externo al arranque
//! del proceso. El motor de pricing es agnóstico al mecanismo de carga:
//! recibe el CatalogStore ya construido por inyección.

use std::fs;
use std::path::Path;

use tracing::info;

use super::store::{CatalogDocument, CatalogStore};
use super::CatalogError;

/// Cargar y validar el catálogo desde un archivo JSON
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogStore, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let document: CatalogDocument = serde_json::from_str(&raw)?;
    let store = CatalogStore::new(document)?;

    info!(
        "📚 Catálogo cargado desde {}: {} companies, {} cars",
        path.display(),
        store.companies().len(),
        store.cars().len()
    );

    Ok(store)
}
