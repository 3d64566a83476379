//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El catálogo es de solo lectura durante
//! toda la vida del proceso, así que se comparte por Arc sin locks.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>, config: EnvironmentConfig) -> Self {
        Self { catalog, config }
    }
}
