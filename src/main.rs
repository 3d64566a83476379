use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use carshare_pricing::catalog;
use carshare_pricing::config::environment::EnvironmentConfig;
use carshare_pricing::routes::create_app_router;
use carshare_pricing::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Share Pricing - Comparador de precios de car sharing");
    info!("===========================================================");

    let config = EnvironmentConfig::default();

    // Cargar el catálogo de referencia (inmutable durante todo el proceso)
    let store = match catalog::load_catalog(&config.catalog_path) {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error cargando el catálogo desde '{}': {}", config.catalog_path, e);
            return Err(anyhow::anyhow!("Error de catálogo: {}", e));
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Crear router de la API
    let app_state = AppState::new(Arc::new(store), config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("💶 Endpoints - Quote:");
    info!("   POST /api/quote - Cotizar un car específico");
    info!("   POST /api/quote/compare - Cotizar todo el catálogo");
    info!("📚 Endpoints - Catalog:");
    info!("   GET  /api/catalog/cars - Listar cars");
    info!("   GET  /api/catalog/cars/:id - Obtener car");
    info!("   GET  /api/catalog/companies - Listar companies");
    info!("   GET  /api/catalog/companies/:id - Obtener company");
    info!("   GET  /api/catalog/companies/:id/cars - Cars de una company");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
