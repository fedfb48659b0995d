use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

use shuttle_booking::build_router;
use shuttle_booking::config::environment::EnvironmentConfig;
use shuttle_booking::demo;
use shuttle_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Shuttle Booking - Backend de reservas comunitarias");
    info!("=====================================================");

    let state = AppState::new(EnvironmentConfig::default());

    // Datos de ejemplo sólo en desarrollo
    if state.config.is_development() {
        if let Err(e) = demo::seed(&state).await {
            warn!("❌ Error cargando datos de demo: {}", e);
        }
    }

    let addr: SocketAddr = state.config.server_url().parse()?;
    let app = build_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Endpoints - Auth:");
    info!("   POST /api/auth/signup - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("🚌 Endpoints - Rutas:");
    info!("   GET  /api/routes/search - Buscar rutas publicadas");
    info!("   POST /api/driver/:driver_id/routes - Publicar ruta");
    info!("   GET  /api/driver/:driver_id/routes - Listar rutas del conductor");
    info!("   PUT  /api/driver/:driver_id/routes/:route_id - Actualizar ruta");
    info!("   DELETE /api/driver/:driver_id/routes/:route_id - Eliminar ruta");
    info!("🎫 Endpoints - Reservas:");
    info!("   POST /api/driver/:driver_id/routes/:route_id/bookings - Reservar fechas");
    info!("   GET  /api/driver/:driver_id/routes/:route_id/bookings - Libro de reservas");
    info!("🔍 Endpoints - Asesor:");
    info!("   GET  /api/advisor/trip-requests - Solicitudes de viaje pendientes");
    info!("   GET  /api/advisor/analysis - Análisis de demanda");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
