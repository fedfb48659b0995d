//! Modelo de análisis de demanda
//!
//! Este módulo contiene las estructuras que produce el asesor de rutas:
//! solicitudes de viaje, zonas de alta demanda y la ruta optimizada.

use serde::{Deserialize, Serialize};

/// Solicitud de viaje de un pasajero pendiente de asignación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub requested_time: String,
}

/// Zona con alta concentración de solicitudes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandHotspot {
    pub location: String,
    pub demand_score: u8,
    pub summary: String,
}

/// Ruta sugerida que cubre las zonas de demanda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub route_name: String,
    pub stops: Vec<String>,
    pub estimated_duration: String,
    pub summary: String,
}

/// Resultado completo del análisis de demanda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteAnalysis {
    pub demand_hotspots: Vec<DemandHotspot>,
    pub optimized_route: OptimizedRoute,
}
