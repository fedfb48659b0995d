use std::sync::Arc;
use tracing::info;

use crate::models::analysis::{RouteAnalysis, TripRequest};
use crate::services::advisor_service::{pending_trip_requests, RouteAdvisor};
use crate::utils::errors::AppError;

pub struct AdvisorController {
    advisor: Arc<dyn RouteAdvisor>,
}

impl AdvisorController {
    pub fn new(advisor: Arc<dyn RouteAdvisor>) -> Self {
        Self { advisor }
    }

    pub async fn trip_requests(&self) -> Result<Vec<TripRequest>, AppError> {
        Ok(pending_trip_requests())
    }

    pub async fn analysis(&self) -> Result<RouteAnalysis, AppError> {
        let requests = pending_trip_requests();
        let analysis = self.advisor.analyze(&requests).await?;

        info!(
            "🔍 Análisis de demanda generado: {} hotspots, ruta '{}'",
            analysis.demand_hotspots.len(),
            analysis.optimized_route.route_name
        );

        Ok(analysis)
    }
}
