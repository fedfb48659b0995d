use crate::models::analysis::{DemandHotspot, OptimizedRoute, RouteAnalysis, TripRequest};
use crate::utils::errors::AppError;

#[async_trait::async_trait]
pub trait RouteAdvisor: Send + Sync {
    /// Analizar solicitudes de viaje y proponer una ruta que las cubra
    async fn analyze(&self, requests: &[TripRequest]) -> Result<RouteAnalysis, AppError>;
}

/// Asesor de rutas con respuesta precalculada.
///
/// Implementa el contrato del asesor sin llamar a ningún modelo externo;
/// un asesor real se inyecta por el mismo trait.
pub struct StaticRouteAdvisor;

#[async_trait::async_trait]
impl RouteAdvisor for StaticRouteAdvisor {
    async fn analyze(&self, _requests: &[TripRequest]) -> Result<RouteAnalysis, AppError> {
        Ok(RouteAnalysis {
            demand_hotspots: vec![
                hotspot(
                    "Peenya Industrial Area & Dasarahalli",
                    9,
                    "High concentration of morning commuters heading towards central city areas like Majestic and Yeshwanthpur.",
                ),
                hotspot(
                    "Jalahalli Cross",
                    7,
                    "Key intersection with consistent passenger flow towards multiple destinations.",
                ),
                hotspot(
                    "Yeshwanthpur",
                    8,
                    "Major transit hub, connecting industrial workers to the wider city transport network.",
                ),
            ],
            optimized_route: OptimizedRoute {
                route_name: "Morning Rush - Peenya Express".to_string(),
                stops: vec![
                    "Jalahalli Cross (Start)".to_string(),
                    "Dasarahalli".to_string(),
                    "Peenya 1st Stage".to_string(),
                    "TVS Cross".to_string(),
                    "Peenya 2nd Stage".to_string(),
                    "Goraguntepalya".to_string(),
                    "Yeshwanthpur Industry".to_string(),
                    "Sandal Soap Factory Metro".to_string(),
                    "Rajajinagar".to_string(),
                    "Okalipuram".to_string(),
                    "Majestic Bus Stand (End)".to_string(),
                ],
                estimated_duration: "75 mins".to_string(),
                summary: "This route starts at a major northern intersection, sweeps through the entire Peenya industrial belt to collect workers, and then proceeds along the main highway towards the central Majestic bus terminal, covering all major drop-off points.".to_string(),
            },
        })
    }
}

/// Solicitudes de viaje pendientes de los pasajeros (datos de muestra)
pub fn pending_trip_requests() -> Vec<TripRequest> {
    vec![
        request("req-1", "Jalahalli Cross", "Goraguntepalya", "07:30 AM"),
        request("req-2", "Peenya 1st Stage", "Majestic Bus Stand", "07:45 AM"),
        request("req-3", "Dasarahalli", "Yeshwanthpur", "08:00 AM"),
        request(
            "req-4",
            "Peenya Industrial Area",
            "Sandal Soap Factory Metro",
            "07:50 AM",
        ),
        request("req-5", "Jalahalli", "Malleshwaram", "08:10 AM"),
        request("req-6", "Yeshwanthpur Industry", "Majestic Bus Stand", "08:20 AM"),
        request("req-7", "Peenya 2nd Stage", "Rajajinagar", "07:55 AM"),
        request("req-8", "TVS Cross", "Okalipuram", "08:05 AM"),
    ]
}

fn hotspot(location: &str, demand_score: u8, summary: &str) -> DemandHotspot {
    DemandHotspot {
        location: location.to_string(),
        demand_score,
        summary: summary.to_string(),
    }
}

fn request(id: &str, origin: &str, destination: &str, requested_time: &str) -> TripRequest {
    TripRequest {
        id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        requested_time: requested_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_advisor_returns_complete_analysis() {
        let advisor = StaticRouteAdvisor;
        let analysis = advisor.analyze(&pending_trip_requests()).await.unwrap();

        assert_eq!(analysis.demand_hotspots.len(), 3);
        let scores: Vec<u8> = analysis
            .demand_hotspots
            .iter()
            .map(|h| h.demand_score)
            .collect();
        assert_eq!(scores, vec![9, 7, 8]);

        let route = &analysis.optimized_route;
        assert_eq!(route.route_name, "Morning Rush - Peenya Express");
        assert_eq!(route.stops.len(), 11);
        assert_eq!(route.stops[0], "Jalahalli Cross (Start)");
        assert_eq!(route.stops[10], "Majestic Bus Stand (End)");
        assert_eq!(route.estimated_duration, "75 mins");
    }

    #[test]
    fn test_pending_trip_requests_sample() {
        let requests = pending_trip_requests();

        assert_eq!(requests.len(), 8);
        assert_eq!(requests[0].id, "req-1");
        assert_eq!(requests[0].origin, "Jalahalli Cross");
        assert_eq!(requests[7].destination, "Okalipuram");
    }
}
